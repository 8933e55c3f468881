//! Numeric Risk Scorer
//!
//! riskScore = (likelihood x severity) / mitigation, banded as
//! <5 Low, <15 Medium, <25 High, otherwise Very High.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, RiskError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskBand {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

/// Band a raw (unrounded) score
pub fn band_for_score(score: f64) -> RiskBand {
    if score < 5.0 {
        RiskBand::Low
    } else if score < 15.0 {
        RiskBand::Medium
    } else if score < 25.0 {
        RiskBand::High
    } else {
        RiskBand::VeryHigh
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskScore {
    /// Score with two decimals, e.g. "5.00"
    #[serde(rename = "riskScore")]
    pub risk_score: String,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskBand,
}

pub fn compute_risk_score(likelihood: f64, severity: f64, mitigation: f64) -> Result<RiskScore> {
    if mitigation == 0.0 {
        return Err(RiskError::InvalidInput(
            "mitigation must not be zero".to_string(),
        ));
    }

    let score = (likelihood * severity) / mitigation;
    if !score.is_finite() {
        return Err(RiskError::InvalidInput(format!(
            "risk score for likelihood={} severity={} mitigation={} is not a finite number",
            likelihood, severity, mitigation
        )));
    }

    Ok(RiskScore {
        risk_score: format_score(score),
        risk_level: band_for_score(score),
    })
}

/// Two decimals with ties rounded away from zero (3.125 -> "3.13") and
/// negative zero printed as "0.00".
fn format_score(score: f64) -> String {
    let rounded = (score * 100.0).round() / 100.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.2}", rounded)
}

/// Request body of the scorer endpoint. Fields stay untyped so a non-numeric
/// value is reported as a validation error rather than a parse failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RiskScoreRequest {
    #[serde(default)]
    pub likelihood: Value,
    #[serde(default)]
    pub severity: Value,
    #[serde(default)]
    pub mitigation: Value,
}

impl RiskScoreRequest {
    pub fn score(&self) -> Result<RiskScore> {
        let likelihood = numeric_field("likelihood", &self.likelihood)?;
        let severity = numeric_field("severity", &self.severity)?;
        let mitigation = numeric_field("mitigation", &self.mitigation)?;
        compute_risk_score(likelihood, severity, mitigation)
    }
}

fn numeric_field(name: &str, value: &Value) -> Result<f64> {
    value.as_f64().ok_or_else(|| {
        RiskError::InvalidInput(format!(
            "likelihood, severity and mitigation must all be numbers ({} was {})",
            name, value
        ))
    })
}
