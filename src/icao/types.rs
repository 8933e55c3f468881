use serde::{Deserialize, Serialize};

use crate::icao::lookup_tables::{Rating, RiskLevel};

/// Status value marking a species that was not found in the species database
pub const MISSING_STATUS: &str = "Missing";

/// Species record as supplied by the caller (read-only, never persisted).
///
/// A `Missing` record usually only carries `status` and `name`, so everything
/// else is optional on the wire.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpeciesRecord {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub mass_value: Option<f64>,
    #[serde(default)]
    pub mass_text: Option<String>,
    #[serde(default)]
    pub guild: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    /// Pipe-separated vernacular names ("Canada Goose|Cackling Goose")
    #[serde(default)]
    pub common_name: Option<String>,
}

impl SpeciesRecord {
    pub fn is_missing(&self) -> bool {
        self.status == MISSING_STATUS
    }

    /// First vernacular name, or "N/A" when none is recorded
    pub fn primary_common_name(&self) -> &str {
        self.common_name
            .as_deref()
            .and_then(|names| names.split('|').next())
            .filter(|name| !name.is_empty())
            .unwrap_or("N/A")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssessmentMode {
    Automated,
    Manual,
}

/// Outcome of one risk assessment. Built fresh per request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub id: String,
    pub species_common: String,
    pub species_scientific: String,
    pub mode: AssessmentMode,
    pub severity: Rating,
    pub likelihood: Rating,
    #[serde(rename = "riskLevel")]
    pub risk_level: RiskLevel,
    pub status: String,
    pub justification: String,
    /// ISO-8601 UTC, millisecond precision
    pub timestamp: String,
}

/// Request body of the risk assessor endpoint
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequest {
    /// Absent, null or false all select manual mode
    #[serde(default)]
    pub is_auto_mode: Option<bool>,

    // Automated mode
    #[serde(default)]
    pub species_data: Option<SpeciesRecord>,
    #[serde(default)]
    pub auto_likelihood_input: Option<String>,
    #[serde(default)]
    pub auto_flocking_input: Option<String>,

    // Manual mode
    #[serde(default)]
    pub species_name: Option<String>,
    #[serde(default)]
    pub manual_severity_input: Option<String>,
    #[serde(default)]
    pub manual_likelihood_input: Option<String>,
}
