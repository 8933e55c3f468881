//! ICAO Wildlife Hazard Lookup Tables
//!
//! Fixed mappings from the ICAO wildlife hazard management tables:
//! - Table 3-1: presence term -> likelihood
//! - Table 3-5: flocking behaviour -> flock value
//! - Table 3-6: mass x flock score -> severity
//! - Table 3-7: severity x likelihood -> risk colour

use serde::{Deserialize, Serialize};
use std::fmt;

/// Five-level ICAO rating, shared by severity and likelihood.
/// `NotAvailable` is only produced by the automated path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rating {
    #[serde(rename = "Very High")]
    VeryHigh,
    High,
    Moderate,
    Low,
    #[serde(rename = "Very Low")]
    VeryLow,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl Rating {
    /// The five assessable levels, highest first (matrix order)
    pub const LEVELS: [Rating; 5] = [
        Rating::VeryHigh,
        Rating::High,
        Rating::Moderate,
        Rating::Low,
        Rating::VeryLow,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::VeryHigh => "Very High",
            Rating::High => "High",
            Rating::Moderate => "Moderate",
            Rating::Low => "Low",
            Rating::VeryLow => "Very Low",
            Rating::NotAvailable => "N/A",
        }
    }

    /// Parse one of the five assessable levels. "N/A" and anything else yield `None`.
    pub fn parse_level(input: &str) -> Option<Rating> {
        Rating::LEVELS
            .iter()
            .copied()
            .find(|level| level.as_str() == input)
    }

    /// Row/column index into `RISK_MATRIX`
    fn index(self) -> usize {
        match self {
            Rating::VeryHigh => 0,
            Rating::High => 1,
            Rating::Moderate => 2,
            Rating::Low => 3,
            Rating::VeryLow => 4,
            Rating::NotAvailable => 5,
        }
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colour-coded cell of the risk matrix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Red,
    Yellow,
    Green,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Red => "Red",
            RiskLevel::Yellow => "Yellow",
            RiskLevel::Green => "Green",
            RiskLevel::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Table 3-5: Flock value
// ============================================================================

/// Flock value for a reported flocking behaviour. Unknown terms yield `None`.
pub fn flock_value(flocking: &str) -> Option<u8> {
    match flocking {
        "Solitary" => Some(1),
        "Loose" => Some(2),
        "Tight" => Some(4),
        _ => None,
    }
}

// ============================================================================
// Table 3-6: Severity from mass x flock score
// ============================================================================

/// Map a severity score to its category.
///
/// Thresholds are closed below: exactly 32 is Very High, 31.99 is High.
/// Zero, negative and NaN scores map to N/A.
pub fn severity_from_score(score: f64) -> Rating {
    if score >= 32.0 {
        Rating::VeryHigh
    } else if score >= 16.0 {
        Rating::High
    } else if score >= 8.0 {
        Rating::Moderate
    } else if score >= 4.0 {
        Rating::Low
    } else if score > 0.0 {
        Rating::VeryLow
    } else {
        Rating::NotAvailable
    }
}

// ============================================================================
// Table 3-1: Likelihood from reported presence
// ============================================================================

pub fn likelihood_from_presence(presence: &str) -> Rating {
    match presence {
        "Permanent" => Rating::VeryHigh,
        "Most" => Rating::High,
        "Some" => Rating::Moderate,
        "Few" => Rating::Low,
        "Occasional" => Rating::VeryLow,
        _ => Rating::NotAvailable,
    }
}

// ============================================================================
// Table 3-7: Risk matrix
// ============================================================================

use RiskLevel::{Green, NotAvailable as Na, Red, Yellow};

/// Rows: severity (Very High .. Very Low, N/A). Columns: likelihood (Very High .. Very Low).
pub const RISK_MATRIX: [[RiskLevel; 5]; 6] = [
    [Red, Red, Red, Red, Yellow],
    [Red, Red, Red, Yellow, Yellow],
    [Red, Red, Yellow, Green, Green],
    [Red, Yellow, Green, Green, Green],
    [Yellow, Yellow, Green, Green, Green],
    [Na, Na, Na, Na, Na],
];

/// Plot severity against likelihood. An N/A on either axis gives N/A.
pub fn lookup_risk(severity: Rating, likelihood: Rating) -> RiskLevel {
    if likelihood == Rating::NotAvailable {
        return RiskLevel::NotAvailable;
    }
    RISK_MATRIX[severity.index()][likelihood.index()]
}
