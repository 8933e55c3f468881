//! Error types shared by the assessor and the numeric scorer.

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RiskError {
    /// Caller-correctable input problem (non-numeric value, zero mitigation)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Manual-mode category outside the five ICAO levels
    #[error("Unknown {field} category: \"{value}\" (expected one of Very High, High, Moderate, Low, Very Low)")]
    UnknownCategory { field: &'static str, value: String },

    #[error("Missing required field: {0}")]
    MissingField(&'static str),
}

impl RiskError {
    /// True for errors the caller can fix by resubmitting corrected input.
    pub fn is_validation(&self) -> bool {
        matches!(self, RiskError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
