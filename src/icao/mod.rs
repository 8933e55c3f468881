//! ICAO wildlife strike risk assessment
//!
//! - `lookup_tables`: fixed ICAO tables (flock value, severity, likelihood, risk matrix)
//! - `assessor`: automated and manual assessment paths
//! - `justification`: human-readable rationale text
//! - `types`: request/response shapes

pub mod assessor;
pub mod justification;
pub mod lookup_tables;
pub mod types;

pub use assessor::{assess, assess_automated, assess_manual};
pub use lookup_tables::{lookup_risk, Rating, RiskLevel};
pub use types::{AssessmentMode, AssessmentRequest, AssessmentResult, SpeciesRecord};
