//! Wildlife Strike Risk
//!
//! ICAO-style wildlife strike risk rating plus a numeric likelihood/severity/
//! mitigation scorer, served over HTTP.
//!
//! - `icao/`: severity x likelihood assessment (automated and manual)
//! - `scoring`: numeric risk score and banding
//! - `config`: server settings from the environment
//! - `api_server`: Axum router (feature `api`)

pub mod config;
pub mod error;
pub mod icao;
pub mod scoring;

#[cfg(feature = "api")]
pub mod api_server;

// Re-export commonly used types
pub use config::ServerConfig;
pub use error::RiskError;
pub use icao::{assess, AssessmentRequest, AssessmentResult, Rating, RiskLevel, SpeciesRecord};
pub use scoring::{compute_risk_score, RiskBand, RiskScore, RiskScoreRequest};

#[cfg(feature = "api")]
pub use api_server::create_router;
