//! Automated and manual ICAO risk assessment.
//!
//! Automated: severity from (mass value x flock value), likelihood from the
//! reported presence term. Manual: both categories supplied by the caller.

use chrono::{SecondsFormat, Utc};
use uuid::Uuid;

use crate::error::{Result, RiskError};
use crate::icao::justification::{
    automated_justification, manual_justification, AutomatedRationale,
    MISSING_SPECIES_JUSTIFICATION,
};
use crate::icao::lookup_tables::{
    flock_value, likelihood_from_presence, lookup_risk, severity_from_score, Rating, RiskLevel,
};
use crate::icao::types::{AssessmentMode, AssessmentRequest, AssessmentResult, SpeciesRecord};

fn new_assessment_id() -> String {
    Uuid::new_v4().to_string()
}

fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Dispatch a request body to the automated or manual path.
pub fn assess(request: &AssessmentRequest) -> Result<AssessmentResult> {
    if request.is_auto_mode.unwrap_or(false) {
        let species = request
            .species_data
            .as_ref()
            .ok_or(RiskError::MissingField("speciesData"))?;

        Ok(assess_automated(
            species,
            request.auto_likelihood_input.as_deref().unwrap_or(""),
            request.auto_flocking_input.as_deref().unwrap_or(""),
        ))
    } else {
        assess_manual(
            request.species_name.as_deref().unwrap_or(""),
            request.manual_severity_input.as_deref().unwrap_or(""),
            request.manual_likelihood_input.as_deref().unwrap_or(""),
        )
    }
}

/// Automated assessment from a species record.
///
/// A `Missing` species is a valid N/A result, not an error.
pub fn assess_automated(
    species: &SpeciesRecord,
    likelihood_input: &str,
    flocking_input: &str,
) -> AssessmentResult {
    if species.is_missing() {
        tracing::debug!(
            "Species {:?} missing from database, returning N/A assessment",
            species.name
        );
        return AssessmentResult {
            id: new_assessment_id(),
            species_common: species.name.clone().unwrap_or_default(),
            species_scientific: "N/A".to_string(),
            mode: AssessmentMode::Automated,
            severity: Rating::NotAvailable,
            likelihood: Rating::NotAvailable,
            risk_level: RiskLevel::NotAvailable,
            status: species.status.clone(),
            justification: MISSING_SPECIES_JUSTIFICATION.to_string(),
            timestamp: timestamp_now(),
        };
    }

    let flock = flock_value(flocking_input);
    let severity_score = match (species.mass_value, flock) {
        (Some(mass), Some(flock)) => Some(mass * f64::from(flock)),
        _ => None,
    };
    let severity = severity_score
        .map(severity_from_score)
        .unwrap_or(Rating::NotAvailable);

    let likelihood = likelihood_from_presence(likelihood_input);
    let risk_level = lookup_risk(severity, likelihood);

    let scientific_name = species.name.as_deref().unwrap_or("N/A");
    let source = species.source.as_deref().unwrap_or("N/A");

    let justification = automated_justification(&AutomatedRationale {
        source,
        scientific_name,
        guild: species.guild.as_deref().unwrap_or("N/A"),
        mass_value: species.mass_value,
        mass_text: species.mass_text.as_deref().unwrap_or("N/A"),
        flock_value: flock,
        flocking_input,
        severity_score,
        severity,
        likelihood_input,
        likelihood,
        risk_level,
    });

    tracing::debug!(
        "Automated assessment for {}: score={:?} severity={} likelihood={} risk={}",
        scientific_name,
        severity_score,
        severity,
        likelihood,
        risk_level
    );

    AssessmentResult {
        id: new_assessment_id(),
        species_common: species.primary_common_name().to_string(),
        species_scientific: scientific_name.to_string(),
        mode: AssessmentMode::Automated,
        severity,
        likelihood,
        risk_level,
        status: source.to_string(),
        justification,
        timestamp: timestamp_now(),
    }
}

/// Manual assessment from caller-chosen categories.
///
/// Both categories must be one of the five ICAO levels; anything else,
/// including "N/A", is rejected rather than looked up.
pub fn assess_manual(
    species_name: &str,
    severity_input: &str,
    likelihood_input: &str,
) -> Result<AssessmentResult> {
    let severity = Rating::parse_level(severity_input).ok_or_else(|| RiskError::UnknownCategory {
        field: "severity",
        value: severity_input.to_string(),
    })?;
    let likelihood =
        Rating::parse_level(likelihood_input).ok_or_else(|| RiskError::UnknownCategory {
            field: "likelihood",
            value: likelihood_input.to_string(),
        })?;

    let risk_level = lookup_risk(severity, likelihood);

    tracing::debug!(
        "Manual assessment for {}: severity={} likelihood={} risk={}",
        species_name,
        severity,
        likelihood,
        risk_level
    );

    Ok(AssessmentResult {
        id: new_assessment_id(),
        species_common: species_name.to_string(),
        species_scientific: "N/A (Manual)".to_string(),
        mode: AssessmentMode::Manual,
        severity,
        likelihood,
        risk_level,
        status: "Manual Assessment".to_string(),
        justification: manual_justification(severity, likelihood, risk_level),
        timestamp: timestamp_now(),
    })
}
