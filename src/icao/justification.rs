//! Justification text for assessment results.
//!
//! The layout (numbered sections, table references, quoted inputs) is a fixed
//! output format that clients display verbatim, so changes here are breaking.

use crate::icao::lookup_tables::{Rating, RiskLevel};

pub const MISSING_SPECIES_JUSTIFICATION: &str =
    "Species not found in internal database. Please assess manually or check spelling.";

const RULE: &str = "---------------------------------";

/// Every intermediate value of an automated assessment
#[derive(Debug, Clone)]
pub struct AutomatedRationale<'a> {
    pub source: &'a str,
    pub scientific_name: &'a str,
    pub guild: &'a str,
    pub mass_value: Option<f64>,
    pub mass_text: &'a str,
    pub flock_value: Option<u8>,
    pub flocking_input: &'a str,
    pub severity_score: Option<f64>,
    pub severity: Rating,
    pub likelihood_input: &'a str,
    pub likelihood: Rating,
    pub risk_level: RiskLevel,
}

/// Render a number the way a browser does: `8` rather than `8.0`, exponent
/// form below 1e-6 and from 1e21 up (`1e-7`, `1e+21`), "N/A" when absent.
pub fn display_number(value: Option<f64>) -> String {
    match value {
        Some(v) if v == 0.0 => "0".to_string(), // avoid "-0"
        Some(v) if v.is_finite() && (v.abs() >= 1e21 || v.abs() < 1e-6) => {
            let exp = format!("{:e}", v);
            match exp.split_once('e') {
                Some((mantissa, power)) if !power.starts_with('-') => {
                    format!("{}e+{}", mantissa, power)
                }
                _ => exp,
            }
        }
        Some(v) => v.to_string(),
        None => "N/A".to_string(),
    }
}

pub fn automated_justification(r: &AutomatedRationale<'_>) -> String {
    let mass = display_number(r.mass_value);
    let flock = display_number(r.flock_value.map(f64::from));
    let score = display_number(r.severity_score);

    let mut text = String::with_capacity(1024);
    text.push_str("ICAO-Compliant Rationale (Automated):\n");
    text.push_str(RULE);
    text.push('\n');

    text.push_str(&format!("1. SEVERITY: {}\n", r.severity));
    text.push_str("   - Rationale: Based on the species' physical threat profile.\n");
    text.push_str(&format!(
        "   - Data Source: {} (Species: {}, Guild: {})\n",
        r.source, r.scientific_name, r.guild
    ));
    text.push_str(&format!(
        "   - ICAO Mass Value (Table 3-4): {} (from {})\n",
        mass, r.mass_text
    ));
    text.push_str(&format!(
        "   - ICAO Flock Value (Table 3-5): {} (from user-reported \"{}\")\n",
        flock, r.flocking_input
    ));
    text.push_str(&format!(
        "   - Calculation: {} (Mass) x {} (Flock) = {}\n",
        mass, flock, score
    ));
    text.push_str(&format!(
        "   - Final (Table 3-6): A score of {} maps to a \"{}\" Severity.\n\n",
        score, r.severity
    ));

    text.push_str(&format!("2. LIKELIHOOD: {}\n", r.likelihood));
    text.push_str(&format!(
        "   - Rationale (Table 3-1): User-reported presence of \"{}\" maps to a \"{}\" Likelihood.\n\n",
        r.likelihood_input, r.likelihood
    ));

    push_final_risk(&mut text, r.severity, r.likelihood, r.risk_level);
    text
}

pub fn manual_justification(severity: Rating, likelihood: Rating, risk_level: RiskLevel) -> String {
    let mut text = String::with_capacity(512);
    text.push_str("ICAO-Compliant Rationale (Manual):\n");
    text.push_str(RULE);
    text.push('\n');

    text.push_str(&format!("1. SEVERITY: {}\n", severity));
    text.push_str(&format!(
        "   - Rationale: User manually set Severity to \"{}\".\n\n",
        severity
    ));

    text.push_str(&format!("2. LIKELIHOOD: {}\n", likelihood));
    text.push_str(&format!(
        "   - Rationale: User manually set Likelihood to \"{}\".\n\n",
        likelihood
    ));

    push_final_risk(&mut text, severity, likelihood, risk_level);
    text
}

fn push_final_risk(text: &mut String, severity: Rating, likelihood: Rating, risk_level: RiskLevel) {
    text.push_str(&format!("3. FINAL RISK (Table 3-7): {}\n", risk_level));
    text.push_str(&format!(
        "   - Rationale: Plotting Severity ({}) vs. Likelihood ({}) on the ICAO matrix results in a \"{}\" risk.",
        severity, likelihood, risk_level
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_number() {
        assert_eq!(display_number(Some(8.0)), "8");
        assert_eq!(display_number(Some(31.99)), "31.99");
        assert_eq!(display_number(Some(0.5)), "0.5");
        assert_eq!(display_number(Some(-0.0)), "0");
        assert_eq!(display_number(None), "N/A");
    }

    #[test]
    fn test_display_number_uses_exponent_at_extremes() {
        assert_eq!(display_number(Some(1e21)), "1e+21");
        assert_eq!(display_number(Some(2.5e22)), "2.5e+22");
        assert_eq!(display_number(Some(1e-7)), "1e-7");
        assert_eq!(display_number(Some(-1.5e-7)), "-1.5e-7");
        assert_eq!(display_number(Some(1e20)), "100000000000000000000");
        assert_eq!(display_number(Some(0.000001)), "0.000001");
    }

    #[test]
    fn test_manual_golden_output() {
        let text = manual_justification(Rating::Moderate, Rating::VeryLow, RiskLevel::Green);
        let expected = "ICAO-Compliant Rationale (Manual):
---------------------------------
1. SEVERITY: Moderate
   - Rationale: User manually set Severity to \"Moderate\".

2. LIKELIHOOD: Very Low
   - Rationale: User manually set Likelihood to \"Very Low\".

3. FINAL RISK (Table 3-7): Green
   - Rationale: Plotting Severity (Moderate) vs. Likelihood (Very Low) on the ICAO matrix results in a \"Green\" risk.";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_automated_golden_output() {
        let rationale = AutomatedRationale {
            source: "Dunning",
            scientific_name: "Branta canadensis",
            guild: "Waterfowl",
            mass_value: Some(8.0),
            mass_text: "medium",
            flock_value: Some(4),
            flocking_input: "Tight",
            severity_score: Some(32.0),
            severity: Rating::VeryHigh,
            likelihood_input: "Few",
            likelihood: Rating::Low,
            risk_level: RiskLevel::Red,
        };

        let expected = "ICAO-Compliant Rationale (Automated):
---------------------------------
1. SEVERITY: Very High
   - Rationale: Based on the species' physical threat profile.
   - Data Source: Dunning (Species: Branta canadensis, Guild: Waterfowl)
   - ICAO Mass Value (Table 3-4): 8 (from medium)
   - ICAO Flock Value (Table 3-5): 4 (from user-reported \"Tight\")
   - Calculation: 8 (Mass) x 4 (Flock) = 32
   - Final (Table 3-6): A score of 32 maps to a \"Very High\" Severity.

2. LIKELIHOOD: Low
   - Rationale (Table 3-1): User-reported presence of \"Few\" maps to a \"Low\" Likelihood.

3. FINAL RISK (Table 3-7): Red
   - Rationale: Plotting Severity (Very High) vs. Likelihood (Low) on the ICAO matrix results in a \"Red\" risk.";
        assert_eq!(automated_justification(&rationale), expected);
    }

    #[test]
    fn test_automated_unknown_flocking_shows_not_available() {
        let rationale = AutomatedRationale {
            source: "Dunning",
            scientific_name: "Branta canadensis",
            guild: "Waterfowl",
            mass_value: Some(8.0),
            mass_text: "medium",
            flock_value: None,
            flocking_input: "Swarm",
            severity_score: None,
            severity: Rating::NotAvailable,
            likelihood_input: "Few",
            likelihood: Rating::Low,
            risk_level: RiskLevel::NotAvailable,
        };

        let text = automated_justification(&rationale);
        assert!(text.contains("   - Calculation: 8 (Mass) x N/A (Flock) = N/A\n"));
        assert!(text.contains("3. FINAL RISK (Table 3-7): N/A\n"));
    }
}
