use tracing::debug;

use crate::error::{check_pain_level, TriageResult};
use crate::knowledge::{contains_any, OrthopaedicKnowledge, GENERIC_TREATMENT};
use crate::models::{Recommendation, SeverityLevel, UrgencyLevel};

const SURGERY_KEYWORDS: &[&str] = &["tear", "fracture", "rupture", "severe"];
const NEUROLOGY_KEYWORDS: &[&str] = &["nerve", "radiculopathy", "neuropathy"];
const RHEUMATOLOGY_KEYWORDS: &[&str] = &["arthritis", "inflammatory"];
const EMERGENCY_KEYWORDS: &[&str] = &["fracture", "dislocation", "rupture", "acute"];

pub const ORTHOPEDIC_SURGERY: &str = "Orthopedic Surgery";
pub const ORTHOPEDIC_SPECIALIST: &str = "Orthopedic Specialist";
pub const NEUROLOGY: &str = "Neurology";
pub const RHEUMATOLOGY: &str = "Rheumatology";

/// Tests, treatment, referral and urgency for the top-ranked condition
#[derive(Debug, Clone, Copy, Default)]
pub struct RecommendationGenerator;

impl RecommendationGenerator {
    pub fn new() -> Self {
        Self
    }

    /// A missing pain rating counts as 0 for the urgency rule
    pub fn recommend(&self, top_condition: &str, severity: SeverityLevel, pain_level: Option<u8>) -> TriageResult<Recommendation> {
        check_pain_level(pain_level)?;

        let (referral_needed, referral_specialty) = determine_referral(top_condition, severity);
        let urgency_level = determine_urgency(top_condition, severity, pain_level.unwrap_or(0));

        debug!(
            condition = top_condition,
            severity = %severity,
            referral = referral_specialty.unwrap_or("none"),
            urgency = ?urgency_level,
            "Generated recommendation"
        );

        Ok(Recommendation {
            diagnostic_tests: diagnostic_tests(top_condition),
            initial_treatment: initial_treatment(top_condition),
            referral_needed,
            referral_specialty: referral_specialty.map(str::to_string),
            urgency_level,
        })
    }
}

fn diagnostic_tests(condition: &str) -> Vec<String> {
    let tests: &[&str] = match OrthopaedicKnowledge::diagnostic_tests_for(condition) {
        Some(tests) => tests,
        None if condition.to_lowercase().contains("pain") => &["X-Ray", "Physical Examination"],
        None => &["Physical Examination", "X-Ray"],
    };
    tests.iter().map(|t| (*t).to_string()).collect()
}

fn initial_treatment(condition: &str) -> Vec<String> {
    OrthopaedicKnowledge::initial_treatment_for(condition)
        .unwrap_or(GENERIC_TREATMENT)
        .iter()
        .map(|t| (*t).to_string())
        .collect()
}

fn determine_referral(condition: &str, severity: SeverityLevel) -> (bool, Option<&'static str>) {
    if severity == SeverityLevel::High {
        if contains_any(condition, SURGERY_KEYWORDS) {
            return (true, Some(ORTHOPEDIC_SURGERY));
        }
        return (true, Some(ORTHOPEDIC_SPECIALIST));
    }
    if contains_any(condition, NEUROLOGY_KEYWORDS) {
        return (true, Some(NEUROLOGY));
    }
    if contains_any(condition, RHEUMATOLOGY_KEYWORDS) {
        return (true, Some(RHEUMATOLOGY));
    }
    if severity == SeverityLevel::Medium {
        return (true, Some(ORTHOPEDIC_SPECIALIST));
    }
    (false, None)
}

fn determine_urgency(condition: &str, severity: SeverityLevel, pain_level: u8) -> UrgencyLevel {
    let high = severity == SeverityLevel::High;
    if contains_any(condition, EMERGENCY_KEYWORDS) && (high || pain_level >= 8) {
        UrgencyLevel::Emergency
    } else if high || pain_level >= 7 {
        UrgencyLevel::Urgent
    } else {
        UrgencyLevel::Routine
    }
}
