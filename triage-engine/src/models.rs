use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use validator::Validate;

use crate::error::{TriageError, TriageResult};

/// Structured signals pulled out of a symptom narrative
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub affected_body_part: Option<String>,
    pub all_affected_parts: BTreeSet<String>,
    pub pain_level: Option<u8>,
    pub duration: Option<String>,
    pub additional_symptoms: BTreeSet<String>,
    pub extraction_confidence: f64,
    pub processed_text: String,
}

/// One ranked condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionCandidate {
    pub condition: String,
    pub probability: f64,
    pub explanation: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationCategory {
    Chronic,
    Subacute,
    Acute,
    Unknown,
}

impl DurationCategory {
    pub fn from_duration(duration: Option<&str>) -> Self {
        match duration {
            None | Some("") => DurationCategory::Unknown,
            Some(text) => {
                let text = text.to_lowercase();
                if text.contains("year") {
                    DurationCategory::Chronic
                } else if text.contains("month") {
                    DurationCategory::Subacute
                } else {
                    DurationCategory::Acute
                }
            }
        }
    }
}

/// Features the ranker used, kept with the prediction for explainability
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureSummary {
    pub body_part: String,
    pub pain_level: u8,
    pub duration_category: DurationCategory,
    pub symptom_count: usize,
    pub primary_symptoms: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SeverityLevel {
    Low,
    Medium,
    High,
}

impl SeverityLevel {
    /// `>= 0.7` High, `>= 0.4` Medium, otherwise Low
    pub fn from_score(score: f64) -> Self {
        if score >= 0.7 {
            SeverityLevel::High
        } else if score >= 0.4 {
            SeverityLevel::Medium
        } else {
            SeverityLevel::Low
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SeverityLevel::Low => "Low",
            SeverityLevel::Medium => "Medium",
            SeverityLevel::High => "High",
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Low" => Ok(SeverityLevel::Low),
            "Medium" => Ok(SeverityLevel::Medium),
            "High" => Ok(SeverityLevel::High),
            other => Err(TriageError::Validation(format!("unknown severity level: {other}"))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: SeverityLevel,
    pub score: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum UrgencyLevel {
    Routine,
    Urgent,
    Emergency,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    pub diagnostic_tests: Vec<String>,
    pub initial_treatment: Vec<String>,
    pub referral_needed: bool,
    pub referral_specialty: Option<String>,
    pub urgency_level: UrgencyLevel,
}

/// Queue priority, always within 1..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct PriorityScore(u8);

impl PriorityScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Clamp any raw sum into range
    pub fn clamped(raw: i64) -> Self {
        let clamped = raw.clamp(i64::from(Self::MIN), i64::from(Self::MAX));
        Self(u8::try_from(clamped).unwrap_or(Self::MAX))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for PriorityScore {
    type Error = TriageError;

    fn try_from(raw: i64) -> Result<Self, Self::Error> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&raw) {
            Ok(Self::clamped(raw))
        } else {
            Err(TriageError::OutOfRange(format!("priority {raw} is outside 1-100")))
        }
    }
}

impl From<PriorityScore> for u8 {
    fn from(score: PriorityScore) -> Self {
        score.0
    }
}

impl fmt::Display for PriorityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentType {
    Initial,
    Emergency,
}

impl AppointmentType {
    pub fn for_urgency(urgency: UrgencyLevel) -> Self {
        if urgency == UrgencyLevel::Emergency {
            AppointmentType::Emergency
        } else {
            AppointmentType::Initial
        }
    }
}

/// Round half away from zero to `places` decimals, as reported scores are
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// `P-{year}-{n}` where n is the next sequence number, zero-padded to 4
pub fn patient_code(year: i32, existing_count: u64) -> String {
    format!("P-{year}-{:04}", existing_count + 1)
}

/// Input to the pipeline; identifiers are opaque and supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Validate)]
pub struct TriageRequest {
    pub patient_id: Option<String>,
    pub symptom_id: Option<String>,
    #[validate(length(min = 1, message = "symptom text is empty"))]
    pub symptom_text: String,
    #[validate(range(min = 1, max = 150, message = "patient age must be 1-150"))]
    pub patient_age: Option<u32>,
}

impl TriageRequest {
    pub fn new(symptom_text: impl Into<String>) -> Self {
        Self {
            symptom_text: symptom_text.into(),
            ..Default::default()
        }
    }

    pub fn with_age(mut self, age: u32) -> Self {
        self.patient_age = Some(age);
        self
    }

    pub fn with_ids(mut self, patient_id: impl Into<String>, symptom_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self.symptom_id = Some(symptom_id.into());
        self
    }

    /// Boundary validation before the text enters the core
    pub fn validate_request(&self) -> TriageResult<()> {
        self.validate()?;
        if self.symptom_text.trim().is_empty() {
            return Err(TriageError::Validation("symptom text is blank".to_string()));
        }
        Ok(())
    }
}

/// Prediction half of the pipeline output
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionRecord {
    pub symptom_id: Option<String>,
    pub patient_id: Option<String>,
    pub predicted_conditions: Vec<ConditionCandidate>,
    pub top_condition: String,
    pub top_condition_probability: f64,
    pub severity_level: SeverityLevel,
    pub severity_score: f64,
    pub model_version: String,
    pub features_used: FeatureSummary,
}

/// Everything the persistence layer writes back for one symptom
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TriageOutcome {
    pub extraction: ExtractionResult,
    #[serde(flatten)]
    pub prediction: PredictionRecord,
    #[serde(flatten)]
    pub recommendation: Recommendation,
    pub priority_score: PriorityScore,
    pub appointment_type: AppointmentType,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(SeverityLevel::from_score(0.75), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_score(0.7), SeverityLevel::High);
        assert_eq!(SeverityLevel::from_score(0.4), SeverityLevel::Medium);
        assert_eq!(SeverityLevel::from_score(0.39999), SeverityLevel::Low);
    }

    #[test]
    fn test_duration_category() {
        assert_eq!(DurationCategory::from_duration(None), DurationCategory::Unknown);
        assert_eq!(DurationCategory::from_duration(Some("1 year")), DurationCategory::Chronic);
        assert_eq!(DurationCategory::from_duration(Some("3 Months")), DurationCategory::Subacute);
        assert_eq!(DurationCategory::from_duration(Some("2 weeks")), DurationCategory::Acute);
    }

    #[test]
    fn test_priority_clamped() {
        assert_eq!(PriorityScore::clamped(-4).value(), 1);
        assert_eq!(PriorityScore::clamped(140).value(), 100);
        assert!(PriorityScore::try_from(0).is_err());
    }

    #[test]
    fn test_patient_code_padding() {
        assert_eq!(patient_code(2024, 41), "P-2024-0042");
        assert_eq!(patient_code(2025, 12345), "P-2025-12346");
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(0.646_8, 3), 0.647);
        assert_eq!(round_to(2.0 / 3.0, 2), 0.67);
        assert_eq!(round_to(0.75, 4), 0.75);
    }

    #[test]
    fn test_long_narrative_accepted() {
        let text = "My knee locks and gives way when I climb stairs. ".repeat(250);
        assert!(text.len() > 10_000);
        assert!(TriageRequest::new(text).validate_request().is_ok());
    }

    #[test]
    fn test_request_validation() {
        assert!(TriageRequest::new("knee pain").with_age(40).validate_request().is_ok());
        assert!(TriageRequest::new("   ").validate_request().is_err());
        assert!(TriageRequest::new("knee pain").with_age(0).validate_request().is_err());
        assert!(TriageRequest::new("knee pain").with_age(151).validate_request().is_err());
    }

    #[test]
    fn test_outcome_serializes_flat() {
        let rec = Recommendation {
            diagnostic_tests: vec!["X-Ray".into()],
            initial_treatment: vec![],
            referral_needed: false,
            referral_specialty: None,
            urgency_level: UrgencyLevel::Routine,
        };
        let value = serde_json::to_value(&rec).unwrap();
        assert_eq!(value["urgency_level"], "Routine");
        assert_eq!(serde_json::to_value(PriorityScore::clamped(84)).unwrap(), 84);
    }
}
