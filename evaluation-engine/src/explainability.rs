use serde::{Deserialize, Serialize};
use triage_engine::{DurationCategory, PredictionRecord};

pub const HIGH_PAIN_FACTOR: &str = "High pain level (>= 7/10)";
pub const CHRONIC_FACTOR: &str = "Chronic condition (long duration)";
pub const MULTIPLE_SYMPTOMS_FACTOR: &str = "Multiple symptoms present";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Low,
    Medium,
    High,
}

impl ConfidenceLevel {
    /// `>= 0.7` High, `>= 0.5` Medium, otherwise Low
    pub fn from_probability(probability: f64) -> Self {
        if probability >= 0.7 {
            ConfidenceLevel::High
        } else if probability >= 0.5 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// Fixed relative weight of each feature family
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub body_part: f64,
    pub pain_level: f64,
    pub duration: f64,
    pub symptoms: f64,
}

impl Default for FeatureImportance {
    fn default() -> Self {
        Self {
            body_part: 0.30,
            pain_level: 0.25,
            duration: 0.20,
            symptoms: 0.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub confidence_level: ConfidenceLevel,
    pub top_probability: f64,
    /// Number of candidates the ranker considered
    pub prediction_diversity: usize,
    pub feature_importance: FeatureImportance,
    pub key_factors: Vec<String>,
}

pub fn explain(prediction: &PredictionRecord) -> Explanation {
    let top_probability = prediction
        .predicted_conditions
        .first()
        .map_or(0.0, |c| c.probability);
    let features = &prediction.features_used;

    let mut key_factors = Vec::new();
    if features.pain_level >= 7 {
        key_factors.push(HIGH_PAIN_FACTOR.to_string());
    }
    if features.duration_category == DurationCategory::Chronic {
        key_factors.push(CHRONIC_FACTOR.to_string());
    }
    if features.symptom_count >= 3 {
        key_factors.push(MULTIPLE_SYMPTOMS_FACTOR.to_string());
    }

    Explanation {
        confidence_level: ConfidenceLevel::from_probability(top_probability),
        top_probability,
        prediction_diversity: prediction.predicted_conditions.len(),
        feature_importance: FeatureImportance::default(),
        key_factors,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use triage_engine::{TriagePipeline, TriageRequest};

    fn prediction(text: &str) -> PredictionRecord {
        TriagePipeline::default()
            .run(&TriageRequest::new(text))
            .unwrap()
            .prediction
    }

    #[test]
    fn test_confidence_tiers() {
        assert_eq!(ConfidenceLevel::from_probability(0.7), ConfidenceLevel::High);
        assert_eq!(ConfidenceLevel::from_probability(0.5), ConfidenceLevel::Medium);
        assert_eq!(ConfidenceLevel::from_probability(0.49), ConfidenceLevel::Low);
    }

    #[test]
    fn test_key_factors() {
        let explanation = explain(&prediction(
            "Shoulder pain 8/10 for 1 year with stiffness, weakness and numbness",
        ));
        assert_eq!(
            explanation.key_factors,
            [HIGH_PAIN_FACTOR, CHRONIC_FACTOR, MULTIPLE_SYMPTOMS_FACTOR]
        );
        assert_eq!(explanation.prediction_diversity, 5);
        assert_eq!(explanation.confidence_level, ConfidenceLevel::Low);
    }

    #[test]
    fn test_single_candidate_is_high_confidence() {
        let explanation = explain(&prediction("my feet are sore"));
        assert_eq!(explanation.top_probability, 1.0);
        assert_eq!(explanation.confidence_level, ConfidenceLevel::High);
        assert!(explanation.key_factors.is_empty());
        assert_eq!(explanation.feature_importance.body_part, 0.30);
    }
}
