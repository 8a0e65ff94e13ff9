use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{check_pain_level, TriageResult};
use crate::knowledge::{contains_any, OrthopaedicKnowledge};
use crate::models::{ConditionCandidate, DurationCategory, ExtractionResult, FeatureSummary};

const ACUTE_INJURY_KEYWORDS: &[&str] = &["tear", "fracture", "rupture"];
const MILD_KEYWORDS: &[&str] = &["strain", "itis"];
const LONG_DURATION_KEYWORDS: &[&str] = &["week", "month"];
const CHRONIC_KEYWORDS: &[&str] = &["chronic", "itis"];

/// Ranked candidates plus the features that produced them
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub candidates: Vec<ConditionCandidate>,
    pub features: FeatureSummary,
}

impl Ranking {
    pub fn top(&self) -> Option<&ConditionCandidate> {
        self.candidates.first()
    }
}

/// Rule-adjusted probability distribution over a fixed candidate table
#[derive(Debug, Clone)]
pub struct ConditionRanker {
    default_pain_level: u8,
}

impl Default for ConditionRanker {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ConditionRanker {
    /// `default_pain_level` stands in when the narrative had no rating
    pub fn new(default_pain_level: u8) -> Self {
        Self { default_pain_level }
    }

    pub fn rank(&self, extraction: &ExtractionResult) -> TriageResult<Ranking> {
        check_pain_level(extraction.pain_level)?;
        check_pain_level(Some(self.default_pain_level))?;

        let body_part = extraction
            .affected_body_part
            .as_deref()
            .unwrap_or_default()
            .to_lowercase();
        let pain_level = extraction.pain_level.unwrap_or(self.default_pain_level);
        let duration = extraction.duration.as_deref().unwrap_or_default();

        let conditions = OrthopaedicKnowledge::conditions_for(&body_part);
        let probabilities = condition_probabilities(&conditions, pain_level, duration);

        let explanation_part = extraction.affected_body_part.as_deref().unwrap_or("area");
        let explanation_pain = extraction
            .pain_level
            .map_or_else(|| "moderate".to_string(), |level| level.to_string());

        let mut candidates: Vec<ConditionCandidate> = conditions
            .iter()
            .zip(probabilities)
            .map(|(condition, probability)| ConditionCandidate {
                condition: (*condition).to_string(),
                probability,
                explanation: format!(
                    "Based on {explanation_part} involvement with pain level {explanation_pain}, \
                     {condition} shows high correlation with reported symptoms."
                ),
            })
            .collect();

        // sort_by is stable: equal probabilities keep table order
        candidates.sort_by(|a, b| b.probability.total_cmp(&a.probability));

        let symptoms: Vec<String> = extraction.additional_symptoms.iter().cloned().collect();
        let features = FeatureSummary {
            body_part,
            pain_level,
            duration_category: DurationCategory::from_duration(extraction.duration.as_deref()),
            symptom_count: symptoms.len(),
            primary_symptoms: symptoms.into_iter().take(3).collect(),
        };

        debug!(
            body_part = %features.body_part,
            pain_level = features.pain_level,
            candidates = candidates.len(),
            top = candidates.first().map(|c| c.condition.as_str()).unwrap_or_default(),
            "Ranked candidate conditions"
        );

        Ok(Ranking { candidates, features })
    }
}

/// Uniform prior, two multiplicative rules, then renormalisation
fn condition_probabilities(conditions: &[&str], pain_level: u8, duration: &str) -> Vec<f64> {
    #[allow(clippy::cast_precision_loss)]
    let base = 1.0 / conditions.len().max(1) as f64;

    let adjusted: Vec<f64> = conditions
        .iter()
        .map(|condition| {
            let mut probability = base;

            if pain_level >= 7 {
                if contains_any(condition, ACUTE_INJURY_KEYWORDS) {
                    probability *= 1.5;
                }
            } else if pain_level <= 3 && contains_any(condition, MILD_KEYWORDS) {
                probability *= 1.3;
            }

            if contains_any(duration, LONG_DURATION_KEYWORDS) && contains_any(condition, CHRONIC_KEYWORDS) {
                probability *= 1.2;
            }

            probability
        })
        .collect();

    let total: f64 = adjusted.iter().sum();
    adjusted.into_iter().map(|p| p / total).collect()
}
