use tracing::debug;

use crate::error::{check_pain_level, TriageResult};
use crate::models::{round_to, SeverityAssessment, SeverityLevel};

/// Factor weights; they sum to 1.0 so the total stays within [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeverityWeights {
    pub pain_level: f64,
    pub duration: f64,
    pub functional_impact: f64,
    pub symptom_intensity: f64,
}

impl Default for SeverityWeights {
    fn default() -> Self {
        Self {
            pain_level: 0.35,
            duration: 0.25,
            functional_impact: 0.20,
            symptom_intensity: 0.20,
        }
    }
}

const FUNCTIONAL_KEYWORDS: &[&str] = &["cannot", "unable", "difficulty", "limited", "weakness"];
const INTENSE_SYMPTOMS: &[&str] = &["swelling", "numbness", "burning", "sharp"];

#[derive(Debug, Clone, Default)]
pub struct SeverityScorer {
    weights: SeverityWeights,
}

impl SeverityScorer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Weighted four-factor score; a missing pain rating counts as 0
    pub fn score<I, S>(&self, pain_level: Option<u8>, duration: Option<&str>, symptoms: I) -> TriageResult<SeverityAssessment>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        check_pain_level(pain_level)?;
        let symptoms: Vec<String> = symptoms.into_iter().map(|s| s.as_ref().to_string()).collect();

        let pain = f64::from(pain_level.unwrap_or(0)) / 10.0 * self.weights.pain_level;
        let duration = duration_factor(duration.unwrap_or_default()) * self.weights.duration;

        let joined = symptoms.join(" ").to_lowercase();
        let functional_impact = if FUNCTIONAL_KEYWORDS.iter().any(|kw| joined.contains(kw)) {
            1.0
        } else {
            0.3
        };
        let functional = functional_impact * self.weights.functional_impact;

        let intense = symptoms
            .iter()
            .filter(|s| INTENSE_SYMPTOMS.contains(&s.as_str()))
            .count();
        #[allow(clippy::cast_precision_loss)]
        let intensity = intense as f64 / symptoms.len().max(1) as f64 * self.weights.symptom_intensity;

        let total = pain + duration + functional + intensity;
        let level = SeverityLevel::from_score(total);

        debug!(
            pain,
            duration,
            functional,
            intensity,
            total,
            level = %level,
            "Scored severity"
        );

        Ok(SeverityAssessment {
            level,
            score: round_to(total, 3),
        })
    }
}

/// year beats month beats week; anything else is short
fn duration_factor(duration: &str) -> f64 {
    let duration = duration.to_lowercase();
    if duration.contains("year") {
        1.0
    } else if duration.contains("month") {
        0.7
    } else if duration.contains("week") {
        0.4
    } else {
        0.2
    }
}
