use tracing::debug;

use crate::error::{check_pain_level, TriageError, TriageResult};
use crate::models::PriorityScore;

const SEVERITY_WEIGHT: f64 = 40.0;
const PAIN_POINTS_PER_LEVEL: i64 = 3;
const RECENT_ONSET_BONUS: i64 = 15;
const ELDERLY_AGE: u32 = 65;
const ELDERLY_BONUS: i64 = 10;
const PEDIATRIC_AGE: u32 = 18;
const PEDIATRIC_BONUS: i64 = 5;
const PATIENT_AGES: std::ops::RangeInclusive<u32> = 1..=150;

/// Integer queue priority from severity, pain, onset and age
#[derive(Debug, Clone)]
pub struct PriorityScorer {
    default_pain_level: u8,
}

impl Default for PriorityScorer {
    fn default() -> Self {
        Self::new(5)
    }
}

impl PriorityScorer {
    pub fn new(default_pain_level: u8) -> Self {
        Self { default_pain_level }
    }

    /// `floor(severity * 40) + floor(pain / 10 * 30) + onset bonus + age bonus`, clamped to 1..=100
    pub fn score(
        &self,
        severity_score: f64,
        pain_level: Option<u8>,
        duration: Option<&str>,
        age: Option<u32>,
    ) -> TriageResult<PriorityScore> {
        if !severity_score.is_finite() || !(0.0..=1.0).contains(&severity_score) {
            return Err(TriageError::OutOfRange(format!(
                "severity score {severity_score} is outside 0-1"
            )));
        }
        check_pain_level(pain_level)?;
        check_pain_level(Some(self.default_pain_level))?;
        if let Some(age) = age.filter(|age| !PATIENT_AGES.contains(age)) {
            return Err(TriageError::OutOfRange(format!("age {age} is outside 1-150")));
        }

        #[allow(clippy::cast_possible_truncation)]
        let severity = (severity_score * SEVERITY_WEIGHT).floor() as i64;
        let pain = i64::from(pain_level.unwrap_or(self.default_pain_level)) * PAIN_POINTS_PER_LEVEL;
        let onset = onset_bonus(duration.unwrap_or_default());
        let age_bonus = age.map_or(0, age_bonus);

        let priority = PriorityScore::clamped(severity + pain + onset + age_bonus);
        debug!(severity, pain, onset, age_bonus, priority = %priority, "Computed priority");
        Ok(priority)
    }
}

/// Loose substring heuristic: "day" plus a "1" or "2" anywhere, so "21 days" counts
fn onset_bonus(duration: &str) -> i64 {
    let duration = duration.to_lowercase();
    if duration.contains("day") && (duration.contains('1') || duration.contains('2')) {
        RECENT_ONSET_BONUS
    } else {
        0
    }
}

fn age_bonus(age: u32) -> i64 {
    if age >= ELDERLY_AGE {
        ELDERLY_BONUS
    } else if age <= PEDIATRIC_AGE {
        PEDIATRIC_BONUS
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(severity: f64, pain: Option<u8>, duration: Option<&str>, age: Option<u32>) -> u8 {
        PriorityScorer::default()
            .score(severity, pain, duration, age)
            .unwrap()
            .value()
    }

    #[test]
    fn test_elderly_recent_onset() {
        // 32 + 27 + 15 + 10
        assert_eq!(score(0.8, Some(9), Some("2 days"), Some(70)), 84);
    }

    #[test]
    fn test_onset_bonus_is_substring_based() {
        assert_eq!(onset_bonus("21 days"), 15);
        assert_eq!(onset_bonus("1 Day"), 15);
        assert_eq!(onset_bonus("3 days"), 0);
        assert_eq!(onset_bonus("2 weeks"), 0);
    }

    #[test]
    fn test_age_bonus() {
        assert_eq!(age_bonus(65), 10);
        assert_eq!(age_bonus(18), 5);
        assert_eq!(age_bonus(40), 0);
        assert_eq!(score(0.5, Some(5), None, None), 35);
    }

    #[test]
    fn test_missing_pain_uses_default() {
        assert_eq!(score(0.0, None, None, Some(40)), 15);
    }

    #[test]
    fn test_clamped_to_range() {
        assert_eq!(score(0.0, Some(0), None, Some(40)), 1);
        assert_eq!(score(1.0, Some(10), Some("1 day"), Some(80)), 95);
    }

    #[test]
    fn test_invalid_inputs_rejected() {
        let scorer = PriorityScorer::default();
        assert!(scorer.score(1.2, Some(5), None, None).is_err());
        assert!(scorer.score(f64::NAN, Some(5), None, None).is_err());
        assert!(scorer.score(0.5, Some(11), None, None).is_err());
        assert!(scorer.score(0.5, Some(5), None, Some(151)).is_err());
    }

    #[test]
    fn test_age_bounds_match_request_boundary() {
        let scorer = PriorityScorer::default();
        assert!(matches!(
            scorer.score(0.5, Some(5), None, Some(0)),
            Err(TriageError::OutOfRange(msg)) if msg.contains("1-150")
        ));
        // floor(0.5 * 40) + 5 * 3 + pediatric bonus
        assert_eq!(scorer.score(0.5, Some(5), None, Some(1)).unwrap().value(), 40);
        assert!(scorer.score(0.5, Some(5), None, Some(150)).is_ok());
    }
}
