//! Entity extraction from free-text symptom narratives
//!
//! A lexical scan: the narrative is lower-cased and split into word tokens,
//! each token (or a simple lemma of it) is checked against the body-part and
//! symptom vocabularies, and two regular expressions pick out a 0-10 pain
//! rating and a duration phrase. Nothing here can fail; a signal that is not
//! found is simply absent from the result.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

use crate::knowledge::OrthopaedicKnowledge;
use crate::models::{round_to, ExtractionResult};

lazy_static! {
    #[allow(clippy::expect_used)]
    static ref PAIN_LEVEL_PATTERN: Regex =
        Regex::new(r"(?i)(pain|severity|level|intensity).*?(\d{1,2})\s*(?:out of|/|\s)?\s*10")
            .expect("pain level pattern");
    #[allow(clippy::expect_used)]
    static ref DURATION_PATTERN: Regex =
        Regex::new(r"(?i)(\d+)\s*(days?|weeks?|months?|years?)").expect("duration pattern");
}

/// Number of signals that counts as a complete extraction
const CONFIDENCE_NORMALIZER: f64 = 6.0;

/// Irregular forms the suffix rules cannot reach
const IRREGULAR_LEMMAS: &[(&str, &str)] = &[
    ("feet", "foot"),
    ("torn", "tear"),
    ("tore", "tear"),
    ("hurts", "hurt"),
];

#[derive(Debug, Clone, Copy, Default)]
pub struct EntityExtractor;

impl EntityExtractor {
    pub fn new() -> Self {
        Self
    }

    pub fn extract(&self, text: &str) -> ExtractionResult {
        let lowered = text.to_lowercase();

        let mut affected_body_part = None;
        let mut all_affected_parts = BTreeSet::new();
        let mut additional_symptoms = BTreeSet::new();

        for token in tokenize(&lowered) {
            if matches_vocabulary(token, OrthopaedicKnowledge::is_body_part) {
                if affected_body_part.is_none() {
                    affected_body_part = Some(token.to_string());
                }
                all_affected_parts.insert(token.to_string());
            }
            if matches_vocabulary(token, OrthopaedicKnowledge::is_symptom) {
                additional_symptoms.insert(token.to_string());
            }
        }

        let pain_level = extract_pain_level(text);
        let duration = DURATION_PATTERN
            .find(text)
            .map(|m| m.as_str().to_string());

        let found = all_affected_parts.len()
            + additional_symptoms.len()
            + usize::from(pain_level.is_some())
            + usize::from(duration.is_some());
        #[allow(clippy::cast_precision_loss)]
        let confidence = (found as f64 / CONFIDENCE_NORMALIZER).min(1.0);

        ExtractionResult {
            affected_body_part,
            all_affected_parts,
            pain_level,
            duration,
            additional_symptoms,
            extraction_confidence: round_to(confidence, 2),
            processed_text: lowered.trim().to_string(),
        }
    }
}

/// First "pain ... N out of 10" style rating, clamped to 10
fn extract_pain_level(text: &str) -> Option<u8> {
    let caps = PAIN_LEVEL_PATTERN.captures(text)?;
    let level: u8 = caps.get(2)?.as_str().parse().ok()?;
    Some(level.min(10))
}

fn tokenize(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|token| !token.is_empty())
}

fn matches_vocabulary(token: &str, in_vocabulary: fn(&str) -> bool) -> bool {
    in_vocabulary(token) || lemma_candidates(token).iter().any(|lemma| in_vocabulary(lemma))
}

/// Base forms a token may inflect from
fn lemma_candidates(token: &str) -> Vec<String> {
    let mut candidates = Vec::new();

    if let Some((_, lemma)) = IRREGULAR_LEMMAS.iter().find(|(form, _)| *form == token) {
        candidates.push((*lemma).to_string());
    }
    if let Some(stem) = token.strip_suffix("ies") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("es") {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix('s') {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("ed") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
    }
    if let Some(stem) = token.strip_suffix("ing") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
    }

    candidates.retain(|c| c.len() > 1);
    candidates
}

#[cfg(test)]
mod tests {
    use super::*;

    const KNEE_NARRATIVE: &str = "I have severe pain in my right knee for the past 2 weeks. \
        The pain is 8 out of 10 and there is swelling. I have difficulty walking.";

    #[test]
    fn test_knee_narrative() {
        let result = EntityExtractor::new().extract(KNEE_NARRATIVE);
        assert_eq!(result.affected_body_part.as_deref(), Some("knee"));
        assert_eq!(result.pain_level, Some(8));
        assert_eq!(result.duration.as_deref(), Some("2 weeks"));
        for symptom in ["swelling", "difficulty", "pain"] {
            assert!(result.additional_symptoms.contains(symptom), "missing {symptom}");
        }
        assert!(result.extraction_confidence > 0.5);
    }

    #[test]
    fn test_empty_text() {
        let result = EntityExtractor::new().extract("");
        assert_eq!(result, ExtractionResult::default());
    }

    #[test]
    fn test_first_body_part_wins() {
        let result = EntityExtractor::new().extract("My shoulder and my knees ache");
        assert_eq!(result.affected_body_part.as_deref(), Some("shoulder"));
        assert_eq!(result.all_affected_parts.len(), 2);
        assert!(result.all_affected_parts.contains("knees"));
    }

    #[test]
    fn test_lemmatised_tokens_match() {
        let result = EntityExtractor::new().extract("Both feet are sprained and it aches");
        assert!(result.all_affected_parts.contains("feet"));
        assert!(result.additional_symptoms.contains("sprained"));
        assert!(result.additional_symptoms.contains("aches"));
    }

    #[test]
    fn test_pain_level_clamped() {
        let result = EntityExtractor::new().extract("Pain intensity 15/10 in my hip");
        assert_eq!(result.pain_level, Some(10));
    }

    #[test]
    fn test_pain_slash_format() {
        let result = EntityExtractor::new().extract("Ankle pain level is around 6/10.");
        assert_eq!(result.pain_level, Some(6));
    }

    #[test]
    fn test_duration_kept_verbatim() {
        let result = EntityExtractor::new().extract("Elbow hurting for 3 Months now");
        assert_eq!(result.duration.as_deref(), Some("3 Months"));
    }

    #[test]
    fn test_confidence_counts_distinct_signals() {
        // one part, one symptom, no pain rating, no duration
        let result = EntityExtractor::new().extract("neck stiffness, neck stiffness");
        assert_eq!(result.extraction_confidence, 0.33);
    }

    #[test]
    fn test_processed_text() {
        let result = EntityExtractor::new().extract("  Sharp WRIST pain  ");
        assert_eq!(result.processed_text, "sharp wrist pain");
    }
}
