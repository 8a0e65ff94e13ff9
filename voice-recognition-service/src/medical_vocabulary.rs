/// Spelling corrections for symptom terms that speech recognition tends to garble
///
/// Replacements are plain substring substitutions applied in table order to
/// the lower-cased transcript. They are not word-bounded, so an already
/// correct word can be rewritten again ("knee" becomes "kknee").
pub const SYMPTOM_CORRECTIONS: &[(&str, &str)] = &[
    ("nee", "knee"),
    ("bac", "back"),
    ("sholder", "shoulder"),
    ("ancle", "ankle"),
    ("rist", "wrist"),
    ("elbo", "elbow"),
    ("hip", "hip"),
    ("payn", "pain"),
    ("aik", "ache"),
    ("swell", "swelling"),
];

pub struct MedicalVocabulary;

impl MedicalVocabulary {
    /// Lower-case the transcript and apply [`SYMPTOM_CORRECTIONS`] in order
    pub fn normalize(text: &str) -> String {
        SYMPTOM_CORRECTIONS
            .iter()
            .fold(text.to_lowercase(), |acc, (wrong, correct)| acc.replace(wrong, correct))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_misspellings_corrected() {
        assert_eq!(MedicalVocabulary::normalize("My ANCLE has bad payn"), "my ankle has bad pain");
        assert_eq!(MedicalVocabulary::normalize("sholder aik"), "shoulder ache");
    }

    #[test]
    fn test_substitutions_are_not_word_bounded() {
        assert_eq!(MedicalVocabulary::normalize("knee"), "kknee");
        assert_eq!(MedicalVocabulary::normalize("swelling"), "swellinging");
        assert_eq!(MedicalVocabulary::normalize("wrist"), "wwrist");
    }
}
