//! Fixed orthopaedic knowledge tables
//!
//! Every lookup here scans its table in definition order and the first match
//! wins, so the order of entries is part of the behaviour.

/// Body-part tokens recognised by the extractor (singular and plural forms)
pub const BODY_PART_VOCABULARY: &[&str] = &[
    "knee", "knees", "shoulder", "shoulders", "hip", "hips",
    "ankle", "ankles", "wrist", "wrists", "elbow", "elbows",
    "back", "spine", "neck", "leg", "legs", "arm", "arms",
    "hand", "hands", "foot", "feet", "finger", "fingers",
    "toe", "toes", "jaw", "pelvis", "rib", "ribs",
];

/// Symptom tokens recognised by the extractor
pub const SYMPTOM_VOCABULARY: &[&str] = &[
    "pain", "ache", "aching", "hurt", "hurting", "sore", "soreness",
    "swelling", "swollen", "inflammation", "stiff", "stiffness",
    "weakness", "weak", "numbness", "numb", "tingling", "burning",
    "sharp", "dull", "throbbing", "radiating", "limited", "difficulty",
    "fracture", "broken", "sprain", "strain", "tear", "injury",
];

/// Candidate conditions per body-part key; keys are matched as substrings
pub const BODY_PART_CONDITIONS: &[(&str, [&str; 5])] = &[
    ("knee", ["Osteoarthritis", "Meniscus Tear", "ACL Tear", "Patellar Tendinitis", "Bursitis"]),
    ("shoulder", ["Rotator Cuff Tear", "Frozen Shoulder", "Shoulder Impingement", "Bursitis", "Arthritis"]),
    ("back", ["Herniated Disc", "Spinal Stenosis", "Sciatica", "Muscle Strain", "Spondylolisthesis"]),
    ("hip", ["Hip Osteoarthritis", "Hip Bursitis", "Hip Labral Tear", "Hip Fracture", "Avascular Necrosis"]),
    ("ankle", ["Ankle Sprain", "Achilles Tendinitis", "Ankle Fracture", "Arthritis", "Tarsal Tunnel Syndrome"]),
    ("wrist", ["Carpal Tunnel Syndrome", "Wrist Fracture", "Tendinitis", "Arthritis", "De Quervain's Tenosynovitis"]),
    ("elbow", ["Tennis Elbow", "Golfer's Elbow", "Elbow Bursitis", "Elbow Fracture", "Arthritis"]),
    ("neck", ["Cervical Spondylosis", "Herniated Cervical Disc", "Whiplash", "Muscle Strain", "Cervical Radiculopathy"]),
];

/// Single candidate used when no body-part key matches
pub const GENERAL_CONDITION: &str = "General Musculoskeletal Disorder";

pub const DIAGNOSTIC_TESTS: &[(&str, &[&str])] = &[
    ("Osteoarthritis", &["X-Ray", "MRI"]),
    ("Meniscus Tear", &["MRI", "Physical Examination"]),
    ("ACL Tear", &["MRI", "Physical Examination"]),
    ("Rotator Cuff Tear", &["MRI", "Ultrasound"]),
    ("Herniated Disc", &["MRI", "CT Scan"]),
    ("Spinal Stenosis", &["MRI", "CT Scan", "X-Ray"]),
    ("Fracture", &["X-Ray", "CT Scan"]),
    ("Carpal Tunnel Syndrome", &["Nerve Conduction Study", "EMG"]),
    ("Arthritis", &["X-Ray", "Blood Tests", "MRI"]),
];

pub const INITIAL_TREATMENTS: &[(&str, &[&str])] = &[
    ("Osteoarthritis", &[
        "NSAIDs for pain management",
        "Physical therapy",
        "Weight management counseling",
    ]),
    ("Meniscus Tear", &[
        "RICE protocol (Rest, Ice, Compression, Elevation)",
        "Physical therapy",
        "Anti-inflammatory medication",
    ]),
    ("ACL Tear", &[
        "Immediate immobilization",
        "RICE protocol",
        "Referral to orthopedic surgeon",
    ]),
    ("Rotator Cuff Tear", &[
        "Physical therapy",
        "Pain management with NSAIDs",
        "Corticosteroid injection consideration",
    ]),
    ("Herniated Disc", &[
        "Pain management",
        "Physical therapy",
        "Activity modification",
    ]),
    ("Fracture", &[
        "Immediate immobilization",
        "Pain management",
        "Urgent orthopedic consultation",
    ]),
    ("Carpal Tunnel Syndrome", &[
        "Wrist splinting",
        "Ergonomic modifications",
        "NSAIDs for symptom relief",
    ]),
];

pub const GENERIC_TREATMENT: &[&str] = &[
    "Pain management with appropriate analgesics",
    "Physical therapy evaluation",
    "Activity modification guidance",
];

/// Read-only accessors over the tables above
pub struct OrthopaedicKnowledge;

impl OrthopaedicKnowledge {
    /// Candidate list for the first key contained in `body_part`
    pub fn conditions_for(body_part: &str) -> Vec<&'static str> {
        let body_part = body_part.to_lowercase();
        BODY_PART_CONDITIONS
            .iter()
            .find(|(key, _)| body_part.contains(key))
            .map_or_else(|| vec![GENERAL_CONDITION], |(_, conditions)| conditions.to_vec())
    }

    pub fn diagnostic_tests_for(condition: &str) -> Option<&'static [&'static str]> {
        lookup_by_substring(DIAGNOSTIC_TESTS, condition)
    }

    pub fn initial_treatment_for(condition: &str) -> Option<&'static [&'static str]> {
        lookup_by_substring(INITIAL_TREATMENTS, condition)
    }

    pub fn is_body_part(token: &str) -> bool {
        BODY_PART_VOCABULARY.contains(&token)
    }

    pub fn is_symptom(token: &str) -> bool {
        SYMPTOM_VOCABULARY.contains(&token)
    }
}

/// First entry whose key is a case-insensitive substring of `text`
pub fn lookup_by_substring<T: Copy>(table: &[(&str, T)], text: &str) -> Option<T> {
    let text = text.to_lowercase();
    table
        .iter()
        .find(|(key, _)| text.contains(&key.to_lowercase()))
        .map(|(_, value)| *value)
}

/// Case-insensitive substring test against any of `keywords`
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    let text = text.to_lowercase();
    keywords.iter().any(|kw| text.contains(kw))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_bucket_has_five_conditions() {
        assert_eq!(BODY_PART_CONDITIONS.len(), 8);
    }

    #[test]
    fn test_conditions_substring_match() {
        assert_eq!(OrthopaedicKnowledge::conditions_for("Knees")[2], "ACL Tear");
        // "hip" is found inside "chip" too
        assert_eq!(OrthopaedicKnowledge::conditions_for("chip")[0], "Hip Osteoarthritis");
        assert_eq!(OrthopaedicKnowledge::conditions_for("feet"), vec![GENERAL_CONDITION]);
        assert_eq!(OrthopaedicKnowledge::conditions_for(""), vec![GENERAL_CONDITION]);
    }

    #[test]
    fn test_first_key_wins() {
        // "Hip Osteoarthritis" hits "Osteoarthritis" before "Arthritis"
        assert_eq!(
            OrthopaedicKnowledge::diagnostic_tests_for("Hip Osteoarthritis"),
            Some(&["X-Ray", "MRI"][..])
        );
        assert_eq!(
            OrthopaedicKnowledge::diagnostic_tests_for("Hip Fracture"),
            Some(&["X-Ray", "CT Scan"][..])
        );
        assert_eq!(OrthopaedicKnowledge::initial_treatment_for("Whiplash"), None);
    }

    #[test]
    fn test_contains_any_is_case_insensitive() {
        assert!(contains_any("ACL Tear", &["tear"]));
        assert!(!contains_any("Bursitis", &["tear", "fracture"]));
    }
}
