use serde::{Deserialize, Serialize};

/// Raw provider output for one recording
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptionResult {
    pub text: String,
    pub language: String,
    pub metadata: TranscriptionMetadata,
}

impl TranscriptionResult {
    pub fn new(text: impl Into<String>, language: impl Into<String>, metadata: TranscriptionMetadata) -> Self {
        Self {
            text: text.into(),
            language: language.into(),
            metadata,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptionMetadata {
    pub provider: String,
    pub model: Option<String>,
    pub segment_count: usize,
}

/// What the intake form receives: the transcript before and after correction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscribedSymptoms {
    pub original_text: String,
    pub normalized_text: String,
    pub language: String,
    /// Recording length read from the WAV header
    pub duration_ms: u64,
}
