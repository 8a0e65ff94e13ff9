use thiserror::Error;

use crate::codes;
use crate::context::ErrorContext;

/// Shared error enum for OrthoCare crates
#[derive(Error, Debug)]
pub enum OrthoCareError {
    /// Request rejected at the boundary
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Caller supplied a value outside a documented range
    #[error("Out of range: {0}")]
    OutOfRange(String),

    /// Referenced record does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Speech-to-text collaborator errors
    #[error("Transcription error: {0}")]
    TranscriptionError(String),

    /// Audio payload rejected before transcription
    #[error("Audio error: {0}")]
    AudioError(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// I/O while writing reports
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl OrthoCareError {
    /// Structured code for this error, see [`crate::codes`]
    pub fn code(&self) -> &'static str {
        match self {
            Self::ValidationError(_) => codes::validation::INVALID_INPUT,
            Self::OutOfRange(_) => codes::triage::OUT_OF_RANGE,
            Self::NotFound(_) => codes::triage::NOT_FOUND,
            Self::TranscriptionError(_) => codes::transcription::PROVIDER_FAILED,
            Self::AudioError(_) => codes::transcription::AUDIO_REJECTED,
            Self::ConfigError(_) => codes::system::CONFIG,
            Self::Io(_) => codes::evaluation::REPORT_IO,
            Self::Serialization(_) => codes::system::INTERNAL,
        }
    }

    /// Whether the failure was caused by the caller's input
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::OutOfRange(_) | Self::NotFound(_) | Self::AudioError(_)
        )
    }
}

/// Result type alias for OrthoCare operations
pub type Result<T> = std::result::Result<T, OrthoCareError>;

/// Log an error with its code and the identifiers it concerns
pub fn log_error(context: &ErrorContext, error: &OrthoCareError) {
    if error.is_client_error() {
        tracing::warn!(
            context = %context,
            error_code = error.code(),
            error = %error,
            "Request rejected"
        );
    } else {
        tracing::error!(
            context = %context,
            error_code = error.code(),
            error = %error,
            "OrthoCare error occurred"
        );
    }
}
