use error_common::OrthoCareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriageError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Out of range: {0}")]
    OutOfRange(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

impl From<validator::ValidationErrors> for TriageError {
    fn from(errors: validator::ValidationErrors) -> Self {
        TriageError::Validation(errors.to_string())
    }
}

impl From<TriageError> for OrthoCareError {
    fn from(error: TriageError) -> Self {
        match error {
            TriageError::Validation(msg) => OrthoCareError::ValidationError(msg),
            TriageError::OutOfRange(msg) => OrthoCareError::OutOfRange(msg),
            TriageError::NotFound(msg) => OrthoCareError::NotFound(msg),
            TriageError::Config(e) => OrthoCareError::ConfigError(e.to_string()),
        }
    }
}

pub type TriageResult<T> = Result<T, TriageError>;

/// Reject pain levels outside 0..=10
pub fn check_pain_level(pain_level: Option<u8>) -> TriageResult<()> {
    match pain_level {
        Some(level) if level > 10 => Err(TriageError::OutOfRange(format!(
            "pain level {level} is outside 0-10"
        ))),
        _ => Ok(()),
    }
}
