use error_common::OrthoCareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EvaluationError {
    #[error("Label length mismatch: {expected} true labels, {actual} predictions")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("Report I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Report serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<EvaluationError> for OrthoCareError {
    fn from(error: EvaluationError) -> Self {
        match error {
            EvaluationError::LengthMismatch { .. } => OrthoCareError::ValidationError(error.to_string()),
            EvaluationError::Io(e) => OrthoCareError::Io(e),
            EvaluationError::Serialization(e) => OrthoCareError::Serialization(e),
        }
    }
}

pub type EvaluationResult<T> = Result<T, EvaluationError>;

pub(crate) fn check_lengths<T>(y_true: &[T], y_pred: &[T]) -> EvaluationResult<()> {
    if y_true.len() == y_pred.len() {
        Ok(())
    } else {
        Err(EvaluationError::LengthMismatch {
            expected: y_true.len(),
            actual: y_pred.len(),
        })
    }
}
