use serde::{Deserialize, Serialize};

use crate::error::{check_lengths, EvaluationResult};
use crate::metrics::{ratio, round4};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeverityMetrics {
    pub accuracy: f64,
    /// Share of predictions at most one level away from the truth
    pub tolerance_accuracy: f64,
    pub mean_absolute_error: f64,
    pub sample_size: usize,
}

/// Low 0, Medium 1, High 2; anything else is treated as Medium
fn ordinal(label: &str) -> u8 {
    match label {
        "Low" => 0,
        "High" => 2,
        _ => 1,
    }
}

pub fn severity_metrics<S: AsRef<str>>(y_true: &[S], y_pred: &[S]) -> EvaluationResult<SeverityMetrics> {
    check_lengths(y_true, y_pred)?;

    let distances: Vec<usize> = y_true
        .iter()
        .zip(y_pred)
        .map(|(t, p)| usize::from(ordinal(t.as_ref()).abs_diff(ordinal(p.as_ref()))))
        .collect();
    let n = distances.len();

    let exact = distances.iter().filter(|d| **d == 0).count();
    let within_one = distances.iter().filter(|d| **d <= 1).count();
    let total_error: usize = distances.iter().sum();

    Ok(SeverityMetrics {
        accuracy: round4(ratio(exact, n)),
        tolerance_accuracy: round4(ratio(within_one, n)),
        mean_absolute_error: round4(ratio(total_error, n)),
        sample_size: n,
    })
}
