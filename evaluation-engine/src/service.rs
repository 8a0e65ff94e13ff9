use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::info;
use triage_engine::PredictionRecord;

use crate::error::EvaluationResult;
use crate::explainability::{explain, Explanation};
use crate::metrics::{classification_metrics, ClassificationMetrics};
use crate::severity::{severity_metrics, SeverityMetrics};

pub const EMPTY_REPORT_MESSAGE: &str = "No evaluations performed yet";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistoricalAverages {
    pub avg_accuracy: f64,
    pub avg_precision: f64,
    pub avg_recall: f64,
    pub avg_f1_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub latest_evaluation: ClassificationMetrics,
    pub historical_averages: HistoricalAverages,
    pub total_evaluations: usize,
    pub generated_at: DateTime<Utc>,
}

/// Owns the append-only evaluation history
///
/// Share one instance (behind an `Arc` across threads); concurrent
/// evaluations append under the lock and none are lost.
#[derive(Debug, Default)]
pub struct EvaluationService {
    history: Mutex<Vec<ClassificationMetrics>>,
}

impl EvaluationService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute metrics and record them; empty input is returned but not recorded
    pub fn evaluate<S: AsRef<str>>(
        &self,
        y_true: &[S],
        y_pred: &[S],
        model_name: &str,
    ) -> EvaluationResult<ClassificationMetrics> {
        let metrics = classification_metrics(y_true, y_pred, model_name)?;
        if metrics.sample_size > 0 {
            self.history.lock().push(metrics.clone());
            info!(
                model = %metrics.model_name,
                samples = metrics.sample_size,
                accuracy = metrics.accuracy,
                f1_score = metrics.f1_score,
                "Evaluation recorded"
            );
        }
        Ok(metrics)
    }

    pub fn evaluate_severity<S: AsRef<str>>(&self, y_true: &[S], y_pred: &[S]) -> EvaluationResult<SeverityMetrics> {
        severity_metrics(y_true, y_pred)
    }

    pub fn explainability(&self, prediction: &PredictionRecord) -> Explanation {
        explain(prediction)
    }

    pub fn history(&self) -> Vec<ClassificationMetrics> {
        self.history.lock().clone()
    }

    pub fn total_evaluations(&self) -> usize {
        self.history.lock().len()
    }

    /// Latest evaluation plus averages over the whole history
    pub fn generate_report(&self) -> Option<EvaluationReport> {
        let history = self.history.lock();
        let latest = history.last()?.clone();

        #[allow(clippy::cast_precision_loss)]
        let n = history.len() as f64;
        let mean = |field: fn(&ClassificationMetrics) -> f64| history.iter().map(field).sum::<f64>() / n;

        Some(EvaluationReport {
            historical_averages: HistoricalAverages {
                avg_accuracy: mean(|m| m.accuracy),
                avg_precision: mean(|m| m.precision),
                avg_recall: mean(|m| m.recall),
                avg_f1_score: mean(|m| m.f1_score),
            },
            latest_evaluation: latest,
            total_evaluations: history.len(),
            generated_at: Utc::now(),
        })
    }

    /// Write the report as pretty JSON; an empty history writes a message object
    pub fn save_report(&self, path: impl AsRef<Path>) -> EvaluationResult<()> {
        let path = path.as_ref();
        let body = match self.generate_report() {
            Some(report) => serde_json::to_string_pretty(&report)?,
            None => serde_json::to_string_pretty(&serde_json::json!({ "message": EMPTY_REPORT_MESSAGE }))?,
        };
        fs::write(path, body)?;
        info!(path = %path.display(), "Evaluation report saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_evaluation_not_recorded() {
        let service = EvaluationService::new();
        let metrics = service.evaluate::<&str>(&[], &[], "m").unwrap();
        assert_eq!(metrics.sample_size, 0);
        assert_eq!(service.total_evaluations(), 0);
        assert!(service.generate_report().is_none());
    }

    #[test]
    fn test_report_averages_history() {
        let service = EvaluationService::new();
        service.evaluate(&["a", "b"], &["a", "b"], "m").unwrap();
        service.evaluate(&["a", "b"], &["b", "b"], "m").unwrap();

        let report = service.generate_report().unwrap();
        assert_eq!(report.total_evaluations, 2);
        assert_eq!(report.historical_averages.avg_accuracy, 0.75);
        assert_eq!(report.latest_evaluation.accuracy, 0.5);
    }

    #[test]
    fn test_mismatch_not_recorded() {
        let service = EvaluationService::new();
        assert!(service.evaluate(&["a"], &[], "m").is_err());
        assert_eq!(service.total_evaluations(), 0);
    }
}
