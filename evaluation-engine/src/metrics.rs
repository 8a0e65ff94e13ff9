//! Multi-class classification metrics over predicted condition labels
//!
//! Precision, recall and F1 are support-weighted over the union of observed
//! labels. A label that is never predicted (or never true) contributes 0
//! instead of failing.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;
use triage_engine::round_to;

use crate::error::{check_lengths, EvaluationResult};

pub const DEFAULT_MODEL_NAME: &str = "orthopaedic_classifier";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassMetrics {
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub support: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationMetrics {
    pub model_name: String,
    pub accuracy: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1_score: f64,
    pub sample_size: usize,
    /// Rows are true labels, columns predicted labels, both in `unique_classes` order
    pub confusion_matrix: Vec<Vec<usize>>,
    /// Only labels with at least one true occurrence
    pub per_class_metrics: BTreeMap<String, ClassMetrics>,
    pub unique_classes: Vec<String>,
}

impl ClassificationMetrics {
    /// All-zero metrics for an empty evaluation
    pub fn empty(model_name: &str) -> Self {
        Self {
            model_name: model_name.to_string(),
            accuracy: 0.0,
            precision: 0.0,
            recall: 0.0,
            f1_score: 0.0,
            sample_size: 0,
            confusion_matrix: Vec::new(),
            per_class_metrics: BTreeMap::new(),
            unique_classes: Vec::new(),
        }
    }
}

/// Counts for one label, read off the confusion matrix
#[derive(Debug, Clone, Copy, Default)]
struct LabelCounts {
    true_positives: usize,
    support: usize,
    predicted: usize,
}

impl LabelCounts {
    fn precision(self) -> f64 {
        ratio(self.true_positives, self.predicted)
    }

    fn recall(self) -> f64 {
        ratio(self.true_positives, self.support)
    }

    /// `2tp / (2tp + fp + fn)`, which is 0 when undefined
    fn f1(self) -> f64 {
        ratio(2 * self.true_positives, self.support + self.predicted)
    }
}

pub fn classification_metrics<S: AsRef<str>>(
    y_true: &[S],
    y_pred: &[S],
    model_name: &str,
) -> EvaluationResult<ClassificationMetrics> {
    check_lengths(y_true, y_pred)?;
    if y_true.is_empty() {
        return Ok(ClassificationMetrics::empty(model_name));
    }

    let labels: Vec<&str> = y_true
        .iter()
        .chain(y_pred)
        .map(AsRef::as_ref)
        .sorted()
        .dedup()
        .collect();
    let index: BTreeMap<&str, usize> = labels.iter().enumerate().map(|(i, l)| (*l, i)).collect();

    let mut matrix = vec![vec![0usize; labels.len()]; labels.len()];
    for (truth, prediction) in y_true.iter().zip(y_pred) {
        let row = index.get(truth.as_ref()).copied();
        let col = index.get(prediction.as_ref()).copied();
        if let Some(cell) = row
            .zip(col)
            .and_then(|(r, c)| matrix.get_mut(r).and_then(|cells| cells.get_mut(c)))
        {
            *cell += 1;
        }
    }

    let counts: Vec<LabelCounts> = (0..labels.len())
        .map(|i| LabelCounts {
            true_positives: matrix.get(i).and_then(|row| row.get(i)).copied().unwrap_or(0),
            support: matrix.get(i).map_or(0, |row| row.iter().sum()),
            predicted: matrix.iter().filter_map(|row| row.get(i)).sum(),
        })
        .collect();

    let sample_size = y_true.len();
    let correct: usize = counts.iter().map(|c| c.true_positives).sum();
    let weighted = |metric: fn(LabelCounts) -> f64| -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let total: f64 = counts.iter().map(|c| c.support as f64 * metric(*c)).sum();
        #[allow(clippy::cast_precision_loss)]
        let mean = total / sample_size as f64;
        mean
    };

    let per_class_metrics = labels
        .iter()
        .zip(&counts)
        .filter(|(_, c)| c.support > 0)
        .map(|(label, c)| {
            (
                (*label).to_string(),
                ClassMetrics {
                    precision: c.precision(),
                    recall: c.recall(),
                    f1_score: c.f1(),
                    support: c.support,
                },
            )
        })
        .collect();

    let metrics = ClassificationMetrics {
        model_name: model_name.to_string(),
        accuracy: round4(ratio(correct, sample_size)),
        precision: round4(weighted(LabelCounts::precision)),
        recall: round4(weighted(LabelCounts::recall)),
        f1_score: round4(weighted(LabelCounts::f1)),
        sample_size,
        confusion_matrix: matrix,
        per_class_metrics,
        unique_classes: labels.iter().map(|l| (*l).to_string()).collect(),
    };

    debug!(
        model = %metrics.model_name,
        samples = sample_size,
        classes = metrics.unique_classes.len(),
        accuracy = metrics.accuracy,
        "Computed classification metrics"
    );

    Ok(metrics)
}

pub(crate) fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        #[allow(clippy::cast_precision_loss)]
        let value = numerator as f64 / denominator as f64;
        value
    }
}

/// Metrics are reported to 4 decimals
pub(crate) fn round4(value: f64) -> f64 {
    round_to(value, 4)
}
