//! Evaluation service tests: shared history, report files, error mapping

use error_common::OrthoCareError;
use evaluation_engine::{EvaluationError, EvaluationService, DEFAULT_MODEL_NAME};
use proptest::prelude::*;
use serde_json::Value;
use std::sync::Arc;
use std::thread;

#[test]
fn test_empty_scenario() {
    let service = EvaluationService::new();
    let metrics = service.evaluate::<&str>(&[], &[], "m").unwrap();
    let json = serde_json::to_value(metrics).unwrap();
    assert_eq!(json["accuracy"], 0.0);
    assert_eq!(json["precision"], 0.0);
    assert_eq!(json["recall"], 0.0);
    assert_eq!(json["f1_score"], 0.0);
    assert_eq!(json["sample_size"], 0);
}

#[test]
fn test_concurrent_appends_are_not_lost() {
    let service = Arc::new(EvaluationService::new());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || {
                for _ in 0..25 {
                    service
                        .evaluate(&["Bursitis"], &["Bursitis"], DEFAULT_MODEL_NAME)
                        .unwrap();
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }
    assert_eq!(service.total_evaluations(), 200);
}

#[test]
fn test_save_report_writes_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("evaluation_report.json");

    let service = EvaluationService::new();
    service
        .evaluate(&["ACL Tear", "Bursitis"], &["ACL Tear", "ACL Tear"], "v1")
        .unwrap();
    service.save_report(&path).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.contains('\n'));
    let report: Value = serde_json::from_str(&text).unwrap();
    assert_eq!(report["total_evaluations"], 1);
    assert_eq!(report["latest_evaluation"]["model_name"], "v1");
    assert_eq!(report["historical_averages"]["avg_accuracy"], 0.5);
}

#[test]
fn test_save_empty_report() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("empty.json");
    EvaluationService::new().save_report(&path).unwrap();

    let report: Value = serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(report["message"], "No evaluations performed yet");
}

#[test]
fn test_length_mismatch_maps_to_validation_error() {
    let error = EvaluationService::new()
        .evaluate(&["a", "b"], &["a"], "m")
        .unwrap_err();
    assert!(matches!(error, EvaluationError::LengthMismatch { expected: 2, actual: 1 }));
    let shared: OrthoCareError = error.into();
    assert!(shared.is_client_error());
}

proptest! {
    #[test]
    fn prop_metrics_stay_in_unit_interval(
        pairs in prop::collection::vec((0u8..4, 0u8..4), 1..50)
    ) {
        let y_true: Vec<String> = pairs.iter().map(|(t, _)| format!("c{t}")).collect();
        let y_pred: Vec<String> = pairs.iter().map(|(_, p)| format!("c{p}")).collect();
        let metrics = evaluation_engine::classification_metrics(&y_true, &y_pred, "m").unwrap();

        for value in [metrics.accuracy, metrics.precision, metrics.recall, metrics.f1_score] {
            prop_assert!((0.0..=1.0).contains(&value));
        }
        let total: usize = metrics.confusion_matrix.iter().flatten().sum();
        prop_assert_eq!(total, pairs.len());
    }
}
