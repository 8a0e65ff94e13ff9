//! End-to-end triage scenarios
//!
//! Covers the full narrative-to-queue path: extraction, ranking, severity,
//! recommendation, priority and admission into the appointment queue.

use serde_json::Value;
use triage_engine::{
    AppointmentQueue, AppointmentStatus, AppointmentType, SeverityLevel, TriageError, TriagePipeline,
    TriageRequest, TriageSettings, UrgencyLevel,
};

// =============================================================================
// SCENARIOS
// =============================================================================

#[test]
fn test_elderly_hip_injury_recent_onset() {
    let pipeline = TriagePipeline::default();
    let outcome = pipeline
        .run(&TriageRequest::new("Fell yesterday, hip pain is 9 out of 10, sharp and swelling, for 1 day").with_age(82))
        .unwrap();

    // tear and fracture candidates share the 1.5 boost; the labral tear is listed first
    assert_eq!(outcome.prediction.top_condition, "Hip Labral Tear");
    let names: Vec<&str> = outcome
        .prediction
        .predicted_conditions
        .iter()
        .map(|c| c.condition.as_str())
        .collect();
    assert_eq!(&names[..2], ["Hip Labral Tear", "Hip Fracture"]);

    assert_eq!(outcome.extraction.pain_level, Some(9));
    assert_eq!(outcome.extraction.duration.as_deref(), Some("1 day"));
    assert_eq!(outcome.recommendation.urgency_level, UrgencyLevel::Urgent);
    // 0.315 + 0.05 + 0.06 + 0.133 = 0.558 -> 22 + 27 + 15 + 10
    assert_eq!(outcome.prediction.severity_level, SeverityLevel::Medium);
    assert_eq!(outcome.priority_score.value(), 74);
}

#[test]
fn test_ankle_fracture_emergency_appointment() {
    let outcome = TriagePipeline::default()
        .run(&TriageRequest::new("ankle fracture, pain 8/10").with_age(30))
        .unwrap();
    let fracture = outcome
        .prediction
        .predicted_conditions
        .iter()
        .find(|c| c.condition == "Ankle Fracture")
        .unwrap();
    assert!(fracture.probability > 0.2);
    // the top candidate is the fracture, boosted alone at pain >= 7
    assert_eq!(outcome.prediction.top_condition, "Ankle Fracture");
    assert_eq!(outcome.recommendation.urgency_level, UrgencyLevel::Emergency);
    assert_eq!(outcome.appointment_type, AppointmentType::Emergency);
    assert_eq!(outcome.recommendation.diagnostic_tests, ["X-Ray", "CT Scan"]);
}

#[test]
fn test_unknown_body_part_uses_general_candidate() {
    let outcome = TriagePipeline::default()
        .run(&TriageRequest::new("everything hurts"))
        .unwrap();
    assert_eq!(outcome.prediction.top_condition, "General Musculoskeletal Disorder");
    assert_eq!(outcome.prediction.top_condition_probability, 1.0);
    assert_eq!(outcome.recommendation.diagnostic_tests, ["Physical Examination", "X-Ray"]);
    assert_eq!(outcome.prediction.features_used.body_part, "");
}

#[test]
fn test_contract_violations_are_errors() {
    let pipeline = TriagePipeline::default();
    assert!(matches!(
        pipeline.run(&TriageRequest::new("")),
        Err(TriageError::Validation(_))
    ));
    assert!(matches!(
        pipeline.run(&TriageRequest::new("knee pain").with_age(200)),
        Err(TriageError::Validation(_))
    ));
}

#[test]
fn test_outcome_json_shape() {
    let outcome = TriagePipeline::new(&TriageSettings::default())
        .run(&TriageRequest::new("lower back stiffness for 3 months, pain 4/10").with_ids("p1", "s1"))
        .unwrap();
    let json: Value = serde_json::to_value(&outcome).unwrap();

    for field in [
        "predicted_conditions",
        "top_condition",
        "top_condition_probability",
        "severity_level",
        "severity_score",
        "features_used",
        "diagnostic_tests",
        "initial_treatment",
        "referral_needed",
        "referral_specialty",
        "urgency_level",
        "priority_score",
        "model_version",
    ] {
        assert!(json.get(field).is_some(), "missing {field}");
    }
    assert_eq!(json["features_used"]["duration_category"], "subacute");
    assert!(json["priority_score"].is_u64());
}

#[test]
fn test_queue_orders_admitted_outcomes() {
    let pipeline = TriagePipeline::default();
    let mut queue = AppointmentQueue::new();

    let routine = queue.admit(&pipeline.run(&TriageRequest::new("stiff neck").with_age(40)).unwrap());
    let urgent = queue.admit(
        &pipeline
            .run(&TriageRequest::new("knee pain 9/10 for 2 days with swelling").with_age(70))
            .unwrap(),
    );

    let pending = queue.ordered(Some(AppointmentStatus::Pending));
    assert_eq!(pending.len(), 2);
    assert_eq!(pending[0].appointment.id, urgent);
    assert_eq!(pending[1].appointment.id, routine);
    assert!(pending[0].appointment.priority_score > pending[1].appointment.priority_score);
}
