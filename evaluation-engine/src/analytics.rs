use serde::{Deserialize, Serialize};
use triage_engine::{round_to, ConsultationLog};

use crate::metrics::ratio;

/// How often the predicted top condition matched the doctor's diagnosis
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsultationAccuracy {
    /// Percentage, rounded to 2 decimals
    pub accuracy: f64,
    pub total_consultations: usize,
    pub correct_predictions: usize,
    pub incorrect_predictions: usize,
}

impl ConsultationAccuracy {
    pub fn from_logs(logs: &[ConsultationLog]) -> Self {
        let total = logs.len();
        let correct = logs.iter().filter(|log| log.ai_prediction_accuracy).count();
        let percent = ratio(correct, total) * 100.0;

        Self {
            accuracy: round_to(percent, 2),
            total_consultations: total,
            correct_predictions: correct,
            incorrect_predictions: total - correct,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn log(correct: bool) -> ConsultationLog {
        ConsultationLog {
            appointment_id: Uuid::new_v4(),
            patient_id: "pat-1".to_string(),
            doctor_id: "doc-1".to_string(),
            actual_diagnosis: "Bursitis".to_string(),
            ai_prediction_accuracy: correct,
            follow_up_needed: false,
            follow_up_date: None,
            consultation_notes: String::new(),
            consultation_duration_minutes: 15,
        }
    }

    #[test]
    fn test_no_logs() {
        let accuracy = ConsultationAccuracy::from_logs(&[]);
        assert_eq!(accuracy.accuracy, 0.0);
        assert_eq!(accuracy.total_consultations, 0);
    }

    #[test]
    fn test_percentage_rounded() {
        let accuracy = ConsultationAccuracy::from_logs(&[log(true), log(false), log(true)]);
        assert_eq!(accuracy.accuracy, 66.67);
        assert_eq!(accuracy.correct_predictions, 2);
        assert_eq!(accuracy.incorrect_predictions, 1);
    }
}
