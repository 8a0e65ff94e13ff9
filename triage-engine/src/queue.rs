//! In-memory appointment queue ordered by triage priority

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::error::{TriageError, TriageResult};
use crate::models::{AppointmentType, PriorityScore, TriageOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    Pending,
    Scheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "Pending",
            AppointmentStatus::Scheduled => "Scheduled",
            AppointmentStatus::Completed => "Completed",
            AppointmentStatus::Cancelled => "Cancelled",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(AppointmentStatus::Pending),
            "Scheduled" => Ok(AppointmentStatus::Scheduled),
            "Completed" => Ok(AppointmentStatus::Completed),
            "Cancelled" => Ok(AppointmentStatus::Cancelled),
            other => Err(TriageError::Validation(format!(
                "invalid status '{other}', expected Pending, Scheduled, Completed or Cancelled"
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Option<String>,
    pub symptom_id: Option<String>,
    pub priority_score: PriorityScore,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub scheduled_date: Option<DateTime<Utc>>,
    pub doctor_id: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Appointment with its 1-based place in the ordered view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueueEntry {
    pub queue_position: usize,
    #[serde(flatten)]
    pub appointment: Appointment,
}

/// What the doctor recorded after seeing the patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConsultationLog {
    pub appointment_id: Uuid,
    pub patient_id: String,
    #[validate(length(min = 1))]
    pub doctor_id: String,
    pub actual_diagnosis: String,
    /// Whether the predicted top condition matched the diagnosis
    pub ai_prediction_accuracy: bool,
    pub follow_up_needed: bool,
    pub follow_up_date: Option<DateTime<Utc>>,
    pub consultation_notes: String,
    pub consultation_duration_minutes: u32,
}

#[derive(Debug, Default)]
pub struct AppointmentQueue {
    appointments: Vec<Appointment>,
}

impl AppointmentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    /// Create a Pending appointment from a triage outcome
    pub fn admit(&mut self, outcome: &TriageOutcome) -> Uuid {
        let appointment = Appointment {
            id: Uuid::new_v4(),
            patient_id: outcome.prediction.patient_id.clone(),
            symptom_id: outcome.prediction.symptom_id.clone(),
            priority_score: outcome.priority_score,
            appointment_type: outcome.appointment_type,
            status: AppointmentStatus::Pending,
            scheduled_date: None,
            doctor_id: None,
            created_at: Utc::now(),
        };
        let id = appointment.id;
        info!(
            appointment_id = %id,
            priority = %appointment.priority_score,
            appointment_type = ?appointment.appointment_type,
            "Appointment admitted"
        );
        self.appointments.push(appointment);
        id
    }

    pub fn get(&self, id: Uuid) -> TriageResult<&Appointment> {
        self.appointments
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| TriageError::NotFound(format!("appointment {id}")))
    }

    fn get_mut(&mut self, id: Uuid) -> TriageResult<&mut Appointment> {
        self.appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or_else(|| TriageError::NotFound(format!("appointment {id}")))
    }

    /// Highest priority first; ties keep admission order. `None` lists every status.
    pub fn ordered(&self, status: Option<AppointmentStatus>) -> Vec<QueueEntry> {
        let mut selected: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| status.is_none() || status == Some(a.status))
            .collect();
        selected.sort_by(|a, b| b.priority_score.cmp(&a.priority_score));

        selected
            .into_iter()
            .enumerate()
            .map(|(index, appointment)| QueueEntry {
                queue_position: index + 1,
                appointment: appointment.clone(),
            })
            .collect()
    }

    pub fn schedule(&mut self, id: Uuid, at: DateTime<Utc>, doctor_id: impl Into<String>) -> TriageResult<()> {
        let appointment = self.get_mut(id)?;
        appointment.scheduled_date = Some(at);
        appointment.doctor_id = Some(doctor_id.into());
        appointment.status = AppointmentStatus::Scheduled;
        info!(appointment_id = %id, scheduled_date = %at, "Appointment scheduled");
        Ok(())
    }

    pub fn set_status(&mut self, id: Uuid, status: AppointmentStatus) -> TriageResult<()> {
        let appointment = self.get_mut(id)?;
        appointment.status = status;
        info!(appointment_id = %id, status = %status, "Appointment status updated");
        Ok(())
    }

    /// Record the consultation and mark its appointment Completed
    pub fn complete(&mut self, log: &ConsultationLog) -> TriageResult<()> {
        log.validate()?;
        self.set_status(log.appointment_id, AppointmentStatus::Completed)
    }
}
