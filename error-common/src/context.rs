use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifiers attached to an error when it is logged or returned
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorContext {
    pub request_id: Option<String>,
    pub patient_id: Option<String>,
    pub symptom_id: Option<String>,
    pub additional: BTreeMap<String, String>,
}

impl ErrorContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_request_id(mut self, request_id: impl Into<String>) -> Self {
        self.request_id = Some(request_id.into());
        self
    }

    pub fn with_patient_id(mut self, patient_id: impl Into<String>) -> Self {
        self.patient_id = Some(patient_id.into());
        self
    }

    pub fn with_symptom_id(mut self, symptom_id: impl Into<String>) -> Self {
        self.symptom_id = Some(symptom_id.into());
        self
    }

    pub fn add_context<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.additional.insert(key.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.request_id.is_none()
            && self.patient_id.is_none()
            && self.symptom_id.is_none()
            && self.additional.is_empty()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(id) = &self.request_id {
            parts.push(format!("request_id={id}"));
        }
        if let Some(id) = &self.patient_id {
            parts.push(format!("patient_id={id}"));
        }
        if let Some(id) = &self.symptom_id {
            parts.push(format!("symptom_id={id}"));
        }
        for (k, v) in &self.additional {
            parts.push(format!("{k}={v}"));
        }
        write!(f, "{}", parts.join(" "))
    }
}
