use error_common::Result;
use evaluation_engine::{EvaluationService, DEFAULT_MODEL_NAME};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fs;
use std::path::Path;
use tracing::info;
use triage_engine::{TriagePipeline, TriageRequest, TriageSettings};
use voice_recognition_service::{MedicalVocabulary, VoiceConfig, VoiceService};

use crate::cli::Command;

/// Contents of an `evaluate --input` file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationInput {
    pub y_true: Vec<String>,
    pub y_pred: Vec<String>,
    #[serde(default)]
    pub model_name: Option<String>,
    #[serde(default)]
    pub severity_true: Option<Vec<String>>,
    #[serde(default)]
    pub severity_pred: Option<Vec<String>>,
}

/// Run one subcommand and return the JSON document to print
pub async fn execute(command: &Command, settings: &TriageSettings) -> Result<Value> {
    match command {
        Command::Triage {
            text,
            age,
            patient_id,
            symptom_id,
        } => triage(settings, text, *age, patient_id.as_deref(), symptom_id.as_deref()),
        Command::Extract { text } => {
            let extraction = TriagePipeline::new(settings).extract(text);
            Ok(serde_json::to_value(extraction)?)
        }
        Command::Normalize { text } => Ok(json!({
            "original_text": text,
            "normalized_text": MedicalVocabulary::normalize(text),
        })),
        Command::Evaluate { input, report } => evaluate(input, report.as_deref()),
        Command::Transcribe { audio, language } => transcribe(audio, language.as_deref()).await,
    }
}

fn triage(
    settings: &TriageSettings,
    text: &str,
    age: Option<u32>,
    patient_id: Option<&str>,
    symptom_id: Option<&str>,
) -> Result<Value> {
    let mut request = TriageRequest::new(text);
    request.patient_age = age;
    request.patient_id = patient_id.map(str::to_string);
    request.symptom_id = symptom_id.map(str::to_string);

    let outcome = TriagePipeline::new(settings).run(&request)?;
    Ok(serde_json::to_value(outcome)?)
}

fn evaluate(input: &Path, report: Option<&Path>) -> Result<Value> {
    let raw = fs::read_to_string(input)?;
    let input: EvaluationInput = serde_json::from_str(&raw)?;
    let model_name = input.model_name.as_deref().unwrap_or(DEFAULT_MODEL_NAME);

    let service = EvaluationService::new();
    let classification = service.evaluate(&input.y_true, &input.y_pred, model_name)?;

    let severity = match (&input.severity_true, &input.severity_pred) {
        (Some(truth), Some(predicted)) => Some(service.evaluate_severity(truth, predicted)?),
        _ => None,
    };

    if let Some(path) = report {
        service.save_report(path)?;
        info!(path = %path.display(), "Report written");
    }

    Ok(json!({
        "classification": classification,
        "severity": severity,
        "report_path": report.map(|p| p.display().to_string()),
    }))
}

async fn transcribe(audio: &Path, language: Option<&str>) -> Result<Value> {
    let audio_data = fs::read(audio)?;
    let service = VoiceService::new(VoiceConfig::from_env()?)?;
    let transcript = service.transcribe(&audio_data, language).await?;
    Ok(serde_json::to_value(transcript)?)
}
