//! End-to-end triage for a single symptom narrative
//!
//! Extraction feeds the ranker and, independently, the severity scorer; the
//! top-ranked condition and the severity drive the recommendation, and the
//! severity score drives the queue priority. Every stage is a pure function
//! of its inputs, so one pipeline can serve concurrent requests.

use logger_redacted::{redacted_info, redactor_for, PiiRedactor};
use tracing::{debug, warn};

use crate::config::TriageSettings;
use crate::error::{TriageError, TriageResult};
use crate::extractor::EntityExtractor;
use crate::models::{AppointmentType, ExtractionResult, PredictionRecord, TriageOutcome, TriageRequest};
use crate::priority::PriorityScorer;
use crate::ranker::{ConditionRanker, Ranking};
use crate::recommendation::RecommendationGenerator;
use crate::severity::SeverityScorer;

#[derive(Debug, Clone)]
pub struct TriagePipeline {
    model_version: String,
    extractor: EntityExtractor,
    ranker: ConditionRanker,
    severity: SeverityScorer,
    recommender: RecommendationGenerator,
    priority: PriorityScorer,
    redactor: PiiRedactor,
}

impl Default for TriagePipeline {
    fn default() -> Self {
        Self::new(&TriageSettings::default())
    }
}

impl TriagePipeline {
    pub fn new(settings: &TriageSettings) -> Self {
        Self {
            model_version: settings.model_version.clone(),
            extractor: EntityExtractor::new(),
            ranker: ConditionRanker::new(settings.default_pain_level),
            severity: SeverityScorer::new(),
            recommender: RecommendationGenerator::new(),
            priority: PriorityScorer::new(settings.default_pain_level),
            redactor: redactor_for(&settings.logger_config()),
        }
    }

    pub fn model_version(&self) -> &str {
        &self.model_version
    }

    /// Extraction only, for callers that want the structured signals
    pub fn extract(&self, text: &str) -> ExtractionResult {
        self.extractor.extract(text)
    }

    pub fn rank(&self, extraction: &ExtractionResult) -> TriageResult<Ranking> {
        self.ranker.rank(extraction)
    }

    /// Validate the request and run all five stages
    pub fn run(&self, request: &TriageRequest) -> TriageResult<TriageOutcome> {
        // ids can carry patient codes
        let patient = self.redactor.redact(request.patient_id.as_deref().unwrap_or("-"));
        let symptom = self.redactor.redact(request.symptom_id.as_deref().unwrap_or("-"));

        if let Err(e) = request.validate_request() {
            warn!(patient_id = %patient, symptom_id = %symptom, error = %e, "Rejected triage request");
            return Err(e);
        }

        redacted_info!(
            self.redactor,
            &request.symptom_text,
            patient_id = %patient,
            symptom_id = %symptom,
            "Triage request received"
        );

        let extraction = self.extractor.extract(&request.symptom_text);
        debug!(
            body_part = extraction.affected_body_part.as_deref().unwrap_or("-"),
            pain_level = ?extraction.pain_level,
            duration = extraction.duration.as_deref().unwrap_or("-"),
            confidence = extraction.extraction_confidence,
            "Extracted entities"
        );

        let ranking = self.ranker.rank(&extraction)?;
        let top = ranking
            .top()
            .cloned()
            .ok_or_else(|| TriageError::NotFound("no candidate conditions".to_string()))?;

        let severity = self.severity.score(
            extraction.pain_level,
            extraction.duration.as_deref(),
            &extraction.additional_symptoms,
        )?;

        let recommendation = self
            .recommender
            .recommend(&top.condition, severity.level, extraction.pain_level)?;

        let priority_score = self.priority.score(
            severity.score,
            extraction.pain_level,
            extraction.duration.as_deref(),
            request.patient_age,
        )?;

        let appointment_type = AppointmentType::for_urgency(recommendation.urgency_level);

        tracing::info!(
            patient_id = %patient,
            symptom_id = %symptom,
            top_condition = %top.condition,
            severity = %severity.level,
            urgency = ?recommendation.urgency_level,
            priority = %priority_score,
            "Triage completed"
        );

        let Ranking { candidates, features } = ranking;
        Ok(TriageOutcome {
            prediction: PredictionRecord {
                symptom_id: request.symptom_id.clone(),
                patient_id: request.patient_id.clone(),
                predicted_conditions: candidates,
                top_condition: top.condition,
                top_condition_probability: top.probability,
                severity_level: severity.level,
                severity_score: severity.score,
                model_version: self.model_version.clone(),
                features_used: features,
            },
            extraction,
            recommendation,
            priority_score,
            appointment_type,
        })
    }
}
