use ::config::{Config, Environment, File};
use logger_redacted::LoggerConfig;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::error::TriageResult;

/// Runtime settings for the triage pipeline
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Validate)]
pub struct TriageSettings {
    /// Version tag written on every prediction record
    #[serde(default = "default_model_version")]
    #[validate(length(min = 1))]
    pub model_version: String,

    /// Deployment environment (development, staging, production)
    #[serde(default = "default_environment")]
    pub environment: String,

    /// Pain level the ranker and priority scorer assume when none was reported
    #[serde(default = "default_pain_level")]
    #[validate(range(max = 10))]
    pub default_pain_level: u8,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Redact PII from narrative text before it is logged
    #[serde(default = "default_true")]
    pub redact_logs: bool,
}

fn default_model_version() -> String {
    "v1.0".to_string()
}

fn default_environment() -> String {
    "development".to_string()
}

fn default_pain_level() -> u8 {
    5
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for TriageSettings {
    fn default() -> Self {
        Self {
            model_version: default_model_version(),
            environment: default_environment(),
            default_pain_level: default_pain_level(),
            log_level: default_log_level(),
            redact_logs: default_true(),
        }
    }
}

impl TriageSettings {
    /// Optional `orthocare.{toml,yaml,json}` overlaid by `ORTHOCARE_*` variables
    pub fn load() -> TriageResult<Self> {
        Self::load_from("orthocare")
    }

    /// Same as [`TriageSettings::load`] with an explicit file stem
    pub fn load_from(file_stem: &str) -> TriageResult<Self> {
        let settings: Self = Config::builder()
            .add_source(File::with_name(file_stem).required(false))
            .add_source(Environment::with_prefix("ORTHOCARE").try_parsing(true))
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn is_production(&self) -> bool {
        self.environment.eq_ignore_ascii_case("production")
    }

    /// Logger settings; production logs as JSON lines
    pub fn logger_config(&self) -> LoggerConfig {
        LoggerConfig {
            redaction_enabled: self.redact_logs,
            log_level: self.log_level.clone(),
            json: self.is_production(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = TriageSettings::default();
        assert_eq!(settings.model_version, "v1.0");
        assert_eq!(settings.default_pain_level, 5);
        assert!(settings.redact_logs);
        assert!(!settings.is_production());
    }

    #[test]
    fn test_partial_document_fills_defaults() {
        let settings: TriageSettings =
            serde_json::from_str(r#"{"model_version": "v2.1", "environment": "Production"}"#).unwrap();
        assert_eq!(settings.model_version, "v2.1");
        assert_eq!(settings.log_level, "info");
        assert!(settings.is_production());
        assert!(settings.logger_config().json);
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let settings = TriageSettings::load_from("definitely-not-a-settings-file").unwrap();
        assert_eq!(settings.default_pain_level, 5);
    }

    #[test]
    fn test_out_of_range_default_pain_rejected() {
        let settings = TriageSettings {
            default_pain_level: 12,
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }
}
