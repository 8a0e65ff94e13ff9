use serde::{Deserialize, Serialize};
use crate::error::{VoiceError, VoiceResult};

pub const DEFAULT_WHISPER_URL: &str = "http://localhost:9000";
pub const DEFAULT_MODEL_SIZE: &str = "base";
pub const DEFAULT_LANGUAGE: &str = "en";
/// 5 minutes
pub const DEFAULT_MAX_DURATION_MS: u64 = 300_000;

/// Speech-to-text backend
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum VoiceProvider {
    /// Self-hosted Whisper ASR webservice
    Whisper {
        api_url: String,
        api_key: Option<String>,
        model_size: String, // e.g., "base", "small", "medium", "large-v2"
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VoiceConfig {
    pub provider: VoiceProvider,
    pub default_language: String,
    /// Longer recordings are rejected before they reach the provider
    pub max_audio_duration_ms: u64,
    /// Apply the symptom-term spelling corrections to transcripts
    pub normalize_transcripts: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self {
            provider: VoiceProvider::Whisper {
                api_url: DEFAULT_WHISPER_URL.to_string(),
                api_key: None,
                model_size: DEFAULT_MODEL_SIZE.to_string(),
            },
            default_language: DEFAULT_LANGUAGE.to_string(),
            max_audio_duration_ms: DEFAULT_MAX_DURATION_MS,
            normalize_transcripts: true,
        }
    }
}

impl VoiceConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> VoiceResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; `from_env` passes the process environment
    pub fn from_lookup<F>(lookup: F) -> VoiceResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let provider = match lookup("VOICE_PROVIDER").map(|p| p.to_lowercase()).as_deref() {
            None | Some("whisper") => VoiceProvider::Whisper {
                api_url: lookup("WHISPER_API_URL").unwrap_or_else(|| DEFAULT_WHISPER_URL.to_string()),
                api_key: lookup("WHISPER_API_KEY"),
                model_size: lookup("WHISPER_MODEL_SIZE").unwrap_or_else(|| DEFAULT_MODEL_SIZE.to_string()),
            },
            Some(other) => {
                return Err(VoiceError::Config(format!("Unknown voice provider: {other}")));
            }
        };

        let max_audio_duration_ms = match lookup("VOICE_MAX_DURATION_MS") {
            Some(raw) => raw
                .parse()
                .map_err(|_| VoiceError::Config(format!("VOICE_MAX_DURATION_MS is not a number: {raw}")))?,
            None => DEFAULT_MAX_DURATION_MS,
        };

        let normalize_transcripts = lookup("VOICE_NORMALIZE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(true);

        Ok(Self {
            provider,
            default_language: lookup("VOICE_LANGUAGE").unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
            max_audio_duration_ms,
            normalize_transcripts,
        })
    }
}
