use logger_redacted::{redacted_debug, PiiRedactor};
use std::io::Cursor;
use tracing::{info, warn};

use crate::config::VoiceConfig;
use crate::error::{VoiceError, VoiceResult};
use crate::medical_vocabulary::MedicalVocabulary;
use crate::providers::{create_provider, VoiceProviderTrait};
use crate::transcription::TranscribedSymptoms;

/// Turns a spoken symptom description into intake text
pub struct VoiceService {
    config: VoiceConfig,
    provider: Box<dyn VoiceProviderTrait>,
    redactor: PiiRedactor,
}

impl VoiceService {
    /// Create a new voice recognition service
    pub fn new(config: VoiceConfig) -> VoiceResult<Self> {
        let provider = create_provider(&config.provider)?;
        Ok(Self::with_provider(config, provider))
    }

    pub fn with_provider(config: VoiceConfig, provider: Box<dyn VoiceProviderTrait>) -> Self {
        Self {
            config,
            provider,
            redactor: PiiRedactor::default(),
        }
    }

    pub fn config(&self) -> &VoiceConfig {
        &self.config
    }

    /// Transcribe a WAV recording; `language` falls back to the configured default
    pub async fn transcribe(&self, audio_data: &[u8], language: Option<&str>) -> VoiceResult<TranscribedSymptoms> {
        let duration_ms = match audio_duration_ms(audio_data) {
            Ok(ms) => ms,
            Err(e) => {
                warn!(audio_size = audio_data.len(), error = %e, "Rejected audio");
                return Err(e);
            }
        };
        if duration_ms > self.config.max_audio_duration_ms {
            return Err(VoiceError::AudioProcessing(format!(
                "recording is {duration_ms} ms, limit is {} ms",
                self.config.max_audio_duration_ms
            )));
        }

        let language = language.unwrap_or(&self.config.default_language);
        info!(
            provider = self.provider.name(),
            audio_size = audio_data.len(),
            duration_ms,
            language,
            "Transcribing audio"
        );

        let result = self.provider.transcribe(audio_data, language).await?;

        let normalized_text = if self.config.normalize_transcripts {
            MedicalVocabulary::normalize(&result.text)
        } else {
            result.text.clone()
        };
        redacted_debug!(self.redactor, &normalized_text, language = %result.language, "Transcript normalized");

        Ok(TranscribedSymptoms {
            original_text: result.text,
            normalized_text,
            language: result.language,
            duration_ms,
        })
    }
}

/// Playback length of a WAV recording, rejecting anything that is not WAV
pub fn audio_duration_ms(audio_data: &[u8]) -> VoiceResult<u64> {
    if audio_data.is_empty() {
        return Err(VoiceError::AudioProcessing("audio is empty".to_string()));
    }
    let reader = hound::WavReader::new(Cursor::new(audio_data))?;
    let sample_rate = u64::from(reader.spec().sample_rate);
    if sample_rate == 0 {
        return Err(VoiceError::AudioProcessing("sample rate is zero".to_string()));
    }
    Ok(u64::from(reader.duration()) * 1000 / sample_rate)
}
