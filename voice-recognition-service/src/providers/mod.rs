pub mod whisper;

use async_trait::async_trait;
use crate::config::VoiceProvider;
use crate::error::VoiceResult;
use crate::transcription::TranscriptionResult;

/// Trait for speech-to-text backends
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoiceProviderTrait: Send + Sync {
    /// Transcribe a WAV recording spoken in `language`
    async fn transcribe(&self, audio_data: &[u8], language: &str) -> VoiceResult<TranscriptionResult>;

    /// Provider name recorded in transcription metadata
    fn name(&self) -> &'static str;
}

/// Create a provider instance based on configuration
pub fn create_provider(config: &VoiceProvider) -> VoiceResult<Box<dyn VoiceProviderTrait>> {
    match config {
        VoiceProvider::Whisper { .. } => Ok(Box::new(whisper::WhisperProvider::new(config)?)),
    }
}
