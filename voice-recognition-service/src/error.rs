use error_common::OrthoCareError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum VoiceError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Audio processing error: {0}")]
    AudioProcessing(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<hound::Error> for VoiceError {
    fn from(error: hound::Error) -> Self {
        VoiceError::AudioProcessing(format!("invalid WAV audio: {error}"))
    }
}

impl From<VoiceError> for OrthoCareError {
    fn from(error: VoiceError) -> Self {
        match error {
            VoiceError::Config(msg) => OrthoCareError::ConfigError(msg),
            VoiceError::AudioProcessing(msg) => OrthoCareError::AudioError(msg),
            VoiceError::Serialization(e) => OrthoCareError::Serialization(e),
            VoiceError::Provider(_) | VoiceError::Network(_) => {
                OrthoCareError::TranscriptionError(error.to_string())
            }
        }
    }
}

pub type VoiceResult<T> = Result<T, VoiceError>;
