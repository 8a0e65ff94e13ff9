//! OpenAI Whisper provider, served by a self-hosted ASR webservice
//!
//! Audio never leaves the deployment: the recording is POSTed as multipart
//! form data to `{api_url}/asr` and the JSON transcript is read back.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::config::VoiceProvider;
use crate::error::{VoiceError, VoiceResult};
use crate::providers::VoiceProviderTrait;
use crate::transcription::{TranscriptionMetadata, TranscriptionResult};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Deserialize)]
struct AsrResponse {
    text: String,
    #[serde(default)]
    language: Option<String>,
    #[serde(default)]
    segments: Vec<serde_json::Value>,
}

pub struct WhisperProvider {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    model_size: String,
}

impl WhisperProvider {
    pub fn new(config: &VoiceProvider) -> VoiceResult<Self> {
        let VoiceProvider::Whisper {
            api_url,
            api_key,
            model_size,
        } = config;

        if api_url.trim().is_empty() {
            return Err(VoiceError::Config("Whisper API URL is empty".to_string()));
        }

        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;

        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            api_key: api_key.clone(),
            model_size: model_size.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/asr", self.api_url)
    }
}

#[async_trait]
impl VoiceProviderTrait for WhisperProvider {
    async fn transcribe(&self, audio_data: &[u8], language: &str) -> VoiceResult<TranscriptionResult> {
        let part = Part::bytes(audio_data.to_vec())
            .file_name("recording.wav")
            .mime_str("audio/wav")?;
        let form = Form::new().part("audio_file", part);

        let mut request = self
            .client
            .post(self.endpoint())
            .query(&[("task", "transcribe"), ("language", language), ("output", "json")])
            .multipart(form);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(VoiceError::Provider(format!("Whisper returned {status}: {body}")));
        }

        let asr: AsrResponse = response.json().await?;
        debug!(
            segments = asr.segments.len(),
            model = %self.model_size,
            "Whisper transcription received"
        );

        Ok(TranscriptionResult::new(
            asr.text.trim(),
            asr.language.unwrap_or_else(|| language.to_string()),
            TranscriptionMetadata {
                provider: self.name().to_string(),
                model: Some(self.model_size.clone()),
                segment_count: asr.segments.len(),
            },
        ))
    }

    fn name(&self) -> &'static str {
        "whisper"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    fn provider(api_url: &str) -> WhisperProvider {
        WhisperProvider::new(&VoiceProvider::Whisper {
            api_url: api_url.to_string(),
            api_key: None,
            model_size: "base".to_string(),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn test_transcribe_reads_json() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/asr")
            .match_query(Matcher::UrlEncoded("language".into(), "en".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"text": "  my nee hurts  ", "language": "en", "segments": [{}, {}]}"#)
            .create_async()
            .await;

        let result = provider(&format!("{}/", server.url()))
            .transcribe(b"RIFF", "en")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(result.text, "my nee hurts");
        assert_eq!(result.language, "en");
        assert_eq!(result.metadata.segment_count, 2);
        assert_eq!(result.metadata.provider, "whisper");
    }

    #[tokio::test]
    async fn test_language_falls_back_to_request() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/asr")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"text": "dolor de rodilla"}"#)
            .create_async()
            .await;

        let result = provider(&server.url()).transcribe(b"RIFF", "es").await.unwrap();
        assert_eq!(result.language, "es");
    }

    #[tokio::test]
    async fn test_server_error_is_provider_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/asr")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("model loading")
            .create_async()
            .await;

        let error = provider(&server.url()).transcribe(b"RIFF", "en").await.unwrap_err();
        assert!(matches!(error, VoiceError::Provider(msg) if msg.contains("503")));
    }

    #[test]
    fn test_empty_url_rejected() {
        let config = VoiceProvider::Whisper {
            api_url: " ".to_string(),
            api_key: None,
            model_size: "base".to_string(),
        };
        assert!(WhisperProvider::new(&config).is_err());
    }
}
