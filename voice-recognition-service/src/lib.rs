//! Voice intake for symptom narratives
//!
//! Patients can describe their symptoms aloud instead of typing. The
//! recording is transcribed by a **self-hosted** Whisper service so audio
//! never leaves the deployment, then common mis-hearings of symptom terms
//! are corrected before the text enters triage.
//!
//! # Features
//!
//! - WAV validation and a configurable maximum recording length
//! - Whisper ASR webservice provider (`POST {api_url}/asr`)
//! - Symptom-term spelling corrections
//! - Transcripts are redacted before they reach a log line
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use voice_recognition_service::{VoiceConfig, VoiceService};
//!
//! # async fn example(audio_data: Vec<u8>) -> Result<(), Box<dyn std::error::Error>> {
//! let config = VoiceConfig::from_env()?;
//! let voice_service = VoiceService::new(config)?;
//!
//! let transcript = voice_service.transcribe(&audio_data, Some("en")).await?;
//! println!("Symptoms: {}", transcript.normalized_text);
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod medical_vocabulary;
pub mod providers;
pub mod service;
pub mod transcription;

pub use config::*;
pub use error::*;
pub use medical_vocabulary::*;
pub use service::*;
pub use transcription::*;
