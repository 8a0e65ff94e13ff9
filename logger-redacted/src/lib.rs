//! Logging with automatic PHI/PII redaction
//!
//! Symptom narratives and transcripts are protected health information. Any
//! free text that reaches a log line goes through [`PiiRedactor`] first, using
//! the [`redacted_info!`] / [`redacted_debug!`] macros.
//!
//! # Detected Data Types
//!
//! - **Email Addresses**: `EMAIL[hash]` or `***@***`
//! - **Phone Numbers**: `PHONE[hash]` or `(***) ***-****`
//! - **SSN**: `SSN[hash]` or `***-**-****`
//! - **IP Addresses**: `IP[hash]` or `***.***.***.***`
//! - **Patient Codes**: `PATIENT[hash]` or `P-****-****`
//! - **Custom Patterns**: caller-supplied regex and replacement
//!
//! # Example
//!
//! ```rust
//! use logger_redacted::{init_logging, LoggerConfig, PiiRedactor};
//!
//! let _ = init_logging(&LoggerConfig::default());
//! let redactor = PiiRedactor::default();
//! logger_redacted::redacted_info!(redactor, "P-2024-0001 left knee pain", stage = "intake", "Symptom received");
//! ```

pub mod config;
pub mod macros;
pub mod redactor;

pub use config::*;
pub use redactor::*;

#[doc(hidden)]
pub use tracing;

use error_common::{OrthoCareError, Result};
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber
///
/// `RUST_LOG` wins over `config.log_level` when set. A second call fails with
/// a configuration error because the global subscriber is already set.
pub fn init_logging(config: &LoggerConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| OrthoCareError::ConfigError(format!("invalid log filter: {e}")))?;

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);

    let installed = if config.json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };

    installed.map_err(|e| OrthoCareError::ConfigError(format!("logger already initialised: {e}")))
}

/// Build the redactor a logger configuration asks for
pub fn redactor_for(config: &LoggerConfig) -> PiiRedactor {
    if config.redaction_enabled {
        PiiRedactor::default()
    } else {
        PiiRedactor::new(RedactionConfig::disabled())
    }
}
