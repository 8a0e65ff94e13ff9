//! Common error handling utilities for OrthoCare Engine
//!
//! This module provides the shared error type, error codes, and error context
//! used across the triage, evaluation, and transcription crates. Crate-local
//! errors convert into [`OrthoCareError`] so binaries can report every failure
//! through one type.
//!
//! # Error Categories
//!
//! - **Validation**: malformed requests rejected at the boundary
//! - **OutOfRange**: caller supplied a value outside a documented range
//! - **Evaluation**: report files could not be read or written
//! - **Transcription**: the speech-to-text collaborator failed
//! - **Config**: settings could not be loaded
//!
//! # Example
//!
//! ```rust
//! use error_common::{codes, OrthoCareError};
//!
//! fn check_pain(level: u8) -> error_common::Result<u8> {
//!     if level > 10 {
//!         return Err(OrthoCareError::OutOfRange(format!(
//!             "pain level {level} exceeds 10"
//!         )));
//!     }
//!     Ok(level)
//! }
//!
//! let err = check_pain(11).unwrap_err();
//! assert_eq!(err.code(), codes::triage::OUT_OF_RANGE);
//! ```

pub mod codes;
pub mod context;
pub mod types;

pub use context::*;
pub use types::*;
