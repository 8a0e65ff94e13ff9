//! Operations CLI for the OrthoCare engine
//!
//! Every subcommand prints a single JSON document on stdout. Logs go to
//! stderr so the output can be piped straight into `jq` or a file.
//!
//! # Example Usage
//!
//! ```bash
//! orthocare triage --text "Twisted my ankle yesterday, 8/10 pain" --age 71
//! orthocare extract --text "Lower back stiffness for 2 weeks"
//! orthocare normalize --text "sholder payn"
//! orthocare evaluate --input predictions.json --report report.json
//! orthocare transcribe --audio intake.wav --language en
//! ```

pub mod cli;
pub mod commands;

pub use cli::{Cli, Command};
pub use commands::{execute, EvaluationInput};
