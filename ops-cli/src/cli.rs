use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "orthocare")]
#[command(about = "Orthopaedic symptom triage, evaluation and voice intake", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file stem, resolved as <stem>.toml/.yaml/.json
    #[arg(long, global = true, env = "ORTHOCARE_CONFIG", default_value = "orthocare")]
    pub config: String,

    /// Force debug logging regardless of configured level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Run the full triage pipeline on a symptom narrative
    Triage {
        #[arg(long)]
        text: String,
        #[arg(long)]
        age: Option<u32>,
        #[arg(long)]
        patient_id: Option<String>,
        #[arg(long)]
        symptom_id: Option<String>,
    },
    /// Show the entities extracted from a narrative
    Extract {
        #[arg(long)]
        text: String,
    },
    /// Apply symptom-term spelling corrections
    Normalize {
        #[arg(long)]
        text: String,
    },
    /// Score predictions against ground truth labels
    Evaluate {
        /// JSON file with `y_true`, `y_pred` and optional severity arrays
        #[arg(long)]
        input: PathBuf,
        /// Write the evaluation report to this path
        #[arg(long)]
        report: Option<PathBuf>,
    },
    /// Transcribe a WAV recording through the configured provider
    Transcribe {
        #[arg(long)]
        audio: PathBuf,
        #[arg(long)]
        language: Option<String>,
    },
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Triage { .. } => "triage",
            Self::Extract { .. } => "extract",
            Self::Normalize { .. } => "normalize",
            Self::Evaluate { .. } => "evaluate",
            Self::Transcribe { .. } => "transcribe",
        }
    }
}
