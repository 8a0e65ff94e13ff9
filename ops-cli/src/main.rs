use clap::Parser;
use colored::*;
use error_common::{log_error, ErrorContext};
use logger_redacted::init_logging;
use ops_cli::{execute, Cli};
use triage_engine::TriageSettings;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let settings = TriageSettings::load_from(&cli.config)?;
    let mut logger = settings.logger_config();
    if cli.verbose {
        logger = logger.with_level("debug");
    }
    init_logging(&logger)?;

    tracing::debug!(
        command = cli.command.name(),
        model_version = %settings.model_version,
        environment = %settings.environment,
        "Starting orthocare"
    );

    match execute(&cli.command, &settings).await {
        Ok(output) => {
            println!("{}", serde_json::to_string_pretty(&output)?);
            Ok(())
        }
        Err(e) => {
            let context = ErrorContext::new().add_context("command", cli.command.name());
            log_error(&context, &e);
            eprintln!("{} [{}] {}", "error:".bright_red().bold(), e.code(), e);
            Err(e.into())
        }
    }
}
