//! `pr-labels` entrypoint for CI steps.

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use pr_labels::{ActionConfig, Cli, LabelsError, telemetry};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_logging();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            tracing::debug!(?error, "action failed");
            if writeln!(io::stderr().lock(), "error: {error}").is_err() {
                return ExitCode::FAILURE;
            }
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<(), LabelsError> {
    let config = ActionConfig::from_env()?;
    let labels = pr_labels::run(&config, cli.output_mode).await?;
    tracing::debug!(?labels, "published pull request labels");
    Ok(())
}
