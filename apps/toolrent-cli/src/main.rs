//! # Toolrent
//!
//! Console entry point: parse flags, load configuration, start logging,
//! run one counter session.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;

use toolrent_cli::cli::Cli;
use toolrent_cli::config::{AppConfig, OutputFormat};
use toolrent_cli::error::CliError;
use toolrent_cli::{init_tracing, run};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging is not up yet; only --format decides how the error is shown
    let config = match AppConfig::load().map_err(CliError::from) {
        Ok(config) => config.with_overrides(cli.format, cli.log.clone()),
        Err(e) => {
            let format = cli.format.unwrap_or_default();
            let written = match format {
                OutputFormat::Json => e.write_to(format, io::stdout().lock()),
                OutputFormat::Text => e.write_to(format, io::stderr().lock()),
            };
            if written.is_err() {
                eprintln!("Error: {}", e);
            }
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.log_filter);

    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&cli, &config, stdin.lock(), stdout.lock()) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            error!(code = ?e.code(), error = %e, "console failed");
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
