//! # Toolrent Console Library
//!
//! Everything behind the `toolrent` binary, kept in a library so sessions
//! can be driven from tests with in-memory input and output.
//!
//! ## Module Organization
//! ```text
//! toolrent_cli/
//! ├── lib.rs        ◄─── You are here (startup wiring)
//! ├── cli.rs        ◄─── Command-line flags
//! ├── config.rs     ◄─── Environment configuration
//! ├── input.rs      ◄─── Raw input parsing (the input source)
//! ├── presenter.rs  ◄─── Agreement / catalog rendering
//! ├── app.rs        ◄─── Session: prompt, price, report
//! └── error.rs      ◄─── Console error types
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod presenter;

use std::io::{BufRead, Write};

use toolrent_core::{CheckoutService, ToolCatalog};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::Session;
use cli::Cli;
use config::AppConfig;
use error::CliError;

/// Runs the console for parsed flags and loaded configuration.
///
/// ## Startup Sequence
/// ```text
/// 1. Build the checkout service over the standard catalog
/// 2. --list-tools        → print catalog
///    all checkout flags  → price once
///    otherwise           → interactive prompts
/// ```
///
/// ## Returns
/// `Ok(true)` when the requested operation succeeded, `Ok(false)` when an
/// input error was reported to the clerk.
pub fn run<R: BufRead, W: Write>(
    cli: &Cli,
    config: &AppConfig,
    input: R,
    out: W,
) -> Result<bool, CliError> {
    let service = CheckoutService::new(ToolCatalog::standard());
    info!(tools = service.catalog().len(), output = %config.output, "checkout service ready");

    let session = Session::new(&service, config.output);
    if cli.list_tools {
        session.list_tools(out)?;
        return Ok(true);
    }

    match cli.one_shot() {
        Some(raw) => session.run_once(&raw, out),
        None => session.run_interactive(input, out),
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=toolrent_core=trace` - Show every billed date
/// - Default: the configured filter (`warn` unless `TOOLRENT_LOG` is set)
///
/// Logs go to stderr; stdout carries only prompts and agreements.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
