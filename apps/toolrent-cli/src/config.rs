//! Console configuration.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Command-line flags override it afterwards.
//!
//! | Variable          | Values          | Default |
//! |-------------------|-----------------|---------|
//! | `TOOLRENT_OUTPUT` | `text`, `json`  | `text`  |
//! | `TOOLRENT_LOG`    | tracing filter  | `warn`  |
//!
//! `RUST_LOG`, when set, still wins over `TOOLRENT_LOG` (see
//! [`crate::init_tracing`]).

use std::env;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Default tracing filter; quiet so the agreement is the only output.
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// How agreements, listings and errors are written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Line-per-field agreement, `Error: ...` lines.
    #[default]
    Text,
    /// One JSON document per result.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue("TOOLRENT_OUTPUT".to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => f.write_str("text"),
            OutputFormat::Json => f.write_str("json"),
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Output rendering.
    pub output: OutputFormat,

    /// Default tracing filter directive.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            output: OutputFormat::Text,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let output = match lookup("TOOLRENT_OUTPUT") {
            Some(value) => value.parse()?,
            None => OutputFormat::default(),
        };

        let log_filter = lookup("TOOLRENT_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        if log_filter.trim().is_empty() {
            return Err(ConfigError::InvalidValue("TOOLRENT_LOG".to_string()));
        }

        Ok(AppConfig { output, log_filter })
    }

    /// Applies command-line overrides.
    pub fn with_overrides(mut self, output: Option<OutputFormat>, log_filter: Option<String>) -> Self {
        if let Some(output) = output {
            self.output = output;
        }
        if let Some(log_filter) = log_filter {
            self.log_filter = log_filter;
        }
        self
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
