//! # Console Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  raw line ──► InputError   (not a number, bad date, no input)           │
//! │                    │                                                    │
//! │  checkout ──► CoreError    (validation, date or amount range)           │
//! │                    │                                                    │
//! │                    ▼                                                    │
//! │               CliError ──► text: "Error: <message>"                     │
//! │                        └─► json: {"code": "...", "message": "..."}      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::Write;

use serde::Serialize;
use thiserror::Error;
use toolrent_core::CoreError;

use crate::config::{ConfigError, OutputFormat};

/// Raw input that never reached the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// A numeric field did not parse as an integer.
    #[error("{field} must be a whole number, got '{value}'")]
    NotANumber { field: &'static str, value: String },

    /// The checkout date is not `MM/DD/YYYY` or not a real date.
    #[error("Invalid date format. Please use mm/dd/yyyy.")]
    InvalidDate { value: String },

    /// Input ended before the field was entered.
    #[error("no {field} entered")]
    Missing { field: &'static str },
}

/// Everything the console can report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Machine-readable error codes for JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Malformed raw input
    InputFormat,
    /// Rejected by checkout validation
    ValidationError,
    /// Due date beyond the calendar
    DateOutOfRange,
    /// Charge too large to represent
    AmountOutOfRange,
    /// Bad environment configuration
    ConfigError,
    /// Output could not be written
    Internal,
}

impl CliError {
    pub fn code(&self) -> ErrorCode {
        match self {
            CliError::Input(_) => ErrorCode::InputFormat,
            CliError::Core(e) if e.is_validation() => ErrorCode::ValidationError,
            CliError::Core(CoreError::DateOutOfRange { .. }) => ErrorCode::DateOutOfRange,
            CliError::Core(_) => ErrorCode::AmountOutOfRange,
            CliError::Config(_) => ErrorCode::ConfigError,
            CliError::Io(_) | CliError::Json(_) => ErrorCode::Internal,
        }
    }

    /// True for errors caused by what the clerk typed.
    pub fn is_user_error(&self) -> bool {
        matches!(self, CliError::Input(_) | CliError::Core(_))
    }

    /// Writes the error as an `Error: ...` line or a JSON [`ErrorBody`].
    pub fn write_to<W: Write>(&self, format: OutputFormat, mut out: W) -> Result<(), CliError> {
        match format {
            OutputFormat::Text => writeln!(out, "Error: {}", self)?,
            OutputFormat::Json => {
                serde_json::to_writer_pretty(&mut out, &ErrorBody::from(self))?;
                writeln!(out)?;
            }
        }
        out.flush()?;
        Ok(())
    }
}

/// JSON shape of a reported error.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&CliError> for ErrorBody {
    fn from(err: &CliError) -> Self {
        ErrorBody {
            code: err.code(),
            message: err.to_string(),
        }
    }
}
