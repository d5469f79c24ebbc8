//! # Error Types
//!
//! Domain-specific error types for toolrent-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  toolrent-core errors (this file)                                      │
//! │  ├── CoreError        - Checkout failures (dates, amounts)             │
//! │  └── ValidationError  - Rejected checkout inputs                       │
//! │                                                                         │
//! │  toolrent-cli errors (app crate)                                       │
//! │  ├── InputError       - Malformed raw input (dates, numbers)           │
//! │  └── CliError         - What the console prints                        │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → CliError → "Error: ..." line      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is a deterministic function of the inputs. Nothing is
//! retried and no agreement is built when one is returned.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Checkout failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The due date falls outside the calendar range chrono can represent.
    #[error("due date is out of range: {days} days after {checkout_date}")]
    DateOutOfRange {
        checkout_date: chrono::NaiveDate,
        days: i64,
    },

    /// The pre-discount charge does not fit in an `i64` of cents.
    ///
    /// Only reachable through an injected catalog with an extreme daily charge.
    #[error("charge is out of range: {charge_days} days of {tool_code}")]
    AmountOutOfRange { tool_code: String, charge_days: i64 },

    /// Validation error (wraps ValidationError).
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true if the failure came from input validation.
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Checked in a fixed order by the checkout service: rental days, then
/// discount percent, then tool code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Value is below the allowed minimum.
    ///
    /// ## When This Occurs
    /// - Rental day count of 0 or less
    #[error("{field} must be {min} or greater")]
    BelowMinimum { field: String, min: i64 },

    /// Numeric value is out of range.
    ///
    /// ## When This Occurs
    /// - Discount percent below 0 or above 100
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// A code that is not present in its lookup table.
    ///
    /// ## User Workflow
    /// ```text
    /// Clerk types "LADX"
    ///      │
    ///      ▼
    /// Catalog lookup: no entry
    ///      │
    ///      ▼
    /// UnknownCode { field: "tool code", value: "LADX" }
    ///      │
    ///      ▼
    /// Console: "Error: invalid tool code: LADX"
    /// ```
    #[error("invalid {field}: {value}")]
    UnknownCode { field: String, value: String },

    /// Duplicate value (e.g., two catalog entries with the same code).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
