//! # Validation Module
//!
//! Checkout input rules.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console input (toolrent-cli)                                 │
//! │  ├── Integer parsing, MM/DD/YYYY date parsing                          │
//! │  └── Tool code trimmed and upper-cased                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── validate_rental_days      (>= 1)                                  │
//! │  └── validate_discount_percent (0..=100)                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog lookup                                               │
//! │  └── Unknown tool code                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::{MAX_DISCOUNT_PERCENT, MIN_RENTAL_DAYS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates the rental day count.
///
/// ## Example
/// ```rust
/// use toolrent_core::validation::validate_rental_days;
///
/// assert!(validate_rental_days(1).is_ok());
/// assert!(validate_rental_days(0).is_err());
/// ```
pub fn validate_rental_days(days: i64) -> ValidationResult<()> {
    if days < MIN_RENTAL_DAYS {
        return Err(ValidationError::BelowMinimum {
            field: "rental day count".to_string(),
            min: MIN_RENTAL_DAYS,
        });
    }

    Ok(())
}

/// Validates the discount percent and narrows it for money math.
///
/// ## Rules
/// - Must be between 0 and 100 inclusive
///
/// ## Returns
/// The percent as `u32`, ready for [`crate::Money::percentage_ceil`].
pub fn validate_discount_percent(percent: i64) -> ValidationResult<u32> {
    if !(0..=MAX_DISCOUNT_PERCENT).contains(&percent) {
        return Err(ValidationError::OutOfRange {
            field: "discount percent".to_string(),
            min: 0,
            max: MAX_DISCOUNT_PERCENT,
        });
    }

    Ok(percent as u32)
}

/// Normalizes a clerk-typed tool code for catalog lookup.
///
/// The catalog matches exactly, so callers trim and upper-case first.
///
/// ## Example
/// ```rust
/// use toolrent_core::validation::normalize_tool_code;
///
/// assert_eq!(normalize_tool_code("  ladw\n"), "LADW");
/// ```
pub fn normalize_tool_code(raw: &str) -> String {
    raw.trim().to_uppercase()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_rental_days() {
        assert!(validate_rental_days(1).is_ok());
        assert!(validate_rental_days(365).is_ok());

        assert!(validate_rental_days(0).is_err());
        assert!(validate_rental_days(-1).is_err());
        assert!(validate_rental_days(i64::MIN).is_err());
    }

    #[test]
    fn test_validate_discount_percent() {
        assert_eq!(validate_discount_percent(0), Ok(0));
        assert_eq!(validate_discount_percent(50), Ok(50));
        assert_eq!(validate_discount_percent(100), Ok(100));

        assert!(validate_discount_percent(-1).is_err());
        assert!(validate_discount_percent(101).is_err());
    }

    #[test]
    fn test_discount_error_message() {
        let err = validate_discount_percent(101).unwrap_err();
        assert_eq!(
            err.to_string(),
            "discount percent must be between 0 and 100"
        );
    }

    #[test]
    fn test_normalize_tool_code() {
        assert_eq!(normalize_tool_code("chns"), "CHNS");
        assert_eq!(normalize_tool_code(" JakR "), "JAKR");
        assert_eq!(normalize_tool_code(""), "");
    }
}
