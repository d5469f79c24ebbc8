//! # Input Source
//!
//! Turns the four raw strings a clerk types into a [`CheckoutRequest`].
//!
//! ```text
//! "ladw"        ──► trim + upper-case        ──► "LADW"
//! "3"           ──► i64                      ──► 3
//! "10"          ──► i64                      ──► 10
//! "07/02/2020"  ──► strict MM/DD/YYYY        ──► 2020-07-02
//! ```
//!
//! Range checks (days >= 1, discount 0-100, known code) are left to the
//! core; this layer only rejects values that are not the right shape.

use std::io::BufRead;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use toolrent_core::validation::normalize_tool_code;

use crate::error::{CliError, InputError};

/// chrono pattern for the checkout date as typed.
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";

/// The four values as typed, before any parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCheckoutInput {
    pub tool_code: String,
    pub rental_days: String,
    pub discount_percent: String,
    pub checkout_date: String,
}

/// Parsed checkout input, ready for `CheckoutService::checkout`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutRequest {
    pub tool_code: String,
    pub rental_days: i64,
    pub discount_percent: i64,
    pub checkout_date: NaiveDate,
}

impl RawCheckoutInput {
    /// Parses every field, failing on the first malformed one in prompt order.
    pub fn parse(&self) -> Result<CheckoutRequest, InputError> {
        Ok(CheckoutRequest {
            tool_code: normalize_tool_code(&self.tool_code),
            rental_days: parse_rental_days(&self.rental_days)?,
            discount_percent: parse_discount_percent(&self.discount_percent)?,
            checkout_date: parse_checkout_date(&self.checkout_date)?,
        })
    }
}

pub fn parse_rental_days(raw: &str) -> Result<i64, InputError> {
    parse_integer("rental day count", raw)
}

pub fn parse_discount_percent(raw: &str) -> Result<i64, InputError> {
    parse_integer("discount percent", raw)
}

fn parse_integer(field: &'static str, raw: &str) -> Result<i64, InputError> {
    raw.trim().parse().map_err(|_| InputError::NotANumber {
        field,
        value: raw.trim().to_string(),
    })
}

/// Parses a strict `MM/DD/YYYY` date.
///
/// chrono alone would also take `7/2/2020` or `+2020`; the shape check
/// keeps the two-digit month/day and four-digit year the prompt asks for.
pub fn parse_checkout_date(raw: &str) -> Result<NaiveDate, InputError> {
    let value = raw.trim();
    let invalid = || InputError::InvalidDate {
        value: value.to_string(),
    };

    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            2 | 5 => *b == b'/',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, INPUT_DATE_FORMAT).map_err(|_| invalid())
}

/// Reads one line for `field`, without its line ending.
///
/// ## Errors
/// `InputError::Missing` at end of input; I/O failures are passed through.
pub fn read_field<R: BufRead>(input: &mut R, field: &'static str) -> Result<String, CliError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(InputError::Missing { field }.into());
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn raw(code: &str, days: &str, discount: &str, date: &str) -> RawCheckoutInput {
        RawCheckoutInput {
            tool_code: code.to_string(),
            rental_days: days.to_string(),
            discount_percent: discount.to_string(),
            checkout_date: date.to_string(),
        }
    }

    #[test]
    fn test_parse_full_request() {
        let request = raw(" ladw ", "3", " 10 ", "07/02/2020").parse().unwrap();
        assert_eq!(
            request,
            CheckoutRequest {
                tool_code: "LADW".to_string(),
                rental_days: 3,
                discount_percent: 10,
                checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
            }
        );
    }

    #[test]
    fn test_out_of_range_numbers_still_parse() {
        // Range checks belong to the core
        let request = raw("JAKR", "-1", "101", "09/03/2015").parse().unwrap();
        assert_eq!(request.rental_days, -1);
        assert_eq!(request.discount_percent, 101);
    }

    #[test]
    fn test_non_numeric_fields() {
        assert_eq!(
            parse_rental_days("three"),
            Err(InputError::NotANumber {
                field: "rental day count",
                value: "three".to_string(),
            })
        );
        assert!(parse_discount_percent("10%").is_err());
        assert!(parse_discount_percent("").is_err());
        assert!(parse_rental_days("2.5").is_err());
    }

    #[test]
    fn test_first_malformed_field_wins() {
        let err = raw("LADW", "x", "y", "bad").parse().unwrap_err();
        assert!(matches!(err, InputError::NotANumber { field: "rental day count", .. }));
    }

    #[test]
    fn test_parse_checkout_date() {
        assert_eq!(
            parse_checkout_date("09/03/2015"),
            Ok(NaiveDate::from_ymd_opt(2015, 9, 3).unwrap())
        );

        for bad in [
            "invalid_date",
            "2015-09-03",
            "9/3/2015",
            "09/03/15",
            "13/01/2015",
            "02/30/2020",
            "09-03-2015",
            "",
        ] {
            assert!(
                matches!(parse_checkout_date(bad), Err(InputError::InvalidDate { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_read_field() {
        let mut input = Cursor::new("LADW\r\n3\n");
        assert_eq!(read_field(&mut input, "tool code").unwrap(), "LADW");
        assert_eq!(read_field(&mut input, "rental day count").unwrap(), "3");
        assert!(matches!(
            read_field(&mut input, "discount percent"),
            Err(CliError::Input(InputError::Missing { field: "discount percent" }))
        ));
    }
}
