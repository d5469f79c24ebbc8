//! # Domain Types
//!
//! Core domain types used throughout Toolrent POS.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │    ToolSpec     │   │  ChargeFlags    │   │  RentalAgreement    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  code (LADW)    │──►│  weekday        │   │  tool snapshot      │   │
//! │  │  tool_type      │   │  weekend        │   │  dates              │   │
//! │  │  brand          │   │  holiday        │   │  charge days        │   │
//! │  │  daily_charge   │   └─────────────────┘   │  amounts            │   │
//! │  └─────────────────┘                         └─────────────────────┘   │
//! │                                                                         │
//! │  ┌─────────────────┐                                                   │
//! │  │    DayKind      │  classification of one calendar date              │
//! │  │  Weekday/Weekend│                                                   │
//! │  └─────────────────┘                                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Charge Flags
// =============================================================================

/// Which kinds of days a tool is billed for.
///
/// The three flags are independent; a date can match more than one of them
/// (a holiday is also a weekday or a weekend day).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChargeFlags {
    /// Billed on Monday through Friday.
    pub weekday: bool,
    /// Billed on Saturday and Sunday.
    pub weekend: bool,
    /// Billed on observed holidays.
    pub holiday: bool,
}

impl ChargeFlags {
    /// Builds flags from the weekday, weekend and holiday charge columns.
    #[inline]
    pub const fn new(weekday: bool, weekend: bool, holiday: bool) -> Self {
        ChargeFlags {
            weekday,
            weekend,
            holiday,
        }
    }
}

// =============================================================================
// Day Kind
// =============================================================================

/// Weekday/weekend classification of a calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayKind {
    /// Monday through Friday.
    Weekday,
    /// Saturday or Sunday.
    Weekend,
}

impl DayKind {
    /// Classifies a date.
    pub fn of(date: NaiveDate) -> Self {
        match date.weekday() {
            Weekday::Sat | Weekday::Sun => DayKind::Weekend,
            _ => DayKind::Weekday,
        }
    }
}

// =============================================================================
// Tool Spec
// =============================================================================

/// A rentable tool as defined by the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSpec {
    /// Catalog key, e.g. `LADW`.
    pub code: String,

    /// Kind of tool shown on the agreement, e.g. `Ladder`.
    pub tool_type: String,

    /// Manufacturer, e.g. `Werner`.
    pub brand: String,

    /// Price for one chargeable day.
    pub daily_charge: Money,

    /// Which days are billed.
    pub charges: ChargeFlags,
}

impl ToolSpec {
    /// Creates a catalog entry.
    pub fn new(
        code: impl Into<String>,
        tool_type: impl Into<String>,
        brand: impl Into<String>,
        daily_charge: Money,
        charges: ChargeFlags,
    ) -> Self {
        ToolSpec {
            code: code.into(),
            tool_type: tool_type.into(),
            brand: brand.into(),
            daily_charge,
            charges,
        }
    }
}

// =============================================================================
// Rental Agreement
// =============================================================================

/// The priced result of one checkout.
///
/// Uses the snapshot pattern: tool type, brand and daily charge are frozen
/// from the catalog entry at checkout time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    pub tool_code: String,
    pub tool_type: String,
    pub brand: String,
    /// Number of days rented (>= 1).
    pub rental_days: i64,
    pub checkout_date: NaiveDate,
    /// Checkout date plus `rental_days`.
    pub due_date: NaiveDate,
    pub daily_charge: Money,
    /// Billed days after holiday adjustment. Can be negative for tools that
    /// bill neither weekdays nor holidays.
    pub charge_days: i64,
    /// `daily_charge × charge_days`, unrounded.
    pub pre_discount_charge: Money,
    /// Discount in whole percent (0-100).
    pub discount_percent: u32,
    /// Discount rounded up to the cent.
    pub discount_amount: Money,
    /// Pre-discount charge minus the unrounded discount, rounded up to the cent.
    pub final_charge: Money,
}

// =============================================================================
// Unit Tests
// =============================================================================
