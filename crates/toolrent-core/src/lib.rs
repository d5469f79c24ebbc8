//! # toolrent-core: Pure Pricing Logic for Toolrent POS
//!
//! This crate is the **heart** of the tool rental counter. It turns a tool
//! code, a rental length, a discount and a checkout date into a priced
//! [`RentalAgreement`], with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Toolrent Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    toolrent-cli (console)                       │   │
//! │  │    Prompts ──► Input parsing ──► Checkout ──► Agreement print   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ toolrent-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │  holiday  │  │  billing  │  │ checkout  │  │   │
//! │  │   │ ToolSpec  │  │ July 4th  │  │ charge    │  │ Agreement │  │   │
//! │  │   │  lookup   │  │ Labor Day │  │ days      │  │ discount  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO GLOBAL STATE • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (ToolSpec, ChargeFlags, RentalAgreement)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Checkout input rules
//! - [`holiday`] - Observed holiday calendar
//! - [`billing`] - Chargeable day counting
//! - [`catalog`] - Tool catalog
//! - [`checkout`] - The checkout service
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use toolrent_core::{CheckoutService, ToolCatalog};
//!
//! let service = CheckoutService::new(ToolCatalog::standard());
//! let date = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
//!
//! let agreement = service.checkout("LADW", 3, 10, date).unwrap();
//! assert_eq!(agreement.charge_days, 2);
//! assert_eq!(agreement.final_charge.to_string(), "$3.59");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod holiday;
pub mod money;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::ToolCatalog;
pub use checkout::CheckoutService;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Smallest rental length accepted at checkout, in days.
pub const MIN_RENTAL_DAYS: i64 = 1;

/// Upper bound of the discount percent (inclusive).
pub const MAX_DISCOUNT_PERCENT: i64 = 100;
