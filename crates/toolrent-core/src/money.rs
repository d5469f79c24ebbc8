//! # Money Module
//!
//! Provides the `Money` type for handling rental charges exactly.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In binary floating point:                                              │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │    Ceiling rounding turns that stray digit into an extra cent           │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    447 × 75 = 33525 hundredths of a cent, exact                        │
//! │    Rounding to cents is an integer division we fully control           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use toolrent_core::money::Money;
//!
//! let daily = Money::from_cents(199); // $1.99
//! let pre_discount = daily.multiply_quantity(2).unwrap(); // $3.98
//!
//! assert_eq!(pre_discount.percentage_ceil(10).cents(), 40);       // $0.40
//! assert_eq!(pre_discount.discounted_ceil(10).cents(), 359);      // $3.59
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in cents (USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: The holiday billing rule can produce a negative
///   charge-day count, so charges must be able to go below zero
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// ToolSpec.daily_charge ──► × charge days ──► pre-discount charge
///                                                   │
///                          ┌────────────────────────┴──────────┐
///                          ▼                                   ▼
///                percentage_ceil(pct)               discounted_ceil(pct)
///                   discount amount                    final charge
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let price = Money::from_cents(299); // Represents $2.99
    /// assert_eq!(price.cents(), 299);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the whole-dollar portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the cents portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Multiplies money by a day count.
    ///
    /// Returns `None` when the product does not fit in an `i64` of cents.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let daily = Money::from_cents(299); // $2.99
    /// assert_eq!(daily.multiply_quantity(3), Some(Money::from_cents(897))); // $8.97
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns `percent`% of this amount, rounded up to the next cent.
    ///
    /// ## Ceiling Rounding
    /// ```text
    /// ┌─────────────────────────────────────────────────────────────────────┐
    /// │  ROUND TOWARD POSITIVE INFINITY                                     │
    /// │                                                                     │
    /// │  Any fraction of a cent rounds UP (toward +∞):                      │
    /// │    $0.398  → $0.40                                                  │
    /// │    $1.1175 → $1.12                                                  │
    /// │    $1.495  → $1.50                                                  │
    /// │   -$0.398  → -$0.39   (up is toward zero for negatives)             │
    /// │                                                                     │
    /// │  Exact amounts are untouched: $0.40 → $0.40                         │
    /// └─────────────────────────────────────────────────────────────────────┘
    /// ```
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let pre_discount = Money::from_cents(447); // $4.47
    /// assert_eq!(pre_discount.percentage_ceil(25).cents(), 112); // $1.1175 → $1.12
    /// ```
    pub fn percentage_ceil(&self, percent: u32) -> Money {
        // cents × percent is in hundredths of a cent; i128 keeps it exact
        let scaled = self.0 as i128 * percent as i128;
        Money::from_cents(div_ceil_100(scaled))
    }

    /// Subtracts an unrounded `percent`% discount, then rounds up to the
    /// next cent.
    ///
    /// The discount is NOT rounded first, so the result can differ by a
    /// cent from `self - self.percentage_ceil(percent)`.
    ///
    /// ## Example
    /// ```rust
    /// use toolrent_core::money::Money;
    ///
    /// let pre_discount = Money::from_cents(398); // $3.98
    /// // $3.98 - $0.398 = $3.582 → $3.59
    /// assert_eq!(pre_discount.discounted_ceil(10).cents(), 359);
    /// ```
    pub fn discounted_ceil(&self, percent: u32) -> Money {
        // pre - pre × p/100 = pre × (100 - p)/100
        let scaled = self.0 as i128 * (100 - percent as i128);
        Money::from_cents(div_ceil_100(scaled))
    }
}

/// Divides hundredths of a cent by 100, rounding toward positive infinity.
fn div_ceil_100(value: i128) -> i64 {
    let quotient = value.div_euclid(100);
    let rounded = if value.rem_euclid(100) == 0 {
        quotient
    } else {
        quotient + 1
    };
    rounded as i64
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Shows money the way the rental agreement prints it: `$3.59`, `$-1.50`.
///
/// The currency symbol always comes first; a negative amount carries its
/// sign after it.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "${}{}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
