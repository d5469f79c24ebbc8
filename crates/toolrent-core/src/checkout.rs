//! # Checkout Service
//!
//! Prices a rental and produces the [`RentalAgreement`].
//!
//! ## Checkout Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  checkout("LADW", 3, 10, 2020-07-02)                                    │
//! │       │                                                                 │
//! │       ├── rental days < 1?        → BelowMinimum                       │
//! │       ├── discount ∉ [0, 100]?    → OutOfRange                         │
//! │       ├── tool code unknown?      → UnknownCode                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  due date      = 2020-07-02 + 3 days        = 2020-07-05               │
//! │  charge days   = chargeable_days(...)       = 2                        │
//! │  pre-discount  = $1.99 × 2                  = $3.98                    │
//! │  discount      = ceil($3.98 × 10%)          = $0.40                    │
//! │  final         = ceil($3.98 - $0.398)       = $3.59                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{Days, NaiveDate};
use tracing::debug;

use crate::billing::chargeable_days;
use crate::catalog::ToolCatalog;
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::RentalAgreement;
use crate::validation::{validate_discount_percent, validate_rental_days};

/// Prices rentals against an owned, immutable catalog.
///
/// Holds no mutable state, so one instance can be shared freely.
#[derive(Debug, Clone)]
pub struct CheckoutService {
    catalog: ToolCatalog,
}

impl CheckoutService {
    pub fn new(catalog: ToolCatalog) -> Self {
        CheckoutService { catalog }
    }

    /// The catalog this service prices against.
    pub fn catalog(&self) -> &ToolCatalog {
        &self.catalog
    }

    /// Validates the inputs and builds a priced agreement.
    ///
    /// `tool_code` must already be normalized (see
    /// [`normalize_tool_code`](crate::validation::normalize_tool_code)).
    ///
    /// ## Errors
    /// Checked in this order, first failure wins:
    /// 1. `rental_days < 1`
    /// 2. `discount_percent` outside `0..=100`
    /// 3. unknown `tool_code`
    ///
    /// `CoreError::DateOutOfRange` if the due date cannot be represented.
    /// `CoreError::AmountOutOfRange` if the daily charge times the charge
    /// days overflows.
    pub fn checkout(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> CoreResult<RentalAgreement> {
        validate_rental_days(rental_days)?;
        let discount_percent = validate_discount_percent(discount_percent)?;

        let tool = self
            .catalog
            .lookup(tool_code)
            .ok_or_else(|| ValidationError::UnknownCode {
                field: "tool code".to_string(),
                value: tool_code.to_string(),
            })?;

        // rental_days >= 1 here, so the cast is lossless
        let due_date = checkout_date
            .checked_add_days(Days::new(rental_days as u64))
            .ok_or(CoreError::DateOutOfRange {
                checkout_date,
                days: rental_days,
            })?;

        let charge_days = chargeable_days(tool.charges, checkout_date, due_date);
        let pre_discount_charge = tool
            .daily_charge
            .multiply_quantity(charge_days)
            .ok_or_else(|| CoreError::AmountOutOfRange {
                tool_code: tool.code.clone(),
                charge_days,
            })?;
        let discount_amount = pre_discount_charge.percentage_ceil(discount_percent);
        let final_charge = pre_discount_charge.discounted_ceil(discount_percent);

        debug!(
            tool_code,
            %checkout_date,
            %due_date,
            charge_days,
            pre_discount = %pre_discount_charge,
            discount = %discount_amount,
            total = %final_charge,
            "rental priced"
        );

        Ok(RentalAgreement {
            tool_code: tool.code.clone(),
            tool_type: tool.tool_type.clone(),
            brand: tool.brand.clone(),
            rental_days,
            checkout_date,
            due_date,
            daily_charge: tool.daily_charge,
            charge_days,
            pre_discount_charge,
            discount_percent,
            discount_amount,
            final_charge,
        })
    }
}

impl Default for CheckoutService {
    fn default() -> Self {
        CheckoutService::new(ToolCatalog::standard())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;
    use crate::types::{ChargeFlags, ToolSpec};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_validation_order() {
        let service = CheckoutService::default();
        let d = date(2015, 9, 3);

        // Everything wrong: the day count is reported
        let err = service.checkout("NOPE", 0, 101, d).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::BelowMinimum { .. })
        ));

        // Days fine, discount and code wrong: the discount is reported
        let err = service.checkout("NOPE", 5, -1, d).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::OutOfRange { .. })
        ));

        // Only the code wrong
        let err = service.checkout("NOPE", 5, 10, d).unwrap_err();
        assert_eq!(err.to_string(), "invalid tool code: NOPE");
    }

    #[test]
    fn test_lookup_is_not_normalized_by_the_service() {
        let service = CheckoutService::default();
        let err = service.checkout("ladw", 3, 10, date(2020, 7, 2)).unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_due_date_out_of_range() {
        let service = CheckoutService::default();
        let err = service.checkout("LADW", 1, 0, NaiveDate::MAX).unwrap_err();
        assert!(matches!(err, CoreError::DateOutOfRange { days: 1, .. }));
    }

    #[test]
    fn test_injected_catalog() {
        let drill = ToolSpec::new(
            "DRLL",
            "Drill",
            "Makita",
            Money::from_cents(500),
            ChargeFlags::new(true, true, true),
        );
        let service = CheckoutService::new(ToolCatalog::from_specs(vec![drill]).unwrap());

        let agreement = service.checkout("DRLL", 7, 20, date(2021, 3, 1)).unwrap();
        assert_eq!(agreement.charge_days, 7);
        assert_eq!(agreement.pre_discount_charge.cents(), 3500);
        assert_eq!(agreement.discount_amount.cents(), 700);
        assert_eq!(agreement.final_charge.cents(), 2800);

        // The standard fleet is not implied
        assert!(service.checkout("LADW", 1, 0, date(2021, 3, 1)).is_err());
    }

    #[test]
    fn test_oversized_daily_charge_is_an_error() {
        let press = ToolSpec::new(
            "PRSS",
            "Press",
            "Acme",
            Money::from_cents(i64::MAX / 2),
            ChargeFlags::new(true, true, true),
        );
        let service = CheckoutService::new(ToolCatalog::from_specs(vec![press]).unwrap());

        let err = service.checkout("PRSS", 3, 0, date(2020, 1, 1)).unwrap_err();
        assert_eq!(
            err,
            CoreError::AmountOutOfRange {
                tool_code: "PRSS".to_string(),
                charge_days: 3,
            }
        );

        // Two days still fit
        let agreement = service.checkout("PRSS", 2, 0, date(2020, 1, 1)).unwrap();
        assert_eq!(agreement.pre_discount_charge.cents(), (i64::MAX / 2) * 2);
    }

    #[test]
    fn test_negative_charge_days_flow_through_to_amounts() {
        let weekend_rake = ToolSpec::new(
            "RAKE",
            "Rake",
            "Ames",
            Money::from_cents(199),
            ChargeFlags::new(false, true, false),
        );
        let service = CheckoutService::new(ToolCatalog::from_specs(vec![weekend_rake]).unwrap());

        // Sun 2015-09-06 → Labor Day Mon 2015-09-07
        let agreement = service.checkout("RAKE", 1, 10, date(2015, 9, 6)).unwrap();
        assert_eq!(agreement.charge_days, -1);
        assert_eq!(agreement.pre_discount_charge.cents(), -199);
        // -$0.199 → -$0.19, -$1.791 → -$1.79
        assert_eq!(agreement.discount_amount.cents(), -19);
        assert_eq!(agreement.final_charge.cents(), -179);
    }
}
