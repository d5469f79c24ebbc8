//! # Billing Days
//!
//! Counts how many days of a rental period are billed.
//!
//! ## Per-Date Policy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  For every date in (checkout_date, due_date]                            │
//! │                                                                         │
//! │  1. weekend charge  && weekend date   ─┐                                │
//! │  2. weekday charge  && weekday date   ─┼─ first match: +1              │
//! │  3. holiday charge  && holiday        ─┘                                │
//! │                                                                         │
//! │  4. !holiday charge && holiday        ──── always:    -1               │
//! │                                                                         │
//! │  Rule 4 fires whether or not rules 1-3 counted the date.               │
//! │                                                                         │
//! │  Weekday tool, Labor Day Monday:   +1 (rule 2) -1 (rule 4) = 0         │
//! │  Weekend-only tool, Labor Day:      0          -1 (rule 4) = -1        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The second case is how the counter has always billed; keep it.

use chrono::{Days, NaiveDate};
use tracing::trace;

use crate::holiday::is_holiday;
use crate::types::{ChargeFlags, DayKind};

/// Net billing contribution of a single date: -1, 0 or +1.
///
/// ## Example
/// ```rust
/// use toolrent_core::billing::day_charge;
/// use toolrent_core::{ChargeFlags, DayKind};
///
/// let weekday_only = ChargeFlags::new(true, false, false);
/// assert_eq!(day_charge(weekday_only, DayKind::Weekday, false), 1);
/// assert_eq!(day_charge(weekday_only, DayKind::Weekday, true), 0);
/// assert_eq!(day_charge(weekday_only, DayKind::Weekend, false), 0);
/// ```
pub fn day_charge(flags: ChargeFlags, kind: DayKind, holiday: bool) -> i64 {
    let counted = (flags.weekend && kind == DayKind::Weekend)
        || (flags.weekday && kind == DayKind::Weekday)
        || (flags.holiday && holiday);

    let mut net = i64::from(counted);
    if !flags.holiday && holiday {
        net -= 1;
    }
    net
}

/// Counts billed days between `checkout_date` (exclusive) and `due_date`
/// (inclusive).
///
/// Returns 0 when `due_date` is not after `checkout_date`.
pub fn chargeable_days(flags: ChargeFlags, checkout_date: NaiveDate, due_date: NaiveDate) -> i64 {
    let mut charge_days = 0;
    let mut date = checkout_date;

    while date < due_date {
        // date < due_date <= NaiveDate::MAX, so the successor always exists
        date = match date.checked_add_days(Days::new(1)) {
            Some(next) => next,
            None => break,
        };

        let kind = DayKind::of(date);
        let holiday = is_holiday(date);
        let net = day_charge(flags, kind, holiday);
        trace!(%date, ?kind, holiday, net, "billing date");
        charge_days += net;
    }

    charge_days
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const WEEKDAY_ONLY: ChargeFlags = ChargeFlags::new(true, false, false);
    const LADDER: ChargeFlags = ChargeFlags::new(true, true, false);
    const CHAINSAW: ChargeFlags = ChargeFlags::new(true, false, true);
    const WEEKEND_ONLY: ChargeFlags = ChargeFlags::new(false, true, false);

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_charge_policy_table() {
        // Plain weekday
        assert_eq!(day_charge(LADDER, DayKind::Weekday, false), 1);
        assert_eq!(day_charge(WEEKEND_ONLY, DayKind::Weekday, false), 0);
        // Plain weekend
        assert_eq!(day_charge(LADDER, DayKind::Weekend, false), 1);
        assert_eq!(day_charge(CHAINSAW, DayKind::Weekend, false), 0);
        // Weekday holiday
        assert_eq!(day_charge(CHAINSAW, DayKind::Weekday, true), 1);
        assert_eq!(day_charge(LADDER, DayKind::Weekday, true), 0);
        assert_eq!(day_charge(WEEKDAY_ONLY, DayKind::Weekday, true), 0);
        assert_eq!(day_charge(WEEKEND_ONLY, DayKind::Weekday, true), -1);
        // Holiday-only tool
        let holiday_only = ChargeFlags::new(false, false, true);
        assert_eq!(day_charge(holiday_only, DayKind::Weekday, true), 1);
        assert_eq!(day_charge(holiday_only, DayKind::Weekday, false), 0);
    }

    #[test]
    fn test_checkout_day_is_not_billed() {
        // Thu 2020-07-02 → Fri 2020-07-03 (observed holiday)
        assert_eq!(chargeable_days(CHAINSAW, date(2020, 7, 2), date(2020, 7, 3)), 1);
        // Wed → Thu, plain weekday
        assert_eq!(chargeable_days(WEEKDAY_ONLY, date(2020, 7, 1), date(2020, 7, 2)), 1);
    }

    #[test]
    fn test_ladder_over_independence_day_weekend() {
        // Fri holiday (0), Sat (+1), Sun (+1)
        assert_eq!(chargeable_days(LADDER, date(2020, 7, 2), date(2020, 7, 5)), 2);
    }

    #[test]
    fn test_chainsaw_over_independence_day_weekend() {
        // Fri holiday (+1), Sat, Sun, Mon (+1), Tue (+1)
        assert_eq!(chargeable_days(CHAINSAW, date(2015, 7, 2), date(2015, 7, 7)), 3);
    }

    #[test]
    fn test_jackhammer_over_labor_day() {
        // Fri (+1), Sat, Sun, Labor Day Mon (0), Tue (+1), Wed (+1)
        assert_eq!(chargeable_days(WEEKDAY_ONLY, date(2015, 9, 3), date(2015, 9, 9)), 3);
    }

    #[test]
    fn test_weekend_only_tool_is_decremented_on_weekday_holiday() {
        // Sat 2015-09-05 (+1), Sun (+1), Labor Day Mon (-1)
        assert_eq!(chargeable_days(WEEKEND_ONLY, date(2015, 9, 4), date(2015, 9, 7)), 1);
        // Only the holiday in range: the count goes negative
        assert_eq!(chargeable_days(WEEKEND_ONLY, date(2015, 9, 6), date(2015, 9, 7)), -1);
    }

    #[test]
    fn test_empty_or_inverted_period() {
        let d = date(2020, 7, 2);
        assert_eq!(chargeable_days(LADDER, d, d), 0);
        assert_eq!(chargeable_days(LADDER, d, date(2020, 6, 1)), 0);
    }

    #[test]
    fn test_period_crossing_year_end() {
        // Wed 12/31, Thu 1/1, Fri 1/2, Mon 1/5 billed; New Year is not a holiday here
        assert_eq!(chargeable_days(WEEKDAY_ONLY, date(2014, 12, 30), date(2015, 1, 5)), 4);
    }

    #[test]
    fn test_is_deterministic() {
        let first = chargeable_days(LADDER, date(2015, 6, 1), date(2015, 9, 30));
        let second = chargeable_days(LADDER, date(2015, 6, 1), date(2015, 9, 30));
        assert_eq!(first, second);
    }
}
