//! # Holiday Calendar
//!
//! The two holidays the rental counter recognizes, as observed dates.
//!
//! ```text
//! Independence Day   July 4th, shifted off the weekend
//!   Sat Jul 4 ──► Fri Jul 3
//!   Sun Jul 4 ──► Mon Jul 5
//!
//! Labor Day          first Monday in September
//! ```
//!
//! Each date is checked against the holidays of its own year only.

use chrono::{Datelike, Days, NaiveDate, Weekday};

/// Observed Independence Day for `year`.
///
/// Returns `None` only for years outside chrono's calendar range.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use toolrent_core::holiday::independence_day;
///
/// // July 4th 2020 was a Saturday
/// assert_eq!(independence_day(2020), NaiveDate::from_ymd_opt(2020, 7, 3));
/// ```
pub fn independence_day(year: i32) -> Option<NaiveDate> {
    let july_4th = NaiveDate::from_ymd_opt(year, 7, 4)?;
    match july_4th.weekday() {
        Weekday::Sat => july_4th.checked_sub_days(Days::new(1)),
        Weekday::Sun => july_4th.checked_add_days(Days::new(1)),
        _ => Some(july_4th),
    }
}

/// Labor Day (first Monday in September) for `year`.
///
/// ## Example
/// ```rust
/// use chrono::NaiveDate;
/// use toolrent_core::holiday::labor_day;
///
/// assert_eq!(labor_day(2015), NaiveDate::from_ymd_opt(2015, 9, 7));
/// ```
pub fn labor_day(year: i32) -> Option<NaiveDate> {
    NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)
}

/// Returns true if `date` is an observed holiday.
pub fn is_holiday(date: NaiveDate) -> bool {
    let year = date.year();
    independence_day(year) == Some(date) || labor_day(year) == Some(date)
}

// =============================================================================
// Unit Tests
// =============================================================================
