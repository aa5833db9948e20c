//! Calendar span helpers for storage billing.
//!
//! Storage is billed in 30-day months over the nominal contract span.
//! This module provides deterministic span arithmetic over calendar dates.

use chrono::NaiveDate;

/// Number of days in one billing month.
pub const DAYS_PER_BILLING_MONTH: i64 = 30;

/// Signed number of days from `first` to `last`.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use storage_simulator_core_rs::days_between;
///
/// let first = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// let last = NaiveDate::from_ymd_opt(2023, 10, 31).unwrap();
/// assert_eq!(days_between(first, last), 30);
/// ```
pub fn days_between(first: NaiveDate, last: NaiveDate) -> i64 {
    (last - first).num_days()
}

/// Number of 30-day billing months covered by the span from `first` to `last`.
///
/// Partial months are rounded up: a span of 31 days bills 2 months.
/// Spans of zero or negative length bill nothing.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use storage_simulator_core_rs::billing_months;
///
/// let first = NaiveDate::from_ymd_opt(2023, 10, 1).unwrap();
/// let last = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
/// assert_eq!(billing_months(first, last), 2);
/// ```
pub fn billing_months(first: NaiveDate, last: NaiveDate) -> i64 {
    let days = days_between(first, last);
    if days <= 0 {
        return 0;
    }
    (days + DAYS_PER_BILLING_MONTH - 1) / DAYS_PER_BILLING_MONTH
}
