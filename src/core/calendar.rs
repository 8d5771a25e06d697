//! Calendar day arithmetic.
//!
//! Every elapsed-time rule in the engine is expressed in whole calendar
//! days, so the single utility here is an absolute day-count difference.

use chrono::NaiveDate;

/// Absolute number of whole days between two calendar dates.
///
/// The count is unsigned: only the magnitude of the gap matters, never
/// the direction of the two dates.
///
/// # Example
///
/// ```rust
/// use chrono::NaiveDate;
/// use oosan::days_between;
///
/// let monday = NaiveDate::from_ymd_opt(2026, 8, 3).unwrap();
/// let friday = NaiveDate::from_ymd_opt(2026, 8, 7).unwrap();
///
/// assert_eq!(days_between(monday, friday), 4);
/// assert_eq!(days_between(friday, monday), 4);
/// assert_eq!(days_between(monday, monday), 0);
/// ```
pub fn days_between(a: NaiveDate, b: NaiveDate) -> u64 {
    (b - a).num_days().unsigned_abs()
}
