//! Day-precision clock collaborator.

use chrono::{Local, NaiveDate};

/// Supplies "today" as a calendar date.
///
/// The session reads the clock exactly once per activation pass, so the
/// date stays consistent across all three transforms even when a pass
/// straddles midnight.
pub trait Clock {
    /// Current calendar date, day precision.
    fn today(&self) -> NaiveDate;
}

/// Clock reading the local civil date.
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a fixed date, for tests and replays.
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_returns_its_date() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 5).unwrap();
        assert_eq!(FixedClock(date).today(), date);
    }

    #[test]
    fn system_clock_returns_a_plausible_date() {
        let today = SystemClock.today();
        let floor = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
        assert!(today >= floor);
    }
}
