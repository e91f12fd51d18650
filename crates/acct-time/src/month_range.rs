//! `MonthRange` — the calendar months a date range touches.
//!
//! The range is walked one month at a time with [`Date::add_months`],
//! starting from the first day of the start month, until the running date
//! passes the end date.  Because the comparison is date-level and the
//! cursor sits on the 1st, a start or end in mid-month still includes both
//! boundary months.
//!
//! Walking from the raw start date instead would drift: 01-31 steps to
//! 02-28 and then 03-28, which is already past an end of 03-01, so March
//! would be skipped.  Keep the cursor on the 1st.
//!
//! A start after the end yields nothing, even when both fall in the same
//! month.

use std::iter::FusedIterator;

use acct_core::errors::Result;
use log::debug;

use crate::clock::Clock;
use crate::date::Date;
use crate::month_token::MonthToken;
use crate::range::RangeEnd;

/// Lazy iterator over the [`MonthToken`]s from a start date's month through
/// an end date's month, inclusive.
///
/// Empty when the start date is after the end date.
#[derive(Debug, Clone)]
pub struct MonthRange {
    cursor: Option<Date>,
    end: Date,
}

impl MonthRange {
    /// Months from `start`'s month through `end`'s month.
    pub fn new(start: Date, end: Date) -> Self {
        Self {
            cursor: (start <= end).then(|| start.first_of_month()),
            end,
        }
    }

    /// Months from `start` through `end`, with an open end resolved to
    /// `clock`'s today.
    pub fn resolve(start: Date, end: RangeEnd, clock: &(impl Clock + ?Sized)) -> Self {
        Self::new(start, end.resolve(clock.today()))
    }

    /// The effective (inclusive) end date.
    pub fn end(&self) -> Date {
        self.end
    }

    fn remaining(&self) -> usize {
        match self.cursor {
            Some(c) if c <= self.end => {
                let years = usize::from(self.end.year() - c.year());
                years * 12 + usize::from(self.end.month()) + 1 - usize::from(c.month())
            }
            _ => 0,
        }
    }
}

impl Iterator for MonthRange {
    type Item = MonthToken;

    fn next(&mut self) -> Option<MonthToken> {
        let current = self.cursor.filter(|c| *c <= self.end)?;
        // Stepping past 9999-12 ends the walk.
        self.cursor = current.add_months(1).ok();
        Some(current.month_token())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl ExactSizeIterator for MonthRange {}

impl FusedIterator for MonthRange {}

/// Expand `start_date` through `end_date` (both `YYYY-MM-DD`) into the
/// ordered list of month tokens covering them.
///
/// A missing `end_date` means "through today" as reported by `clock`.
///
/// # Errors
/// Returns [`Error::InvalidDateFormat`](acct_core::Error::InvalidDateFormat)
/// if either date string is malformed.
///
/// # Example
/// ```
/// use acct_time::{generate_months, Date, FixedClock};
///
/// let clock = FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap());
/// let months = generate_months("2024-11-01", Some("2025-02-15"), &clock).unwrap();
/// let months: Vec<String> = months.iter().map(|m| m.to_string()).collect();
/// assert_eq!(months, ["2024-11", "2024-12", "2025-01", "2025-02"]);
/// ```
pub fn generate_months(
    start_date: &str,
    end_date: Option<&str>,
    clock: &(impl Clock + ?Sized),
) -> Result<Vec<MonthToken>> {
    let start: Date = start_date.parse()?;
    let end = match end_date {
        Some(s) => RangeEnd::Bounded(s.parse()?),
        None => RangeEnd::Open,
    };
    let range = MonthRange::resolve(start, end, clock);
    let effective_end = range.end();
    let months: Vec<MonthToken> = range.collect();
    debug!(
        "expanded {start}..={effective_end} into {} month(s)",
        months.len()
    );
    Ok(months)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn tokens(range: MonthRange) -> Vec<String> {
        range.map(|m| m.to_string()).collect()
    }

    #[test]
    fn mid_month_boundaries() {
        let r = MonthRange::new(date(2025, 1, 15), date(2025, 3, 20));
        assert_eq!(r.len(), 3);
        assert_eq!(tokens(r), ["2025-01", "2025-02", "2025-03"]);
    }

    #[test]
    fn start_day_after_end_day() {
        // The end month is reached even though 31 > 1.
        let r = MonthRange::new(date(2025, 1, 31), date(2025, 3, 1));
        assert_eq!(tokens(r), ["2025-01", "2025-02", "2025-03"]);
    }

    #[test]
    fn single_day() {
        let r = MonthRange::new(date(2025, 2, 28), date(2025, 2, 28));
        assert_eq!(tokens(r), ["2025-02"]);
    }

    #[test]
    fn reversed_is_empty() {
        let r = MonthRange::new(date(2025, 3, 1), date(2025, 2, 28));
        assert_eq!(r.len(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn reversed_within_one_month_is_empty() {
        let r = MonthRange::new(date(2025, 3, 20), date(2025, 3, 10));
        assert_eq!(r.len(), 0);
        assert_eq!(r.count(), 0);
    }

    #[test]
    fn stops_at_max_date() {
        let r = MonthRange::new(date(9999, 11, 5), Date::MAX);
        assert_eq!(tokens(r), ["9999-11", "9999-12"]);
    }

    #[test]
    fn size_hint_tracks_progress() {
        let mut r = MonthRange::new(date(2024, 11, 1), date(2025, 2, 15));
        assert_eq!(r.len(), 4);
        r.next();
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn open_end_uses_clock() {
        let clock = FixedClock::new(date(2025, 3, 2));
        let months = generate_months("2024-12-31", None, &clock).unwrap();
        let months: Vec<String> = months.iter().map(ToString::to_string).collect();
        assert_eq!(months, ["2024-12", "2025-01", "2025-02", "2025-03"]);
    }

    #[test]
    fn malformed_dates() {
        let clock = FixedClock::new(date(2025, 3, 2));
        assert!(generate_months("2025/01/01", None, &clock).is_err());
        assert!(generate_months("2025-01-01", Some("soon"), &clock).is_err());
    }
}
