//! `Date` type.
//!
//! A proleptic Gregorian calendar date stored as its `(year, month, day)`
//! components.  Field order matches calendar order, so the derived `Ord`
//! is chronological.
//!
//! # Range
//! * Years run from 1 to 9999, the span a four-digit `YYYY` can name.
//! * Every `Date` value is a valid calendar date; the constructors reject
//!   anything else.

use std::str::FromStr;

use acct_core::errors::{Error, Result};
use acct_core::utilities::data_parsers::parse_iso_date;
use acct_core::{ensure, fail};

use crate::month_token::MonthToken;

/// A calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: u16,
    month: u8,
    day: u8,
}

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Smallest supported year.
    pub const MIN_YEAR: u16 = 1;

    /// Largest supported year.
    pub const MAX_YEAR: u16 = 9999;

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date {
        year: Self::MIN_YEAR,
        month: 1,
        day: 1,
    };

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date {
        year: Self::MAX_YEAR,
        month: 12,
        day: 31,
    };

    /// First date covered by the `all` period (2022-01-01).
    pub const DATA_START: Date = Date {
        year: 2022,
        month: 1,
        day: 1,
    };

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        ensure!(
            (Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year),
            Error::InvalidDate(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            ))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::InvalidDate(format!("month {month} out of range [1, 12]"))
        );
        let days_in = days_in_month(year, month);
        ensure!(
            day >= 1 && day <= days_in,
            Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            ))
        );
        Ok(Date { year, month, day })
    }

    /// January 1 of `year`.
    pub fn start_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 1, 1)
    }

    /// December 31 of `year`.
    pub fn end_of_year(year: u16) -> Result<Self> {
        Self::from_ymd(year, 12, 31)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        self.day
    }

    /// Return the calendar month containing this date.
    pub fn month_token(&self) -> MonthToken {
        MonthToken::from(*self)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Add (or, for negative `months`, subtract) calendar months.
    ///
    /// The day of the month is kept when the target month has it; otherwise
    /// it is walked back until it fits, so Jan 31 + 1 month lands on the
    /// last day of February.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the target year leaves
    /// [`MIN_YEAR`](Self::MIN_YEAR)..=[`MAX_YEAR`](Self::MAX_YEAR).
    pub fn add_months(self, months: i32) -> Result<Self> {
        // Zero-based month index; floor division rolls negative offsets back
        // into earlier years.
        let index = i64::from(self.month) - 1 + i64::from(months);
        let year = i64::from(self.year) + index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u8;
        ensure!(
            (i64::from(Self::MIN_YEAR)..=i64::from(Self::MAX_YEAR)).contains(&year),
            Error::InvalidDate(format!(
                "{self} {months:+} months: year {year} out of range"
            ))
        );
        let year = year as u16;

        let mut day = self.day;
        while day >= 1 {
            if day <= days_in_month(year, month) {
                return Ok(Date { year, month, day });
            }
            day -= 1;
        }
        fail!("no valid day in {year:04}-{month:02}")
    }

    /// Return the first day of the month containing this date.
    pub fn first_of_month(self) -> Self {
        Date { day: 1, ..self }
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Date {
            day: days_in_month(self.year, self.month),
            ..self
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }
}

// ── Parsing / formatting ──────────────────────────────────────────────────────

impl FromStr for Date {
    type Err = Error;

    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Both malformed text and impossible dates such as `2025-02-30` report
    /// [`Error::InvalidDateFormat`] carrying the input.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateFormat(s.to_string());
        let (y, m, d) = parse_iso_date(s).ok_or_else(invalid)?;
        Date::from_ymd(y, m, d).map_err(|_| invalid())
    }
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(d: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;

        let year = u16::try_from(d.year())
            .map_err(|_| Error::InvalidDate(format!("year {} out of range", d.year())))?;
        // month() and day() are 1–12 and 1–31 by construction.
        Date::from_ymd(year, d.month() as u8, d.day() as u8)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Add (or subtract) calendar months to `date`, clamping the day of the
/// month.  Free-function form of [`Date::add_months`].
pub fn add_months(date: Date, months: i32) -> Result<Date> {
    date.add_months(months)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
