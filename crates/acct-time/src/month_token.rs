//! `MonthToken` — one calendar month, written `YYYY-MM`.

use std::str::FromStr;

use acct_core::ensure;
use acct_core::errors::{Error, Result};
use acct_core::utilities::data_parsers::parse_year_month;

use crate::date::{days_in_month, Date};

/// A calendar month of a specific year.
///
/// Ordered chronologically; displays as `YYYY-MM`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthToken {
    year: u16,
    month: u8,
}

impl MonthToken {
    /// Create a month token from a year (1–9999) and month (1–12).
    pub fn new(year: u16, month: u8) -> Result<Self> {
        ensure!(
            (Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year),
            Error::InvalidDate(format!("year {year} out of range"))
        );
        ensure!(
            (1..=12).contains(&month),
            Error::InvalidDate(format!("month {month} out of range [1, 12]"))
        );
        Ok(Self { year, month })
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> Date {
        self.day(1)
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> Date {
        self.day(days_in_month(self.year, self.month))
    }

    /// The following month, or `None` after 9999-12.
    pub fn following(&self) -> Option<Self> {
        self.first_day().add_months(1).ok().map(Self::from)
    }

    fn day(&self, day: u8) -> Date {
        // year and month were validated on construction and `day` is
        // within the month, so this cannot fail.
        match Date::from_ymd(self.year, self.month, day) {
            Ok(d) => d,
            Err(_) => unreachable!("{self} day {day} out of range"),
        }
    }
}

impl From<Date> for MonthToken {
    fn from(d: Date) -> Self {
        Self {
            year: d.year(),
            month: d.month(),
        }
    }
}

impl FromStr for MonthToken {
    type Err = Error;

    /// Parse a strict `YYYY-MM` string.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::InvalidDateFormat(s.to_string());
        let (year, month) = parse_year_month(s).ok_or_else(invalid)?;
        Self::new(year, month).map_err(|_| invalid())
    }
}

impl std::fmt::Display for MonthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl std::fmt::Debug for MonthToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "MonthToken({self})")
    }
}

impl PartialEq<str> for MonthToken {
    fn eq(&self, other: &str) -> bool {
        other.parse::<MonthToken>().is_ok_and(|m| m == *self)
    }
}

impl PartialEq<&str> for MonthToken {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for MonthToken {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for MonthToken {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
