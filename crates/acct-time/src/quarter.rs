//! `Quarter` — calendar quarter of a year.

use acct_core::errors::Result;

use crate::date::{days_in_month, Date};
use crate::range::DateRange;

/// Calendar quarter.
///
/// Variants are numbered 1–4.  Quarters follow the calendar year:
///
/// | Quarter | Start   | End     |
/// |---------|---------|---------|
/// | Q1      | 01-01   | 03-31   |
/// | Q2      | 04-01   | 06-30   |
/// | Q3      | 07-01   | 09-30   |
/// | Q4      | 10-01   | 12-31   |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Quarter {
    /// January through March (1).
    Q1 = 1,
    /// April through June (2).
    Q2 = 2,
    /// July through September (3).
    Q3 = 3,
    /// October through December (4).
    Q4 = 4,
}

impl Quarter {
    /// All four quarters in calendar order.
    pub const ALL: [Quarter; 4] = [Quarter::Q1, Quarter::Q2, Quarter::Q3, Quarter::Q4];

    /// Construct from a number (1 = Q1 … 4 = Q4).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Quarter::Q1),
            2 => Some(Quarter::Q2),
            3 => Some(Quarter::Q3),
            4 => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// Parse the lowercase token form `q1`..`q4`.
    pub fn from_token(s: &str) -> Option<Self> {
        match s {
            "q1" => Some(Quarter::Q1),
            "q2" => Some(Quarter::Q2),
            "q3" => Some(Quarter::Q3),
            "q4" => Some(Quarter::Q4),
            _ => None,
        }
    }

    /// The quarter containing `month` (1–12).
    pub fn of_month(month: u8) -> Option<Self> {
        match month {
            1..=12 => Self::from_number((month - 1) / 3 + 1),
            _ => None,
        }
    }

    /// Return the 1-based quarter number.
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// First month of the quarter (1, 4, 7, or 10).
    pub fn first_month(&self) -> u8 {
        self.number() * 3 - 2
    }

    /// Last month of the quarter (3, 6, 9, or 12).
    pub fn last_month(&self) -> u8 {
        self.number() * 3
    }

    /// First day of the quarter in `year`.
    pub fn start(&self, year: u16) -> Result<Date> {
        Date::from_ymd(year, self.first_month(), 1)
    }

    /// Last day of the quarter in `year`.
    pub fn end(&self, year: u16) -> Result<Date> {
        let month = self.last_month();
        Date::from_ymd(year, month, days_in_month(year, month))
    }

    /// The closed date range the quarter covers in `year`.
    pub fn range(&self, year: u16) -> Result<DateRange> {
        DateRange::bounded(self.start(year)?, self.end(year)?)
    }
}

impl std::fmt::Display for Quarter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Q{}", self.number())
    }
}

impl From<Quarter> for u8 {
    fn from(q: Quarter) -> u8 {
        q as u8
    }
}
