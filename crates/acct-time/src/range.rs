//! `DateRange` — a start date with a bounded or open end.

use acct_core::ensure;
use acct_core::errors::{Error, Result};

use crate::clock::Clock;
use crate::date::Date;
use crate::month_range::MonthRange;

/// The end of a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RangeEnd {
    /// The range ends on this date, inclusive.
    Bounded(Date),
    /// The range runs through the present / latest available data.
    Open,
}

impl RangeEnd {
    /// The end date, or `None` for an open end.
    pub fn date(&self) -> Option<Date> {
        match self {
            RangeEnd::Bounded(d) => Some(*d),
            RangeEnd::Open => None,
        }
    }

    /// Return `true` for [`RangeEnd::Open`].
    pub fn is_open(&self) -> bool {
        matches!(self, RangeEnd::Open)
    }

    /// The effective end date: the bound itself, or `today` when open.
    pub fn resolve(&self, today: Date) -> Date {
        match self {
            RangeEnd::Bounded(d) => *d,
            RangeEnd::Open => today,
        }
    }
}

impl From<Option<Date>> for RangeEnd {
    fn from(d: Option<Date>) -> Self {
        d.map_or(RangeEnd::Open, RangeEnd::Bounded)
    }
}

/// An inclusive date range whose end may be open.
///
/// Bounded ranges always satisfy `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "DateRangeRepr", into = "DateRangeRepr")
)]
pub struct DateRange {
    start: Date,
    end: RangeEnd,
}

impl DateRange {
    /// A closed range `[start, end]`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `start > end`.
    pub fn bounded(start: Date, end: Date) -> Result<Self> {
        ensure!(
            start <= end,
            Error::InvalidDate(format!("range start {start} is after end {end}"))
        );
        Ok(Self {
            start,
            end: RangeEnd::Bounded(end),
        })
    }

    /// A range from `start` with no end.
    pub fn open(start: Date) -> Self {
        Self {
            start,
            end: RangeEnd::Open,
        }
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// End of the range.
    pub fn end(&self) -> RangeEnd {
        self.end
    }

    /// Start date as `YYYY-MM-DD`.
    pub fn start_iso(&self) -> String {
        self.start.to_string()
    }

    /// End date as `YYYY-MM-DD`, or `None` for an open end.
    pub fn end_iso(&self) -> Option<String> {
        self.end.date().map(|d| d.to_string())
    }

    /// Return `true` if `date` falls inside the range.  Open ranges have no
    /// upper limit.
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && self.end.date().map_or(true, |end| date <= end)
    }

    /// Calendar months the range touches, with an open end resolved against
    /// `clock`.
    pub fn months(&self, clock: &(impl Clock + ?Sized)) -> MonthRange {
        MonthRange::new(self.start, self.end.resolve(clock.today()))
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.end {
            RangeEnd::Bounded(end) => write!(f, "{}..{end}", self.start),
            RangeEnd::Open => write!(f, "{}..", self.start),
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct DateRangeRepr {
    start: Date,
    end: Option<Date>,
}

#[cfg(feature = "serde")]
impl TryFrom<DateRangeRepr> for DateRange {
    type Error = Error;

    fn try_from(r: DateRangeRepr) -> Result<Self> {
        match r.end {
            Some(end) => DateRange::bounded(r.start, end),
            None => Ok(DateRange::open(r.start)),
        }
    }
}

#[cfg(feature = "serde")]
impl From<DateRange> for DateRangeRepr {
    fn from(r: DateRange) -> Self {
        Self {
            start: r.start,
            end: r.end.date(),
        }
    }
}
