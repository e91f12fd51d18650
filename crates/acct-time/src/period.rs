//! Accounting period tokens.
//!
//! A [`PeriodToken`] is the typed form of a short, case-insensitive string
//! that selects a reporting range:
//!
//! | Token      | Range                                                 |
//! |------------|-------------------------------------------------------|
//! | `all`      | data start (2022-01-01) → open                        |
//! | `ytd`      | Jan 1 of the current year → open                      |
//! | `q1`..`q4` | that quarter of the current year                      |
//! | `YYYY`     | the whole year; open if it is the current year        |
//! | `YYYY-MM`  | that calendar month                                   |
//! | `YYYY-qN`  | that quarter of `YYYY`                                |
//!
//! "Current year" always comes from the injected [`Clock`], so a bare `q1`
//! parsed on Dec 31 and on Jan 1 names different quarters.

use std::str::FromStr;

use acct_core::errors::{Error, Result};
use acct_core::utilities::data_parsers::{is_ascii_digits, parse_fixed_digits};
use log::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::date::Date;
use crate::month_range::MonthRange;
use crate::month_token::MonthToken;
use crate::quarter::Quarter;
use crate::range::DateRange;

/// Start date of the `all` period.
pub const DATA_START_DATE: &str = "2022-01-01";

/// A parsed period token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeriodToken {
    /// `all` — everything from the data start date on.
    All,
    /// `ytd` — the current year so far.
    YearToDate,
    /// `q1`..`q4` — a quarter of the current year.
    Quarter(Quarter),
    /// `YYYY` — a calendar year.
    Year(u16),
    /// `YYYY-MM` — a calendar month.
    Month(MonthToken),
    /// `YYYY-qN` — a quarter of a given year.
    YearQuarter(u16, Quarter),
}

impl PeriodToken {
    /// Resolve the token to a date range.
    ///
    /// `today` anchors the tokens relative to the current year; `data_start`
    /// is where `all` begins.
    pub fn resolve(&self, today: Date, data_start: Date) -> Result<DateRange> {
        let current_year = today.year();
        match *self {
            PeriodToken::All => Ok(DateRange::open(data_start)),
            PeriodToken::YearToDate => Ok(DateRange::open(Date::start_of_year(current_year)?)),
            PeriodToken::Quarter(q) => q.range(current_year),
            // The in-progress year has no end yet.
            PeriodToken::Year(year) if year == current_year => {
                Ok(DateRange::open(Date::start_of_year(year)?))
            }
            PeriodToken::Year(year) => {
                DateRange::bounded(Date::start_of_year(year)?, Date::end_of_year(year)?)
            }
            PeriodToken::Month(m) => DateRange::bounded(m.first_day(), m.last_day()),
            PeriodToken::YearQuarter(year, q) => q.range(year),
        }
    }
}

impl FromStr for PeriodToken {
    type Err = Error;

    /// Parse a period token.  Surrounding whitespace is ignored and matching
    /// is case-insensitive.
    ///
    /// # Errors
    /// Returns [`Error::InvalidPeriodFormat`] carrying the normalised token
    /// when no shape matches.
    fn from_str(token: &str) -> Result<Self> {
        let period = token.trim().to_ascii_lowercase();
        let invalid = || Error::InvalidPeriodFormat(period.clone());

        match period.as_str() {
            "all" => return Ok(PeriodToken::All),
            "ytd" => return Ok(PeriodToken::YearToDate),
            _ => {}
        }

        if let Some(q) = Quarter::from_token(&period) {
            return Ok(PeriodToken::Quarter(q));
        }

        if period.len() == 4 && is_ascii_digits(&period) {
            return parse_year(&period).map(PeriodToken::Year).ok_or_else(invalid);
        }

        if period.len() == 7 {
            if let Some((year, rest)) = period.split_once('-') {
                let year = parse_year(year).ok_or_else(invalid)?;
                if is_ascii_digits(rest) {
                    let month = parse_fixed_digits(rest, 2).ok_or_else(invalid)?;
                    let month = MonthToken::new(year, month as u8).map_err(|_| invalid())?;
                    return Ok(PeriodToken::Month(month));
                }
                if let Some(q) = Quarter::from_token(rest) {
                    return Ok(PeriodToken::YearQuarter(year, q));
                }
            }
        }

        Err(invalid())
    }
}

impl std::fmt::Display for PeriodToken {
    /// The canonical lowercase token.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PeriodToken::All => write!(f, "all"),
            PeriodToken::YearToDate => write!(f, "ytd"),
            PeriodToken::Quarter(q) => write!(f, "q{}", q.number()),
            PeriodToken::Year(year) => write!(f, "{year:04}"),
            PeriodToken::Month(m) => write!(f, "{m}"),
            PeriodToken::YearQuarter(year, q) => write!(f, "{year:04}-q{}", q.number()),
        }
    }
}

/// A four-digit year in the supported range.
fn parse_year(s: &str) -> Option<u16> {
    let year = parse_fixed_digits(s, 4)? as u16;
    (Date::MIN_YEAR..=Date::MAX_YEAR)
        .contains(&year)
        .then_some(year)
}

/// Parses period tokens against a clock and a configurable data start.
///
/// # Example
/// ```
/// use acct_time::{Date, FixedClock, PeriodParser};
///
/// let parser = PeriodParser::new()
///     .with_clock(FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap()));
/// let range = parser.parse("2024-q2").unwrap();
/// assert_eq!(range.start_iso(), "2024-04-01");
/// assert_eq!(range.end_iso().as_deref(), Some("2024-06-30"));
/// ```
#[derive(Debug, Clone)]
pub struct PeriodParser<C = SystemClock> {
    clock: C,
    data_start: Date,
}

impl PeriodParser<SystemClock> {
    /// A parser reading the local date, with `all` starting at
    /// [`DATA_START_DATE`].
    pub fn new() -> Self {
        Self {
            clock: SystemClock,
            data_start: Date::DATA_START,
        }
    }
}

impl Default for PeriodParser<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> PeriodParser<C> {
    /// Replace the clock.
    pub fn with_clock<K: Clock>(self, clock: K) -> PeriodParser<K> {
        PeriodParser {
            clock,
            data_start: self.data_start,
        }
    }

    /// Set where the `all` period begins.
    pub fn with_data_start(mut self, data_start: Date) -> Self {
        self.data_start = data_start;
        self
    }

    /// The clock this parser resolves against.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Where the `all` period begins.
    pub fn data_start(&self) -> Date {
        self.data_start
    }

    /// Parse `token` into a date range.
    pub fn parse(&self, token: &str) -> Result<DateRange> {
        let period: PeriodToken = token.parse()?;
        trace!("period token {token:?} parsed as {period:?}");
        let range = period.resolve(self.clock.today(), self.data_start)?;
        debug!("period {period} resolved to {range}");
        Ok(range)
    }

    /// Parse `token` and expand it into the months it covers.  Open ends
    /// run through the clock's current month.
    pub fn months(&self, token: &str) -> Result<MonthRange> {
        Ok(self.parse(token)?.months(&self.clock))
    }
}

/// Parse an accounting period token into a date range, resolving relative
/// tokens against `clock`.
///
/// # Example
/// ```
/// use acct_time::{parse_period, Date, FixedClock, RangeEnd};
///
/// let clock = FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap());
/// let all = parse_period("all", &clock).unwrap();
/// assert_eq!(all.start_iso(), "2022-01-01");
/// assert_eq!(all.end(), RangeEnd::Open);
/// ```
pub fn parse_period(token: &str, clock: &(impl Clock + ?Sized)) -> Result<DateRange> {
    PeriodParser::new().with_clock(clock).parse(token)
}
