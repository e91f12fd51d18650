//! # acct-time
//!
//! Date, quarter, period-token, and month-range types.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Reference-date sources (`Clock`, `SystemClock`, `FixedClock`).
pub mod clock;

/// `Date` type and month arithmetic.
pub mod date;

/// `MonthRange` — months covered by a date range.
pub mod month_range;

/// `MonthToken` — one `YYYY-MM` calendar month.
pub mod month_token;

/// Period tokens and the `PeriodParser`.
pub mod period;

/// `Quarter` — calendar quarter.
pub mod quarter;

/// `DateRange` and its bounded / open end.
pub mod range;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use clock::{Clock, FixedClock, SystemClock};
pub use date::{add_months, Date};
pub use month_range::{generate_months, MonthRange};
pub use month_token::MonthToken;
pub use period::{parse_period, PeriodParser, PeriodToken, DATA_START_DATE};
pub use quarter::Quarter;
pub use range::{DateRange, RangeEnd};
