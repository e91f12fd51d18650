//! # acctperiods
//!
//! Accounting period utilities: turn tokens such as `ytd`, `q2`, `2024`,
//! `2024-q2`, or `2025-03` into concrete date ranges, add calendar months
//! with day-of-month clamping, and expand ranges into `YYYY-MM` months.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates.
//!
//! ## Quick start
//!
//! ```rust
//! use acctperiods::{generate_months, parse_period, Date, FixedClock};
//!
//! let clock = FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap());
//!
//! let q2 = parse_period("2024-q2", &clock).unwrap();
//! assert_eq!(q2.to_string(), "2024-04-01..2024-06-30");
//!
//! let months = generate_months("2025-01-15", Some("2025-03-20"), &clock).unwrap();
//! assert_eq!(months.len(), 3);
//! ```
//!
//! Use [`SystemClock`] to resolve against the local date.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error definitions and parsing helpers.
pub use acct_core as core;

/// Date, quarter, period, and month-range types.
pub use acct_time as time;

pub use acct_core::{Error, Result};
pub use acct_time::{
    add_months, generate_months, parse_period, Clock, Date, DateRange, FixedClock, MonthRange,
    MonthToken, PeriodParser, PeriodToken, Quarter, RangeEnd, SystemClock, DATA_START_DATE,
};

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn date_range_json() {
        let clock = FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap());
        let closed = parse_period("2024-q2", &clock).unwrap();
        let json = serde_json::to_string(&closed).unwrap();
        assert_eq!(json, r#"{"start":"2024-04-01","end":"2024-06-30"}"#);
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), closed);

        let open = parse_period("all", &clock).unwrap();
        let json = serde_json::to_string(&open).unwrap();
        assert_eq!(json, r#"{"start":"2022-01-01","end":null}"#);
        assert_eq!(serde_json::from_str::<DateRange>(&json).unwrap(), open);
    }

    #[test]
    fn reversed_range_is_rejected() {
        let json = r#"{"start":"2024-06-30","end":"2024-04-01"}"#;
        assert!(serde_json::from_str::<DateRange>(json).is_err());
    }

    #[test]
    fn month_tokens_json() {
        let clock = FixedClock::new(Date::from_ymd(2025, 10, 16).unwrap());
        let months = generate_months("2024-11-01", Some("2025-01-15"), &clock).unwrap();
        let json = serde_json::to_string(&months).unwrap();
        assert_eq!(json, r#"["2024-11","2024-12","2025-01"]"#);
        let back: Vec<MonthToken> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, months);
    }
}
