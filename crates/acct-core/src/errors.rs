//! Error types for acctperiods.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum defined here.  The [`ensure!`] and
//! [`fail!`] macros give call sites a terse early-return form.

use thiserror::Error;

/// The top-level error type used throughout acctperiods.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A period token matched none of the recognised shapes.
    ///
    /// Carries the token after trimming and lowercasing.
    #[error("invalid period format: {0}")]
    InvalidPeriodFormat(String),

    /// A string could not be read as a `YYYY-MM-DD` date (or `YYYY-MM`
    /// month token).
    #[error("invalid date format: {0:?}")]
    InvalidDateFormat(String),

    /// Date components that do not form a valid calendar date, or date
    /// arithmetic that left the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),
}

/// Shorthand `Result` type used throughout acctperiods.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err($err)` from the enclosing function if `$cond` is false.
///
/// # Example
/// ```
/// use acct_core::{ensure, errors::{Error, Result}};
/// fn month(m: u8) -> Result<u8> {
///     ensure!((1..=12).contains(&m), Error::InvalidDate(format!("month {m}")));
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert!(month(13).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr) => {
        if !$cond {
            return Err($err);
        }
    };
}

/// Return `Err(Error::InvalidDate(...))` immediately.
///
/// # Example
/// ```
/// use acct_core::{fail, errors::Result};
/// fn always_err() -> Result<()> {
///     fail!("day {} underflowed", 0);
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::InvalidDate(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            Error::InvalidPeriodFormat("bogus".into()).to_string(),
            "invalid period format: bogus"
        );
        assert_eq!(
            Error::InvalidDateFormat("2025/01/01".into()).to_string(),
            "invalid date format: \"2025/01/01\""
        );
        assert_eq!(
            Error::InvalidDate("day 0 out of range".into()).to_string(),
            "invalid date: day 0 out of range"
        );
    }

    #[test]
    fn ensure_short_circuits() {
        fn check(x: i32) -> Result<i32> {
            ensure!(x > 0, Error::InvalidDate(format!("{x}")));
            Ok(x)
        }
        assert_eq!(check(1), Ok(1));
        assert_eq!(check(-1), Err(Error::InvalidDate("-1".into())));
    }
}
