//! Reference-date sources.
//!
//! Period tokens such as `ytd` or `q2`, and month ranges without an end
//! date, are resolved against "today".  Callers hand in a [`Clock`] instead
//! of the library reading the wall clock behind their back, so results are
//! reproducible under a [`FixedClock`].

use crate::date::Date;

/// Supplies the current date.
pub trait Clock {
    /// The date calculations treat as today.
    fn today(&self) -> Date;
}

/// The local wall-clock date, read through `chrono`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> Date {
        // Local dates past 9999-12-31 saturate.
        Date::try_from(chrono::Local::now().date_naive()).unwrap_or(Date::MAX)
    }
}

/// A clock pinned to one date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedClock(pub Date);

impl FixedClock {
    /// Create a clock that always reports `date`.
    pub fn new(date: Date) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> Date {
        self.0
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> Date {
        (**self).today()
    }
}

impl<C: Clock + ?Sized> Clock for Box<C> {
    fn today(&self) -> Date {
        (**self).today()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_is_fixed() {
        let d = Date::from_ymd(2025, 6, 15).unwrap();
        let clock = FixedClock::new(d);
        assert_eq!(clock.today(), d);
        assert_eq!((&clock).today(), d);
        let boxed: Box<dyn Clock> = Box::new(clock);
        assert_eq!(boxed.today(), d);
    }

    #[test]
    fn system_clock_reports_a_valid_date() {
        let today = SystemClock.today();
        assert_eq!(today.to_string().parse::<Date>(), Ok(today));
    }
}
