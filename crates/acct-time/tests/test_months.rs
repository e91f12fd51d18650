//! Integration tests for month arithmetic and month-range expansion.

use acct_core::Error;
use acct_time::{add_months, generate_months, Date, FixedClock, MonthRange, MonthToken};
use proptest::prelude::*;

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn months(start: &str, end: Option<&str>) -> Vec<String> {
    let clock = FixedClock::new(date(2025, 10, 16));
    generate_months(start, end, &clock)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect()
}

// ─── add_months ───────────────────────────────────────────────────────────────

#[test]
fn month_end_clamping() {
    assert_eq!(add_months(date(2024, 1, 31), 1).unwrap(), date(2024, 2, 29));
    assert_eq!(add_months(date(2025, 1, 31), 1).unwrap(), date(2025, 2, 28));
    assert_eq!(add_months(date(2025, 5, 31), 1).unwrap(), date(2025, 6, 30));
    assert_eq!(add_months(date(2025, 8, 31), 1).unwrap(), date(2025, 9, 30));
    assert_eq!(add_months(date(2024, 2, 29), 12).unwrap(), date(2025, 2, 28));
}

#[test]
fn negative_offsets_roll_back_years() {
    assert_eq!(add_months(date(2025, 1, 15), -1).unwrap(), date(2024, 12, 15));
    assert_eq!(add_months(date(2025, 3, 31), -1).unwrap(), date(2025, 2, 28));
    assert_eq!(add_months(date(2025, 3, 31), -25).unwrap(), date(2023, 2, 28));
}

#[test]
fn out_of_range_is_invalid_date() {
    assert!(matches!(
        add_months(date(9999, 12, 1), 1),
        Err(Error::InvalidDate(_))
    ));
}

// ─── generate_months ──────────────────────────────────────────────────────────

#[test]
fn within_one_year() {
    assert_eq!(
        months("2025-01-15", Some("2025-03-20")),
        ["2025-01", "2025-02", "2025-03"]
    );
}

#[test]
fn across_year_boundary() {
    assert_eq!(
        months("2024-11-01", Some("2025-02-15")),
        ["2024-11", "2024-12", "2025-01", "2025-02"]
    );
}

#[test]
fn open_end_runs_through_today() {
    let got = months("2025-08-31", None);
    assert_eq!(got, ["2025-08", "2025-09", "2025-10"]);
}

#[test]
fn start_after_end_is_empty() {
    assert!(months("2025-03-01", Some("2025-01-31")).is_empty());
}

#[test]
fn start_after_end_in_same_month_is_empty() {
    assert!(months("2025-03-20", Some("2025-03-10")).is_empty());
}

#[test]
fn malformed_start_reports_input() {
    let clock = FixedClock::new(date(2025, 10, 16));
    assert_eq!(
        generate_months("2025-1-15", None, &clock),
        Err(Error::InvalidDateFormat("2025-1-15".into()))
    );
    assert_eq!(
        generate_months("2025-01-15", Some("2025-02-30"), &clock),
        Err(Error::InvalidDateFormat("2025-02-30".into()))
    );
}

// ─── Properties ───────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = Date> {
    (1900u16..=2199, 1u8..=12, 1u8..=31).prop_map(|(y, m, d)| {
        let last = date(y, m, 1).end_of_month().day_of_month();
        date(y, m, d.min(last))
    })
}

proptest! {
    #[test]
    fn add_then_subtract_restores_unclamped(d in any_date(), n in -600i32..=600) {
        let there = add_months(d, n).unwrap();
        // Only meaningful when neither step had to clamp the day.
        prop_assume!(there.day_of_month() == d.day_of_month());
        prop_assert_eq!(add_months(there, -n).unwrap(), d);
    }

    #[test]
    fn add_months_moves_by_whole_months(d in any_date(), n in -600i32..=600) {
        let there = add_months(d, n).unwrap();
        let before = i32::from(d.year()) * 12 + i32::from(d.month());
        let after = i32::from(there.year()) * 12 + i32::from(there.month());
        prop_assert_eq!(after - before, n);
        prop_assert!(there.day_of_month() <= d.day_of_month());
    }

    #[test]
    fn month_ranges_are_contiguous(start in any_date(), end in any_date()) {
        let tokens: Vec<MonthToken> = MonthRange::new(start, end).collect();
        if start > end {
            prop_assert!(tokens.is_empty());
        } else {
            prop_assert_eq!(tokens.first().copied(), Some(start.month_token()));
            prop_assert_eq!(tokens.last().copied(), Some(end.month_token()));
            for pair in tokens.windows(2) {
                prop_assert_eq!(pair[0].following(), Some(pair[1]));
            }
        }
    }
}
