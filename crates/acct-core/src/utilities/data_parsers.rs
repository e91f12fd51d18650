//! Data parsing helpers.
//!
//! Fixed-width readers for the ASCII wire formats used across the
//! workspace: `YYYY-MM-DD` dates and `YYYY-MM` month tokens.  These only
//! check shape; calendar validity is the caller's job.

/// Return `true` if `s` is non-empty and made only of ASCII digits.
pub fn is_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Parse exactly `width` ASCII digits as an unsigned number.
///
/// Signs, whitespace, and non-ASCII digits are rejected.
pub fn parse_fixed_digits(s: &str, width: usize) -> Option<u32> {
    if s.len() != width || !is_ascii_digits(s) {
        return None;
    }
    s.parse().ok()
}

/// Parse a strict ISO 8601 calendar date (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.  Surrounding whitespace and
/// unpadded fields are rejected.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let mut parts = s.split('-');
    let year = parse_fixed_digits(parts.next()?, 4)?;
    let month = parse_fixed_digits(parts.next()?, 2)?;
    let day = parse_fixed_digits(parts.next()?, 2)?;
    if parts.next().is_some() {
        return None;
    }
    Some((year as u16, month as u8, day as u8))
}

/// Parse a strict year-month token (`YYYY-MM`).
///
/// Returns `(year, month)` on success.
pub fn parse_year_month(s: &str) -> Option<(u16, u8)> {
    let (year, month) = s.split_once('-')?;
    let year = parse_fixed_digits(year, 4)?;
    let month = parse_fixed_digits(month, 2)?;
    Some((year as u16, month as u8))
}
