//! Utility functions for the analytics pipeline

use chrono::NaiveDate;

/// Parse a match date from the archive.
///
/// Archives that went through a DataFrame round-trip sometimes carry a time
/// component ("2008-04-18 00:00:00"); only the leading date part counts.
pub fn parse_match_date(raw: &str) -> Result<NaiveDate, chrono::format::ParseError> {
    let raw = raw.trim();
    let date_part = raw.get(..10).unwrap_or(raw);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
}

/// Parse a season label into a year.
///
/// Accepts plain years ("2008") as well as split-season labels ("2007/08"),
/// which resolve to the starting year. Anything without leading digits is
/// treated as unknown.
pub fn parse_season(raw: &str) -> Option<u16> {
    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}

/// Round a value to the given number of decimal places.
pub fn round_dp(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
