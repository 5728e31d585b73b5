//! Tolerant parsers for the free-text cells of the bulk import sheet.
//!
//! Empty input always means "absent"; only malformed non-empty text is an error.

use std::str::FromStr;

use bigdecimal::BigDecimal;
use chrono::NaiveDate;

use crate::error::MappingError;

/// Spreadsheet placeholder for "no price yet". The mojibake form shows up when the
/// sheet is exported as Latin-1 and read back as UTF-8.
const ZERO_YEN_MARKERS: [&str; 2] = ["¥0", "Â¥0"];

/// Parse a currency cell such as `¥15,400` or `$2,750`.
pub fn parse_amount(field: &'static str, raw: &str) -> Result<Option<BigDecimal>, MappingError> {
    if raw.is_empty() || ZERO_YEN_MARKERS.contains(&raw) {
        return Ok(None);
    }
    let invalid = || MappingError::InvalidAmount {
        field,
        raw: raw.to_string(),
    };
    // At most one leading currency symbol; everything after it must be numeric.
    let mut chars = raw.chars();
    let unsigned = match chars.next() {
        Some(c) if !(c.is_ascii_digit() || c == '-' || c == '.') => chars.as_str(),
        _ => raw,
    };
    let digits: String = unsigned.chars().filter(|c| *c != ',').collect();
    if digits.is_empty()
        || !digits
            .chars()
            .all(|c| c.is_ascii_digit() || c == '-' || c == '.')
    {
        return Err(invalid());
    }
    BigDecimal::from_str(&digits)
        .map(Some)
        .map_err(|_| invalid())
}

/// Parse `M/d/yyyy`, falling back to `M/yyyy` anchored to the first day of the month.
pub fn parse_date(field: &'static str, raw: &str) -> Result<Option<NaiveDate>, MappingError> {
    if raw.is_empty() {
        return Ok(None);
    }
    let invalid = || MappingError::InvalidDate {
        field,
        raw: raw.to_string(),
    };
    // chrono's `%Y` takes one to four digits; the sheet always writes four.
    let year = raw.rsplit('/').next().unwrap_or_default();
    if !is_year(year) {
        return Err(invalid());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Ok(Some(date));
    }
    parse_month_year(raw).map(Some).ok_or_else(invalid)
}

fn is_year(s: &str) -> bool {
    s.len() == 4 && s.chars().all(|c| c.is_ascii_digit())
}

fn parse_month_year(raw: &str) -> Option<NaiveDate> {
    let (month, year) = raw.split_once('/')?;
    let all_digits = |s: &str| !s.is_empty() && s.chars().all(|c| c.is_ascii_digit());
    if !all_digits(month) || month.len() > 2 || !is_year(year) {
        return None;
    }
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

/// Whether the raw date cell names a concrete day.
///
/// Works on the raw text: `6/2025` or `11/2025` (6-7 chars) is a month placeholder.
/// Empty text yields `None` so an otherwise blank distribution stays blank.
pub fn release_confirmed(raw: &str) -> Option<bool> {
    if raw.is_empty() {
        return None;
    }
    let len = raw.chars().count();
    Some(!(len == 6 || len == 7))
}

/// Only the literal `TRUE` (as exported by the spreadsheet) is true.
pub fn parse_flag(raw: &str) -> bool {
    raw == "TRUE"
}

/// Empty text becomes `None`.
pub fn non_empty(raw: &str) -> Option<String> {
    if raw.is_empty() {
        None
    } else {
        Some(raw.to_string())
    }
}

/// Comma separated list of ids; blank entries are skipped and an empty list is `None`.
pub fn parse_list(raw: &str) -> Option<Vec<String>> {
    let items: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect();
    if items.is_empty() {
        None
    } else {
        Some(items)
    }
}
