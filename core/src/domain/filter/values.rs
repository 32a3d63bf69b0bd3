//! Coercion of raw UI filter values into comparable operands.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};

use crate::domain::filter::value_objects::FilterValue;

const CURRENCY_SYMBOLS: [char; 4] = ['$', '€', '£', '¥'];

/// `YYYY-MM-DD`, digits only. Such values are compared as calendar dates and
/// never shifted through a timezone.
pub fn is_date_only(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Normalizes a date filter value to an ISO-8601 UTC instant.
///
/// Date-only strings pass through unchanged. Returns `None` when the value
/// cannot be read as a date.
pub fn normalize_date(value: &FilterValue) -> Option<String> {
    match value {
        FilterValue::Text(text) => {
            let text = text.trim();
            if is_date_only(text) {
                return Some(text.to_string());
            }
            parse_instant(text).map(to_iso_instant)
        }
        FilterValue::Number(millis) if millis.is_finite() => {
            DateTime::<Utc>::from_timestamp_millis(*millis as i64).map(to_iso_instant)
        }
        _ => None,
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.to_utc());
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    // Loose date forms such as `2024-1-5`.
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

fn to_iso_instant(instant: DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Reads a number the way the UI types it: currency symbols, commas and
/// whitespace are dropped, then the longest numeric prefix is parsed.
///
/// Returns `None` when no number can be read.
pub fn parse_number(value: &FilterValue) -> Option<f64> {
    match value {
        FilterValue::Number(number) if number.is_finite() => Some(*number),
        FilterValue::Number(_) | FilterValue::Bool(_) => None,
        FilterValue::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| !CURRENCY_SYMBOLS.contains(c) && *c != ',' && !c.is_whitespace())
                .collect();
            numeric_prefix(&cleaned).and_then(|prefix| prefix.parse::<f64>().ok())
        }
    }
}

fn numeric_prefix(text: &str) -> Option<&str> {
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }

    let int_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    let mut digits = end - int_start;

    if end < bytes.len() && bytes[end] == b'.' {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while frac_end < bytes.len() && bytes[frac_end].is_ascii_digit() {
            frac_end += 1;
        }
        digits += frac_end - frac_start;
        if digits > 0 {
            end = frac_end;
        }
    }

    if digits == 0 {
        return None;
    }

    if end < bytes.len() && matches!(bytes[end], b'e' | b'E') {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    Some(&text[..end])
}

/// Converts a UI number into storage units, e.g. dollars into cents.
pub fn scale_number(value: f64, scale: u32) -> f64 {
    if scale == 1 {
        value
    } else {
        (value * f64::from(scale)).round()
    }
}
