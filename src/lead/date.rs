//! Date normalization for lead fields.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const OUTPUT_FORMAT: &str = "%Y-%m-%d";

/// ISO-8601 date-time layouts accepted besides RFC 3339 and a bare date.
const ISO_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Day-month-year layouts, the usual way dates are typed in the input sheets.
const DAY_MONTH_YEAR_FORMATS: &[&str] = &["%d.%m.%Y", "%d/%m/%Y", "%d-%m-%Y"];

/// Normalizes a date to `YYYY-MM-DD`.
///
/// ISO-8601 is tried first, then day-month-year. Input that matches neither is
/// returned unchanged; this function never fails.
///
/// # Examples
///
/// ```
/// use lead_uploader::lead::normalize_date;
///
/// assert_eq!(normalize_date("17.05.1990"), "1990-05-17");
/// assert_eq!(normalize_date("1990-05-17T00:00:00+03:00"), "1990-05-17");
/// assert_eq!(normalize_date("когда-то"), "когда-то");
/// ```
pub fn normalize_date(raw: &str) -> String {
    let trimmed = raw.trim();
    parse_iso(trimmed)
        .or_else(|| parse_day_month_year(trimmed))
        .map(|date| date.format(OUTPUT_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_iso(value: &str) -> Option<NaiveDate> {
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.date_naive());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, OUTPUT_FORMAT) {
        return Some(date);
    }
    ISO_DATETIME_FORMATS.iter().find_map(|format| {
        NaiveDateTime::parse_from_str(value, format)
            .ok()
            .map(|date_time| date_time.date())
    })
}

fn parse_day_month_year(value: &str) -> Option<NaiveDate> {
    DAY_MONTH_YEAR_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
}
