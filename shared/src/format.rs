use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};
use std::fmt::Display;

/// Shown when the server sends a timestamp we cannot parse
pub const INVALID_DATE: &str = "Invalid Date";

const DISPLAY_FORMAT: &str = "%-m/%-d/%Y, %-I:%M:%S %p";

/// Render a record timestamp in the viewer's local time zone,
/// e.g. "1/1/2024, 12:00:00 AM".
pub fn format_timestamp(raw: &str) -> String {
    format_timestamp_in(raw, &Local)
}

/// Same as [`format_timestamp`] for an explicit time zone
pub fn format_timestamp_in<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    match parse_timestamp(raw) {
        Some(instant) => instant.with_timezone(tz).format(DISPLAY_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

/// Accepts RFC 3339, a naive date-time (taken as UTC) or a bare date (UTC midnight)
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.with_timezone(&Utc));
    }

    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
