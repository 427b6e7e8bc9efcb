/// Utilities for date and time formatting
use chrono::{DateTime, Local, NaiveDateTime};

/// Format a server timestamp as "YYYY-MM-DD HH:MM:SS" in the browser's local time.
///
/// Accepts RFC 3339 ("2024-03-15T14:02:26.123Z"), the RFC 2822 form Flask
/// emits ("Fri, 15 Mar 2024 14:02:26 GMT") and naive ISO timestamps, which
/// carry no offset and are printed as-is.
/// Anything else is returned unchanged.
pub fn format_datetime(datetime_str: &str) -> String {
    const OUT: &str = "%Y-%m-%d %H:%M:%S";

    if let Ok(dt) = DateTime::parse_from_rfc3339(datetime_str) {
        return dt.with_timezone(&Local).format(OUT).to_string();
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(datetime_str) {
        return dt.with_timezone(&Local).format(OUT).to_string();
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(datetime_str, pattern) {
            return dt.format(OUT).to_string();
        }
    }
    datetime_str.to_string()
}
