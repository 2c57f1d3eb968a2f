//! Human-readable formatting for cache sizes and timestamps

use crate::error::{PurgeError, PurgeResult};
use chrono::{DateTime, NaiveDateTime, Utc};

const SIZE_UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Format a byte count with a binary unit, e.g. `1536.0` -> `"1.5 KB"`
///
/// The value is rounded to two decimals and printed without trailing
/// zeros. TB is the largest unit, larger values keep counting in TB.
pub fn format_size(bytes: f64) -> String {
    let mut value = bytes;
    let mut unit = 0;
    while value >= 1024.0 && unit < SIZE_UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = (value * 100.0).round() / 100.0;
    let mut text = format!("{rounded:.2}");
    if text.contains('.') {
        text.truncate(text.trim_end_matches('0').trim_end_matches('.').len());
    }

    format!("{} {}", text, SIZE_UNITS[unit])
}

/// Format an integral byte count
pub fn format_bytes(bytes: u64) -> String {
    format_size(bytes as f64)
}

/// Format an ISO-8601 timestamp as `YYYY-MM-DD HH:MM:SS` in UTC
///
/// Timestamps without an offset are taken to be UTC.
pub fn format_date(iso: &str) -> PurgeResult<String> {
    let trimmed = iso.trim();
    let utc = match DateTime::parse_from_rfc3339(trimmed) {
        Ok(dt) => dt.with_timezone(&Utc),
        Err(_) => NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|naive| naive.and_utc())
            .map_err(|_| PurgeError::InvalidDate(iso.to_string()))?,
    };

    Ok(utc.format("%Y-%m-%d %H:%M:%S").to_string())
}
