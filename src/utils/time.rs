//! Time utilities: timestamp parsing, minute-of-day math, HH:MM:SS formatting.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Minutes in one calendar day; the right edge of the log grid.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a backend timestamp and return its wall-clock time of day.
///
/// The API emits RFC 3339 with an offset; the offset is taken as the
/// viewer-local representation (timezone resolution happens upstream).
/// Naive timestamps without an offset are accepted as already local.
pub fn parse_wall_clock(ts: &str) -> AppResult<NaiveTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Ok(dt.time());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(ts, fmt) {
            return Ok(dt.time());
        }
    }
    Err(AppError::InvalidTimestamp(ts.to_string()))
}

/// Minute offset from midnight of the given wall-clock time.
/// Seconds are deliberately ignored: the grid resolves to one minute.
pub fn minute_of_day(t: NaiveTime) -> u32 {
    t.hour() * 60 + t.minute()
}

/// Fraction of the day covered at the given minute, in [0, 1].
pub fn day_fraction(minute: u32) -> f64 {
    f64::from(minute) / f64::from(MINUTES_PER_DAY)
}

/// Parse a `YYYY-MM-DD` CLI argument.
pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Parse an optional `YYYY-MM-DD` CLI argument.
pub fn parse_optional_date(input: Option<&String>) -> AppResult<Option<NaiveDate>> {
    if let Some(s) = input {
        Ok(Some(parse_date(s)?))
    } else {
        Ok(None)
    }
}

/// Format a second count as zero-padded `HH:MM:SS`.
/// Hours are not wrapped at 24: overlapping entries can legitimately
/// inflate a category past a full day and the label must show it.
pub fn format_hms(total_seconds: i64) -> String {
    let s = total_seconds.max(0);
    format!("{:02}:{:02}:{:02}", s / 3600, (s % 3600) / 60, s % 60)
}
