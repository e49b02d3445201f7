//! Reduces raw duty entries to a clean, day-local timeline.
//!
//! The backend delivers entries in arbitrary order, with absolute
//! timestamps and possibly without an end time. The sheet only works on
//! closed, chronologically ordered, midnight-clipped minute intervals;
//! this module is the single place where that reduction happens.

use crate::errors::AppResult;
use crate::models::{DutyEntry, DutyStatus};
use crate::utils::time::{MINUTES_PER_DAY, minute_of_day, parse_wall_clock};

/// A duty entry reduced to integer minute-of-day bounds on one calendar day.
///
/// Invariant: `start_minute <= end_minute <= 1440`. Zero-width segments
/// (identical bounds) are kept: they carry no drawable run but still take
/// part in transition connectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedSegment {
    pub status: DutyStatus,
    pub start_minute: u32,
    pub end_minute: u32,
}

impl NormalizedSegment {
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute - self.start_minute
    }
}

/// Normalize raw entries into sorted, clipped segments.
///
/// - Entries without a recorded end are dropped entirely: the sheet only
///   renders closed intervals. Callers wanting an "in progress" bar must
///   close the entry themselves before calling.
/// - An end minute behind its start minute means the interval ran past
///   midnight; it is truncated at minute 1440 instead of wrapping. The
///   following day's log carries its own entry for the remainder.
/// - The sort is stable: same-minute starts keep their input order.
///
/// A malformed timestamp aborts the whole call; no partial output.
pub fn normalize(entries: &[DutyEntry]) -> AppResult<Vec<NormalizedSegment>> {
    let mut segments = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(end_ts) = &entry.end_time else {
            continue;
        };

        let start_minute = minute_of_day(parse_wall_clock(&entry.start_time)?);
        let mut end_minute = minute_of_day(parse_wall_clock(end_ts)?);

        // Midnight-crossing policy: clip, never wrap.
        if end_minute < start_minute {
            end_minute = MINUTES_PER_DAY;
        }

        segments.push(NormalizedSegment {
            status: entry.status,
            start_minute,
            end_minute,
        });
    }

    segments.sort_by_key(|s| s.start_minute);
    Ok(segments)
}
