//! Per-status time totals for one calendar day.

use super::normalizer::NormalizedSegment;
use crate::models::{ALL_STATUSES, DutyStatus};
use crate::utils::time::format_hms;

/// Seconds spent in each duty status, plus helpers for the sheet margins.
///
/// Totals are a straight sum over segments: overlapping entries are not
/// deduplicated and will double-count. The sheet shows what the data says.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StatusDurations {
    seconds: [i64; 4],
}

impl StatusDurations {
    pub fn seconds_for(&self, status: DutyStatus) -> i64 {
        self.seconds[status.row()]
    }

    /// Sum across all four categories.
    pub fn total_seconds(&self) -> i64 {
        self.seconds.iter().sum()
    }

    /// `HH:MM:SS` label for one grid row.
    pub fn label_for(&self, status: DutyStatus) -> String {
        format_hms(self.seconds_for(status))
    }

    /// `HH:MM:SS` label for the grand total under the grid.
    pub fn total_label(&self) -> String {
        format_hms(self.total_seconds())
    }
}

/// Sum segment durations per status, second precision.
pub fn aggregate(segments: &[NormalizedSegment]) -> StatusDurations {
    let mut durations = StatusDurations::default();

    for seg in segments {
        durations.seconds[seg.status.row()] += i64::from(seg.duration_minutes()) * 60;
    }

    durations
}

/// Row-ordered (status, seconds) pairs, for tables and exports.
pub fn by_row(durations: &StatusDurations) -> [(DutyStatus, i64); 4] {
    ALL_STATUSES.map(|s| (s, durations.seconds_for(s)))
}
