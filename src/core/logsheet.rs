//! One fully derived daily log sheet: the engine outputs for a single day,
//! bundled for the renderer and the CLI views.

use crate::core::engine::{
    NormalizedSegment, PathInstruction, StatusDurations, aggregate, build_path, normalize,
};
use crate::errors::AppResult;
use crate::models::DailyLog;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct LogSheet {
    pub date: NaiveDate,
    pub segments: Vec<NormalizedSegment>,
    pub durations: StatusDurations,
    pub path: Vec<PathInstruction>,
}

impl LogSheet {
    /// Run the full engine pipeline over one daily log.
    /// The input log is only read; everything here is freshly derived.
    pub fn build(log: &DailyLog) -> AppResult<Self> {
        let segments = normalize(&log.entries)?;
        let durations = aggregate(&segments);
        let path = build_path(&segments);

        Ok(Self {
            date: log.date,
            segments,
            durations,
            path,
        })
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
