// src/export/model.rs

use crate::core::LogSheet;
use crate::core::engine::durations::by_row;
use serde::Serialize;

/// Flat per-day duration summary used by every export format.
#[derive(Serialize, Clone, Debug)]
pub struct SummaryExport {
    pub date: String,
    pub off_duty: String,
    pub sleeper_berth: String,
    pub driving: String,
    pub on_duty: String,
    pub total: String,
}

impl SummaryExport {
    pub fn from_sheet(sheet: &LogSheet) -> Self {
        let [(_, off), (_, sleeper), (_, driving), (_, on_duty)] = by_row(&sheet.durations);
        Self {
            date: sheet.date_str(),
            off_duty: crate::utils::format_hms(off),
            sleeper_berth: crate::utils::format_hms(sleeper),
            driving: crate::utils::format_hms(driving),
            on_duty: crate::utils::format_hms(on_duty),
            total: sheet.durations.total_label(),
        }
    }
}

/// Header per CSV / JSON / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "date",
        "off_duty",
        "sleeper_berth",
        "driving",
        "on_duty",
        "total",
    ]
}

pub(crate) fn summary_to_row(s: &SummaryExport) -> Vec<String> {
    vec![
        s.date.clone(),
        s.off_duty.clone(),
        s.sleeper_berth.clone(),
        s.driving.clone(),
        s.on_duty.clone(),
        s.total.clone(),
    ]
}
