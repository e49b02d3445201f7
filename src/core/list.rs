//! CLI views over one or more daily logs: the normalized segment listing
//! and the per-status duration summary table.

use crate::core::engine::durations::by_row;
use crate::core::logsheet::LogSheet;
use crate::errors::AppResult;
use crate::models::{DailyLog, DutyStatus};
use crate::utils::formatting::{bold, minute_label, pad_left, pad_right, strip_ansi};
use ansi_term::Colour;
use unicode_width::UnicodeWidthStr;

/// ANSI color per duty row, matching the mental model of the sheet.
fn color_for_status(status: DutyStatus) -> Colour {
    match status {
        DutyStatus::OffDuty => Colour::Green,
        DutyStatus::SleeperBerth => Colour::Blue,
        DutyStatus::Driving => Colour::Red,
        DutyStatus::OnDutyNotDriving => Colour::Yellow,
    }
}

pub struct ListLogic;

impl ListLogic {
    /// Print each requested day: optionally the segment timeline, always
    /// the per-status totals.
    pub fn print(logs: &[DailyLog], show_segments: bool) -> AppResult<()> {
        for log in logs {
            let sheet = LogSheet::build(log)?;

            println!("📅 {}\n", bold(&format!("Daily log for {}", sheet.date_str())));

            if show_segments {
                Self::print_segments(&sheet);
            }
            Self::print_summary(&sheet);
            println!();
        }
        Ok(())
    }

    fn print_segments(sheet: &LogSheet) {
        if sheet.segments.is_empty() {
            println!("   (no closed entries for this day)\n");
            return;
        }

        println!("   FROM   TO     STATUS");

        for seg in &sheet.segments {
            let label = color_for_status(seg.status)
                .paint(seg.status.label())
                .to_string();
            println!(
                "   {}  {}  {}",
                minute_label(seg.start_minute),
                minute_label(seg.end_minute),
                label
            );
        }
        println!();
    }

    fn print_summary(sheet: &LogSheet) {
        // Column width from the widest visible label
        let label_w = by_row(&sheet.durations)
            .iter()
            .map(|(s, _)| UnicodeWidthStr::width(strip_ansi(s.label()).as_str()))
            .max()
            .unwrap_or(10);

        for (status, _) in by_row(&sheet.durations) {
            let colored = color_for_status(status).paint(status.label()).to_string();
            // pad against the plain label: ANSI codes have no width
            let pad = label_w - UnicodeWidthStr::width(status.label());
            println!(
                "   {}{}   {}",
                colored,
                " ".repeat(pad),
                sheet.durations.label_for(status)
            );
        }

        println!(
            "   {}   ={}",
            pad_right("Total", label_w),
            pad_left(&sheet.durations.total_label(), 8)
        );
    }
}
