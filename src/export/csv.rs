use crate::errors::AppResult;
use crate::export::model::{SummaryExport, get_headers, summary_to_row};
use crate::export::notify_export_success;
use csv::Writer;
use std::path::Path;

/// Write per-day duration summaries as CSV.
pub(crate) fn export_csv(summaries: &[SummaryExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;
    for s in summaries {
        wtr.write_record(summary_to_row(s))?;
    }

    wtr.flush()?;
    notify_export_success("CSV", path);
    Ok(())
}
