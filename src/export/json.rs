use crate::errors::AppResult;
use crate::export::model::SummaryExport;
use crate::export::notify_export_success;
use std::path::Path;

/// Write per-day duration summaries as pretty-printed JSON.
pub(crate) fn export_json(summaries: &[SummaryExport], path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(summaries)?;
    std::fs::write(path, json)?;
    notify_export_success("JSON", path);
    Ok(())
}
