// src/export/logic.rs

use crate::core::LogSheet;
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::csv::export_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::export_json;
use crate::export::model::SummaryExport;
use crate::export::xlsx::export_xlsx;
use crate::models::DailyLog;
use crate::ui::messages::warning;
use std::io;
use std::path::Path;

/// High-level export flow: daily logs → engine → flat summaries → file.
pub struct ExportLogic;

impl ExportLogic {
    pub fn export(
        logs: &[DailyLog],
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::from(io::Error::other(format!(
                "Output file path must be absolute: {file}"
            ))));
        }

        ensure_writable(path, force)?;

        let mut summaries = Vec::with_capacity(logs.len());
        for log in logs {
            let sheet = LogSheet::build(log)?;
            summaries.push(SummaryExport::from_sheet(&sheet));
        }

        if summaries.is_empty() {
            warning("No daily logs found in the input file.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => export_csv(&summaries, path)?,
            ExportFormat::Json => export_json(&summaries, path)?,
            ExportFormat::Xlsx => export_xlsx(&summaries, path)?,
        }

        Ok(())
    }
}
