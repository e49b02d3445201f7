//! High-level render flow: engine outputs → PDF log sheets on disk.

use crate::config::Config;
use crate::core::logsheet::LogSheet;
use crate::errors::{AppError, AppResult};
use crate::export::ensure_writable;
use crate::export::pdf::SheetPdf;
use crate::models::DailyLog;
use crate::ui::messages::success;
use std::path::PathBuf;

pub struct RenderLogic;

impl RenderLogic {
    /// Render one PDF per daily log.
    ///
    /// - `out`: explicit output file (single log only) or directory; when
    ///   absent, files land in the configured output directory as
    ///   `daily-log-YYYY-MM-DD.pdf`.
    pub fn render(
        logs: &[DailyLog],
        cfg: &Config,
        out: &Option<String>,
        force: bool,
    ) -> AppResult<()> {
        if logs.is_empty() {
            return Err(AppError::Render("no daily logs to render".to_string()));
        }

        for log in logs {
            let sheet = LogSheet::build(log)?;
            let path = Self::output_path(&sheet, cfg, out, logs.len())?;

            ensure_writable(&path, force)?;

            let mut pdf = SheetPdf::new(&cfg.carrier_name, &cfg.driver_name);
            pdf.draw_sheet(&sheet);
            pdf.save(&path)?;

            success(format!(
                "Log sheet for {} written to {}",
                sheet.date_str(),
                path.display()
            ));
        }

        Ok(())
    }

    fn output_path(
        sheet: &LogSheet,
        cfg: &Config,
        out: &Option<String>,
        log_count: usize,
    ) -> AppResult<PathBuf> {
        let default_name = format!("daily-log-{}.pdf", sheet.date_str());

        match out {
            Some(p) => {
                let path = PathBuf::from(p);
                if path.is_dir() {
                    Ok(path.join(default_name))
                } else if log_count > 1 {
                    // One explicit file cannot hold several days
                    Err(AppError::Render(format!(
                        "'{}' is a single file but {} logs were selected; pass a directory or --date",
                        path.display(),
                        log_count
                    )))
                } else {
                    Ok(path)
                }
            }
            None => Ok(PathBuf::from(&cfg.output_dir).join(default_name)),
        }
    }
}
