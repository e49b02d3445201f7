// src/export/xlsx.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{SummaryExport, get_headers, summary_to_row};
use crate::export::notify_export_success;
use crate::ui::messages::info;
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, FormatPattern, Workbook};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

fn to_app_error(e: rust_xlsxwriter::XlsxError) -> AppError {
    AppError::Export(e.to_string())
}

/// XLSX export with styling and auto column widths.
pub(crate) fn export_xlsx(summaries: &[SummaryExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    // ---------------------------
    // Empty dataset
    // ---------------------------
    if summaries.is_empty() {
        worksheet
            .write(0, 0, "No data available")
            .map_err(to_app_error)?;
        workbook.save(path).map_err(to_app_error)?;
        notify_export_success("XLSX (empty dataset)", path);
        return Ok(());
    }

    // ---------------------------
    // Header
    // ---------------------------
    let headers = get_headers();

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin);

    for (col, header) in headers.iter().enumerate() {
        worksheet
            .write_with_format(0, col as u16, *header, &header_format)
            .map_err(to_app_error)?;
    }

    worksheet.set_freeze_panes(1, 0).ok();

    // ---------------------------
    // Column widths
    // ---------------------------
    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    let band1 = Color::RGB(0xEAF3FB);
    let band2 = Color::RGB(0xFFFFFF);
    let time_align = FormatAlign::Right;

    // ---------------------------
    // Rows with zebra banding
    // ---------------------------
    for (i, summary) in summaries.iter().enumerate() {
        let row = (i + 1) as u32;
        let band = if i % 2 == 0 { band1 } else { band2 };

        let cell_format = Format::new()
            .set_background_color(band)
            .set_pattern(FormatPattern::Solid)
            .set_border(FormatBorder::Thin)
            .set_align(time_align);

        for (col, value) in summary_to_row(summary).iter().enumerate() {
            worksheet
                .write_with_format(row, col as u16, value, &cell_format)
                .map_err(to_app_error)?;

            let w = UnicodeWidthStr::width(value.as_str());
            if w > col_widths[col] {
                col_widths[col] = w;
            }
        }
    }

    for (col, w) in col_widths.iter().enumerate() {
        worksheet
            .set_column_width(col as u16, (*w + 2) as f64)
            .map_err(to_app_error)?;
    }

    workbook.save(path).map_err(to_app_error)?;
    notify_export_success("XLSX", path);
    Ok(())
}
