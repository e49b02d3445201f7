//! PDF rendering of the driver's daily log sheet.
//!
//! Maps the engine's grid-normalized path instructions onto an A4
//! landscape page and overlays the static sheet furniture: DOT header,
//! date boxes, hour scale, the 24x4 grid and the per-row HH:MM:SS totals.

use crate::core::LogSheet;
use crate::core::engine::PathInstruction;
use crate::models::ALL_STATUSES;
use crate::utils::time::day_fraction;
use pdf_writer::{Content, Name, Pdf, Rect, Ref, Str};
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub struct SheetPdf {
    pdf: Pdf,
    catalog_id: Ref,
    pages_id: Ref,
    page_refs: Vec<Ref>,
    current_content_id: Option<Ref>,

    // A4 landscape
    page_w: f32,
    page_h: f32,
    margin: f32,

    grid_left: f32,
    grid_right: f32,
    grid_top: f32,
    row_h: f32,

    next_id: i32,
    font_id: Ref,

    font_size: f32,
    label_font_size: f32,
    title_font_size: f32,

    carrier_name: String,
    driver_name: String,
}

impl SheetPdf {
    pub fn new(carrier_name: &str, driver_name: &str) -> Self {
        let mut pdf = Pdf::new();

        let catalog_id = Ref::new(1);
        let pages_id = Ref::new(2);
        let font_id = Ref::new(3);
        let next_id = 4;

        pdf.type1_font(font_id).base_font(Name(b"Helvetica"));

        let page_w = 842.0;
        let page_h = 595.0;

        Self {
            pdf,
            catalog_id,
            pages_id,
            page_refs: Vec::new(),
            current_content_id: None,

            page_w,
            page_h,
            margin: 40.0,

            // Left gutter carries the row labels, right gutter the totals
            grid_left: 130.0,
            grid_right: page_w - 110.0,
            grid_top: page_h - 200.0,
            row_h: 60.0,

            next_id,
            font_id,

            font_size: 8.0,
            label_font_size: 10.0,
            title_font_size: 16.0,

            carrier_name: carrier_name.to_string(),
            driver_name: driver_name.to_string(),
        }
    }

    fn fresh_ref(&mut self) -> Ref {
        let id = self.next_id;
        self.next_id += 1;
        Ref::new(id)
    }

    fn new_page(&mut self) -> Content {
        let page_id = self.fresh_ref();
        let content_id = self.fresh_ref();

        self.page_refs.push(page_id);

        let mut page = self.pdf.page(page_id);
        page.parent(self.pages_id)
            .media_box(Rect::new(0.0, 0.0, self.page_w, self.page_h))
            .contents(content_id);

        page.resources().fonts().pair(Name(b"F1"), self.font_id);

        self.current_content_id = Some(content_id);

        Content::new()
    }

    fn finalize_page(&mut self, content: Content) {
        if let Some(id) = self.current_content_id {
            self.pdf.stream(id, &content.finish());
        }
    }

    fn build_pages_tree(&mut self) {
        let mut pages = self.pdf.pages(self.pages_id);
        pages.count(self.page_refs.len() as i32);
        pages.kids(self.page_refs.clone());
    }

    fn draw_text(&self, content: &mut Content, x: f32, y: f32, size: f32, text: &str) {
        content.begin_text();
        content.set_font(Name(b"F1"), size);
        content.set_text_matrix([1.0, 0.0, 0.0, 1.0, x, y]);
        content.show(Str(text.as_bytes()));
        content.end_text();
    }

    // -----------------------------
    // Grid geometry helpers
    // -----------------------------

    fn grid_width(&self) -> f32 {
        self.grid_right - self.grid_left
    }

    fn grid_bottom(&self) -> f32 {
        self.grid_top - 4.0 * self.row_h
    }

    /// Horizontal page coordinate of a day fraction in [0, 1].
    fn x_at(&self, time: f64) -> f32 {
        self.grid_left + (time as f32) * self.grid_width()
    }

    /// Vertical page coordinate of a row's center band.
    fn row_center(&self, row: usize) -> f32 {
        self.grid_top - (row as f32 + 0.5) * self.row_h
    }

    /// Render one daily log sheet on a fresh page.
    pub fn draw_sheet(&mut self, sheet: &LogSheet) {
        let mut content = self.new_page();

        self.draw_header(&mut content, sheet);
        self.draw_grid(&mut content);
        self.draw_duty_path(&mut content, &sheet.path);
        self.draw_totals(&mut content, sheet);

        self.finalize_page(content);
    }

    fn draw_header(&self, content: &mut Content, sheet: &LogSheet) {
        let top = self.page_h - self.margin;

        self.draw_text(
            content,
            self.margin,
            top,
            self.font_size,
            "U.S. DEPARTMENT OF TRANSPORTATION",
        );

        // Centered title block
        let title = "DRIVER'S DAILY LOG";
        let subtitle = "(ONE CALENDAR DAY - 24 HOURS)";
        let center = self.page_w / 2.0;
        self.draw_text(
            content,
            center - (title.len() as f32 * self.title_font_size * 0.28),
            top,
            self.title_font_size,
            title,
        );
        self.draw_text(
            content,
            center - (subtitle.len() as f32 * self.font_size * 0.28),
            top - 14.0,
            self.font_size,
            subtitle,
        );

        // Retention notes, right block
        self.draw_text(
            content,
            self.page_w - 260.0,
            top,
            self.font_size,
            "ORIGINAL - File at Home Terminal",
        );
        self.draw_text(
            content,
            self.page_w - 260.0,
            top - 12.0,
            self.font_size,
            "DUPLICATE - Driver retains possession for eight days",
        );

        // Date boxes: MM DD YYYY with captions
        let date_y = top - 45.0;
        let box_left = self.margin + 10.0;
        let spacing = 60.0;
        let date = sheet.date;
        let parts = [
            date.format("%m").to_string(),
            date.format("%d").to_string(),
            date.format("%Y").to_string(),
        ];
        let captions = ["(MONTH)", "(DAY)", "(YEAR)"];

        for (i, (value, caption)) in parts.iter().zip(captions).enumerate() {
            let x = box_left + i as f32 * spacing;
            self.draw_text(content, x, date_y, self.title_font_size, value);
            self.draw_text(content, x, date_y - 12.0, self.font_size, caption);
        }

        // Carrier and driver lines
        let names_y = date_y - 35.0;
        self.draw_text(
            content,
            self.margin + 10.0,
            names_y,
            self.title_font_size,
            &self.carrier_name,
        );
        self.draw_text(
            content,
            self.margin + 10.0,
            names_y - 10.0,
            self.font_size,
            "(NAME OF CARRIER OR CARRIERS)",
        );

        self.draw_text(
            content,
            self.page_w - 260.0,
            names_y,
            self.title_font_size,
            &self.driver_name,
        );
        self.draw_text(
            content,
            self.page_w - 260.0,
            names_y - 10.0,
            self.font_size,
            "(DRIVER'S SIGNATURE IN FULL)",
        );

        // Separator under the header band
        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.move_to(0.0, top - 20.0);
        content.line_to(self.page_w, top - 20.0);
        content.stroke();
        content.restore_state();
    }

    fn draw_grid(&self, content: &mut Content) {
        let bottom = self.grid_bottom();

        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.0);
        content.set_line_width(0.8);

        // Horizontal lines: 4 rows + outer bounds
        for i in 0..=4 {
            let y = self.grid_top - i as f32 * self.row_h;
            content.move_to(self.grid_left, y);
            content.line_to(self.grid_right, y);
            content.stroke();
        }

        // Vertical lines: full-height at even hours, short ticks at odd ones
        for hour in 0u32..=24 {
            let x = self.x_at(day_fraction(hour * 60));

            if hour % 2 == 0 {
                content.move_to(x, bottom);
                content.line_to(x, self.grid_top);
                content.stroke();
            } else {
                let tick = 6.0;
                for row in 0..4 {
                    let band_top = self.grid_top - row as f32 * self.row_h;
                    content.move_to(x, band_top);
                    content.line_to(x, band_top - tick);
                    content.stroke();
                    content.move_to(x, band_top - self.row_h + tick);
                    content.line_to(x, band_top - self.row_h);
                    content.stroke();
                }
            }
        }

        content.restore_state();

        // Hour scale above the grid
        for hour in (0u32..=24).step_by(2) {
            let label = match hour {
                0 | 24 => "Midnight".to_string(),
                12 => "Noon".to_string(),
                h => h.to_string(),
            };
            let x = self.x_at(day_fraction(hour * 60));
            let offset = label.len() as f32 * self.font_size * 0.28;
            self.draw_text(content, x - offset, self.grid_top + 6.0, self.font_size, &label);
        }

        // Row labels in the left gutter
        for status in ALL_STATUSES {
            let y = self.row_center(status.row()) - 3.0;
            self.draw_text(content, self.margin, y, self.label_font_size, status.label());
        }
    }

    /// Stroke the duty-status step chart as one continuous path, exactly in
    /// the order the engine emitted it.
    fn draw_duty_path(&self, content: &mut Content, path: &[PathInstruction]) {
        if path.is_empty() {
            return;
        }

        content.save_state();
        content.set_stroke_rgb(0.0, 0.0, 0.8);
        content.set_line_width(2.0);

        for instruction in path {
            let p = instruction.point();
            let x = self.x_at(p.time);
            let y = self.row_center(p.row);
            match instruction {
                PathInstruction::MoveTo(_) => content.move_to(x, y),
                PathInstruction::LineTo(_) => content.line_to(x, y),
            };
        }

        content.stroke();
        content.restore_state();
    }

    fn draw_totals(&self, content: &mut Content, sheet: &LogSheet) {
        let x = self.grid_right + 12.0;

        for status in ALL_STATUSES {
            let y = self.row_center(status.row()) - 3.0;
            self.draw_text(
                content,
                x,
                y,
                self.label_font_size,
                &sheet.durations.label_for(status),
            );
        }

        self.draw_text(
            content,
            x,
            self.grid_bottom() - 14.0,
            self.label_font_size,
            &format!("={}", sheet.durations.total_label()),
        );
    }

    pub fn save(mut self, path: &Path) -> std::io::Result<()> {
        self.pdf.catalog(self.catalog_id).pages(self.pages_id);
        self.build_pages_tree();

        let bytes = self.pdf.finish();
        let mut f = File::create(path)?;
        f.write_all(&bytes)?;
        Ok(())
    }
}
