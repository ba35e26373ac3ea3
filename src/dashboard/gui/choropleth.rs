use crate::dashboard::logic::{ColorDomain, Palette};
use crate::utils::fmt_usd;
use eframe::egui;
use std::collections::HashMap;

const GRID_COLUMNS: u8 = 12;
const GRID_ROWS: u8 = 8;

/// Tile-grid layout of the U.S.: each state (and DC) as one square cell at
/// `(column, row)`.
const TILES: [(&str, u8, u8); 51] = [
    ("AK", 0, 0),
    ("ME", 11, 0),
    ("WI", 6, 1),
    ("VT", 10, 1),
    ("NH", 11, 1),
    ("WA", 1, 2),
    ("ID", 2, 2),
    ("MT", 3, 2),
    ("ND", 4, 2),
    ("MN", 5, 2),
    ("IL", 6, 2),
    ("MI", 7, 2),
    ("NY", 9, 2),
    ("MA", 10, 2),
    ("OR", 1, 3),
    ("NV", 2, 3),
    ("WY", 3, 3),
    ("SD", 4, 3),
    ("IA", 5, 3),
    ("IN", 6, 3),
    ("OH", 7, 3),
    ("PA", 8, 3),
    ("NJ", 9, 3),
    ("CT", 10, 3),
    ("RI", 11, 3),
    ("CA", 1, 4),
    ("UT", 2, 4),
    ("CO", 3, 4),
    ("NE", 4, 4),
    ("MO", 5, 4),
    ("KY", 6, 4),
    ("WV", 7, 4),
    ("VA", 8, 4),
    ("MD", 9, 4),
    ("DE", 10, 4),
    ("AZ", 2, 5),
    ("NM", 3, 5),
    ("KS", 4, 5),
    ("AR", 5, 5),
    ("TN", 6, 5),
    ("NC", 7, 5),
    ("SC", 8, 5),
    ("DC", 9, 5),
    ("OK", 4, 6),
    ("LA", 5, 6),
    ("MS", 6, 6),
    ("AL", 7, 6),
    ("GA", 8, 6),
    ("HI", 0, 7),
    ("TX", 4, 7),
    ("FL", 9, 7),
];

fn palette_color(palette: Palette, t: f64) -> egui::Color32 {
    let [r, g, b] = palette.sample(t);
    egui::Color32::from_rgb(r, g, b)
}

pub fn render_choropleth(
    ui: &mut egui::Ui,
    locations: &[String],
    values: &[f64],
    domain: Option<&ColorDomain>,
    palette: Palette,
    colorbar_title: &str,
) {
    let by_state: HashMap<&str, f64> = locations
        .iter()
        .map(String::as_str)
        .zip(values.iter().copied())
        .collect();

    let colorbar_width = 70.0;
    let cell = ((ui.available_width() - colorbar_width) / f32::from(GRID_COLUMNS)).clamp(18.0, 56.0);
    let map_size = egui::vec2(cell * f32::from(GRID_COLUMNS), cell * f32::from(GRID_ROWS));

    ui.horizontal(|ui| {
        let (rect, response) = ui.allocate_exact_size(map_size, egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let hover = response.hover_pos();
        let mut hovered: Option<(&str, Option<f64>)> = None;

        for &(code, column, row) in &TILES {
            let cell_rect = egui::Rect::from_min_size(
                rect.min + egui::vec2(f32::from(column) * cell, f32::from(row) * cell),
                egui::vec2(cell, cell),
            )
            .shrink(1.5);

            let value = by_state.get(code).copied();
            let fill = match (value, domain) {
                (Some(v), Some(d)) => palette_color(palette, d.normalize(v)),
                _ => ui.visuals().extreme_bg_color,
            };
            painter.rect_filled(cell_rect, 3.0, fill);
            painter.rect_stroke(
                cell_rect,
                3.0,
                egui::Stroke::new(1.0, egui::Color32::BLACK),
                egui::StrokeKind::Inside,
            );

            // Viridis is dark at the low end.
            let dark_fill = matches!((value, domain), (Some(v), Some(d)) if d.normalize(v) < 0.6);
            let text_color = if dark_fill {
                egui::Color32::WHITE
            } else {
                egui::Color32::BLACK
            };
            painter.text(
                cell_rect.center(),
                egui::Align2::CENTER_CENTER,
                code,
                egui::FontId::proportional((cell * 0.3).max(8.0)),
                text_color,
            );

            if hover.is_some_and(|p| cell_rect.contains(p)) {
                hovered = Some((code, value));
            }
        }

        if let Some((code, value)) = hovered {
            let text = match value {
                Some(v) => format!("{code}: median max salary {}", fmt_usd(v)),
                None => format!("{code}: no yearly postings"),
            };
            response.on_hover_text(text);
        }

        if let Some(domain) = domain {
            render_colorbar(ui, domain, palette, colorbar_title, map_size.y);
        }
    });
}

fn render_colorbar(
    ui: &mut egui::Ui,
    domain: &ColorDomain,
    palette: Palette,
    title: &str,
    height: f32,
) {
    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).small());
        ui.label(egui::RichText::new(fmt_usd(domain.max)).small());
        let (rect, _) = ui.allocate_exact_size(egui::vec2(16.0, height * 0.7), egui::Sense::hover());
        let painter = ui.painter_at(rect);
        let steps = 32;
        let step_height = rect.height() / steps as f32;
        for i in 0..steps {
            // Top of the bar is the maximum.
            let t = 1.0 - f64::from(i) / f64::from(steps - 1);
            let band = egui::Rect::from_min_size(
                rect.min + egui::vec2(0.0, i as f32 * step_height),
                egui::vec2(rect.width(), step_height + 0.5),
            );
            painter.rect_filled(band, 0.0, palette_color(palette, t));
        }
        ui.label(egui::RichText::new(fmt_usd(domain.min)).small());
    });
}
