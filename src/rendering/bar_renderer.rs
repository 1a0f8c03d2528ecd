//! Bar rendering logic
//!
//! Paints a `RenderFrame` onto the canvas. Frame geometry is canvas-local, so
//! everything is shifted by the canvas origin before painting.

use barview::{BarGeometry, Palette, RenderFrame};
use eframe::egui;

use crate::presentation::color_mapping;

/// Renders both bars and their labels
///
/// # Arguments
/// * `painter` - Painter clipped to the canvas
/// * `canvas_rect` - Screen rectangle of the canvas
/// * `frame` - Geometry computed by the controller
/// * `palette` - Configured colors
/// * `label_font` - Font for the value labels
pub fn render_bars(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    frame: &RenderFrame,
    palette: &Palette,
    label_font: &egui::FontId,
) {
    let (left_color, right_color) = color_mapping::bar_colors(palette);
    render_bar(painter, canvas_rect, &frame.left, left_color, palette.text, label_font);
    render_bar(painter, canvas_rect, &frame.right, right_color, palette.text, label_font);
}

fn render_bar(
    painter: &egui::Painter,
    canvas_rect: egui::Rect,
    bar: &BarGeometry,
    fill: egui::Color32,
    text_color: egui::Color32,
    label_font: &egui::FontId,
) {
    let offset = canvas_rect.min.to_vec2();

    let bar_rect = bar.rect.translate(offset);
    if bar_rect.height() > 0.0 {
        painter.rect_filled(bar_rect, 0.0, fill);
    }

    painter.text(
        bar.label_pos + offset,
        egui::Align2::CENTER_CENTER,
        &bar.label,
        label_font.clone(),
        text_color,
    );
}
