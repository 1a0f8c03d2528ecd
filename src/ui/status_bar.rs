//! Status bar UI rendering
//!
//! Handles the bottom status bar displaying both bar values and the canvas size.

use barview::frame::format_value;
use eframe::egui;
use egui::RichText;

use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    let controller = &state.controller;
    let viewport = controller.viewport();

    ui.horizontal(|ui| {
        ui.label(RichText::new(format!("Slider: {}", controller.left_value())).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Sum: {}", format_value(controller.right_value()))).strong());
        ui.label(RichText::new("|").strong());
        ui.label(RichText::new(format!("Canvas: {:.0}x{:.0}", viewport.width, viewport.height)).strong());

        if let Some(error) = &state.last_error {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(error).strong().color(ui.visuals().error_fg_color));
        }
    });
}
