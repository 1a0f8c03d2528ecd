//! Canvas panel UI rendering
//!
//! Allocates the sunken drawing area, reports size changes and paints the
//! controller's current frame.

use barview::{ControlEvent, ViewportSize};
use eframe::egui;

use crate::app::AppState;
use crate::presentation::color_mapping;
use crate::rendering::bar_renderer;

/// Border width of the sunken canvas frame
const CANVAS_BORDER_WIDTH: f32 = 2.0;

/// Renders the canvas and paints both bars.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<ControlEvent>` - A `ViewportResized` event if the canvas size
///   differs from the size the controller last saw
pub fn render_canvas_panel(ui: &mut egui::Ui, state: &AppState) -> Option<ControlEvent> {
    let controller = &state.controller;
    let palette = controller.config().palette();
    let mut resize = None;

    egui::Frame::default()
        .fill(palette.frame_background)
        .stroke(egui::Stroke::new(
            CANVAS_BORDER_WIDTH,
            color_mapping::canvas_border_color(palette),
        ))
        .show(ui, |ui| {
            let (response, painter) = ui.allocate_painter(ui.available_size(), egui::Sense::hover());
            let canvas_rect = response.rect;

            let size = ViewportSize::new(canvas_rect.width(), canvas_rect.height());
            if size != controller.viewport() {
                resize = Some(ControlEvent::ViewportResized {
                    width: size.width,
                    height: size.height,
                });
            }

            let label_font = egui::FontId::new(controller.label_font_size(), state.font_family.clone());
            bar_renderer::render_bars(
                &painter,
                canvas_rect,
                &controller.compute_frame(),
                palette,
                &label_font,
            );
        });

    resize
}
