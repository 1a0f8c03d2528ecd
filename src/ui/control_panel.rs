//! Control panel UI rendering
//!
//! Handles the left column: a vertical slider driving the left bar and one
//! checkbox per configured weight driving the right bar.

use barview::ControlEvent;
use eframe::egui;
use egui::style::HandleShape;

use crate::app::AppState;

/// Vertical gap between a heading and its controls
const HEADING_SPACING: f32 = 10.0;

/// Renders the slider and checkbox columns.
///
/// Widgets edit local copies of the controller's values; every change is
/// reported as a `ControlEvent` instead of being written back directly.
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Vec<ControlEvent>` - Changes made this frame, in widget order
pub fn render_control_panel(ui: &mut egui::Ui, state: &AppState) -> Vec<ControlEvent> {
    let controller = &state.controller;
    let config = controller.config();
    let layout = config.layout();
    let mut events = Vec::new();

    ui.horizontal_top(|ui| {
        // Slider column
        ui.vertical(|ui| {
            ui.heading("Slider");
            ui.add_space(HEADING_SPACING);

            let range = config.slider_range();
            let mut value = controller.left_value();

            let aspect_ratio = if layout.slider_width > 0.0 {
                layout.slider_handle_length / layout.slider_width
            } else {
                1.0
            };

            ui.spacing_mut().slider_width = layout.slider_length;
            ui.spacing_mut().slider_rail_height = layout.slider_width;

            // Vertical sliders put the maximum at the top
            let response = ui.add(
                egui::Slider::new(&mut value, range.min..=range.max)
                    .vertical()
                    .step_by(1.0)
                    .trailing_fill(true)
                    .handle_shape(HandleShape::Rect { aspect_ratio }),
            );

            if response.changed() {
                events.push(ControlEvent::SliderChanged(value));
            }
        });

        ui.add_space(layout.padding);

        // Checkbox column
        ui.vertical(|ui| {
            ui.heading("Checkboxes");
            ui.add_space(HEADING_SPACING);

            let flags = controller.state().checkbox_flags();
            for (index, label) in config.checkbox_labels().iter().enumerate() {
                let mut checked = flags.get(index).copied().unwrap_or(false);
                if ui.checkbox(&mut checked, label.as_str()).changed() {
                    events.push(ControlEvent::CheckboxToggled {
                        index,
                        value: checked,
                    });
                }
            }
        });
    });

    events
}
