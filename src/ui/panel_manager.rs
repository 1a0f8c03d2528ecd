//! Panel orchestration and layout management.
//!
//! Lays out the control column, the status bar and the canvas, and applies
//! the control events each panel reports before the next panel renders.

use crate::app::{AppState, ControlCoordinator};
use crate::ui::{canvas_panel, control_panel, status_bar};

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// Called once per frame from `eframe::App::update()`.
    pub fn render_all_panels(ctx: &egui::Context, state: &mut AppState) {
        let layout = *state.controller.config().layout();
        let background = state.controller.config().palette().background;

        // Left panel: slider and checkboxes
        let control_frame = egui::Frame::default()
            .inner_margin(layout.padding)
            .fill(background);

        let control_events = egui::SidePanel::left("control_panel")
            .resizable(false)
            .frame(control_frame)
            .show(ctx, |ui| control_panel::render_control_panel(ui, state))
            .inner;
        ControlCoordinator::apply_all(state, control_events);

        // Status panel at the bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Central panel: the canvas
        let canvas_frame = egui::Frame::default()
            .inner_margin(layout.frame_padding)
            .fill(background);

        let resize = egui::CentralPanel::default()
            .frame(canvas_frame)
            .show(ctx, |ui| canvas_panel::render_canvas_panel(ui, state))
            .inner;

        // The canvas painted with the old size this frame; paint again
        if let Some(event) = resize {
            if ControlCoordinator::apply(state, event) {
                ctx.request_repaint();
            }
        }
    }
}
