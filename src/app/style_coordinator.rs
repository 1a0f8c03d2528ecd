//! Palette and font application.
//!
//! Maps the configured palette and font spec onto egui's style every frame.

use egui::{FontId, TextStyle};

use crate::app::AppState;

/// Coordinates the egui style with the loaded configuration.
pub struct StyleCoordinator;

impl StyleCoordinator {
    /// Applies palette colors and font sizes to the egui context.
    ///
    /// Called every frame so heading sizes follow viewport resizes.
    pub fn apply_style(ctx: &egui::Context, state: &AppState) {
        let config = state.controller.config();
        let palette = config.palette();
        let family = state.font_family.clone();
        let label_size = config.font().label_size;
        let title_size = state.controller.title_font_size();

        ctx.style_mut(|style| {
            let visuals = &mut style.visuals;

            // Backgrounds
            visuals.panel_fill = palette.background;
            visuals.window_fill = palette.background;
            visuals.extreme_bg_color = palette.frame_background;

            // Text
            visuals.override_text_color = Some(palette.text);

            // Selection (checked boxes, slider fill)
            visuals.selection.bg_fill = palette.select;
            visuals.selection.stroke.color = palette.text;

            // Slider rail and widget backgrounds
            visuals.widgets.inactive.bg_fill = palette.trough;
            visuals.widgets.inactive.weak_bg_fill = palette.slider_background;
            visuals.widgets.hovered.weak_bg_fill = palette.slider_background;
            visuals.widgets.active.weak_bg_fill = palette.slider_background;

            style.text_styles.insert(TextStyle::Heading, FontId::new(title_size, family.clone()));
            style.text_styles.insert(TextStyle::Body, FontId::new(label_size, family.clone()));
            style.text_styles.insert(TextStyle::Button, FontId::new(label_size, family));
        });
    }
}
