//! Colors derived from the configured palette.

use barview::Palette;
use egui::Color32;

/// Darkening applied to the window background for the sunken canvas border.
const BORDER_SHADE: f32 = 0.6;

/// Returns the fill colors of the left and right bars.
pub fn bar_colors(palette: &Palette) -> (Color32, Color32) {
    (palette.bar_left, palette.bar_right)
}

/// Border color for the sunken canvas frame.
pub fn canvas_border_color(palette: &Palette) -> Color32 {
    adjust_brightness(palette.background, BORDER_SHADE)
}

/// Adjusts the brightness of a color by a factor (1.0 = no change, >1.0 = brighter, <1.0 = darker)
pub fn adjust_brightness(color: Color32, factor: f32) -> Color32 {
    let r = (color.r() as f32 * factor).min(255.0) as u8;
    let g = (color.g() as f32 * factor).min(255.0) as u8;
    let b = (color.b() as f32 * factor).min(255.0) as u8;
    Color32::from_rgb(r, g, b)
}
