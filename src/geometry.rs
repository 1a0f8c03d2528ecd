//! Value-to-pixel scaling.
//!
//! This module provides pure functions for:
//! - Normalizing a value against the shared axis range (saturating)
//! - Computing usable canvas height and bar heights
//! - Placing bar centers horizontally
//! - Rescaling fonts with the canvas height
//!
//! These functions are stateless and can be tested independently.

use crate::config::AxisRange;

/// Canvas height per point of font size when scaling text with the window.
const FONT_SCALE_DIVISOR: f32 = 50.0;

/// Forces a ratio into `[0, 1]`. NaN maps to 0.
pub fn clamp01(ratio: f64) -> f64 {
    if ratio.is_nan() {
        0.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Canvas height available to bars once the label margin is reserved.
///
/// Never negative: a viewport shorter than the margin has no usable height.
pub fn usable_height(viewport_height: f32, bar_padding: f32) -> f32 {
    (viewport_height - bar_padding).max(0.0)
}

/// Height in pixels of a bar showing `value`.
///
/// # Arguments
/// * `value` - The value the bar represents
/// * `axis` - The shared scale (`min < max`)
/// * `usable_height` - Pixels available above the label margin
///
/// # Returns
/// A height in `[0, usable_height]`. Values outside the axis saturate.
pub fn bar_height(value: f64, axis: AxisRange, usable_height: f32) -> f32 {
    if usable_height <= 0.0 {
        return 0.0;
    }
    let ratio = clamp01((value - axis.min) / axis.span());
    (ratio * usable_height as f64) as f32
}

/// Horizontal centers of the left and right bars: one and three quarters of
/// the way across the viewport.
pub fn bar_centers(viewport_width: f32) -> (f32, f32) {
    (viewport_width / 4.0, 3.0 * viewport_width / 4.0)
}

/// Font size for the given canvas height.
///
/// Grows with the window (`floor(height / 50)`) but never drops below the
/// configured size.
pub fn compute_font_size(viewport_height: f32, configured_min_size: f32) -> f32 {
    let scaled = (viewport_height.max(0.0) / FONT_SCALE_DIVISOR).floor();
    scaled.max(configured_min_size)
}
