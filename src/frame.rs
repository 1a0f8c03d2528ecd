//! Drawing instructions for one redraw.
//!
//! `compute_frame` is the whole update pipeline: read the control state, derive
//! the two displayed values, scale them against the shared axis and lay the
//! bars out in canvas-local coordinates (origin at the canvas top-left, y
//! growing downwards). Nothing is cached between calls.

use egui::{pos2, Pos2, Rect};

use crate::config::ConfigModel;
use crate::controller::{ControlState, ViewportSize};
use crate::geometry::{bar_centers, bar_height, usable_height};

/// One bar: its rectangle, its label and where the label is centered.
#[derive(Debug, Clone, PartialEq)]
pub struct BarGeometry {
    /// The value the bar represents
    pub value: f64,
    /// Bar rectangle, bottom-anchored
    pub rect: Rect,
    /// Raw value as plain decimal text
    pub label: String,
    /// Center point of the label, inside the bottom margin
    pub label_pos: Pos2,
}

/// Everything the view needs to paint the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub left: BarGeometry,
    pub right: BarGeometry,
}

/// Sum of the weights whose checkbox is set.
///
/// Flags beyond the weight table (or weights beyond the flags) are ignored.
pub fn checkbox_sum(weights: &[f64], flags: &[bool]) -> f64 {
    // fold from +0.0 so an empty selection reads "0", not "-0"
    weights
        .iter()
        .zip(flags)
        .filter(|&(_, &on)| on)
        .fold(0.0, |acc, (weight, _)| acc + weight)
}

/// Plain decimal text for a label. Integral values print without a fraction.
pub fn format_value(value: f64) -> String {
    format!("{}", value)
}

/// Computes the drawing instructions for the current state and viewport.
///
/// Pure and idempotent: the same inputs always produce an identical frame.
pub fn compute_frame(config: &ConfigModel, state: &ControlState, viewport: ViewportSize) -> RenderFrame {
    let layout = config.layout();
    let axis = config.axis_range();

    let left_value = state.slider_value() as f64;
    let right_value = checkbox_sum(config.checkbox_weights(), state.checkbox_flags());

    let usable = usable_height(viewport.height, layout.bar_padding);
    let (left_center, right_center) = bar_centers(viewport.width);
    let label_y = (viewport.height - layout.bar_padding / 2.0).max(0.0);

    let bar = |value: f64, center_x: f32, label: String| {
        let height = bar_height(value, axis, usable);
        let half_width = layout.bar_width / 2.0;
        BarGeometry {
            value,
            rect: Rect::from_min_max(
                pos2(center_x - half_width, usable - height),
                pos2(center_x + half_width, usable),
            ),
            label,
            label_pos: pos2(center_x, label_y),
        }
    };

    RenderFrame {
        left: bar(left_value, left_center, state.slider_value().to_string()),
        right: bar(right_value, right_center, format_value(right_value)),
    }
}
