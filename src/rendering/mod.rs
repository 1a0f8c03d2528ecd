//! Rendering subsystem for drawing the bars
//!
//! - Bar rendering (rectangles and value labels from a computed frame)

pub mod bar_renderer;
