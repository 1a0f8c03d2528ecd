//! Presentation layer for visual styling.
//!
//! This module maps configuration values onto egui types:
//! - Font family resolution
//! - Derived colors (frame border)

pub mod color_mapping;
pub mod fonts;
