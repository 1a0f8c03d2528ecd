//! Color palette support for the bar viewer.
//!
//! Colors arrive from the configuration file as strings, either hex
//! (`#rrggbb` or the short `#rgb` form) or one of a handful of Tk color
//! names. They are resolved once, at load time, into a `Palette` of
//! `Color32` values.
//!
//! # Examples
//!
//! ```
//! use barview::palette::parse_color;
//! use egui::Color32;
//!
//! assert_eq!(parse_color("#4682B4"), Some(Color32::from_rgb(70, 130, 180)));
//! assert_eq!(parse_color("black"), Some(Color32::BLACK));
//! assert_eq!(parse_color("not-a-color"), None);
//! ```

use egui::Color32;

/// Resolved color palette, covering every colored element of the window.
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    // Background colors
    pub background: Color32,
    pub frame_background: Color32,

    // Slider colors
    pub slider_background: Color32,
    pub trough: Color32,
    pub select: Color32,

    // Foreground colors
    pub text: Color32,

    // Bar fills
    pub bar_left: Color32,
    pub bar_right: Color32,
}

/// Tk color names accepted in addition to hex strings.
const NAMED_COLORS: &[(&str, Color32)] = &[
    ("black", Color32::from_rgb(0, 0, 0)),
    ("white", Color32::from_rgb(255, 255, 255)),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 255, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("gray", Color32::from_rgb(190, 190, 190)),
    ("grey", Color32::from_rgb(190, 190, 190)),
    ("lightgray", Color32::from_rgb(211, 211, 211)),
    ("lightgrey", Color32::from_rgb(211, 211, 211)),
    ("steelblue", Color32::from_rgb(70, 130, 180)),
    ("tomato", Color32::from_rgb(255, 99, 71)),
];

/// Parses a color string into a `Color32`.
///
/// Accepts `#rrggbb`, `#rgb` and the names in `NAMED_COLORS`
/// (case-insensitive). Returns `None` for anything else.
pub fn parse_color(value: &str) -> Option<Color32> {
    let value = value.trim();

    if let Some(hex) = value.strip_prefix('#') {
        return hex_to_color32(hex);
    }

    let lower = value.to_ascii_lowercase();
    NAMED_COLORS
        .iter()
        .find(|(name, _)| *name == lower)
        .map(|(_, color)| *color)
}

/// Converts the digits of a hex color (without the leading `#`) to `Color32`.
fn hex_to_color32(hex: &str) -> Option<Color32> {
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color32::from_rgb(r, g, b))
        }
        3 => {
            // #abc expands to #aabbcc
            let digit = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|d| d * 17);
            Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
        }
        _ => None,
    }
}
