//! Font family resolution.
//!
//! egui ships one proportional and one monospace font, so configured family
//! names are mapped onto those two.

use egui::FontFamily;
use tracing::warn;

const MONOSPACE_FAMILIES: &[&str] = &["monospace", "mono", "courier", "courier new", "consolas", "menlo"];
const PROPORTIONAL_FAMILIES: &[&str] = &[
    "proportional",
    "sans",
    "sans-serif",
    "helvetica",
    "arial",
    "verdana",
    "dejavu sans",
    "ubuntu",
];

/// Maps a configured family name to an egui font family.
///
/// Unknown names fall back to proportional with a warning.
pub fn resolve_font_family(name: &str) -> FontFamily {
    let lower = name.trim().to_ascii_lowercase();

    if MONOSPACE_FAMILIES.contains(&lower.as_str()) {
        FontFamily::Monospace
    } else if PROPORTIONAL_FAMILIES.contains(&lower.as_str()) {
        FontFamily::Proportional
    } else {
        warn!(family = name, "Unknown font family, using proportional");
        FontFamily::Proportional
    }
}
