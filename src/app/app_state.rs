//! Centralized application state for the bar viewer.

use barview::BarController;
use egui::FontFamily;

use crate::presentation::fonts;

/// Application state: the controller plus view-only extras.
///
/// All control values live inside the controller. The view reads them each
/// frame and never keeps its own copy between frames.
pub struct AppState {
    /// Control state, configuration and frame computation
    pub controller: BarController,

    /// egui family resolved from the configured font name
    pub font_family: FontFamily,

    /// Last integration error to display (if any)
    pub last_error: Option<String>,
}

impl AppState {
    /// Creates the state around a ready controller.
    pub fn new(controller: BarController) -> Self {
        let font_family = fonts::resolve_font_family(&controller.config().font().family);
        Self {
            controller,
            font_family,
            last_error: None,
        }
    }
}
