//! Bar viewer GUI application
//!
//! An interactive window that shows two vertical bars side by side using the
//! egui framework:
//! - The left bar follows a vertical slider
//! - The right bar shows the weighted sum of a column of checkboxes
//!
//! Both bars share one configured axis, so their heights stay comparable.
//!
//! The application is built with a modular architecture:
//! - `app/` - Application state and event/style coordination
//! - `presentation/` - Font and color mapping for egui
//! - `ui/` - Panel rendering and event collection
//! - `rendering/` - Painting the computed bar geometry

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::{Context, Result};
use eframe::egui;
use std::path::PathBuf;
use tracing::{error, info, Level};

use barview::{BarController, ConfigSource};

mod app;
mod presentation;
mod rendering;
mod ui;

use app::{AppState, StyleCoordinator};
use ui::panel_manager::PanelManager;

const INITIAL_WINDOW_SIZE: [f32; 2] = [900.0, 600.0];

/// Application entry point: loads the configuration, then launches the window.
///
/// A configuration that fails to load or validate aborts startup.
fn main() -> Result<()> {
    init_logging();

    // Optional configuration path as the first argument
    let explicit_path = std::env::args().nth(1).map(PathBuf::from);
    let source = ConfigSource::locate(explicit_path);
    info!(%source, "Loading configuration");

    let config = match source.load() {
        Ok(config) => config,
        Err(err) => {
            error!(%source, %err, "Configuration rejected");
            return Err(err).with_context(|| format!("Failed to load configuration from {}", source));
        }
    };
    info!(
        checkboxes = config.checkbox_count(),
        slider_min = config.slider_range().min,
        slider_max = config.slider_range().max,
        "Configuration loaded"
    );

    let title = config.title().to_string();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(INITIAL_WINDOW_SIZE)
            .with_title(&title),
        ..Default::default()
    };

    let controller = BarController::new(config);
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(BarViewApp::new(controller)))),
    )
    .map_err(|err| anyhow::anyhow!("Failed to start the UI: {}", err))
}

/// Debug builds log everything down to DEBUG, release builds stop at INFO.
fn init_logging() {
    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}

/// The bar viewer application.
struct BarViewApp {
    state: AppState,
}

impl BarViewApp {
    fn new(controller: BarController) -> Self {
        Self {
            state: AppState::new(controller),
        }
    }
}

impl eframe::App for BarViewApp {
    /// Main update loop: apply the palette, then render panels.
    ///
    /// Control events are applied by the panel manager as each panel reports
    /// them, so the canvas always paints the latest state.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        StyleCoordinator::apply_style(ctx, &self.state);
        PanelManager::render_all_panels(ctx, &mut self.state);
    }
}
