//! Application-level modules for the bar viewer.
//!
//! This module contains the application state and the coordinators that
//! apply control events and styling to it.

mod app_state;
mod control_coordinator;
mod style_coordinator;

pub use app_state::AppState;
pub use control_coordinator::ControlCoordinator;
pub use style_coordinator::StyleCoordinator;
