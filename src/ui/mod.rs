//! UI panel rendering subsystem
//!
//! This module contains all UI panel rendering logic for the bar viewer:
//! - Control panel (slider and checkbox column)
//! - Canvas panel (the two bars, resize detection)
//! - Status bar (current values and errors)
//! - Panel manager (panel orchestration and event application)

pub mod canvas_panel;
pub mod control_panel;
pub mod panel_manager;
pub mod status_bar;
