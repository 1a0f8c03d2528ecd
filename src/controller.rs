//! Control state and the bar controller.
//!
//! The controller owns the loaded configuration, the current control state and
//! the last viewport size reported by the view. The view never holds any of
//! these: it forwards raw widget changes as `ControlEvent`s and paints whatever
//! `compute_frame` returns.

use tracing::debug;

use crate::config::ConfigModel;
use crate::error::IndexError;
use crate::frame::{self, checkbox_sum, RenderFrame};
use crate::geometry::compute_font_size;

/// Current values of the slider and the checkboxes.
///
/// `Clone` is the snapshot mechanism: copy it before handing state to any
/// other thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ControlState {
    slider_value: i64,
    checkbox_flags: Vec<bool>,
}

impl ControlState {
    /// Creates a state with every checkbox cleared.
    pub fn new(slider_value: i64, checkbox_count: usize) -> Self {
        Self {
            slider_value,
            checkbox_flags: vec![false; checkbox_count],
        }
    }

    pub fn slider_value(&self) -> i64 {
        self.slider_value
    }

    pub fn checkbox_flags(&self) -> &[bool] {
        &self.checkbox_flags
    }

    /// Sets one flag. Returns `false` if `index` is out of range.
    pub fn set_flag(&mut self, index: usize, value: bool) -> bool {
        match self.checkbox_flags.get_mut(index) {
            Some(flag) => {
                *flag = value;
                true
            }
            None => false,
        }
    }
}

/// Canvas size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f32,
    pub height: f32,
}

impl ViewportSize {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Raw events forwarded by the view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ControlEvent {
    /// The slider moved to a new value
    SliderChanged(i64),
    /// A checkbox was toggled
    CheckboxToggled { index: usize, value: bool },
    /// The canvas changed size
    ViewportResized { width: f32, height: f32 },
}

/// Owns control state and turns it into drawing instructions.
#[derive(Debug, Clone)]
pub struct BarController {
    config: ConfigModel,
    state: ControlState,
    viewport: ViewportSize,
    label_font_size: f32,
    title_font_size: f32,
}

impl BarController {
    /// Creates a controller from a validated configuration.
    ///
    /// The slider starts at the configured initial value, every checkbox is
    /// cleared and the viewport is empty until the view reports its size.
    pub fn new(config: ConfigModel) -> Self {
        let state = ControlState::new(config.initial_slider_value(), config.checkbox_count());
        let label_font_size = config.font().label_size;
        let title_font_size = config.font().title_size;

        Self {
            config,
            state,
            viewport: ViewportSize::default(),
            label_font_size,
            title_font_size,
        }
    }

    // ===== Queries =====

    pub fn config(&self) -> &ConfigModel {
        &self.config
    }

    pub fn state(&self) -> &ControlState {
        &self.state
    }

    /// Copies the current control state.
    pub fn snapshot(&self) -> ControlState {
        self.state.clone()
    }

    pub fn viewport(&self) -> ViewportSize {
        self.viewport
    }

    /// Value shown by the left bar: the raw slider value.
    pub fn left_value(&self) -> i64 {
        self.state.slider_value
    }

    /// Value shown by the right bar: the weighted checkbox sum.
    pub fn right_value(&self) -> f64 {
        checkbox_sum(self.config.checkbox_weights(), &self.state.checkbox_flags)
    }

    /// Label font size for the current viewport.
    pub fn label_font_size(&self) -> f32 {
        self.label_font_size
    }

    /// Heading font size for the current viewport.
    pub fn title_font_size(&self) -> f32 {
        self.title_font_size
    }

    // ===== Mutations =====

    /// Stores a slider value, clamped into the configured slider range.
    pub fn set_slider_value(&mut self, value: i64) {
        let clamped = self.config.slider_range().clamp(value);
        if clamped != value {
            debug!(value, clamped, "slider value clamped");
        }
        self.state.slider_value = clamped;
    }

    /// Stores one checkbox flag.
    ///
    /// # Errors
    /// `IndexError` if `index` is not below the number of configured weights.
    pub fn set_checkbox_flag(&mut self, index: usize, value: bool) -> Result<(), IndexError> {
        if self.state.set_flag(index, value) {
            Ok(())
        } else {
            Err(IndexError {
                index,
                len: self.state.checkbox_flags.len(),
            })
        }
    }

    /// Stores the new canvas size and rescales fonts for it.
    ///
    /// Negative sizes are treated as zero.
    pub fn on_viewport_resize(&mut self, width: f32, height: f32) {
        self.viewport = ViewportSize::new(width.max(0.0), height.max(0.0));

        let font = self.config.font();
        self.label_font_size = compute_font_size(self.viewport.height, font.label_size);
        self.title_font_size = compute_font_size(self.viewport.height, font.title_size);

        debug!(
            width = self.viewport.width,
            height = self.viewport.height,
            label_font_size = self.label_font_size,
            "viewport resized"
        );
    }

    /// Drawing instructions for the current state and viewport.
    pub fn compute_frame(&self) -> RenderFrame {
        frame::compute_frame(&self.config, &self.state, self.viewport)
    }

    /// Applies one event and returns the recomputed frame.
    pub fn handle_event(&mut self, event: ControlEvent) -> Result<RenderFrame, IndexError> {
        match event {
            ControlEvent::SliderChanged(value) => self.set_slider_value(value),
            ControlEvent::CheckboxToggled { index, value } => self.set_checkbox_flag(index, value)?,
            ControlEvent::ViewportResized { width, height } => self.on_viewport_resize(width, height),
        }
        Ok(self.compute_frame())
    }
}
