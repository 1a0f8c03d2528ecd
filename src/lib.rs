pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod geometry;
pub mod palette;

// Export configuration model
pub use config::{AxisRange, ConfigModel, ConfigSource, FontSpec, Layout, SliderRange};

// Export controller and its state
pub use controller::{BarController, ControlEvent, ControlState, ViewportSize};

// Export drawing instructions
pub use frame::{compute_frame, BarGeometry, RenderFrame};

// Export scaling helpers
pub use geometry::{bar_height, clamp01, compute_font_size, usable_height};

// Export errors
pub use error::{ConfigError, IndexError};

// Export palette support
pub use palette::{parse_color, Palette};
