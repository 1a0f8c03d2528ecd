//! Static configuration for the bar viewer.
//!
//! The configuration is a JSON document read once at startup. Parsing happens
//! in two steps: serde deserializes the raw document (catching missing keys
//! and wrong types), then `ConfigModel::from_raw` validates ranges, numbers
//! and colors and produces the immutable `ConfigModel`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::palette::{parse_color, Palette};

/// File name looked up in the working directory when no path is given.
pub const LOCAL_CONFIG_FILE: &str = "barview.json";

/// Configuration shipped inside the binary, used when no file is found.
const BUILTIN_CONFIG: &str = include_str!("../config/default.json");

const DEFAULT_TITLE: &str = "Bar Length Controller";

/// Integer domain of the slider widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderRange {
    pub min: i64,
    pub max: i64,
}

impl SliderRange {
    /// Clamps a value into `[min, max]`.
    pub fn clamp(&self, value: i64) -> i64 {
        value.clamp(self.min, self.max)
    }
}

/// Shared scale both bar heights are normalized against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub min: f64,
    pub max: f64,
}

impl AxisRange {
    /// Width of the axis domain. Always positive for a validated config.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

/// Layout constants, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct Layout {
    /// Outer padding around the control column
    pub padding: f32,
    /// Margin between the canvas frame and the window edge
    pub frame_padding: f32,
    /// Length of the slider track
    pub slider_length: f32,
    /// Length of the slider handle along the track
    #[serde(rename = "slider_sliderlength")]
    pub slider_handle_length: f32,
    /// Thickness of the slider track
    pub slider_width: f32,
    /// Bottom margin of the canvas reserved for value labels
    pub bar_padding: f32,
    /// Width shared by both bars
    pub bar_width: f32,
}

/// Font family and the minimum sizes for headings and labels.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FontSpec {
    pub family: String,
    pub title_size: f32,
    pub label_size: f32,
}

#[derive(Deserialize)]
struct RawSlider {
    min: i64,
    max: i64,
    #[serde(default)]
    initial: Option<i64>,
}

#[derive(Deserialize)]
struct RawAxis {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RawColors {
    background: String,
    frame_background: String,
    slider_background: String,
    trough: String,
    select: String,
    text: String,
    bar_left: String,
    bar_right: String,
}

#[derive(Deserialize)]
struct RawConfig {
    #[serde(default)]
    title: Option<String>,
    slider: RawSlider,
    yaxis: RawAxis,
    checkbox_values: Vec<f64>,
    #[serde(default)]
    checkbox_labels: Option<Vec<String>>,
    font: FontSpec,
    colors: RawColors,
    layout: Layout,
}

/// Validated, read-only parameter bundle.
///
/// Invariants upheld by construction:
/// - `slider_range.min < slider_range.max`
/// - `axis_range.min < axis_range.max`
/// - at least one checkbox weight, and exactly one label per weight
/// - `initial_slider_value` lies inside `slider_range`
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigModel {
    title: String,
    slider_range: SliderRange,
    initial_slider_value: i64,
    axis_range: AxisRange,
    checkbox_weights: Vec<f64>,
    checkbox_labels: Vec<String>,
    font: FontSpec,
    palette: Palette,
    layout: Layout,
}

/// Where the configuration was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Builtin,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::File(path) => write!(f, "{}", path.display()),
            ConfigSource::Builtin => write!(f, "<built-in>"),
        }
    }
}

impl ConfigSource {
    /// Picks the configuration source.
    ///
    /// An explicit path always wins, even if it does not exist (the load then
    /// fails). Otherwise `./barview.json`, then
    /// `<config_dir>/barview/config.json`, then the built-in configuration.
    pub fn locate(explicit: Option<PathBuf>) -> Self {
        if let Some(path) = explicit {
            return ConfigSource::File(path);
        }

        let local = PathBuf::from(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return ConfigSource::File(local);
        }

        if let Some(user) = dirs::config_dir().map(|dir| dir.join("barview").join("config.json")) {
            if user.is_file() {
                return ConfigSource::File(user);
            }
        }

        ConfigSource::Builtin
    }

    /// Loads and validates the configuration from this source.
    pub fn load(&self) -> Result<ConfigModel, ConfigError> {
        match self {
            ConfigSource::File(path) => ConfigModel::load(path),
            ConfigSource::Builtin => ConfigModel::builtin(),
        }
    }
}

impl ConfigModel {
    /// Reads and validates a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parses and validates a configuration document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig = serde_json::from_str(text)?;
        Self::from_raw(raw)
    }

    /// The configuration embedded in the binary.
    pub fn builtin() -> Result<Self, ConfigError> {
        Self::from_json_str(BUILTIN_CONFIG)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        if raw.slider.min >= raw.slider.max {
            return Err(ConfigError::InvalidRange {
                name: "slider",
                min: raw.slider.min as f64,
                max: raw.slider.max as f64,
            });
        }
        let slider_range = SliderRange {
            min: raw.slider.min,
            max: raw.slider.max,
        };

        check_finite("yaxis.min", raw.yaxis.min)?;
        check_finite("yaxis.max", raw.yaxis.max)?;
        if raw.yaxis.min >= raw.yaxis.max {
            return Err(ConfigError::InvalidRange {
                name: "yaxis",
                min: raw.yaxis.min,
                max: raw.yaxis.max,
            });
        }
        let axis_range = AxisRange {
            min: raw.yaxis.min,
            max: raw.yaxis.max,
        };

        if raw.checkbox_values.is_empty() {
            return Err(ConfigError::NoCheckboxes);
        }
        for weight in &raw.checkbox_values {
            check_finite("checkbox_values", *weight)?;
        }

        let checkbox_labels = match raw.checkbox_labels {
            Some(labels) if labels.len() != raw.checkbox_values.len() => {
                return Err(ConfigError::LabelCountMismatch {
                    labels: labels.len(),
                    weights: raw.checkbox_values.len(),
                });
            }
            Some(labels) => labels,
            None => (1..=raw.checkbox_values.len())
                .map(|i| format!("Checkbox {}", i))
                .collect(),
        };

        check_positive("font.title_size", raw.font.title_size)?;
        check_positive("font.label_size", raw.font.label_size)?;

        let layout = raw.layout;
        for (key, value) in [
            ("layout.padding", layout.padding),
            ("layout.frame_padding", layout.frame_padding),
            ("layout.slider_length", layout.slider_length),
            ("layout.slider_sliderlength", layout.slider_handle_length),
            ("layout.slider_width", layout.slider_width),
            ("layout.bar_padding", layout.bar_padding),
            ("layout.bar_width", layout.bar_width),
        ] {
            check_non_negative(key, value)?;
        }

        let colors = raw.colors;
        let palette = Palette {
            background: color("background", &colors.background)?,
            frame_background: color("frame_background", &colors.frame_background)?,
            slider_background: color("slider_background", &colors.slider_background)?,
            trough: color("trough", &colors.trough)?,
            select: color("select", &colors.select)?,
            text: color("text", &colors.text)?,
            bar_left: color("bar_left", &colors.bar_left)?,
            bar_right: color("bar_right", &colors.bar_right)?,
        };

        let initial_slider_value = slider_range.clamp(raw.slider.initial.unwrap_or(slider_range.min));

        Ok(Self {
            title: raw.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            slider_range,
            initial_slider_value,
            axis_range,
            checkbox_weights: raw.checkbox_values,
            checkbox_labels,
            font: raw.font,
            palette,
            layout,
        })
    }

    // ===== Read-only accessors =====

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn slider_range(&self) -> SliderRange {
        self.slider_range
    }

    /// Slider value at startup, already clamped into `slider_range`.
    pub fn initial_slider_value(&self) -> i64 {
        self.initial_slider_value
    }

    pub fn axis_range(&self) -> AxisRange {
        self.axis_range
    }

    /// One weight per checkbox, in display order.
    pub fn checkbox_weights(&self) -> &[f64] {
        &self.checkbox_weights
    }

    /// One label per checkbox, in display order.
    pub fn checkbox_labels(&self) -> &[String] {
        &self.checkbox_labels
    }

    pub fn checkbox_count(&self) -> usize {
        self.checkbox_weights.len()
    }

    pub fn font(&self) -> &FontSpec {
        &self.font
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

fn color(key: &'static str, value: &str) -> Result<egui::Color32, ConfigError> {
    parse_color(value).ok_or_else(|| ConfigError::InvalidColor {
        key,
        value: value.to_string(),
    })
}

fn check_finite(key: &'static str, value: f64) -> Result<(), ConfigError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber {
            key,
            value,
            reason: "expected a finite number",
        })
    }
}

fn check_non_negative(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber {
            key,
            value: value as f64,
            reason: "expected a finite, non-negative number",
        })
    }
}

fn check_positive(key: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidNumber {
            key,
            value: value as f64,
            reason: "expected a finite, positive number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn base_document() -> Value {
        serde_json::from_str(BUILTIN_CONFIG).unwrap()
    }

    fn parse(doc: &Value) -> Result<ConfigModel, ConfigError> {
        ConfigModel::from_json_str(&doc.to_string())
    }

    #[test]
    fn test_builtin_config_is_valid() {
        let config = ConfigModel::builtin().unwrap();
        assert_eq!(config.title(), "Bar Length Controller");
        assert_eq!(config.slider_range(), SliderRange { min: 350, max: 750 });
        assert_eq!(config.axis_range(), AxisRange { min: 350.0, max: 750.0 });
        assert_eq!(config.checkbox_count(), 12);
        assert_eq!(config.checkbox_labels()[0], "Checkbox 1");
        assert_eq!(config.checkbox_labels()[11], "Checkbox 12");
        assert_eq!(config.layout().bar_padding, 30.0);
        assert_eq!(config.layout().slider_handle_length, 30.0);
        assert_eq!(config.font().label_size, 12.0);
        assert_eq!(config.palette().bar_right, egui::Color32::from_rgb(255, 99, 71));
    }

    #[test]
    fn test_equal_slider_bounds_rejected() {
        let mut doc = base_document();
        doc["slider"] = json!({"min": 500, "max": 500});
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::InvalidRange { name: "slider", .. })
        ));
    }

    #[test]
    fn test_inverted_axis_rejected() {
        let mut doc = base_document();
        doc["yaxis"] = json!({"min": 10.0, "max": -10.0});
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::InvalidRange { name: "yaxis", .. })
        ));
    }

    #[test]
    fn test_missing_key_rejected() {
        let mut doc = base_document();
        doc["layout"].as_object_mut().unwrap().remove("bar_width");
        let err = parse(&doc).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().contains("bar_width"));
    }

    #[test]
    fn test_non_numeric_field_rejected() {
        let mut doc = base_document();
        doc["yaxis"]["max"] = json!("lots");
        assert!(matches!(parse(&doc), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_fractional_slider_bound_rejected() {
        let mut doc = base_document();
        doc["slider"]["max"] = json!(750.5);
        assert!(matches!(parse(&doc), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_weights_rejected() {
        let mut doc = base_document();
        doc["checkbox_values"] = json!([]);
        assert!(matches!(parse(&doc), Err(ConfigError::NoCheckboxes)));
    }

    #[test]
    fn test_label_count_must_match() {
        let mut doc = base_document();
        doc["checkbox_labels"] = json!(["only one"]);
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::LabelCountMismatch { labels: 1, weights: 12 })
        ));
    }

    #[test]
    fn test_custom_labels_kept_in_order() {
        let mut doc = base_document();
        doc["checkbox_values"] = json!([1, 2]);
        doc["checkbox_labels"] = json!(["alpha", "beta"]);
        let config = parse(&doc).unwrap();
        assert_eq!(config.checkbox_labels(), ["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn test_bad_color_rejected() {
        let mut doc = base_document();
        doc["colors"]["bar_left"] = json!("#zzzzzz");
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::InvalidColor { key: "bar_left", .. })
        ));
    }

    #[test]
    fn test_negative_layout_rejected() {
        let mut doc = base_document();
        doc["layout"]["bar_padding"] = json!(-1);
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::InvalidNumber { key: "layout.bar_padding", .. })
        ));
    }

    #[test]
    fn test_zero_font_size_rejected() {
        let mut doc = base_document();
        doc["font"]["label_size"] = json!(0);
        assert!(matches!(
            parse(&doc),
            Err(ConfigError::InvalidNumber { key: "font.label_size", .. })
        ));
    }

    #[test]
    fn test_initial_defaults_to_min_and_is_clamped() {
        let mut doc = base_document();
        doc["slider"] = json!({"min": 0, "max": 10});
        assert_eq!(parse(&doc).unwrap().initial_slider_value(), 0);

        doc["slider"] = json!({"min": 0, "max": 10, "initial": 99});
        assert_eq!(parse(&doc).unwrap().initial_slider_value(), 10);
    }

    #[test]
    fn test_defaults_for_optional_keys() {
        let mut doc = base_document();
        doc.as_object_mut().unwrap().remove("title");
        let config = parse(&doc).unwrap();
        assert_eq!(config.title(), DEFAULT_TITLE);
    }

    #[test]
    fn test_load_reports_missing_file() {
        let path = std::env::temp_dir().join("barview_definitely_missing.json");
        let _ = fs::remove_file(&path);
        assert!(matches!(ConfigModel::load(&path), Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_locate_prefers_explicit_path() {
        let path = PathBuf::from("/nonexistent/custom.json");
        assert_eq!(
            ConfigSource::locate(Some(path.clone())),
            ConfigSource::File(path)
        );
    }
}
