//! Error types for configuration loading and control dispatch.

use std::path::PathBuf;
use thiserror::Error;

/// Failure to produce a valid `ConfigModel`. Always fatal at startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid range for {name}: min ({min}) must be less than max ({max})")]
    InvalidRange { name: &'static str, min: f64, max: f64 },

    #[error("checkbox_values must contain at least one weight")]
    NoCheckboxes,

    #[error("checkbox_labels has {labels} entries but checkbox_values has {weights}")]
    LabelCountMismatch { labels: usize, weights: usize },

    #[error("Invalid value for {key}: {value} ({reason})")]
    InvalidNumber {
        key: &'static str,
        value: f64,
        reason: &'static str,
    },

    #[error("Invalid color for colors.{key}: {value:?}")]
    InvalidColor { key: &'static str, value: String },
}

/// A checkbox index outside the configured weight table.
///
/// Raised only by integration bugs; the view never builds more checkboxes
/// than the configuration declares.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Checkbox index {index} out of range (have {len} checkboxes)")]
pub struct IndexError {
    pub index: usize,
    pub len: usize,
}
