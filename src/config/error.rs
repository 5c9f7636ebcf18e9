//! Configuration errors.

use std::path::PathBuf;

/// Errors raised while validating user settings, before any pixel is touched.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid transparency mode '{value}' (expected threshold, whiten or blacken)")]
    InvalidTransparencyMode { value: String },

    #[error("Invalid width '{value}': {reason}")]
    InvalidWidth { value: String, reason: &'static str },

    #[error("Invalid color setting '{value}' (expected auto, truecolor or 256)")]
    InvalidColorChoice { value: String },

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
