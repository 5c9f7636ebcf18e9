//! Configuration management for pixterm.
//!
//! Settings come from three layers, highest priority first: command-line
//! flags, the optional TOML config file, and built-in defaults. Everything is
//! validated here so the renderer only ever sees typed values.

mod error;
mod width;

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::render::TransparencyMode;
use crate::terminal::TerminalCapability;

pub use error::ConfigError;
pub use width::WidthSpec;

/// Environment variable pointing at an alternative config file.
pub const CONFIG_PATH_VAR: &str = "PIXTERM_CONFIG";

/// How to decide between 24-bit and 256-color output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Follow the COLORTERM environment variable
    #[default]
    Auto,
    /// Always emit 24-bit color codes
    Truecolor,
    /// Always quantize to the 256-color palette
    #[value(name = "256")]
    Palette,
}

impl ColorChoice {
    /// Resolve to a capability, running `detect` only for `Auto`.
    pub fn capability(&self, detect: impl FnOnce() -> TerminalCapability) -> TerminalCapability {
        match self {
            Self::Auto => detect(),
            Self::Truecolor => TerminalCapability::new(true),
            Self::Palette => TerminalCapability::new(false),
        }
    }
}

impl FromStr for ColorChoice {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "truecolor" | "24bit" => Ok(Self::Truecolor),
            "256" | "palette" => Ok(Self::Palette),
            _ => Err(ConfigError::InvalidColorChoice {
                value: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Truecolor => "truecolor",
            Self::Palette => "256",
        })
    }
}

/// Contents of `config.toml`. Values stay as strings until [`RenderConfig::resolve`]
/// so a bad entry is reported with the same error as a bad flag.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Column count or percentage, e.g. `80` or `"50%"`
    pub width: Option<String>,
    /// threshold, whiten or blacken
    pub mode: Option<String>,
    /// auto, truecolor or 256
    pub color: Option<String>,
}

impl FileConfig {
    /// Path of the config file: `$PIXTERM_CONFIG`, else `<config dir>/pixterm/config.toml`.
    pub fn config_path() -> Option<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_PATH_VAR) {
            return Some(PathBuf::from(path));
        }
        dirs::config_dir().map(|dir| dir.join("pixterm").join("config.toml"))
    }

    /// Load the config file, returning defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load a specific file; a missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), ?config, "Loaded config file");
        Ok(config)
    }

    /// Parse TOML text. A bare integer width is accepted as well as a string.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        let mut table: toml::Table = toml::from_str(content)?;
        if let Some(toml::Value::Integer(cols)) = table.get("width") {
            let cols = cols.to_string();
            table.insert("width".to_string(), toml::Value::String(cols));
        }
        toml::Value::Table(table).try_into()
    }
}

/// Fully validated settings for one run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RenderConfig {
    pub width: WidthSpec,
    pub mode: TransparencyMode,
    pub color: ColorChoice,
}

/// Settings given on the command line; `None` means "not specified".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overrides {
    pub width: Option<WidthSpec>,
    pub mode: Option<TransparencyMode>,
    pub color: Option<ColorChoice>,
}

impl RenderConfig {
    /// Merge command-line overrides over the config file over defaults.
    pub fn resolve(overrides: Overrides, file: &FileConfig) -> Result<Self, ConfigError> {
        let width = match overrides.width {
            Some(width) => width,
            None => parse_or_default(file.width.as_deref())?,
        };
        let mode = match overrides.mode {
            Some(mode) => mode,
            None => parse_or_default(file.mode.as_deref())?,
        };
        let color = match overrides.color {
            Some(color) => color,
            None => parse_or_default(file.color.as_deref())?,
        };

        Ok(Self { width, mode, color })
    }
}

fn parse_or_default<T>(value: Option<&str>) -> Result<T, ConfigError>
where
    T: FromStr<Err = ConfigError> + Default,
{
    value.map_or_else(|| Ok(T::default()), str::parse)
}
