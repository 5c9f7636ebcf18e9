//! CLI definitions for pixterm.
//!
//! This module contains the clap CLI structure used by both the main binary
//! and the xtask man page generator.

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::config::{ColorChoice, Overrides, WidthSpec};
use crate::render::TransparencyMode;

/// Version string with build metadata from build.rs.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", built ",
    env!("PIXTERM_BUILD_DATE"),
    ")"
);

/// Version string with build metadata from build.rs.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("PIXTERM_BUILD_DATE"),
    ")"
);

#[derive(Parser, Debug)]
#[command(name = "pixterm")]
#[command(version, long_version = LONG_VERSION)]
#[command(about = "Render an image as colored blocks in the terminal")]
#[command(
    long_about = "Render an image as colored blocks in the terminal.\n\n\
    Each pixel is drawn as two columns with a background color. Terminals that \
    set COLORTERM=truecolor get 24-bit colors; others get the nearest entry of \
    the 256-color palette.\n\n\
    Defaults can be stored in $PIXTERM_CONFIG or <config dir>/pixterm/config.toml \
    (keys: width, mode, color)."
)]
pub struct Cli {
    /// Local image file, or an http:// or https:// URL
    #[arg(value_name = "IMAGE", required_unless_present = "completions")]
    pub image: Option<String>,

    /// Number of terminal columns, or a percentage of the terminal width (e.g. 50%)
    #[arg(short, long, value_name = "WIDTH")]
    pub width: Option<WidthSpec>,

    /// How transparent pixels are drawn [default: whiten]
    #[arg(short, long, value_enum, value_name = "MODE")]
    pub mode: Option<TransparencyMode>,

    /// Color output: detect from COLORTERM, or force 24-bit / 256-color [default: auto]
    #[arg(long, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Print shell completions to stdout and exit
    #[arg(long, value_enum, value_name = "SHELL", exclusive = true)]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Settings given explicitly on the command line.
    pub fn overrides(&self) -> Overrides {
        Overrides {
            width: self.width,
            mode: self.mode,
            color: self.color,
        }
    }
}
