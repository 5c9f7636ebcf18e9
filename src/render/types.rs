//! Pixel data types.
//!
//! Contains the core data structures flowing through the render pipeline:
//! - Rgb: an opaque 24-bit color
//! - Pixel: a decoded RGBA sample
//! - TransparencyMode: how alpha is turned into an opaque color

use std::fmt;
use std::str::FromStr;

use crate::config::ConfigError;

/// Opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True when all three channels are equal.
    pub fn is_gray(&self) -> bool {
        self.r == self.g && self.g == self.b
    }
}

/// A single RGBA sample as produced by decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// A fully opaque pixel.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    pub const fn rgb(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    pub fn is_opaque(&self) -> bool {
        self.a == u8::MAX
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self::new(r, g, b, a)
    }
}

/// Policy for turning a pixel's alpha channel into an opaque color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TransparencyMode {
    /// Pixels below the alpha cutoff show the terminal background, the rest are opaque
    Threshold,
    /// Blend over a white background
    #[default]
    Whiten,
    /// Blend over a black background
    Blacken,
}

impl TransparencyMode {
    pub const ALL: [TransparencyMode; 3] = [Self::Threshold, Self::Whiten, Self::Blacken];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Threshold => "threshold",
            Self::Whiten => "whiten",
            Self::Blacken => "blacken",
        }
    }
}

impl fmt::Display for TransparencyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TransparencyMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ConfigError::InvalidTransparencyMode {
                value: s.to_string(),
            })
    }
}
