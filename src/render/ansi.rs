//! ANSI escape code conversion utilities.
//!
//! Converts composited colors to SGR background sequences, quantizing to the
//! 256-color palette when the terminal lacks 24-bit support.

use super::composite::Composited;
use super::types::Rgb;
use crate::terminal::TerminalCapability;

/// SGR reset sequence.
pub const ANSI_RESET: &str = "\x1b[0m";

/// First index of the 6x6x6 color cube.
const CUBE_START: u8 = 16;
/// First index of the 24-step grayscale ramp.
const GRAY_START: u8 = 232;
/// Highest level on each cube axis.
const CUBE_MAX_LEVEL: u32 = 5;
/// Highest step on the grayscale ramp.
const GRAY_MAX_STEP: u32 = 23;

/// A background color escape sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorCode {
    /// `ESC[48;2;R;G;Bm`
    TrueColor(Rgb),
    /// `ESC[48;5;Nm`
    Indexed(u8),
    /// `ESC[0m`
    Reset,
}

impl ColorCode {
    /// Append the escape sequence to the buffer.
    pub fn push_to(&self, buf: &mut String) {
        match self {
            Self::TrueColor(rgb) => {
                buf.push_str("\x1b[48;2;");
                buf.push_str(&rgb.r.to_string());
                buf.push(';');
                buf.push_str(&rgb.g.to_string());
                buf.push(';');
                buf.push_str(&rgb.b.to_string());
                buf.push('m');
            }
            Self::Indexed(n) => {
                buf.push_str("\x1b[48;5;");
                buf.push_str(&n.to_string());
                buf.push('m');
            }
            Self::Reset => buf.push_str(ANSI_RESET),
        }
    }
}

/// Encode a composited pixel for the given terminal.
pub fn encode(color: Composited, capability: TerminalCapability) -> ColorCode {
    match color {
        Composited::Transparent => ColorCode::Reset,
        Composited::Opaque(rgb) if capability.true_color() => ColorCode::TrueColor(rgb),
        Composited::Opaque(rgb) => ColorCode::Indexed(palette_index(rgb)),
    }
}

/// Nearest-level index into the 256-color palette.
///
/// Grays land on the ramp at 232-255, everything else in the cube at 16-231.
pub fn palette_index(rgb: Rgb) -> u8 {
    if rgb.is_gray() {
        GRAY_START + scale(rgb.r, GRAY_MAX_STEP)
    } else {
        CUBE_START + 36 * scale(rgb.r, CUBE_MAX_LEVEL)
            + 6 * scale(rgb.g, CUBE_MAX_LEVEL)
            + scale(rgb.b, CUBE_MAX_LEVEL)
    }
}

/// `round(channel / 255 * max)` in integer math; 255 is odd so there are no ties.
fn scale(channel: u8, max: u32) -> u8 {
    ((u32::from(channel) * max + 127) / 255) as u8
}
