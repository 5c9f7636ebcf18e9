//! Alpha compositing.
//!
//! Turns an RGBA pixel into either an opaque color or a request to show the
//! terminal's own background.

use super::types::{Pixel, Rgb, TransparencyMode};

/// Alpha below which `threshold` mode treats a pixel as invisible.
pub const ALPHA_CUTOFF: u8 = 32;

/// Outcome of compositing one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Composited {
    /// Draw this color.
    Opaque(Rgb),
    /// Leave the terminal default background showing.
    Transparent,
}

/// Resolve a pixel's alpha under `mode`.
pub fn composite(pixel: Pixel, mode: TransparencyMode) -> Composited {
    if pixel.is_opaque() {
        return Composited::Opaque(pixel.rgb());
    }

    match mode {
        TransparencyMode::Threshold => {
            if pixel.a < ALPHA_CUTOFF {
                Composited::Transparent
            } else {
                Composited::Opaque(pixel.rgb())
            }
        }
        TransparencyMode::Whiten => Composited::Opaque(blend_over(pixel, Rgb::WHITE)),
        TransparencyMode::Blacken => Composited::Opaque(blend_over(pixel, Rgb::BLACK)),
    }
}

/// Blend `pixel` over an opaque background color.
fn blend_over(pixel: Pixel, background: Rgb) -> Rgb {
    let a = u32::from(pixel.a);
    Rgb::new(
        blend_channel(pixel.r, background.r, a),
        blend_channel(pixel.g, background.g, a),
        blend_channel(pixel.b, background.b, a),
    )
}

/// `round((fg * a + bg * (255 - a)) / 255)`.
///
/// The numerator is an integer and 255 is odd, so the quotient is never
/// exactly halfway and `+ 127` rounds to nearest without ties.
fn blend_channel(fg: u8, bg: u8, alpha: u32) -> u8 {
    let numerator = u32::from(fg) * alpha + u32::from(bg) * (255 - alpha);
    let value = (numerator + 127) / 255;
    debug_assert!(value <= 255, "blended channel out of range: {value}");
    value.min(255) as u8
}
