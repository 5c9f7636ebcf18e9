//! Aspect-correct target sizing.
//!
//! Each image pixel is drawn as two terminal columns, and a terminal cell is
//! roughly twice as tall as it is wide, so halving the column budget first
//! keeps the image's visual proportions.

use super::error::{Axis, RenderError};

/// Terminal columns used to draw one image pixel.
pub const COLUMNS_PER_PIXEL: u32 = 2;

/// Largest target the resampler is asked for (4096x4096, 64 MiB of RGBA).
pub const MAX_TARGET_PIXELS: u64 = 4096 * 4096;

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels covered.
    pub fn area(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Compute the pixel dimensions an image must be resized to so that it fills
/// `desired_width` terminal columns.
///
/// `width = floor(desired_width / 2)` and
/// `height = floor(width * original.height / original.width)`.
///
/// # Errors
/// [`RenderError::InvalidDimension`] when either resulting axis is zero,
/// [`RenderError::TooLarge`] when the target exceeds [`MAX_TARGET_PIXELS`], and
/// [`RenderError::EmptySource`] when the original image has no pixels.
pub fn fit_to_columns(
    original: Dimensions,
    desired_width: u32,
) -> Result<Dimensions, RenderError> {
    if original.width == 0 {
        return Err(RenderError::EmptySource { axis: Axis::Width });
    }
    if original.height == 0 {
        return Err(RenderError::EmptySource { axis: Axis::Height });
    }

    let width = desired_width / COLUMNS_PER_PIXEL;
    if width < 1 {
        return Err(RenderError::InvalidDimension {
            axis: Axis::Width,
            desired_width,
        });
    }

    // Both factors fit in u32, so the product fits in u64.
    let height = u64::from(width) * u64::from(original.height) / u64::from(original.width);
    if height < 1 {
        return Err(RenderError::InvalidDimension {
            axis: Axis::Height,
            desired_width,
        });
    }
    if u64::from(width).saturating_mul(height) > MAX_TARGET_PIXELS {
        return Err(RenderError::TooLarge {
            width,
            height: u32::try_from(height).unwrap_or(u32::MAX),
            max_pixels: MAX_TARGET_PIXELS,
            desired_width,
        });
    }

    // Under the pixel cap, so height <= MAX_TARGET_PIXELS.
    let height = height as u32;
    Ok(Dimensions { width, height })
}
