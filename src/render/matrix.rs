//! Row-major pixel grid at render resolution.

use super::error::RenderError;
use super::resize::Dimensions;
use super::types::Pixel;

/// Decoded image pixels laid out top-to-bottom, left-to-right.
///
/// Every row has exactly `width` pixels; constructors reject anything else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelMatrix {
    width: u32,
    height: u32,
    pixels: Vec<Pixel>,
}

impl PixelMatrix {
    /// Build from a flat row-major pixel buffer.
    pub fn from_raw(dims: Dimensions, pixels: Vec<Pixel>) -> Result<Self, RenderError> {
        if pixels.len() != dims.area() {
            return Err(RenderError::RaggedMatrix {
                width: dims.width,
                height: dims.height,
                expected: dims.area(),
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width: dims.width,
            height: dims.height,
            pixels,
        })
    }

    /// Build from packed RGBA8 bytes, four per pixel.
    pub fn from_rgba_bytes(dims: Dimensions, bytes: &[u8]) -> Result<Self, RenderError> {
        if bytes.len() != dims.area() * 4 {
            return Err(RenderError::RaggedMatrix {
                width: dims.width,
                height: dims.height,
                expected: dims.area(),
                actual: bytes.len() / 4,
            });
        }
        let pixels = bytes
            .chunks_exact(4)
            .map(|px| Pixel::new(px[0], px[1], px[2], px[3]))
            .collect();
        Self::from_raw(dims, pixels)
    }

    /// Build from explicit rows, which must all share one length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self, RenderError> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);
        let dims = Dimensions::new(width as u32, height as u32);

        if let Some(bad) = rows.iter().find(|row| row.len() != width) {
            return Err(RenderError::RaggedMatrix {
                width: dims.width,
                height: dims.height,
                expected: width,
                actual: bad.len(),
            });
        }

        Self::from_raw(dims, rows.into_iter().flatten().collect())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    #[cfg(test)]
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    #[cfg(test)]
    pub fn get(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        // chunks_exact(0) panics; a zero-width matrix has no pixels to walk.
        let chunk = (self.width as usize).max(1);
        self.pixels
            .chunks_exact(chunk)
            .take(if self.width == 0 { 0 } else { self.height as usize })
    }
}
