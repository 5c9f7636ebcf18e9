//! Render pipeline errors.

/// Image axis named in dimension errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Width,
    Height,
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Errors that can occur while sizing or rendering a frame.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("A render width of {desired_width} columns is too small: image {axis} would be zero")]
    InvalidDimension { axis: Axis, desired_width: u32 },

    #[error(
        "A render width of {desired_width} columns is too large: a {width}x{height} image \
         exceeds the {max_pixels} pixel limit"
    )]
    TooLarge {
        width: u32,
        height: u32,
        max_pixels: u64,
        desired_width: u32,
    },

    #[error("Source image has an empty {axis}")]
    EmptySource { axis: Axis },

    #[error("Pixel data has {actual} samples, expected {expected} for a {width}x{height} image")]
    RaggedMatrix {
        width: u32,
        height: u32,
        expected: usize,
        actual: usize,
    },
}
