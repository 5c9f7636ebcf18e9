//! Pixel-to-terminal rendering pipeline.
//!
//! Data flows `PixelMatrix` -> `composite` -> `encode` -> `render_frame`.
//! Terminal capability and target size are resolved before rendering and
//! passed in as plain values, so every stage here is pure.

mod ansi;
mod composite;
mod error;
mod frame;
mod matrix;
mod resize;
mod types;

pub use ansi::{encode, palette_index, ColorCode, ANSI_RESET};
pub use composite::{composite, Composited, ALPHA_CUTOFF};
pub use error::{Axis, RenderError};
pub use frame::{render_frame, RenderOptions, RenderedFrame, FILLER};
pub use matrix::PixelMatrix;
pub use resize::{fit_to_columns, Dimensions, COLUMNS_PER_PIXEL, MAX_TARGET_PIXELS};
pub use types::{Pixel, Rgb, TransparencyMode};
