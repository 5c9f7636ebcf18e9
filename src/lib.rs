//! pixterm - render raster images as colored blocks in the terminal.
//!
//! The library is split into a pure rendering core and the thin layers
//! around it:
//! - [`render`]: sizing, alpha compositing, palette quantization, frame output
//! - [`terminal`]: color capability and width discovery
//! - [`source`]: loading and resampling the input image
//! - [`config`]: validated settings from flags and the config file
//! - [`cli`]: the clap command definition

pub mod cli;
pub mod config;
pub mod pipeline;
pub mod render;
pub mod source;
pub mod terminal;

pub use config::{ColorChoice, ConfigError, FileConfig, RenderConfig, WidthSpec};
pub use pipeline::render_image;
pub use render::{RenderError, RenderOptions, RenderedFrame, TransparencyMode};
pub use source::{ImageSource, LoadError};
pub use terminal::TerminalCapability;
