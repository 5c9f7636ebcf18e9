//! Image input: locating, decoding and resampling the source image.
//!
//! Turns a path or URL into a [`PixelMatrix`] at the size chosen by
//! [`fit_to_columns`](crate::render::fit_to_columns).

mod error;
mod fetch;

use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Instant;

use humansize::{format_size, DECIMAL};
use image::imageops::FilterType;
use image::DynamicImage;

use crate::render::{Dimensions, PixelMatrix, RenderError};

pub use error::LoadError;
pub use fetch::{Fetcher, HttpFetcher};

/// Resampling filter used when scaling to render size (bicubic).
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

/// Where the input image comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    Path(PathBuf),
    Url(String),
}

impl ImageSource {
    /// `http://` and `https://` strings are URLs, anything else is a path.
    pub fn parse(input: &str) -> Self {
        if input.starts_with("http://") || input.starts_with("https://") {
            Self::Url(input.to_string())
        } else {
            Self::Path(PathBuf::from(input))
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

/// Load and decode an image, downloading it with `fetcher` when remote.
pub fn load_image(
    source: &ImageSource,
    fetcher: &dyn Fetcher,
) -> Result<DynamicImage, LoadError> {
    let started = Instant::now();
    let image = match source {
        ImageSource::Path(path) => open_file(path)?,
        ImageSource::Url(url) => {
            let bytes = fetcher.fetch(url)?;
            tracing::debug!(
                fetcher = fetcher.name(),
                size = %format_size(bytes.len(), DECIMAL),
                "Downloaded {}",
                url
            );
            image::load_from_memory(&bytes).map_err(|source| LoadError::Decode {
                origin: url.clone(),
                source,
            })?
        }
    };

    tracing::info!(
        width = image.width(),
        height = image.height(),
        remote = source.is_remote(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "Loaded {}",
        source
    );
    Ok(image)
}

fn open_file(path: &Path) -> Result<DynamicImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    image::open(path).map_err(|source| LoadError::Decode {
        origin: path.display().to_string(),
        source,
    })
}

/// Original pixel dimensions of a decoded image.
pub fn image_dimensions(image: &DynamicImage) -> Dimensions {
    Dimensions::new(image.width(), image.height())
}

/// Resample `image` to exactly `target` and lay its RGBA pixels out row-major.
pub fn to_matrix(image: &DynamicImage, target: Dimensions) -> Result<PixelMatrix, RenderError> {
    let rgba = if image_dimensions(image) == target {
        image.to_rgba8()
    } else {
        image
            .resize_exact(target.width, target.height, RESIZE_FILTER)
            .to_rgba8()
    };
    let (width, height) = rgba.dimensions();
    PixelMatrix::from_rgba_bytes(Dimensions::new(width, height), rgba.as_raw())
}
