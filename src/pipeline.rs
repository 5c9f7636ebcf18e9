//! Glue between a decoded image and the pure render stages.

use image::DynamicImage;

use crate::render::{fit_to_columns, render_frame, RenderError, RenderOptions, RenderedFrame};
use crate::source::{image_dimensions, to_matrix};

/// Size `image` for `desired_width` terminal columns and render it.
pub fn render_image(
    image: &DynamicImage,
    desired_width: u32,
    options: RenderOptions,
) -> Result<RenderedFrame, RenderError> {
    let original = image_dimensions(image);
    let target = fit_to_columns(original, desired_width)?;
    tracing::debug!(
        original_width = original.width,
        original_height = original.height,
        width = target.width,
        height = target.height,
        desired_width,
        "Resizing for terminal"
    );

    let matrix = to_matrix(image, target)?;
    Ok(render_frame(&matrix, options))
}
