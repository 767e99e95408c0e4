//! Image loading into pixel buffers.

use std::path::Path;

use image::{DynamicImage, GenericImageView};

use crate::error::RenderError;
use crate::frame::PixelBuffer;

/// Decode an image file into a [`PixelBuffer`].
///
/// Images with an alpha channel keep it (as RGBA); everything else is
/// converted to RGB.
///
/// # Errors
/// [`RenderError::UnreadableSource`] when the file cannot be opened or
/// decoded, or decodes to zero pixels.
pub fn load_image(path: &Path) -> Result<PixelBuffer, RenderError> {
    log::debug!("Loading image: {}", path.display());

    let img = image::open(path).map_err(|e| {
        RenderError::unreadable(format!("failed to load '{}': {}", path.display(), e))
    })?;

    let (width, height) = img.dimensions();
    log::debug!("Decoded {}x{} {:?}", width, height, img.color());

    from_dynamic(img)
}

/// Convert a decoded image into a [`PixelBuffer`].
pub fn from_dynamic(img: DynamicImage) -> Result<PixelBuffer, RenderError> {
    let (width, height) = img.dimensions();
    if img.color().has_alpha() {
        PixelBuffer::from_rgba(img.into_rgba8().into_raw(), width, height)
    } else {
        PixelBuffer::from_rgb(img.into_rgb8().into_raw(), width, height)
    }
}
