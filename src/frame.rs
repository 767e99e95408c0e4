//! Pixel buffer types fed into the renderer.

use crate::error::RenderError;

/// Channel layout of a [`PixelBuffer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// RGB format (3 bytes per pixel)
    Rgb,
    /// RGBA format (4 bytes per pixel, alpha ignored)
    Rgba,
}

impl PixelFormat {
    /// Get the number of bytes per pixel.
    pub fn channels(&self) -> usize {
        match self {
            PixelFormat::Rgb => 3,
            PixelFormat::Rgba => 4,
        }
    }
}

/// An immutable image or video frame.
///
/// Dimensions are fixed at construction and the data length is checked
/// against them, so every stage downstream can index without bounds games.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    format: PixelFormat,
}

impl PixelBuffer {
    /// Wrap raw row-major pixel data.
    ///
    /// Fails with [`RenderError::UnreadableSource`] when the buffer is empty
    /// or its length does not match `width * height * channels`.
    pub fn new(data: Vec<u8>, width: u32, height: u32, format: PixelFormat) -> Result<Self, RenderError> {
        if width == 0 || height == 0 || data.is_empty() {
            return Err(RenderError::unreadable(format!(
                "empty pixel buffer ({}x{})",
                width, height
            )));
        }

        let expected = width as usize * height as usize * format.channels();
        if data.len() != expected {
            return Err(RenderError::unreadable(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} {:?}",
                data.len(),
                expected,
                width,
                height,
                format
            )));
        }

        Ok(Self {
            data,
            width,
            height,
            format,
        })
    }

    /// Shorthand for an RGB buffer.
    pub fn from_rgb(data: Vec<u8>, width: u32, height: u32) -> Result<Self, RenderError> {
        Self::new(data, width, height, PixelFormat::Rgb)
    }

    /// Shorthand for an RGBA buffer.
    pub fn from_rgba(data: Vec<u8>, width: u32, height: u32) -> Result<Self, RenderError> {
        Self::new(data, width, height, PixelFormat::Rgba)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn format(&self) -> PixelFormat {
        self.format
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Iterate over `[r, g, b]` triples in row-major order, dropping alpha.
    pub fn rgb(&self) -> impl Iterator<Item = [u8; 3]> + '_ {
        self.data
            .chunks_exact(self.format.channels())
            .map(|px| [px[0], px[1], px[2]])
    }

    /// The `[r, g, b]` triple at `(x, y)`.
    pub fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        let idx = (y as usize * self.width as usize + x as usize) * self.format.channels();
        [self.data[idx], self.data[idx + 1], self.data[idx + 2]]
    }
}
