//! RGB to luminance conversion using ITU-R BT.709 weights.

use crate::frame::PixelBuffer;

const WEIGHT_R: f64 = 0.2126;
const WEIGHT_G: f64 = 0.7152;
const WEIGHT_B: f64 = 0.0722;

/// Single-channel brightness image, one value in [0, 1] per source pixel.
#[derive(Debug, Clone, PartialEq)]
pub struct LumaBuffer {
    pub values: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

impl LumaBuffer {
    /// Brightness at `(x, y)`.
    #[inline]
    pub fn at(&self, x: usize, y: usize) -> f32 {
        self.values[y * self.width + x]
    }
}

/// Perceptual brightness of one RGB pixel.
///
/// Y = 0.2126*R + 0.7152*G + 0.0722*B, channels normalized to [0, 1].
#[inline]
pub fn luma(rgb: [u8; 3]) -> f32 {
    // f64 accumulation so pure white lands on exactly 1.0 after narrowing
    let y = WEIGHT_R * f64::from(rgb[0]) + WEIGHT_G * f64::from(rgb[1]) + WEIGHT_B * f64::from(rgb[2]);
    ((y / 255.0) as f32).clamp(0.0, 1.0)
}

/// Convert a pixel buffer to luminance. Alpha is ignored.
pub fn to_luma(pixels: &PixelBuffer) -> LumaBuffer {
    LumaBuffer {
        values: pixels.rgb().map(luma).collect(),
        width: pixels.width() as usize,
        height: pixels.height() as usize,
    }
}
