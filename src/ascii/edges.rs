//! Sobel edge detection for outline emphasis.

use super::downsample::span;
use super::luminance::LumaBuffer;

/// Fraction of the strongest gradient a pixel must reach to count as an edge.
pub const EDGE_THRESHOLD: f32 = 0.25;

const SOBEL_X: [[f32; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: [[f32; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Boolean edge flags over the sample grid, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeMask {
    pub flags: Vec<bool>,
    pub width: usize,
    pub height: usize,
}

impl EdgeMask {
    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.flags[y * self.width + x]
    }
}

/// Gradient magnitude per pixel.
///
/// The kernels are:
/// ```text
/// Gx:          Gy:
/// [-1  0  1]   [-1 -2 -1]
/// [-2  0  2]   [ 0  0  0]
/// [-1  0  1]   [ 1  2  1]
/// ```
///
/// Magnitude is `sqrt(gx² + gy²)`. The one-pixel border is left at 0
/// since the kernel does not fit there.
pub fn sobel_magnitude(luma: &LumaBuffer) -> Vec<f32> {
    let (width, height) = (luma.width, luma.height);
    let mut magnitude = vec![0.0f32; width * height];

    if width < 3 || height < 3 {
        return magnitude;
    }

    for y in 1..height - 1 {
        for x in 1..width - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;

            for ky in 0..3 {
                for kx in 0..3 {
                    let val = luma.at(x + kx - 1, y + ky - 1);
                    gx += val * SOBEL_X[ky][kx];
                    gy += val * SOBEL_Y[ky][kx];
                }
            }

            magnitude[y * width + x] = (gx * gx + gy * gy).sqrt();
        }
    }

    magnitude
}

/// Build an edge mask at the given sample resolution.
///
/// A pixel is an edge when its gradient reaches [`EDGE_THRESHOLD`] of the
/// strongest gradient in the image. A sample is an edge when any pixel in
/// its block is. A flat image has no edges.
pub fn edge_mask(luma: &LumaBuffer, width: usize, height: usize) -> EdgeMask {
    let magnitude = sobel_magnitude(luma);
    let max = magnitude.iter().copied().fold(0.0f32, f32::max);

    let mut flags = vec![false; width * height];

    if max > 0.0 && width > 0 && height > 0 {
        let cutoff = max * EDGE_THRESHOLD;

        for sy in 0..height {
            let rows = span(sy, height, luma.height);
            for sx in 0..width {
                let cols = span(sx, width, luma.width);
                flags[sy * width + sx] = rows.clone().any(|py| {
                    magnitude[py * luma.width + cols.start..py * luma.width + cols.end]
                        .iter()
                        .any(|&m| m >= cutoff)
                });
            }
        }
    }

    EdgeMask {
        flags,
        width,
        height,
    }
}
