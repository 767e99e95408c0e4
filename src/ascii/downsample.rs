//! Box-filter downsampling from pixels to the sample grid.

use std::ops::Range;

use super::charset::Subcells;
use super::dimensions::GridSize;
use super::luminance::LumaBuffer;
use crate::frame::PixelBuffer;

/// RGB color for downsampled cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Brightness samples in row-major order.
///
/// For table charsets there is one sample per character cell; for Braille
/// the grid is 2x wider and 4x taller than the character grid.
#[derive(Debug, Clone, PartialEq)]
pub struct SampleGrid {
    pub values: Vec<f32>,
    pub width: usize,
    pub height: usize,
}

/// Source pixels covered by block `index` of `cells` along an axis of `len` pixels.
///
/// Blocks tile the axis without gaps. When there are more blocks than
/// pixels every block still covers one pixel.
pub(crate) fn span(index: usize, cells: usize, len: usize) -> Range<usize> {
    let start = index * len / cells;
    let end = ((index + 1) * len / cells).max(start + 1);
    start..end.min(len)
}

/// Downsample a luminance buffer onto the sample grid.
///
/// Each sample is the mean brightness of every source pixel in its block.
/// `subcells` multiplies the grid resolution: `Subcells::SINGLE` yields
/// one sample per character, the Braille multiplier yields eight.
///
/// # Example
/// ```ignore
/// // 640x480 image onto a 40x20 grid
/// let samples = downsample(&luma, GridSize { cols: 40, rows: 20 }, Subcells::SINGLE);
/// assert_eq!(samples.values.len(), 40 * 20);
/// ```
pub fn downsample(luma: &LumaBuffer, grid: GridSize, subcells: Subcells) -> SampleGrid {
    let width = grid.cols * subcells.x;
    let height = grid.rows * subcells.y;

    if width == 0 || height == 0 || luma.width == 0 || luma.height == 0 {
        return SampleGrid {
            values: Vec::new(),
            width: 0,
            height: 0,
        };
    }

    let mut values = Vec::with_capacity(width * height);

    for sy in 0..height {
        let rows = span(sy, height, luma.height);
        for sx in 0..width {
            let cols = span(sx, width, luma.width);

            let mut sum = 0.0f64;
            for py in rows.clone() {
                let row = &luma.values[py * luma.width..(py + 1) * luma.width];
                sum += row[cols.clone()].iter().map(|&v| f64::from(v)).sum::<f64>();
            }
            let count = rows.len() * cols.len();
            values.push((sum / count as f64) as f32);
        }
    }

    SampleGrid {
        values,
        width,
        height,
    }
}

/// Average color of each character cell.
///
/// Always runs at character resolution, whatever the charset, so a
/// Braille glyph is tinted with the mean of its whole 2x4 block.
pub fn downsample_colors(pixels: &PixelBuffer, grid: GridSize) -> Vec<CellColor> {
    let img_width = pixels.width() as usize;
    let img_height = pixels.height() as usize;

    let mut colors = Vec::with_capacity(grid.cells());
    if grid.cells() == 0 {
        return colors;
    }

    for cy in 0..grid.rows {
        let rows = span(cy, grid.rows, img_height);
        for cx in 0..grid.cols {
            let cols = span(cx, grid.cols, img_width);

            let mut sum_r = 0u64;
            let mut sum_g = 0u64;
            let mut sum_b = 0u64;

            for py in rows.clone() {
                for px in cols.clone() {
                    let [r, g, b] = pixels.rgb_at(px as u32, py as u32);
                    sum_r += u64::from(r);
                    sum_g += u64::from(g);
                    sum_b += u64::from(b);
                }
            }

            let count = (rows.len() * cols.len()) as u64;
            colors.push(CellColor {
                r: (sum_r / count) as u8,
                g: (sum_g / count) as u8,
                b: (sum_b / count) as u8,
            });
        }
    }

    colors
}
