//! ASCII rendering engine.
//!
//! The stages that turn a pixel buffer into glyphs:
//!
//! 1. **Luminance** - RGB to brightness using BT.709
//! 2. **Dimensions** - character grid from width, source aspect and cell aspect
//! 3. **Downsampling** - box-filter onto the grid (or the Braille sub-grid)
//! 4. **Edge detection** - optional Sobel mask for outline emphasis
//! 5. **Mapping** - brightness to levels, with optional error diffusion
//! 6. **Glyphs** - level or dot mask to a printable character
//! 7. **Composition** - plain, ANSI truecolor or HTML text
//!
//! # Character Sets
//!
//! Four character sets are available via [`Charset`]:
//! - `Basic` - 10-level ASCII density ramp
//! - `Dense` - 69-level ASCII ramp
//! - `Block` - Unicode shade blocks
//! - `Braille` - 2x4 dot patterns, eight samples per cell

pub mod braille;
mod charset;
mod compose;
mod dimensions;
mod downsample;
mod edges;
mod glyph;
mod luminance;
mod mapping;

pub use charset::{Charset, Subcells, BASIC_CHARSET, BLOCK_CHARSET, BRAILLE_SUBCELLS, DENSE_CHARSET};
pub use compose::{compose, GlyphGrid, OutputFormat};
pub use dimensions::{grid_size, GridSize, DEFAULT_CELL_ASPECT};
pub use downsample::{downsample, downsample_colors, CellColor, SampleGrid};
pub use edges::{edge_mask, sobel_magnitude, EdgeMask, EDGE_THRESHOLD};
pub use glyph::{heaviest, resolve, Symbol};
pub use luminance::{luma, to_luma, LumaBuffer};
pub use mapping::{
    level_value, quantize, quantize_inverted, quantize_nearest, threshold_dots, DitherState,
    Quantizer, BRAILLE_THRESHOLD, FS_BELOW, FS_BELOW_LEFT, FS_BELOW_RIGHT, FS_RIGHT,
};

// Re-export braille helpers at the module level for convenience
pub use braille::{mask_to_char, pack_dots, BRAILLE_BASE};
