//! The render pipeline: pixels in, text out.
//!
//! 1. **Luminance** - BT.709 brightness per pixel
//! 2. **Sampling** - box-filter onto the character (or Braille) grid
//! 3. **Edges** - optional Sobel mask at sample resolution
//! 4. **Quantization** - levels or dots, optionally dithered
//! 5. **Glyphs** - table lookup or Braille packing
//! 6. **Composition** - plain, ANSI, or HTML text
//!
//! A render owns all of its intermediate state, so frames can be rendered
//! from independent threads without coordination.

use crate::ascii::{
    braille, compose, downsample, downsample_colors, edge_mask, grid_size, heaviest, resolve,
    threshold_dots, to_luma, EdgeMask, GlyphGrid, GridSize, Quantizer, SampleGrid, Symbol,
};
use crate::error::RenderError;
use crate::frame::PixelBuffer;
use crate::options::{RenderOptions, TextArtifact};

/// Render one image into text.
///
/// Deterministic: identical inputs always produce byte-identical output.
///
/// # Errors
/// [`RenderError::InvalidOption`] for out-of-range options,
/// [`RenderError::UnreadableSource`] for an empty image, and
/// [`RenderError::InternalInvariantViolation`] if quantization escapes its
/// table. No output is produced on error.
pub fn render(pixels: &PixelBuffer, options: &RenderOptions) -> Result<TextArtifact, RenderError> {
    let grid = render_grid(pixels, options)?;
    let format = options.output_format();
    Ok(TextArtifact::new(format, compose(&grid, format)))
}

/// Render one image into a glyph grid without composing it.
pub fn render_grid(pixels: &PixelBuffer, options: &RenderOptions) -> Result<GlyphGrid, RenderError> {
    options.validate()?;

    let cells = grid_size(pixels.width(), pixels.height(), options.width, options.cell_aspect)?;
    let luma = to_luma(pixels);
    let samples = downsample(&luma, cells, options.charset.subcells());
    let edges = options
        .edge
        .then(|| edge_mask(&luma, samples.width, samples.height));

    let chars = if options.charset.is_braille() {
        braille_glyphs(&samples, edges.as_ref(), cells, options)?
    } else {
        table_glyphs(&samples, edges.as_ref(), options)?
    };

    if options.color_enabled() {
        let colors = downsample_colors(pixels, cells);
        Ok(GlyphGrid::from_chars_colored(chars, colors, cells.cols, cells.rows))
    } else {
        Ok(GlyphGrid::from_chars(chars, cells.cols, cells.rows))
    }
}

fn table_glyphs(
    samples: &SampleGrid,
    edges: Option<&EdgeMask>,
    options: &RenderOptions,
) -> Result<Vec<char>, RenderError> {
    let charset = options.charset;
    let quantizer = Quantizer {
        levels: charset.levels(),
        invert: options.invert,
        dither: options.dither,
    };
    let emphasis = heaviest(charset);

    quantizer
        .run(&samples.values, samples.width)
        .into_iter()
        .enumerate()
        .map(|(i, level)| match edges {
            Some(mask) if mask.flags[i] => Ok(emphasis),
            _ => resolve(charset, Symbol::Level(level)),
        })
        .collect()
}

fn braille_glyphs(
    samples: &SampleGrid,
    edges: Option<&EdgeMask>,
    cells: GridSize,
    options: &RenderOptions,
) -> Result<Vec<char>, RenderError> {
    let mut dots = threshold_dots(&samples.values, samples.width, options.invert, options.dither);
    if let Some(mask) = edges {
        for (dot, &edge) in dots.iter_mut().zip(&mask.flags) {
            *dot |= edge;
        }
    }

    braille::pack_grid(&dots, cells.cols, cells.rows)
        .into_iter()
        .map(|mask| resolve(options.charset, Symbol::Dots(mask)))
        .collect()
}
