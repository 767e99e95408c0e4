//! Output grid sizing with terminal cell aspect correction.

use crate::error::RenderError;

/// Default cell aspect correction.
///
/// Terminal character cells are roughly twice as tall as they are wide,
/// so a uniform scale is halved vertically. A 200x100 source at 80
/// columns becomes 80x20.
pub const DEFAULT_CELL_ASPECT: f32 = 0.5;

/// Size of the character grid in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSize {
    pub cols: usize,
    pub rows: usize,
}

impl GridSize {
    /// Number of cells in the grid.
    pub fn cells(&self) -> usize {
        self.cols * self.rows
    }
}

/// Calculate the character grid for a source image.
///
/// `cols = width` and
/// `rows = round(img_height * (width / img_width) * cell_aspect)`,
/// never less than one row.
///
/// # Errors
/// [`RenderError::InvalidOption`] when `width` is zero or `cell_aspect` is
/// not a positive finite number; [`RenderError::UnreadableSource`] when the
/// image has no pixels.
pub fn grid_size(
    img_width: u32,
    img_height: u32,
    width: u32,
    cell_aspect: f32,
) -> Result<GridSize, RenderError> {
    if width == 0 {
        return Err(RenderError::invalid("width must be a positive integer"));
    }
    if !cell_aspect.is_finite() || cell_aspect <= 0.0 {
        return Err(RenderError::invalid(format!(
            "cell aspect must be a positive number, got {}",
            cell_aspect
        )));
    }
    if img_width == 0 || img_height == 0 {
        return Err(RenderError::unreadable("source image has no pixels"));
    }

    let scale = f64::from(width) / f64::from(img_width);
    let rows = (f64::from(img_height) * scale * f64::from(cell_aspect)).round() as usize;

    Ok(GridSize {
        cols: width as usize,
        rows: rows.max(1),
    })
}
