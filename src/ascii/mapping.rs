//! Brightness quantization with optional Floyd-Steinberg error diffusion.

/// Floyd-Steinberg diffusion weights:
/// ```text
///        [*]  7/16
/// 3/16  5/16  1/16
/// ```
/// The weights sum to 1, so error is moved around but never created.
pub const FS_RIGHT: f32 = 7.0 / 16.0;
pub const FS_BELOW_LEFT: f32 = 3.0 / 16.0;
pub const FS_BELOW: f32 = 5.0 / 16.0;
pub const FS_BELOW_RIGHT: f32 = 1.0 / 16.0;

/// Map a brightness in [0, 1] to a level index in `[0, levels - 1]`.
///
/// `index = floor(b * (levels - 1))`, clamped. Brighter input never maps
/// to a lower index.
#[inline]
pub fn quantize(brightness: f32, levels: usize) -> usize {
    if levels < 2 {
        return 0;
    }
    let top = levels - 1;
    let scaled = (brightness.clamp(0.0, 1.0) * top as f32).floor();
    (scaled as usize).min(top)
}

/// Inverted quantization, mirrored about the middle of the table.
///
/// Always equals `(levels - 1) - quantize(b, levels)`.
#[inline]
pub fn quantize_inverted(brightness: f32, levels: usize) -> usize {
    levels.saturating_sub(1) - quantize(brightness, levels)
}

/// Map a brightness to the nearest level index, clamped.
///
/// Used inside error diffusion, where rounding keeps the residual centred
/// on zero instead of always positive.
#[inline]
pub fn quantize_nearest(brightness: f32, levels: usize) -> usize {
    if levels < 2 {
        return 0;
    }
    let top = levels - 1;
    let scaled = (brightness.clamp(0.0, 1.0) * top as f32).round();
    (scaled as usize).min(top)
}

/// Brightness represented by a level index.
#[inline]
pub fn level_value(index: usize, levels: usize) -> f32 {
    if levels < 2 {
        0.0
    } else {
        index as f32 / (levels - 1) as f32
    }
}

/// Accumulated quantization error for one Floyd-Steinberg pass.
///
/// Holds the error carried into the row being processed and the error
/// already pushed into the row below. Owned by a single pass and
/// discarded with it.
#[derive(Debug, Clone)]
pub struct DitherState {
    current: Vec<f32>,
    next: Vec<f32>,
}

impl DitherState {
    /// Zeroed state for rows of `width` samples.
    pub fn new(width: usize) -> Self {
        Self {
            current: vec![0.0; width],
            next: vec![0.0; width],
        }
    }

    /// Error accumulated so far for column `x` of the current row.
    #[inline]
    pub fn error_at(&self, x: usize) -> f32 {
        self.current[x]
    }

    /// Spread the residual of column `x` to the samples not yet visited.
    pub fn diffuse(&mut self, x: usize, residual: f32) {
        let width = self.current.len();
        if x + 1 < width {
            self.current[x + 1] += residual * FS_RIGHT;
            self.next[x + 1] += residual * FS_BELOW_RIGHT;
        }
        if x > 0 {
            self.next[x - 1] += residual * FS_BELOW_LEFT;
        }
        self.next[x] += residual * FS_BELOW;
    }

    /// Move to the next row: the row below becomes current.
    pub fn advance_row(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.iter_mut().for_each(|e| *e = 0.0);
    }
}

/// Turns brightness samples into level indices.
#[derive(Debug, Clone, Copy)]
pub struct Quantizer {
    /// Number of levels in the target table
    pub levels: usize,
    /// Map light areas to ink-heavy levels
    pub invert: bool,
    /// Apply Floyd-Steinberg error diffusion
    pub dither: bool,
}

impl Quantizer {
    /// Quantize a row-major grid of samples.
    ///
    /// Returns one index per sample, each in `[0, levels - 1]`.
    pub fn run(&self, samples: &[f32], width: usize) -> Vec<usize> {
        if width == 0 || samples.is_empty() {
            return Vec::new();
        }

        if self.dither {
            self.run_dithered(samples, width)
        } else if self.invert {
            samples.iter().map(|&b| quantize_inverted(b, self.levels)).collect()
        } else {
            samples.iter().map(|&b| quantize(b, self.levels)).collect()
        }
    }

    fn run_dithered(&self, samples: &[f32], width: usize) -> Vec<usize> {
        let mut state = DitherState::new(width);
        let mut indices = Vec::with_capacity(samples.len());

        for row in samples.chunks(width) {
            for (x, &b) in row.iter().enumerate() {
                let b = if self.invert { 1.0 - b } else { b };
                let value = b + state.error_at(x);

                let index = quantize_nearest(value, self.levels);
                let residual = value - level_value(index, self.levels);
                state.diffuse(x, residual);

                indices.push(index);
            }
            state.advance_row();
        }

        indices
    }
}

/// Brightness at which a Braille dot turns on.
pub const BRAILLE_THRESHOLD: f32 = 0.5;

/// Threshold brightness samples into Braille dots.
///
/// Without dithering a dot is on when brightness reaches
/// [`BRAILLE_THRESHOLD`]; inversion takes the exact complement of that dot. With dithering the samples are diffused
/// against the two levels 0 and 1, whose midpoint is the same cutoff.
pub fn threshold_dots(samples: &[f32], width: usize, invert: bool, dither: bool) -> Vec<bool> {
    if dither {
        let quantizer = Quantizer {
            levels: 2,
            invert,
            dither: true,
        };
        return quantizer.run(samples, width).into_iter().map(|i| i == 1).collect();
    }

    samples
        .iter()
        .map(|&b| (b >= BRAILLE_THRESHOLD) != invert)
        .collect()
}
