//! Render options and the text artifact they select.

use crate::ascii::{Charset, OutputFormat, DEFAULT_CELL_ASPECT};
use crate::error::RenderError;

/// Default output width in characters.
pub const DEFAULT_WIDTH: u32 = 80;

/// Options for a single render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderOptions {
    /// Target character columns
    pub width: u32,
    /// Glyph set
    pub charset: Charset,
    /// Map light areas to ink-heavy glyphs (for light backgrounds)
    pub invert: bool,
    /// Tag each glyph with its 24-bit source color
    pub color: bool,
    /// Floyd-Steinberg error diffusion
    pub dither: bool,
    /// Sobel outline overlay
    pub edge: bool,
    /// Emit an HTML document; implies `color`
    pub html: bool,
    /// Vertical correction for non-square terminal cells
    pub cell_aspect: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            charset: Charset::default(),
            invert: false,
            color: false,
            dither: false,
            edge: false,
            html: false,
            cell_aspect: DEFAULT_CELL_ASPECT,
        }
    }
}

impl RenderOptions {
    /// Check option ranges before any pixel is touched.
    pub fn validate(&self) -> Result<(), RenderError> {
        if self.width == 0 {
            return Err(RenderError::invalid("width must be a positive integer"));
        }
        if !self.cell_aspect.is_finite() || self.cell_aspect <= 0.0 {
            return Err(RenderError::invalid(format!(
                "cell aspect must be a positive number, got {}",
                self.cell_aspect
            )));
        }
        Ok(())
    }

    /// Whether per-cell colors are sampled. HTML always carries color.
    pub fn color_enabled(&self) -> bool {
        self.color || self.html
    }

    /// Output encoding for these options.
    pub fn output_format(&self) -> OutputFormat {
        if self.html {
            OutputFormat::Html
        } else if self.color {
            OutputFormat::Ansi
        } else {
            OutputFormat::Plain
        }
    }
}

/// Finished output of a render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextArtifact {
    Plain(String),
    Ansi(String),
    Html(String),
}

impl TextArtifact {
    pub(crate) fn new(format: OutputFormat, text: String) -> Self {
        match format {
            OutputFormat::Plain => TextArtifact::Plain(text),
            OutputFormat::Ansi => TextArtifact::Ansi(text),
            OutputFormat::Html => TextArtifact::Html(text),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            TextArtifact::Plain(s) | TextArtifact::Ansi(s) | TextArtifact::Html(s) => s,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            TextArtifact::Plain(s) | TextArtifact::Ansi(s) | TextArtifact::Html(s) => s,
        }
    }

    pub fn format(&self) -> OutputFormat {
        match self {
            TextArtifact::Plain(_) => OutputFormat::Plain,
            TextArtifact::Ansi(_) => OutputFormat::Ansi,
            TextArtifact::Html(_) => OutputFormat::Html,
        }
    }
}

impl std::fmt::Display for TextArtifact {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
