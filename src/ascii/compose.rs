//! Output composition: plain text, ANSI truecolor, or HTML.

use std::fmt::Write as _;

use super::downsample::CellColor;

/// The resolved character grid for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphGrid {
    /// Characters in row-major order
    pub chars: Vec<char>,
    /// Optional color for each character (same length as chars)
    pub colors: Option<Vec<CellColor>>,
    /// Width in characters
    pub cols: usize,
    /// Height in characters
    pub rows: usize,
}

impl GlyphGrid {
    /// Create a grid from a character vector.
    pub fn from_chars(chars: Vec<char>, cols: usize, rows: usize) -> Self {
        Self {
            chars,
            colors: None,
            cols,
            rows,
        }
    }

    /// Create a grid with characters and colors.
    pub fn from_chars_colored(chars: Vec<char>, colors: Vec<CellColor>, cols: usize, rows: usize) -> Self {
        Self {
            chars,
            colors: Some(colors),
            cols,
            rows,
        }
    }

    /// Iterate over rows of characters.
    pub fn lines(&self) -> impl Iterator<Item = &[char]> {
        self.chars.chunks(self.cols.max(1))
    }

    fn color_at(&self, idx: usize) -> CellColor {
        self.colors
            .as_ref()
            .and_then(|c| c.get(idx).copied())
            .unwrap_or_default()
    }
}

/// Output encoding selected by the render options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Plain,
    Ansi,
    Html,
}

/// Compose a glyph grid into text.
///
/// Plain and ANSI terminate each row with `\n` (ANSI resets the color
/// first). HTML separates rows with `<br>`.
pub fn compose(grid: &GlyphGrid, format: OutputFormat) -> String {
    match format {
        OutputFormat::Plain => compose_plain(grid),
        OutputFormat::Ansi => compose_ansi(grid),
        OutputFormat::Html => compose_html(grid),
    }
}

fn compose_plain(grid: &GlyphGrid) -> String {
    let mut out = String::with_capacity(grid.chars.len() + grid.rows);
    for line in grid.lines() {
        out.extend(line.iter());
        out.push('\n');
    }
    out
}

fn compose_ansi(grid: &GlyphGrid) -> String {
    // ~20 bytes of escape per glyph
    let mut out = String::with_capacity(grid.chars.len() * 20);
    for (row, line) in grid.lines().enumerate() {
        for (col, &c) in line.iter().enumerate() {
            let color = grid.color_at(row * grid.cols + col);
            // ANSI true color (24-bit): ESC[38;2;R;G;Bm for foreground
            let _ = write!(out, "\x1b[38;2;{};{};{}m{}", color.r, color.g, color.b, c);
        }
        out.push_str("\x1b[0m\n");
    }
    out
}

const HTML_HEAD: &str = "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>glyphcast</title>\n</head>\n<body style=\"background:#000;margin:0\">\n<div style=\"font-family:monospace;white-space:pre;line-height:1\">\n";
const HTML_TAIL: &str = "</div>\n</body>\n</html>\n";

fn compose_html(grid: &GlyphGrid) -> String {
    let mut out = String::with_capacity(HTML_HEAD.len() + grid.chars.len() * 40);
    out.push_str(HTML_HEAD);
    for (row, line) in grid.lines().enumerate() {
        for (col, &c) in line.iter().enumerate() {
            let color = grid.color_at(row * grid.cols + col);
            let _ = write!(
                out,
                "<span style=\"color:#{:02x}{:02x}{:02x}\">",
                color.r, color.g, color.b
            );
            push_escaped(&mut out, c);
            out.push_str("</span>");
        }
        if row + 1 < grid.rows {
            out.push_str("<br>");
        }
        out.push('\n');
    }
    out.push_str(HTML_TAIL);
    out
}

fn push_escaped(out: &mut String, c: char) {
    match c {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(c),
    }
}
