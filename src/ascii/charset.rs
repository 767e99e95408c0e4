//! Character set definitions for ASCII rendering.

use std::fmt;
use std::str::FromStr;

use crate::error::RenderError;

/// Basic ASCII density ramp (10 levels).
/// Characters ordered from least ink (space) to most ink (@).
pub const BASIC_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Dense ASCII ramp (69 levels), least ink first.
#[rustfmt::skip]
pub const DENSE_CHARSET: &[char] = &[
    ' ', '.', '\'', '`', '^', '"', ',', ':', ';', 'I', 'l', '!', 'i', '>', '<', '~',
    '+', '_', '-', '?', ']', '[', '}', '{', '1', ')', '(', '|', '\\', '/', 't', 'f',
    'j', 'r', 'x', 'n', 'u', 'v', 'c', 'z', 'X', 'Y', 'U', 'J', 'C', 'L', 'Q', '0',
    'O', 'Z', 'm', 'w', 'q', 'p', 'd', 'b', 'k', 'h', 'a', 'o', '*', '#', 'M', 'W',
    '&', '8', '%', 'B', '@',
];

/// Block character set (5 levels).
/// Uses Unicode shade blocks, empty to full.
pub const BLOCK_CHARSET: &[char] = &[' ', '░', '▒', '▓', '█'];

/// Sub-cells per Braille character: 2 columns by 4 rows.
pub const BRAILLE_SUBCELLS: Subcells = Subcells { x: 2, y: 4 };

/// Sampling resolution per character cell.
///
/// Table charsets take one sample per cell; Braille takes a 2x4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subcells {
    pub x: usize,
    pub y: usize,
}

impl Subcells {
    /// One sample per character cell.
    pub const SINGLE: Subcells = Subcells { x: 1, y: 1 };
}

/// Character set selection for a render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// Basic ASCII ramp (10 levels)
    #[default]
    Basic,
    /// Dense ASCII ramp (69 levels)
    Dense,
    /// Unicode shade blocks (5 levels)
    Block,
    /// 2x4 Braille dot patterns
    Braille,
}

impl Charset {
    /// All charsets, in display order.
    pub const ALL: [Charset; 4] = [
        Charset::Basic,
        Charset::Dense,
        Charset::Block,
        Charset::Braille,
    ];

    /// Get the glyph table for this charset.
    ///
    /// Braille has no table: its glyphs are generated from a dot mask,
    /// so this returns `None`.
    pub fn table(&self) -> Option<&'static [char]> {
        match self {
            Charset::Basic => Some(BASIC_CHARSET),
            Charset::Dense => Some(DENSE_CHARSET),
            Charset::Block => Some(BLOCK_CHARSET),
            Charset::Braille => None,
        }
    }

    /// Number of quantization levels.
    ///
    /// Braille dots are on or off, so it quantizes to two levels.
    pub fn levels(&self) -> usize {
        self.table().map_or(2, <[char]>::len)
    }

    /// Samples taken per character cell.
    pub fn subcells(&self) -> Subcells {
        match self {
            Charset::Braille => BRAILLE_SUBCELLS,
            _ => Subcells::SINGLE,
        }
    }

    /// Get a human-readable name for the charset.
    pub fn name(&self) -> &'static str {
        match self {
            Charset::Basic => "basic",
            Charset::Dense => "dense",
            Charset::Block => "block",
            Charset::Braille => "braille",
        }
    }

    /// Check if this charset uses braille rendering.
    pub fn is_braille(&self) -> bool {
        matches!(self, Charset::Braille)
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = RenderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Charset::Basic),
            "dense" => Ok(Charset::Dense),
            "block" => Ok(Charset::Block),
            "braille" => Ok(Charset::Braille),
            other => Err(RenderError::invalid(format!(
                "unknown charset '{}' (expected basic, dense, block or braille)",
                other
            ))),
        }
    }
}
