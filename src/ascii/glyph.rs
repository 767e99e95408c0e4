//! Glyph resolution from quantized symbols.

use super::braille::mask_to_char;
use super::charset::Charset;
use crate::error::RenderError;

/// A quantized symbol awaiting a printable character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    /// Index into a charset table
    Level(usize),
    /// Packed Braille dot mask
    Dots(u8),
}

/// Resolve a symbol to its character in `charset`.
///
/// # Errors
/// [`RenderError::InternalInvariantViolation`] when a level falls outside the
/// table, or when the symbol kind does not match the charset.
pub fn resolve(charset: Charset, symbol: Symbol) -> Result<char, RenderError> {
    match (charset.table(), symbol) {
        (Some(table), Symbol::Level(index)) => table.get(index).copied().ok_or_else(|| {
            RenderError::InternalInvariantViolation(format!(
                "level {} outside {} table of {} glyphs",
                index,
                charset,
                table.len()
            ))
        }),
        (None, Symbol::Dots(mask)) => Ok(mask_to_char(mask)),
        (_, symbol) => Err(RenderError::InternalInvariantViolation(format!(
            "{:?} cannot be drawn with the {} charset",
            symbol, charset
        ))),
    }
}

/// The most ink-heavy glyph of a charset, used for edge emphasis.
pub fn heaviest(charset: Charset) -> char {
    match charset.table() {
        Some(table) => table[table.len() - 1],
        None => mask_to_char(0xFF),
    }
}
