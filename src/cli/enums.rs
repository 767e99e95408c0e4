//! CLI enum types for the character set option.

use clap::ValueEnum;

use crate::ascii::Charset;

/// ASCII character set for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum CharacterSet {
    #[default]
    Basic,
    Dense,
    Block,
    Braille,
}

impl From<CharacterSet> for Charset {
    fn from(c: CharacterSet) -> Self {
        match c {
            CharacterSet::Basic => Charset::Basic,
            CharacterSet::Dense => Charset::Dense,
            CharacterSet::Block => Charset::Block,
            CharacterSet::Braille => Charset::Braille,
        }
    }
}
