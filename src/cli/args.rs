//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::CharacterSet;
use crate::options::RenderOptions;

/// Render images as ASCII, block, or Braille text art
#[derive(Parser, Debug)]
#[command(name = "glyphcast")]
#[command(version, about = "Render images as text art", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render an image file
    Image(ImageArgs),
    /// Render a text banner
    Text {
        /// Text to draw
        text: String,
        /// Character used for filled pixels
        #[arg(long = "char", default_value = "#")]
        fill: char,
        /// Write to a file instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Render a built-in test image with every charset
    Demo {
        /// Output width in characters
        #[arg(long, short)]
        width: Option<u32>,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Options for the `image` subcommand.
///
/// Unset values fall back to the config file, then to built-in defaults.
#[derive(clap::Args, Debug)]
pub struct ImageArgs {
    /// Image file to render
    pub path: PathBuf,

    /// Output width in characters [default: 80]
    #[arg(long, short)]
    pub width: Option<u32>,

    /// Character set [default: basic]
    #[arg(long)]
    pub charset: Option<CharacterSet>,

    /// Invert brightness (for light backgrounds)
    #[arg(long)]
    pub invert: bool,

    /// 24-bit ANSI color output
    #[arg(long)]
    pub color: bool,

    /// Floyd-Steinberg dithering
    #[arg(long)]
    pub dither: bool,

    /// Emphasize Sobel edges
    #[arg(long)]
    pub edge: bool,

    /// HTML document output (implies --color)
    #[arg(long)]
    pub html: bool,

    /// Write to a file instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl ImageArgs {
    /// Layer these flags over `base`. Flags can only switch features on.
    pub fn apply(&self, base: RenderOptions) -> RenderOptions {
        RenderOptions {
            width: self.width.unwrap_or(base.width),
            charset: self.charset.map(Into::into).unwrap_or(base.charset),
            invert: self.invert || base.invert,
            color: self.color || base.color,
            dither: self.dither || base.dither,
            edge: self.edge || base.edge,
            html: self.html || base.html,
            cell_aspect: base.cell_aspect,
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
