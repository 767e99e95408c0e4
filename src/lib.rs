//! glyphcast library crate.
//!
//! Converts images and video frames into text art: plain ASCII, a dense
//! ASCII ramp, Unicode shade blocks, or Braille dot patterns, with optional
//! dithering, edge emphasis, and ANSI or HTML color.
//!
//! The entry point is [`render`], a pure function of a [`PixelBuffer`] and
//! [`RenderOptions`]:
//!
//! ```ignore
//! let pixels = glyphcast::source::load_image(Path::new("photo.png"))?;
//! let art = glyphcast::render(&pixels, &RenderOptions::default())?;
//! print!("{}", art);
//! ```

pub mod ascii;
pub mod banner;
pub mod cli;
pub mod config;
pub mod demo;
pub mod error;
pub mod frame;
pub mod options;
pub mod render;
pub mod source;

pub use ascii::Charset;
pub use error::RenderError;
pub use frame::{PixelBuffer, PixelFormat};
pub use options::{RenderOptions, TextArtifact};
pub use render::{render, render_grid};
