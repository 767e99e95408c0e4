//! Configuration file handling for glyphcast.
//!
//! Loads render defaults from `<config dir>/glyphcast/config.toml` or a
//! custom path. Command-line flags override anything set here.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::ascii::Charset;
use crate::error::RenderError;
use crate::options::RenderOptions;

/// Configuration file structure for glyphcast.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
}

/// The `[render]` section. Unset keys fall back to built-in defaults.
#[derive(Debug, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub charset: Option<String>,
    #[serde(default)]
    pub invert: bool,
    #[serde(default)]
    pub color: bool,
    #[serde(default)]
    pub dither: bool,
    #[serde(default)]
    pub edge: bool,
    #[serde(default)]
    pub html: bool,
    pub cell_aspect: Option<f32>,
}

impl Config {
    /// Read `path`, or the default location when `None`.
    ///
    /// A missing file is not an error and yields [`Config::default`]; a file
    /// that is present but unreadable or malformed is.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            log::debug!("Reading config from {}", path.display());
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            Self::parse(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })
        } else {
            log::debug!("No config at {}, using defaults", path.display());
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Render options described by this file, on top of the defaults.
    ///
    /// # Errors
    /// [`RenderError::InvalidOption`] for an unknown charset name.
    pub fn render_options(&self) -> Result<RenderOptions, RenderError> {
        let defaults = RenderOptions::default();
        let section = &self.render;

        let charset = match &section.charset {
            Some(name) => name.parse::<Charset>()?,
            None => defaults.charset,
        };

        Ok(RenderOptions {
            width: section.width.unwrap_or(defaults.width),
            charset,
            invert: section.invert,
            color: section.color,
            dither: section.dither,
            edge: section.edge,
            html: section.html,
            cell_aspect: section.cell_aspect.unwrap_or(defaults.cell_aspect),
        })
    }
}

/// Failure to read or parse a config file. Both carry the offending path.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(f, "Failed to read config file '{}': {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "Failed to parse config file '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::IoError { source, .. } => Some(source),
            ConfigError::ParseError { source, .. } => Some(source),
        }
    }
}

/// `<config dir>/glyphcast/config.toml`, falling back to `$HOME/.config`.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config")
        })
        .join("glyphcast")
        .join("config.toml")
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# glyphcast configuration

[render]
# Output width in characters
width = 80
# Character set: basic, dense, block, braille
charset = "basic"
# Invert brightness (for light backgrounds)
invert = false
# 24-bit ANSI color
color = false
# Floyd-Steinberg dithering
dither = false
# Sobel edge emphasis
edge = false
# HTML document output (implies color)
html = false
# Row correction for terminal cells (height:width of about 2:1 -> 0.5)
cell_aspect = 0.5
"#;
