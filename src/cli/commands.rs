//! Subcommand handlers.

use std::io::Write;
use std::path::{Path, PathBuf};

use super::args::{Args, Command, ConfigAction, ImageArgs};
use crate::banner::{render_banner, BannerError};
use crate::config::{default_path, Config, ConfigError, DEFAULT_CONFIG};
use crate::demo;
use crate::error::RenderError;
use crate::options::RenderOptions;
use crate::render::render;
use crate::source::load_image;

/// Anything that can stop a CLI run.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Render(#[from] RenderError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Banner(#[from] BannerError),
    #[error("Failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
}

/// Dispatch a parsed command line.
pub fn run(args: Args) -> Result<(), CliError> {
    let config_path = args.config.as_deref();

    match args.command {
        Command::Image(image) => {
            let base = Config::load(config_path)?.render_options()?;
            run_image(&image, base)
        }
        Command::Text { text, fill, output } => run_text(&text, fill, output.as_deref()),
        Command::Demo { width } => {
            let mut base = Config::load(config_path)?.render_options()?;
            if let Some(width) = width {
                base.width = width;
            }
            run_demo(&base)
        }
        Command::Config { action } => handle_config_action(action, config_path),
    }
}

/// Render an image file and write the result.
pub fn run_image(args: &ImageArgs, base: RenderOptions) -> Result<(), CliError> {
    let options = args.apply(base);
    // Option errors surface before the file is even opened
    options.validate()?;
    log::debug!("Render options: {:?}", options);

    let pixels = load_image(&args.path)?;
    let artifact = render(&pixels, &options)?;
    write_output(artifact.as_str(), args.output.as_deref())
}

/// Render a text banner and write the result.
pub fn run_text(text: &str, fill: char, output: Option<&Path>) -> Result<(), CliError> {
    let banner = render_banner(text, fill)?;
    write_output(&banner, output)
}

/// Render the demo image to stdout.
pub fn run_demo(base: &RenderOptions) -> Result<(), CliError> {
    let out = demo::run_demo(base)?;
    write_output(&out, None)
}

/// Write finished text to a file, or to stdout when no path is given.
pub fn write_output(text: &str, output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            std::fs::write(path, text).map_err(|e| CliError::Write {
                path: path.to_path_buf(),
                source: e,
            })?;
            log::info!("Wrote {} bytes to {}", text.len(), path.display());
            Ok(())
        }
        None => {
            let stdout = std::io::stdout();
            let mut lock = stdout.lock();
            lock.write_all(text.as_bytes())
                .and_then(|_| lock.flush())
                .map_err(|e| CliError::Write {
                    path: PathBuf::from("<stdout>"),
                    source: e,
                })
        }
    }
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, path: Option<&Path>) -> Result<(), CliError> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let options = Config::load(Some(&config_path))?.render_options()?;
            println!("Current configuration:");
            println!("  Width: {}", options.width);
            println!("  Charset: {}", options.charset);
            println!("  Invert: {}", yes_no(options.invert));
            println!("  Color: {}", yes_no(options.color));
            println!("  Dither: {}", yes_no(options.dither));
            println!("  Edge: {}", yes_no(options.edge));
            println!("  HTML: {}", yes_no(options.html));
            println!("  Cell aspect: {}", options.cell_aspect);
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            init_config(&config_path)?;
            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}

fn init_config(config_path: &Path) -> Result<(), CliError> {
    if config_path.exists() {
        return Err(CliError::ConfigExists(config_path.to_path_buf()));
    }

    let write_err = |e| CliError::Write {
        path: config_path.to_path_buf(),
        source: e,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(write_err)?;
    }
    std::fs::write(config_path, DEFAULT_CONFIG).map_err(write_err)
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
