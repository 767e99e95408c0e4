//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ImageArgs};
pub use commands::{handle_config_action, run, run_demo, run_image, run_text, write_output, CliError};
pub use enums::CharacterSet;
