//! Command line interface for the point layer editor
//!
//! Handles parsing command line arguments and provides
//! validation for user inputs.

use crate::data::parse_hex_rgb;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// pointlayer CLI arguments
///
/// Examples:
///   pointlayer                               # Start with an empty layer
///   pointlayer --level level.txt             # Edit the points of a level
///   pointlayer --level level.txt --check     # Validate a level without a window
///   pointlayer --color 00ffcc                # Color for newly placed points
///   pointlayer --seed 42                     # Reproducible point identifiers
#[derive(Parser, Debug, Resource, Clone, Default)]
#[clap(
    name = "pointlayer",
    version,
    about = "Editor for a level's point markers",
    long_about = "pointlayer loads the point layer of a level and lets you place, select and delete labeled point markers with the mouse and keyboard."
)]
pub struct CliArgs {
    /// Level file holding the point layer to edit
    ///
    /// If not specified, the editor starts with an empty layer.
    #[clap(
        long = "level",
        short = 'l',
        help = "Level file to load",
        long_help = "Path to a level file whose first section is a point layer: a count line followed by '<id> <x> <y> <RRGGBB>' lines. If not specified, the editor starts with an empty layer."
    )]
    pub level: Option<PathBuf>,

    /// Color for points placed with the mouse, as RRGGBB
    #[clap(
        long = "color",
        short = 'c',
        help = "Color of new points (RRGGBB)",
        long_help = "Color given to points created with the mouse, written as six hex digits without '#'. Overrides the new_point_color setting."
    )]
    pub color: Option<String>,

    /// Seed for generated point identifiers
    #[clap(
        long = "seed",
        help = "Seed for generated point identifiers",
        long_help = "Seed the random source used to name new points, so identifiers are reproducible between runs."
    )]
    pub seed: Option<u64>,

    /// Load the level, print its points and exit without opening a window
    #[clap(
        long = "check",
        help = "Validate the level and exit",
        long_help = "Load the point layer of --level, print a summary of its points and exit. Exits non-zero if the layer fails to load."
    )]
    pub check: bool,

    /// Initialize user configuration directory with default settings
    #[clap(
        long = "new-config",
        help = "Initialize user config directory with default settings",
        long_help = "Create the pointlayer config directory with a settings.json file holding the default colors, then exit."
    )]
    pub new_config: bool,

    /// Redirect stdout and stderr into the dated log file
    #[clap(
        long = "log-to-file",
        help = "Write logs to the log directory instead of the terminal",
        long_help = "Redirect standard output and error into <config dir>/pointlayer/logs/pointlayer-<date>.log. Requires an initialized config directory (see --new-config)."
    )]
    pub log_to_file: bool,
}

impl CliArgs {
    /// Validate the CLI arguments after parsing
    ///
    /// This ensures that paths exist and colors parse before the application
    /// starts, providing clear error messages for common mistakes.
    pub fn validate(&self) -> Result<(), String> {
        if let Some(path) = &self.level {
            if !path.exists() {
                return Err(format!(
                    "Level file does not exist: {}\nMake sure the path is correct and the file exists.",
                    path.display()
                ));
            }
            if !path.is_file() {
                return Err(format!(
                    "Level path is not a file: {}",
                    path.display()
                ));
            }
        }

        if let Some(color) = &self.color {
            if let Err(error) = parse_hex_rgb(color) {
                return Err(format!(
                    "Invalid point color '{color}': {error}\nUse six hex digits without '#', e.g. ff8800."
                ));
            }
        }

        if self.check && self.level.is_none() {
            return Err("--check needs a level file (--level <FILE>)".to_string());
        }

        Ok(())
    }
}
