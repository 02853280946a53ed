//! Application runner logic
//!
//! Handles the different ways to run pointlayer

use crate::core::app::load_point_layer;
use crate::core::config::{CliArgs, ConfigFile};
use crate::data::to_hex_rgb;
use crate::editing::PointLayer;
use crate::logging;
use anyhow::Result;
use bevy::log::info;
use std::io::{self, Write};

/// Create and run the application with the given CLI arguments.
/// Handles special CLI flags and delegates to appropriate runners.
pub fn run_app(cli_args: CliArgs) -> Result<()> {
    if cli_args.new_config {
        return ConfigFile::initialize_config_directory();
    }

    if cli_args.check {
        return check_level(&cli_args);
    }

    if cli_args.log_to_file {
        if let Err(e) = logging::setup_log_redirection() {
            eprintln!("Failed to setup log redirection: {}", e);
        }
    }

    let mut app = crate::core::app::create_app(cli_args)?;
    app.run();
    Ok(())
}

/// Load the level's point layer and print it without opening a window
fn check_level(cli_args: &CliArgs) -> Result<()> {
    logging::init_headless_logging();
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let Some(path) = &cli_args.level else {
        return Err(anyhow::anyhow!("--check needs a level file (--level <FILE>)"));
    };

    let layer = load_point_layer(path)?;
    info!("Loaded {} points from {:?}", layer.len(), path);

    let stdout = io::stdout();
    write_summary(&layer, &mut stdout.lock())?;
    Ok(())
}

/// Write the layer back out in level format
pub fn write_summary(layer: &PointLayer, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{}", layer.len())?;
    for point in layer.points() {
        writeln!(
            out,
            "{} {} {} {}",
            point.id,
            point.position.x,
            point.position.y,
            to_hex_rgb(point.color)
        )?;
    }
    Ok(())
}
