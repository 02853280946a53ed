//! Application builder and initialization
//!
//! This module provides the main app creation functions

use super::plugins::{CorePluginGroup, RenderingPluginGroup};
use crate::core::config::{CliArgs, ConfigFile, LayerSettings};
use crate::editing::PointLayer;
use crate::systems::{configure_default_plugins, IdRng};
use anyhow::{Context, Result};
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use std::path::Path;

/// Creates a fully configured point layer editor application.
///
/// The level is loaded before any plugin is added, so a level that fails to
/// load never opens a window.
pub fn create_app(cli_args: CliArgs) -> Result<App> {
    cli_args
        .validate()
        .map_err(|e| anyhow::anyhow!("CLI validation failed: {}", e))?;

    let layer = match &cli_args.level {
        Some(path) => load_point_layer(path)?,
        None => PointLayer::new(),
    };

    let mut app = App::new();
    configure_resources(&mut app, cli_args, layer)?;
    app.add_plugins(configure_default_plugins());
    add_plugin_groups(&mut app);
    Ok(app)
}

/// Load the point layer of a level file with a readable error chain
pub fn load_point_layer(path: &Path) -> Result<PointLayer> {
    PointLayer::load(path)
        .with_context(|| format!("Failed to load point layer from {}", path.display()))
}

/// Sets up application resources and configuration
fn configure_resources(app: &mut App, cli_args: CliArgs, layer: PointLayer) -> Result<()> {
    let config = ConfigFile::load();
    let settings = LayerSettings::resolve(&cli_args, config.as_ref())?;
    let background_color: Color = settings.background_color.into();

    app.insert_resource(IdRng::new(cli_args.seed))
        .insert_resource(cli_args)
        .insert_resource(settings)
        .insert_resource(layer)
        .insert_resource(ClearColor(background_color))
        // Markers only change on input
        .insert_resource(WinitSettings::desktop_app());

    Ok(())
}

/// Add all plugin groups to the application
fn add_plugin_groups(app: &mut App) {
    debug!("Adding plugin groups...");
    app.add_plugins((CorePluginGroup, RenderingPluginGroup));
    debug!("All plugin groups added successfully");
}
