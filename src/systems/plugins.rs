//! Plugin management and configuration for the point layer editor
//!
//! This module configures Bevy's default plugins and the editor camera.

use crate::core::config::{DEFAULT_WINDOW_SIZE, WINDOW_TITLE};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;

/// Configure logging with performance optimization for release builds
pub fn configure_logging() -> LogPlugin {
    #[cfg(debug_assertions)]
    {
        LogPlugin {
            level: Level::INFO,
            filter: "pointlayer=debug,bevy_render=warn,bevy_winit=warn,wgpu=warn,winit=warn"
                .to_string(),
            ..default()
        }
    }

    #[cfg(not(debug_assertions))]
    {
        LogPlugin {
            level: Level::WARN,
            filter: "pointlayer=info,bevy=warn,wgpu=error,winit=error".to_string(),
            ..default()
        }
    }
}

/// Configure default Bevy plugins for the application
pub fn configure_default_plugins() -> bevy::app::PluginGroupBuilder {
    DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(Window {
                title: WINDOW_TITLE.into(),
                resolution: DEFAULT_WINDOW_SIZE.into(),
                ..default()
            }),
            ..default()
        })
        .set(configure_logging())
}

/// Spawn the 2D camera that views the level, centered on the world origin
pub fn spawn_editor_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
    debug!("Spawned editor camera");
}

/// Plugin to organize camera setup
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_editor_camera);
    }
}
