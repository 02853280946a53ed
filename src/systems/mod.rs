//! Bevy Systems and Plugins
//!
//! This module contains Bevy-specific systems and plugin configurations:
//! - Plugin management and configuration
//! - Mouse and keyboard input for the point layer

pub mod layer_input;
pub mod plugins;

// Re-export commonly used items
pub use layer_input::{
    handle_point_layer_keyboard, handle_point_layer_mouse, IdRng, PointLayerInputPlugin,
};
pub use plugins::{configure_default_plugins, CameraPlugin};
