//! Plugin group definitions for the point layer editor
//!
//! Organized into logical groups for clarity and maintainability

use bevy::app::{PluginGroup, PluginGroupBuilder};

/// Plugin group for editing functionality
#[derive(Default)]
pub struct CorePluginGroup;

impl PluginGroup for CorePluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::editing::PointLayerSystemSetsPlugin;
        use crate::systems::PointLayerInputPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(PointLayerSystemSetsPlugin) // Must be added before the layer plugins
            .add(PointLayerInputPlugin)
    }
}

/// Plugin group for rendering functionality
#[derive(Default)]
pub struct RenderingPluginGroup;

impl PluginGroup for RenderingPluginGroup {
    fn build(self) -> PluginGroupBuilder {
        use crate::rendering::PointRenderingPlugin;
        use crate::systems::CameraPlugin;

        PluginGroupBuilder::start::<Self>()
            .add(CameraPlugin)
            .add(PointRenderingPlugin)
    }
}
