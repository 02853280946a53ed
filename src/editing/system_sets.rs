//! System ordering for point layer editing

use bevy::prelude::*;

/// Update-stage sets for point layer systems. Input runs before rendering so
/// a frame always shows the result of that frame's edits.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PointLayerSets {
    Input,
    Render,
}

pub struct PointLayerSystemSetsPlugin;

impl Plugin for PointLayerSystemSetsPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (PointLayerSets::Input, PointLayerSets::Render).chain(),
        );
    }
}
