//! Bevy input systems for point layer editing
//!
//! Translates Bevy's button state into layer pointer and key events. Only
//! presses that happened this frame are forwarded.

use crate::core::config::LayerSettings;
use crate::editing::point_layer::{KeyEvent, PointLayer, PointerEvent, PointerOutcome};
use crate::editing::PointLayerSets;
use crate::rendering::ViewportProjection;
use bevy::log::{debug, info};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Random source for generated point identifiers
#[derive(Resource)]
pub struct IdRng(pub StdRng);

impl IdRng {
    /// Seeded for reproducible identifiers, or from entropy
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self(StdRng::seed_from_u64(seed)),
            None => Self(StdRng::from_entropy()),
        }
    }
}

impl Default for IdRng {
    fn default() -> Self {
        Self::new(None)
    }
}

/// System to add or select points with the mouse
pub fn handle_point_layer_mouse(
    mouse_input: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    camera_query: Query<(&Camera, &GlobalTransform), With<Camera2d>>,
    settings: Res<LayerSettings>,
    mut rng: ResMut<IdRng>,
    mut layer: ResMut<PointLayer>,
) {
    if mouse_input.get_just_pressed().next().is_none() {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };

    let Some(cursor_position) = window.cursor_position() else {
        return;
    };

    let Ok((camera, camera_transform)) = camera_query.single() else {
        return;
    };

    let projection = ViewportProjection::new(camera, camera_transform);
    for button in mouse_input.get_just_pressed() {
        let event = PointerEvent::Pressed {
            button: *button,
            position: cursor_position,
        };
        match layer.handle_pointer(&event, &projection, settings.new_point_color, &mut rng.0) {
            PointerOutcome::Selected(index) => debug!("Point #{} selected", index),
            PointerOutcome::Added(index) => info!(
                "Added point #{} '{}' ({} points)",
                index,
                layer.points()[index].id,
                layer.len()
            ),
            PointerOutcome::Ignored => {}
        }
    }
}

/// System to delete the selected point from the keyboard
pub fn handle_point_layer_keyboard(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut layer: ResMut<PointLayer>,
) {
    for key in keyboard_input.get_just_pressed() {
        if let Some(removed) = layer.handle_key(&KeyEvent::Pressed(*key)) {
            info!("Deleted point '{}' ({} points left)", removed.id, layer.len());
        }
    }
}

/// Plugin for mouse and keyboard editing of the point layer
pub struct PointLayerInputPlugin;

impl Plugin for PointLayerInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointLayer>()
            .init_resource::<LayerSettings>()
            .init_resource::<IdRng>()
            .add_systems(
                Update,
                (handle_point_layer_mouse, handle_point_layer_keyboard)
                    .chain()
                    .in_set(PointLayerSets::Input),
            );
    }
}
