//! Mouse and keyboard editing of point layers

use super::{LayerPoint, PointId, PointLayer};
use crate::rendering::canvas::ScreenProjection;
use bevy::color::Srgba;
use bevy::input::keyboard::KeyCode;
use bevy::input::mouse::MouseButton;
use bevy::log::debug;
use bevy::prelude::*;
use rand::Rng;

/// Key that deletes the selected point
pub const DELETE_KEY: KeyCode = KeyCode::Delete;

/// Pointer input in screen coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Pressed { button: MouseButton, position: Vec2 },
    Released { button: MouseButton, position: Vec2 },
    Moved { position: Vec2 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEvent {
    Pressed(KeyCode),
    Released(KeyCode),
}

/// What a pointer event did to the layer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    Ignored,
    Selected(usize),
    Added(usize),
}

impl PointLayer {
    /// Apply a pointer event.
    ///
    /// A primary-button press on an existing marker selects it; anywhere else
    /// it creates a new point in `color` with a random identifier. A new
    /// point is not selected.
    pub fn handle_pointer<P, R>(
        &mut self,
        event: &PointerEvent,
        projection: &P,
        color: Srgba,
        rng: &mut R,
    ) -> PointerOutcome
    where
        P: ScreenProjection + ?Sized,
        R: Rng + ?Sized,
    {
        let PointerEvent::Pressed {
            button: MouseButton::Left,
            position,
        } = *event
        else {
            return PointerOutcome::Ignored;
        };

        let Some(world) = projection.map_screen(position) else {
            debug!("Ignoring press at {:?}: outside of the camera view", position);
            return PointerOutcome::Ignored;
        };

        if let Some(index) = self.hit_test(world) {
            self.selected = Some(index);
            debug!("Selected point #{}", index);
            return PointerOutcome::Selected(index);
        }

        let id = PointId::generate(rng);
        PointerOutcome::Added(self.push_point(LayerPoint::new(world, color, id)))
    }

    /// Apply a keyboard event. Pressing `DELETE_KEY` removes the selected
    /// point and always clears the selection.
    pub fn handle_key(&mut self, event: &KeyEvent) -> Option<LayerPoint> {
        match event {
            KeyEvent::Pressed(key) if *key == DELETE_KEY => self.delete_selected(),
            _ => None,
        }
    }
}
