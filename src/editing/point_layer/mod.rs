//! Point layer editing
//!
//! A point layer is an ordered list of labeled markers. Each record keeps a
//! position, a color and an identifier together, so adding or removing a
//! point always touches all three at once. Indices are positional: deleting
//! a point shifts every later point down by one.

mod id;
pub mod input;
pub mod loader;

pub use id::{PointId, PointIdError, ID_MAX_SIZE};
pub use input::{KeyEvent, PointerEvent, PointerOutcome, DELETE_KEY};
pub use loader::{LoadError, PointLineError};

use bevy::color::Srgba;
use bevy::log::debug;
use bevy::prelude::*;

/// Hit-test radius and draw size of a point marker, in world units
pub const ELEMENT_RADIUS: f32 = 10.0;

/// Draw size of the halo behind the selected marker
pub const SELECTED_ELEMENT_RADIUS: f32 = 15.0;

/// One point of the layer
#[derive(Debug, Clone, PartialEq)]
pub struct LayerPoint {
    pub position: Vec2,
    pub color: Srgba,
    pub id: PointId,
}

impl LayerPoint {
    pub fn new(position: Vec2, color: Srgba, id: PointId) -> Self {
        Self {
            position,
            color,
            id,
        }
    }
}

/// An editable layer of point markers
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct PointLayer {
    points: Vec<LayerPoint>,
    selected: Option<usize>,
}

impl PointLayer {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_points(points: Vec<LayerPoint>) -> Self {
        Self {
            points,
            selected: None,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points in insertion order
    pub fn points(&self) -> &[LayerPoint] {
        &self.points
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Vec2> + '_ {
        self.points.iter().map(|point| point.position)
    }

    pub fn colors(&self) -> impl ExactSizeIterator<Item = Srgba> + '_ {
        self.points.iter().map(|point| point.color)
    }

    pub fn ids(&self) -> impl ExactSizeIterator<Item = &PointId> + '_ {
        self.points.iter().map(|point| &point.id)
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Change the selection. Out-of-range indices are refused and leave the
    /// selection untouched.
    pub fn select(&mut self, index: Option<usize>) -> bool {
        match index {
            Some(index) if index >= self.points.len() => false,
            _ => {
                self.selected = index;
                true
            }
        }
    }

    /// Index of the first point closer than `ELEMENT_RADIUS` to `world`.
    ///
    /// Overlapping markers resolve to the earliest inserted one, not the
    /// nearest.
    pub fn hit_test(&self, world: Vec2) -> Option<usize> {
        self.points
            .iter()
            .position(|point| point.position.distance(world) < ELEMENT_RADIUS)
    }

    /// Append a point and return its index. Selection is left alone.
    pub fn push_point(&mut self, point: LayerPoint) -> usize {
        debug!(
            "Adding point '{}' at ({:.1}, {:.1})",
            point.id, point.position.x, point.position.y
        );
        self.points.push(point);
        self.points.len() - 1
    }

    /// Remove the selected point, if any, and clear the selection.
    ///
    /// The selection is cleared even when nothing was removed.
    pub fn delete_selected(&mut self) -> Option<LayerPoint> {
        let removed = self.selected.take().map(|index| {
            debug_assert!(
                index < self.points.len(),
                "selection {index} out of range for {} points",
                self.points.len()
            );
            self.points.remove(index)
        });
        if let Some(point) = &removed {
            debug!("Deleted point '{}'", point.id);
        }
        removed
    }
}
