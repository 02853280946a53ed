//! Point rendering system
//!
//! Draws every point of the layer as a triangle marker. The selected point
//! gets a larger halo in its inverted color underneath its normal marker.

use super::canvas::{DrawError, LayerCanvas, MeshCanvas, PointMarkerMesh};
use crate::data::invert;
use crate::editing::point_layer::{PointLayer, ELEMENT_RADIUS, SELECTED_ELEMENT_RADIUS};
use crate::editing::PointLayerSets;
use crate::geometry::marker_triangle;
use bevy::log::warn;
use bevy::prelude::*;
use bevy::sprite::ColorMaterial;

impl PointLayer {
    /// Draw all points in insertion order.
    ///
    /// Stops at the first failed fill and returns its error; whatever was
    /// drawn before that stays drawn.
    pub fn render<C: LayerCanvas + ?Sized>(&self, canvas: &mut C) -> Result<(), DrawError> {
        for (index, point) in self.points().iter().enumerate() {
            if self.selected() == Some(index) {
                canvas.fill_triangle(
                    marker_triangle(point.position, SELECTED_ELEMENT_RADIUS),
                    invert(point.color),
                )?;
            }
            canvas.fill_triangle(marker_triangle(point.position, ELEMENT_RADIUS), point.color)?;
        }
        Ok(())
    }
}

/// System to redraw the layer's markers whenever the layer changes.
///
/// An incomplete frame is redrawn on the next tick even if the layer has not
/// changed since.
pub fn render_point_layer(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    layer: Res<PointLayer>,
    existing_markers: Query<Entity, With<PointMarkerMesh>>,
    mut redraw_pending: Local<bool>,
) {
    if !layer.is_changed() && !*redraw_pending {
        return;
    }

    for entity in existing_markers.iter() {
        commands.entity(entity).despawn();
    }

    let mut canvas = MeshCanvas::new(&mut commands, &mut meshes, &mut materials);
    *redraw_pending = match layer.render(&mut canvas) {
        Ok(()) => false,
        Err(error) => {
            if !*redraw_pending {
                warn!("Point layer frame is incomplete: {}", error);
            }
            true
        }
    };
}

/// Plugin for mesh-based point rendering
pub struct PointRenderingPlugin;

impl Plugin for PointRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, render_point_layer.in_set(PointLayerSets::Render));
    }
}
