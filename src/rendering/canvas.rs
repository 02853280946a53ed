//! Drawing and projection seams for point layers
//!
//! The layer never talks to Bevy's camera or renderer directly. It maps
//! screen positions through a `ScreenProjection` and fills triangles on a
//! `LayerCanvas`; the types here adapt both to a 2D Bevy camera and
//! mesh-based drawing.

use bevy::color::Srgba;
use bevy::prelude::*;
use bevy::render::mesh::Mesh2d;
use bevy::sprite::{ColorMaterial, MeshMaterial2d};
use thiserror::Error;

/// Depth of the first marker drawn in a frame
pub const MARKER_BASE_DEPTH: f32 = 10.0;

/// Depth added per filled triangle so later fills land on top
pub const MARKER_DEPTH_STEP: f32 = 0.001;

/// Failure of a drawing primitive
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DrawError {
    #[error("triangle has non-finite vertices {0:?}")]
    NonFinite([Vec2; 3]),
    #[error("canvas rejected triangle: {0}")]
    Rejected(String),
}

/// Converts screen positions into world positions
pub trait ScreenProjection {
    /// `None` when the position cannot be mapped (e.g. outside the viewport)
    fn map_screen(&self, screen: Vec2) -> Option<Vec2>;
}

/// A surface that can fill world-space triangles
pub trait LayerCanvas {
    fn fill_triangle(&mut self, triangle: Triangle2d, color: Srgba) -> Result<(), DrawError>;
}

/// Projection through a 2D Bevy camera
pub struct ViewportProjection<'a> {
    camera: &'a Camera,
    transform: &'a GlobalTransform,
}

impl<'a> ViewportProjection<'a> {
    pub fn new(camera: &'a Camera, transform: &'a GlobalTransform) -> Self {
        Self { camera, transform }
    }
}

impl ScreenProjection for ViewportProjection<'_> {
    fn map_screen(&self, screen: Vec2) -> Option<Vec2> {
        self.camera.viewport_to_world_2d(self.transform, screen).ok()
    }
}

/// Marker for entities spawned by `MeshCanvas`
#[derive(Component)]
pub struct PointMarkerMesh;

/// Canvas that spawns one mesh entity per filled triangle
pub struct MeshCanvas<'a, 'w, 's> {
    commands: &'a mut Commands<'w, 's>,
    meshes: &'a mut Assets<Mesh>,
    materials: &'a mut Assets<ColorMaterial>,
    depth: f32,
}

impl<'a, 'w, 's> MeshCanvas<'a, 'w, 's> {
    pub fn new(
        commands: &'a mut Commands<'w, 's>,
        meshes: &'a mut Assets<Mesh>,
        materials: &'a mut Assets<ColorMaterial>,
    ) -> Self {
        Self {
            commands,
            meshes,
            materials,
            depth: MARKER_BASE_DEPTH,
        }
    }
}

impl LayerCanvas for MeshCanvas<'_, '_, '_> {
    fn fill_triangle(&mut self, triangle: Triangle2d, color: Srgba) -> Result<(), DrawError> {
        if !triangle.vertices.iter().all(|vertex| vertex.is_finite()) {
            return Err(DrawError::NonFinite(triangle.vertices));
        }

        self.commands.spawn((
            PointMarkerMesh,
            Mesh2d(self.meshes.add(triangle)),
            MeshMaterial2d(self.materials.add(ColorMaterial::from_color(color))),
            Transform::from_translation(Vec3::Z * self.depth),
        ));
        self.depth += MARKER_DEPTH_STEP;
        Ok(())
    }
}
