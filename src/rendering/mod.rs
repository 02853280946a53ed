//! Rendering and Visualization
//!
//! This module contains all rendering and visualization functionality:
//! - Projection and drawing seams between the layer and Bevy
//! - Mesh-based point marker rendering

pub mod canvas;
pub mod points;

// Re-export commonly used items
pub use canvas::{DrawError, LayerCanvas, MeshCanvas, ScreenProjection, ViewportProjection};
pub use points::{render_point_layer, PointRenderingPlugin};
