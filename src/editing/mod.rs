//! Editing Functionality
//!
//! This module contains all editing-related functionality:
//! - The point layer model and its loader
//! - Mouse and keyboard editing of point layers
//! - System sets ordering input before rendering

pub mod point_layer;
pub mod system_sets;

// Re-export commonly used items
pub use point_layer::{LayerPoint, PointId, PointLayer};
pub use system_sets::{PointLayerSets, PointLayerSystemSetsPlugin};
