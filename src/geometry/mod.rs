//! Geometric Primitives and Operations

pub mod marker;

// Re-export commonly used items
pub use marker::{equilateral_triangle, marker_triangle};
