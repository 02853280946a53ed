//! Marker shapes for point layers
//!
//! Every point is drawn as an equilateral triangle centered on its position.
//! The triangle's circumradius is the marker size, so a marker of radius `r`
//! never reaches further than `r` from the point.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

/// Equilateral triangle with circumradius 1 centered on the origin,
/// first vertex pointing straight up
pub fn equilateral_triangle() -> Triangle2d {
    let vertex = |k: f32| {
        let angle = FRAC_PI_2 + k * TAU / 3.0;
        Vec2::new(angle.cos(), angle.sin())
    };
    Triangle2d::new(vertex(0.0), vertex(1.0), vertex(2.0))
}

/// The unit triangle scaled by `radius`, then moved to `center`
pub fn marker_triangle(center: Vec2, radius: f32) -> Triangle2d {
    let [a, b, c] = equilateral_triangle()
        .vertices
        .map(|vertex| center + vertex * radius);
    Triangle2d::new(a, b, c)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn test_unit_triangle_vertices_on_unit_circle() {
        for vertex in equilateral_triangle().vertices {
            assert!((vertex.length() - 1.0).abs() < EPSILON);
        }
        let top = equilateral_triangle().vertices[0];
        assert!(top.x.abs() < EPSILON);
        assert!((top.y - 1.0).abs() < EPSILON);
    }

    #[test]
    fn test_unit_triangle_sides_are_equal() {
        let [a, b, c] = equilateral_triangle().vertices;
        let ab = a.distance(b);
        assert!((ab - b.distance(c)).abs() < EPSILON);
        assert!((ab - c.distance(a)).abs() < EPSILON);
        assert!((ab - 3.0_f32.sqrt()).abs() < EPSILON);
    }

    #[test]
    fn test_marker_is_scaled_then_translated() {
        let center = Vec2::new(100.0, -50.0);
        let marker = marker_triangle(center, 10.0);

        for vertex in marker.vertices {
            assert!((vertex.distance(center) - 10.0).abs() < EPSILON);
        }
        let centroid = (marker.vertices[0] + marker.vertices[1] + marker.vertices[2]) / 3.0;
        assert!(centroid.distance(center) < EPSILON);
    }
}
