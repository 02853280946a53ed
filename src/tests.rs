#![allow(clippy::float_cmp)]

/// Test doubles for the projection and drawing seams
#[cfg(test)]
pub(crate) mod support {
    use crate::rendering::canvas::{DrawError, LayerCanvas, ScreenProjection};
    use bevy::color::Srgba;
    use bevy::prelude::*;

    /// Maps screen positions by adding a fixed offset
    pub struct OffsetProjection(pub Vec2);

    impl OffsetProjection {
        pub const IDENTITY: Self = Self(Vec2::ZERO);
    }

    impl ScreenProjection for OffsetProjection {
        fn map_screen(&self, screen: Vec2) -> Option<Vec2> {
            Some(screen + self.0)
        }
    }

    /// Projection that cannot map anything
    pub struct OutOfView;

    impl ScreenProjection for OutOfView {
        fn map_screen(&self, _screen: Vec2) -> Option<Vec2> {
            None
        }
    }

    /// Records every fill; optionally rejects fills after a number of them
    #[derive(Default)]
    pub struct RecordingCanvas {
        pub fills: Vec<(Triangle2d, Srgba)>,
        pub fail_after: Option<usize>,
    }

    impl RecordingCanvas {
        pub fn failing_after(successful_fills: usize) -> Self {
            Self {
                fills: Vec::new(),
                fail_after: Some(successful_fills),
            }
        }
    }

    impl LayerCanvas for RecordingCanvas {
        fn fill_triangle(&mut self, triangle: Triangle2d, color: Srgba) -> Result<(), DrawError> {
            if self.fail_after == Some(self.fills.len()) {
                return Err(DrawError::Rejected("recording canvas is full".to_string()));
            }
            self.fills.push((triangle, color));
            Ok(())
        }
    }
}

#[cfg(test)]
mod editing_session_tests {
    use super::support::{OffsetProjection, RecordingCanvas};
    use crate::editing::point_layer::{
        KeyEvent, LayerPoint, PointLayer, PointerEvent, PointerOutcome, DELETE_KEY,
    };
    use bevy::color::Srgba;
    use bevy::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const LEVEL: &str = "2\nid1 0 0 ff0000\nid2 100 100 00ff00\n";

    fn press(x: f32, y: f32) -> PointerEvent {
        PointerEvent::Pressed {
            button: MouseButton::Left,
            position: Vec2::new(x, y),
        }
    }

    #[test]
    fn test_load_select_delete_scenario() {
        let mut layer = PointLayer::from_text(LEVEL).unwrap();
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(layer.len(), 2);
        assert_eq!(layer.points()[0].position, Vec2::new(0.0, 0.0));
        assert_eq!(layer.points()[0].color, Srgba::rgb(1.0, 0.0, 0.0));
        assert_eq!(layer.points()[1].position, Vec2::new(100.0, 100.0));
        assert_eq!(layer.points()[1].color, Srgba::rgb(0.0, 1.0, 0.0));
        assert_eq!(layer.selected(), None);

        let outcome = layer.handle_pointer(
            &press(2.0, 2.0),
            &OffsetProjection::IDENTITY,
            Srgba::WHITE,
            &mut rng,
        );
        assert_eq!(outcome, PointerOutcome::Selected(0));
        assert_eq!(layer.selected(), Some(0));

        layer.handle_key(&KeyEvent::Pressed(DELETE_KEY));
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.points()[0].id.as_str(), "id2");
        assert_eq!(layer.points()[0].position, Vec2::new(100.0, 100.0));
        assert_eq!(layer.selected(), None);
    }

    #[test]
    fn test_views_stay_aligned_through_edits() {
        let mut layer = PointLayer::from_text(LEVEL).unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let projection = OffsetProjection::IDENTITY;

        for (x, y) in [(300.0, 0.0), (0.0, 300.0), (-300.0, -300.0)] {
            layer.handle_pointer(&press(x, y), &projection, Srgba::BLACK, &mut rng);
        }
        layer.handle_pointer(&press(1.0, 299.0), &projection, Srgba::BLACK, &mut rng);
        assert_eq!(layer.selected(), Some(3));
        layer.handle_key(&KeyEvent::Pressed(DELETE_KEY));

        assert_eq!(layer.len(), 4);
        assert_eq!(layer.positions().len(), 4);
        assert_eq!(layer.colors().len(), 4);
        assert_eq!(layer.ids().len(), 4);

        let expected: Vec<Vec2> = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(100.0, 100.0),
            Vec2::new(300.0, 0.0),
            Vec2::new(-300.0, -300.0),
        ];
        assert_eq!(layer.positions().collect::<Vec<_>>(), expected);
        for (point, (position, color)) in layer
            .points()
            .iter()
            .zip(layer.positions().zip(layer.colors()))
        {
            assert_eq!(point.position, position);
            assert_eq!(point.color, color);
        }
    }

    #[test]
    fn test_repeated_deletes_empty_the_layer() {
        let mut layer = PointLayer::from_text(LEVEL).unwrap();

        while !layer.is_empty() {
            let last = layer.len() - 1;
            assert!(layer.select(Some(last)));
            let removed: Option<LayerPoint> = layer.handle_key(&KeyEvent::Pressed(DELETE_KEY));
            assert!(removed.is_some());
        }

        assert_eq!(layer.selected(), None);
        assert!(layer.handle_key(&KeyEvent::Pressed(DELETE_KEY)).is_none());
    }

    #[test]
    fn test_render_snapshot_is_unchanged_after_edits() {
        let mut layer = PointLayer::from_text(LEVEL).unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        layer.handle_pointer(&press(99.0, 99.0), &OffsetProjection::IDENTITY, Srgba::WHITE, &mut rng);

        let snapshot = layer.clone();
        let mut canvas = RecordingCanvas::default();
        layer.render(&mut canvas).unwrap();

        assert_eq!(layer, snapshot);
        assert_eq!(canvas.fills.len(), layer.len() + 1);
    }
}

#[cfg(test)]
mod level_file_tests {
    use crate::editing::PointLayer;
    use std::path::Path;

    #[test]
    fn test_sample_level_loads() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("levels/sample.txt");
        let layer = PointLayer::load(&path).unwrap();

        assert_eq!(layer.len(), 4);
        let ids: Vec<&str> = layer.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["spawn", "exit", "key_1", "key_2"]);
        assert_eq!(layer.selected(), None);
    }
}
