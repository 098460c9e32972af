//! Flower shape built from rotated petal ellipses.

use super::PATH_TOLERANCE;
use kurbo::{Affine, BezPath, Ellipse, Rect, Shape as KurboShape, Vec2};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Petals per flower: one per pi/8 step around the full turn.
const PETAL_COUNT: usize = 16;

/// A flower of [`PETAL_COUNT`] elliptical petals rotated about the
/// rect center.
///
/// Each petal is laid out in local space at `(petal_offset, 0)`, sized
/// `petal_width` by half the rect height, then rotated into place.
/// Petals overlap near the center; fill with [`FillRule::EvenOdd`] to
/// get the cut-out effect where they do.
///
/// [`FillRule::EvenOdd`]: crate::style::FillRule::EvenOdd
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Flower {
    /// Offset of each petal along its local x axis.
    pub petal_offset: f64,
    /// Width of each petal ellipse.
    pub petal_width: f64,
}

impl Default for Flower {
    fn default() -> Self {
        Self {
            petal_offset: -20.0,
            petal_width: 100.0,
        }
    }
}

impl Flower {
    pub fn new(petal_offset: f64, petal_width: f64) -> Self {
        Self {
            petal_offset,
            petal_width,
        }
    }

    /// Compute all petals as one multi-sub-path outline.
    pub fn path_in(&self, rect: Rect) -> BezPath {
        let center = Vec2::new(rect.width() / 2.0, rect.height() / 2.0);
        let petal_bounds = Rect::new(
            self.petal_offset,
            0.0,
            self.petal_offset + self.petal_width,
            rect.height() / 2.0,
        );

        let mut path = BezPath::new();
        for petal in 0..PETAL_COUNT {
            let angle = petal as f64 * (PI / 8.0);
            let place = Affine::translate(center) * Affine::rotate(angle);
            let ellipse = place * Ellipse::from_rect(petal_bounds);
            for el in ellipse.path_elements(PATH_TOLERANCE) {
                path.push(el);
            }
        }
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::PathEl;

    fn sub_path_count(path: &BezPath) -> usize {
        path.elements()
            .iter()
            .filter(|el| matches!(el, PathEl::MoveTo(_)))
            .count()
    }

    #[test]
    fn test_sixteen_petals_regardless_of_rect() {
        let flower = Flower::default();
        for size in [1.0, 120.0, 300.0, 1000.0] {
            let path = flower.path_in(Rect::new(0.0, 0.0, size, size));
            assert_eq!(sub_path_count(&path), 16);
        }
    }

    #[test]
    fn test_sixteen_petals_for_degenerate_rect() {
        let path = Flower::default().path_in(Rect::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(sub_path_count(&path), 16);
    }

    #[test]
    fn test_first_petal_lands_at_rect_center() {
        let flower = Flower::new(0.0, 100.0);
        let rect = Rect::new(0.0, 0.0, 300.0, 300.0);

        // Petal 0 has rotation angle 0, so it is the local-space
        // ellipse (0,0)-(100,150) shifted by the rect center.
        let path = flower.path_in(rect);
        let second_move = path.elements()[1..]
            .iter()
            .position(|el| matches!(el, PathEl::MoveTo(_)))
            .map(|i| i + 1)
            .expect("flower has more than one petal");
        let first_petal = BezPath::from_vec(path.elements()[..second_move].to_vec());

        let bounds = first_petal.bounding_box();
        let expected = Rect::new(150.0, 150.0, 250.0, 300.0);
        assert!((bounds.x0 - expected.x0).abs() < 0.5);
        assert!((bounds.y0 - expected.y0).abs() < 0.5);
        assert!((bounds.x1 - expected.x1).abs() < 0.5);
        assert!((bounds.y1 - expected.y1).abs() < 0.5);
    }

    #[test]
    fn test_deterministic() {
        let flower = Flower::new(-20.0, 60.0);
        let rect = Rect::new(0.0, 0.0, 300.0, 300.0);
        assert_eq!(flower.path_in(rect).elements(), flower.path_in(rect).elements());
    }
}
