//! Trapezoid shape.

use crate::animation::Animatable;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A flat-bottomed trapezoid whose top edge is inset from both sides.
///
/// The single scalar parameter animates; see [`Animatable`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Trapezoid {
    /// Horizontal inset of the top edge from each side. Keep within
    /// `0..=rect.width()/2` for a non-self-intersecting outline.
    pub inset_amount: f64,
}

impl Trapezoid {
    pub fn new(inset_amount: f64) -> Self {
        Self { inset_amount }
    }

    /// Largest inset that keeps the outline from self-intersecting.
    pub fn max_inset(rect: Rect) -> f64 {
        rect.width() / 2.0
    }

    pub fn path_in(&self, rect: Rect) -> BezPath {
        let base_left = Point::new(0.0, rect.y1);

        let mut path = BezPath::new();
        path.move_to(base_left);
        path.line_to(Point::new(self.inset_amount, rect.y0));
        path.line_to(Point::new(rect.x1 - self.inset_amount, rect.y0));
        path.line_to(Point::new(rect.x1, rect.y1));
        path.line_to(base_left);
        path
    }
}

impl Animatable for Trapezoid {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        Self {
            inset_amount: self.inset_amount + (to.inset_amount - self.inset_amount) * t,
        }
    }
}
