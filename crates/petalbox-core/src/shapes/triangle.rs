//! Triangle shape.

use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// An isosceles triangle spanning its drawing rect: apex at the top
/// midpoint, base along the bottom edge. Carries no parameters; the
/// geometry is derived entirely from the rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Triangle;

impl Triangle {
    pub fn new() -> Self {
        Self
    }

    /// Compute the triangle outline inside `rect`.
    ///
    /// A zero-width or zero-height rect yields a degenerate (flat)
    /// path; no division is involved.
    pub fn path_in(&self, rect: Rect) -> BezPath {
        let apex = Point::new(rect.center().x, rect.y0);

        let mut path = BezPath::new();
        path.move_to(apex);
        path.line_to(Point::new(rect.x0, rect.y1));
        path.line_to(Point::new(rect.x1, rect.y1));
        path.line_to(apex);
        path
    }
}
