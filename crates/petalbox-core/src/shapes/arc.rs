//! Arc shape.

use super::PATH_TOLERANCE;
use kurbo::{Arc as KurboArc, BezPath, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// A circular arc centered in its drawing rect.
///
/// Angles are in degrees with 0 pointing straight up. Because the
/// underlying path convention has 0 pointing right, `path_in` shifts
/// both endpoints by -90 degrees and inverts the traversal flag; the
/// inversion is what keeps the on-screen sweep direction matching the
/// requested one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arc {
    /// Sweep start, degrees.
    pub start_angle: f64,
    /// Sweep end, degrees.
    pub end_angle: f64,
    /// Traversal direction in the 0-points-up convention.
    pub clockwise: bool,
    /// Accumulated inset distance.
    #[serde(default)]
    pub inset_amount: f64,
}

impl Arc {
    pub fn new(start_angle: f64, end_angle: f64, clockwise: bool) -> Self {
        Self {
            start_angle,
            end_angle,
            clockwise,
            inset_amount: 0.0,
        }
    }

    /// Shrink the arc inward by `amount`.
    ///
    /// Insets accumulate: `arc.inset(a).inset(b)` is the same arc as
    /// one inset by `a + b`. Returns a new value; the receiver is
    /// unchanged.
    #[must_use]
    pub fn inset(mut self, amount: f64) -> Self {
        self.inset_amount += amount;
        self
    }

    /// Radius after insetting, clamped so it never goes negative.
    pub fn radius_in(&self, rect: Rect) -> f64 {
        (rect.width() / 2.0 - self.inset_amount).max(0.0)
    }

    /// Get as a kurbo Arc inside `rect`.
    pub fn as_kurbo(&self, rect: Rect) -> KurboArc {
        let radius = self.radius_in(rect);
        if radius == 0.0 && self.inset_amount > 0.0 {
            log::debug!("arc inset {} swallows the radius", self.inset_amount);
        }

        let start = (self.start_angle - 90.0).to_radians();
        let end = (self.end_angle - 90.0).to_radians();

        // Positive sweep angles run clockwise on screen (y grows
        // downward), so the inverted flag picks the sweep sign.
        let clockwise = !self.clockwise;
        let forward = (end - start).rem_euclid(TAU);
        let sweep = if clockwise {
            forward
        } else if forward == 0.0 {
            0.0
        } else {
            forward - TAU
        };

        KurboArc::new(rect.center(), (radius, radius), start, sweep, 0.0)
    }

    pub fn path_in(&self, rect: Rect) -> BezPath {
        self.as_kurbo(rect).to_path(PATH_TOLERANCE)
    }
}
