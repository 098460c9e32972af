//! Parametric shape definitions.
//!
//! Each shape is a plain value whose `path_in(rect)` method maps its
//! parameters to a [`BezPath`] inside a target drawing rect (origin
//! top-left, y down). Paths are rebuilt from scratch on every call;
//! nothing is cached or shared.

mod arc;
mod checkerbox;
mod color_wheel;
mod flower;
mod trapezoid;
mod triangle;

pub use arc::Arc;
pub use checkerbox::{Checkerbox, GridSize};
pub use color_wheel::{ColorCyclingCircle, ColorRing};
pub use flower::Flower;
pub use trapezoid::Trapezoid;
pub use triangle::Triangle;

use kurbo::{BezPath, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flattening tolerance used when converting analytic curves to cubics.
pub(crate) const PATH_TOLERANCE: f64 = 0.1;

/// Shape parameter errors.
///
/// Constructors fail fast on out-of-range parameters instead of
/// producing degenerate geometry. Clamps specified per shape (the arc's
/// inset radius) stay clamps and are not errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("invalid parameter: rows must be >= 1")]
    RowsOutOfRange,
    #[error("invalid parameter: columns must be >= 1")]
    ColumnsOutOfRange,
    #[error("invalid parameter: steps must be >= 1")]
    StepsOutOfRange,
    #[error("invalid parameter: amount must be in [0, 1)")]
    AmountOutOfRange,
}

/// Enum wrapper for all shape kinds (for serialization and dispatch).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Shape {
    Triangle(Triangle),
    Arc(Arc),
    Flower(Flower),
    Trapezoid(Trapezoid),
    Checkerbox(Checkerbox),
    ColorCyclingCircle(ColorCyclingCircle),
}

impl Shape {
    /// Compute the outline path for this shape inside `rect`.
    ///
    /// The color-cycling circle contributes only its outermost ring
    /// here; per-ring geometry and colors come from
    /// [`ColorCyclingCircle::rings`].
    pub fn path_in(&self, rect: Rect) -> BezPath {
        match self {
            Shape::Triangle(s) => s.path_in(rect),
            Shape::Arc(s) => s.path_in(rect),
            Shape::Flower(s) => s.path_in(rect),
            Shape::Trapezoid(s) => s.path_in(rect),
            Shape::Checkerbox(s) => s.path_in(rect),
            Shape::ColorCyclingCircle(_) => ColorCyclingCircle::ring_path(rect, 0.0),
        }
    }

    /// Re-check parameter constraints, e.g. after deserialization.
    pub fn validate(&self) -> Result<(), ShapeError> {
        match self {
            Shape::Checkerbox(s) => s.validate(),
            Shape::ColorCyclingCircle(s) => s.validate(),
            _ => Ok(()),
        }
    }
}
