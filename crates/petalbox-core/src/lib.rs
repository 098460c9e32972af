//! Petalbox Core Library
//!
//! Pure parametric shape geometry, color cycling, and animation
//! interpolation for the petalbox demos. Everything here is a value
//! type: paths and colors are recomputed from current parameters each
//! frame, and animation progress lives in caller-owned state.

pub mod animation;
pub mod color;
pub mod shapes;
pub mod style;

pub use animation::{Animatable, AnimationState, Easing};
pub use color::{hsb_to_color, SerializableColor};
pub use shapes::{
    Arc, Checkerbox, ColorCyclingCircle, ColorRing, Flower, GridSize, Shape, ShapeError,
    Trapezoid, Triangle,
};
pub use style::{FillRule, ShapeStyle};
