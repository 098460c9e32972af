//! Color-cycling concentric circle shape.

use super::{ShapeError, PATH_TOLERANCE};
use crate::color::hsb_to_color;
use kurbo::{BezPath, Circle, Rect, Shape as KurboShape};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Concentric rings stepping through the hue wheel.
///
/// Ring `index` is inset `index` units from the outer circle and takes
/// hue `index/steps + amount`, fully saturated at full brightness.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorCyclingCircle {
    /// Hue phase offset, in [0, 1).
    pub amount: f64,
    /// Number of concentric rings, >= 1.
    pub steps: u32,
}

/// One ring of a [`ColorCyclingCircle`]: how far it is inset from the
/// outer circle and the stroke color it takes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorRing {
    pub inset: f64,
    pub color: Color,
}

impl Default for ColorCyclingCircle {
    fn default() -> Self {
        Self {
            amount: 0.0,
            steps: 100,
        }
    }
}

impl ColorCyclingCircle {
    pub fn new(amount: f64, steps: u32) -> Result<Self, ShapeError> {
        let circle = Self { amount, steps };
        circle.validate()?;
        Ok(circle)
    }

    pub fn validate(&self) -> Result<(), ShapeError> {
        if self.steps < 1 {
            return Err(ShapeError::StepsOutOfRange);
        }
        if !(0.0..1.0).contains(&self.amount) {
            return Err(ShapeError::AmountOutOfRange);
        }
        Ok(())
    }

    /// Hue for the ring at `index`.
    ///
    /// The wrap is a single conditional subtraction, not a modulo: a
    /// sum above 1 comes back by exactly 1, and a negative `amount`
    /// (possible only by building the struct literally) passes through
    /// uncorrected. The rendered hue spectrum is defined by this exact
    /// formula.
    pub fn hue(&self, index: u32) -> f64 {
        let mut hue = index as f64 / self.steps as f64 + self.amount;
        if hue > 1.0 {
            hue -= 1.0;
        }
        hue
    }

    /// All rings in drawing order, outermost (inset 0) first.
    pub fn rings(&self) -> Vec<ColorRing> {
        (0..self.steps)
            .map(|index| ColorRing {
                inset: index as f64,
                color: hsb_to_color(self.hue(index), 1.0, 1.0),
            })
            .collect()
    }

    /// Radius of the ring inset by `inset` inside `rect`, clamped so
    /// it never goes negative.
    pub fn ring_radius(rect: Rect, inset: f64) -> f64 {
        (rect.width().min(rect.height()) / 2.0 - inset).max(0.0)
    }

    /// Circle outline for the ring inset by `inset`.
    pub fn ring_path(rect: Rect, inset: f64) -> BezPath {
        Circle::new(rect.center(), Self::ring_radius(rect, inset)).to_path(PATH_TOLERANCE)
    }
}
