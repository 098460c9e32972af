//! Style properties shared between shapes and render backends.

use peniko::{Color, Fill};
use serde::{Deserialize, Serialize};

use crate::color::SerializableColor;

/// Fill rule for path filling.
///
/// Serializable mirror of [`peniko::Fill`]. Overlapping sub-paths (the
/// flower's petals) only look right under [`FillRule::EvenOdd`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum FillRule {
    #[default]
    NonZero,
    EvenOdd,
}

impl From<FillRule> for Fill {
    fn from(rule: FillRule) -> Self {
        match rule {
            FillRule::NonZero => Fill::NonZero,
            FillRule::EvenOdd => Fill::EvenOdd,
        }
    }
}

/// Style properties for drawing a shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeStyle {
    /// Stroke color (None = no stroke).
    pub stroke_color: Option<SerializableColor>,
    /// Stroke width.
    pub stroke_width: f64,
    /// Fill color (None = no fill).
    pub fill_color: Option<SerializableColor>,
    /// Fill rule applied when `fill_color` is set.
    #[serde(default)]
    pub fill_rule: FillRule,
}

impl ShapeStyle {
    /// Outline-only style.
    pub fn stroked(color: Color, width: f64) -> Self {
        Self {
            stroke_color: Some(color.into()),
            stroke_width: width,
            fill_color: None,
            fill_rule: FillRule::default(),
        }
    }

    /// Fill-only style.
    pub fn filled(color: Color) -> Self {
        Self {
            stroke_color: None,
            stroke_width: 0.0,
            fill_color: Some(color.into()),
            fill_rule: FillRule::default(),
        }
    }

    pub fn with_fill_rule(mut self, rule: FillRule) -> Self {
        self.fill_rule = rule;
        self
    }

    /// Get the stroke color as a peniko Color.
    pub fn stroke(&self) -> Option<Color> {
        self.stroke_color.map(|c| c.into())
    }

    /// Get the fill color as a peniko Color.
    pub fn fill(&self) -> Option<Color> {
        self.fill_color.map(|c| c.into())
    }
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            stroke_color: Some(SerializableColor::black()),
            stroke_width: 2.0,
            fill_color: None,
            fill_rule: FillRule::default(),
        }
    }
}
