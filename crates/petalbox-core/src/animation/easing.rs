//! Easing curves for animation sampling.

use serde::{Deserialize, Serialize};

/// Maps normalized elapsed time to interpolation progress.
///
/// Every curve fixes `apply(0) == 0` and `apply(1) == 1`; what happens
/// in between is the curve's character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Easing {
    /// Identity: progress equals elapsed time.
    #[default]
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration to rest.
    EaseOut,
    /// Cubic acceleration then deceleration.
    EaseInOut,
}

impl Easing {
    /// Apply the curve to `t`, clamped to [0, 1].
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}
