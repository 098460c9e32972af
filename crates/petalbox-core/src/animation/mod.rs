//! Caller-driven animation state and interpolation.
//!
//! The core never owns a clock. A host scheduler samples
//! [`AnimationState`] once per display tick with its own notion of
//! "now" (seconds, any epoch), and all progress lives in the state
//! value it holds. Dropping the state cancels the animation; there is
//! nothing to clean up.

mod easing;

pub use easing::Easing;

/// Types whose values can be blended linearly.
pub trait Animatable: Clone {
    /// Interpolate from `self` toward `to` by `t` in [0, 1].
    fn lerp(&self, to: &Self, t: f64) -> Self;
}

impl Animatable for f64 {
    fn lerp(&self, to: &Self, t: f64) -> Self {
        self + (to - self) * t
    }
}

/// Animation progress for one animatable value.
#[derive(Debug, Clone, PartialEq)]
pub enum AnimationState<T: Animatable> {
    /// No transition in flight; the value is at rest.
    Idle(T),
    /// Transition from `from` toward `to`, begun at `start`.
    Animating {
        from: T,
        to: T,
        start: f64,
        duration: f64,
        easing: Easing,
    },
}

impl<T: Animatable> AnimationState<T> {
    pub fn idle(value: T) -> Self {
        Self::Idle(value)
    }

    /// Begin a transition toward `target`.
    ///
    /// When a transition is already in flight, the value displayed at
    /// `now` becomes the new starting point, so retargeting never
    /// jumps. A non-positive duration resolves immediately to
    /// `Idle(target)`.
    #[must_use]
    pub fn animate_to(self, target: T, now: f64, duration: f64, easing: Easing) -> Self {
        if duration <= 0.0 {
            return Self::Idle(target);
        }
        let (from, _) = self.sample(now);
        Self::Animating {
            from,
            to: target,
            start: now,
            duration,
            easing,
        }
    }

    /// Current value at `now`, and whether the transition has finished.
    ///
    /// Elapsed time is normalized against the duration and clamped to
    /// [0, 1] before easing, so sampling past the end keeps returning
    /// the target. Idle states sample as `(value, true)`.
    pub fn sample(&self, now: f64) -> (T, bool) {
        match self {
            Self::Idle(value) => (value.clone(), true),
            Self::Animating {
                from,
                to,
                start,
                duration,
                easing,
            } => {
                let t = ((now - start) / duration).clamp(0.0, 1.0);
                (from.lerp(to, easing.apply(t)), t >= 1.0)
            }
        }
    }

    /// Collapse a finished transition to `Idle`; otherwise identity.
    /// Call once per tick after sampling.
    #[must_use]
    pub fn advance(self, now: f64) -> Self {
        match self {
            Self::Animating {
                to, start, duration, ..
            } if now - start >= duration => Self::Idle(to),
            other => other,
        }
    }

    /// The value this state settles on once any transition finishes.
    pub fn target(&self) -> &T {
        match self {
            Self::Idle(value) => value,
            Self::Animating { to, .. } => to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> AnimationState<f64> {
        AnimationState::idle(0.0).animate_to(100.0, 0.0, 1.0, Easing::Linear)
    }

    #[test]
    fn test_sample_at_start_is_from() {
        let (value, done) = running().sample(0.0);
        assert!((value - 0.0).abs() < f64::EPSILON);
        assert!(!done);
    }

    #[test]
    fn test_sample_midway() {
        let (value, done) = running().sample(0.5);
        assert!((value - 50.0).abs() < f64::EPSILON);
        assert!(!done);
    }

    #[test]
    fn test_sample_at_and_past_duration_is_target() {
        for now in [1.0, 2.5, 1000.0] {
            let (value, done) = running().sample(now);
            assert!((value - 100.0).abs() < f64::EPSILON);
            assert!(done);
        }
    }

    #[test]
    fn test_interruption_keeps_displayed_value() {
        let state = running();
        let (displayed, _) = state.sample(0.5);

        let retargeted = state.animate_to(25.0, 0.5, 1.0, Easing::Linear);
        let (value, done) = retargeted.sample(0.5);
        assert!((value - displayed).abs() < f64::EPSILON);
        assert!(!done);

        // And it heads toward the new target from there.
        let (value, _) = retargeted.sample(1.0);
        assert!((value - 37.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_duration_short_circuits() {
        let state = AnimationState::idle(1.0).animate_to(9.0, 5.0, 0.0, Easing::Linear);
        assert_eq!(state, AnimationState::Idle(9.0));

        let state = AnimationState::idle(1.0).animate_to(9.0, 5.0, -2.0, Easing::Linear);
        let (value, done) = state.sample(5.0);
        assert!((value - 9.0).abs() < f64::EPSILON);
        assert!(done);
    }

    #[test]
    fn test_advance_collapses_only_when_finished() {
        let state = running().advance(0.5);
        assert!(matches!(state, AnimationState::Animating { .. }));

        let state = running().advance(1.0);
        assert_eq!(state, AnimationState::Idle(100.0));
    }

    #[test]
    fn test_easing_applies_to_progress() {
        let state = AnimationState::idle(0.0).animate_to(100.0, 0.0, 1.0, Easing::EaseIn);
        let (value, _) = state.sample(0.5);
        // Cubic ease-in: 0.5^3 = 0.125 of the way.
        assert!((value - 12.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_target_accessor() {
        assert!((*running().target() - 100.0).abs() < f64::EPSILON);
        assert!((*AnimationState::idle(7.0).target() - 7.0).abs() < f64::EPSILON);
    }
}
