use bevy::math::curve::{Curve, EaseFunction, EasingCurve};

/// Interpolate from `from` to `to` at progress `t`, eased. Progress is
/// clamped, and the end points are returned exactly.
pub fn interpolate(from: f32, to: f32, ease: EaseFunction, t: f32) -> f32 {
    if t <= 0.0 {
        return from;
    }
    if t >= 1.0 {
        return to;
    }

    let eased = EasingCurve::new(0.0, 1.0, ease).sample_clamped(t);
    from + (to - from) * eased
}

/// A timed tween between two values.
#[derive(Debug, Clone, Copy)]
pub struct Tween {
    from: f32,
    to: f32,
    duration: f32,
    ease: EaseFunction,
    elapsed: f32,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: f32, ease: EaseFunction) -> Self {
        Self {
            from,
            to,
            duration,
            ease,
            elapsed: 0.0,
        }
    }

    /// Advance by `delta` seconds and return the current value.
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.elapsed = (self.elapsed + delta.max(0.0)).min(self.duration.max(0.0));
        self.value()
    }

    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            self.elapsed / self.duration
        }
    }

    pub fn value(&self) -> f32 {
        interpolate(self.from, self.to, self.ease, self.progress())
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn end_points_are_exact() {
        for ease in [
            EaseFunction::Linear,
            EaseFunction::QuadraticInOut,
            EaseFunction::CubicOut,
        ] {
            assert_eq!(interpolate(0.1, 0.3, ease, 0.0), 0.1);
            assert_eq!(interpolate(0.1, 0.3, ease, 1.0), 0.3);
            assert_eq!(interpolate(0.1, 0.3, ease, -2.0), 0.1);
            assert_eq!(interpolate(0.1, 0.3, ease, 7.0), 0.3);
        }
    }

    #[test]
    fn linear_is_proportional() {
        let value = interpolate(2.0, 4.0, EaseFunction::Linear, 0.25);
        assert!((value - 2.5).abs() < 1e-6);
    }

    #[test]
    fn tween_runs_to_completion() {
        let mut tween = Tween::new(0.0, -100.0, 1.0, EaseFunction::QuadraticInOut);
        assert_eq!(tween.value(), 0.0);
        tween.advance(0.5);
        assert!(!tween.is_finished());
        assert!((tween.value() + 50.0).abs() < 1e-4);
        tween.advance(0.75);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), -100.0);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let tween = Tween::new(1.0, 0.0, 0.0, EaseFunction::Linear);
        assert!(tween.is_finished());
        assert_eq!(tween.value(), 0.0);
    }
}
