//! Retargetable fixed-duration tweens.
//!
//! A [`Tween`] is the "ease-to" primitive: it stays bound to one numeric
//! property and can be pointed at a new target at any moment. Retargeting
//! restarts the curve from the *current* value, so a stream of pointer
//! events produces one continuous decelerating path instead of a chain of
//! restarts from stale positions.

use crate::easing::Easing;

/// Retarget threshold - changes smaller than this are ignored.
const RETARGET_EPSILON: f32 = 0.0001;

/// A single animated value easing toward a target over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Value at the start of the current segment.
    start: f32,
    /// Current interpolated value.
    current: f32,
    /// Target value.
    target: f32,
    /// Progress through the current segment (0-1).
    progress: f32,
    /// Segment duration (seconds).
    duration: f32,
    /// Easing curve.
    easing: Easing,
}

impl Tween {
    /// Default segment duration - tuned for cursor trailing.
    pub const DEFAULT_DURATION: f32 = 0.4;

    /// Creates a new tween resting at the given value.
    #[must_use]
    pub fn new(value: f32, duration: f32, easing: Easing) -> Self {
        Self {
            start: value,
            current: value,
            target: value,
            progress: 1.0,
            duration,
            easing,
        }
    }

    /// Returns the current interpolated value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the tween has settled on its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Retargets the tween, restarting the curve from the current value.
    ///
    /// Retargeting to (nearly) the same value is a no-op so that repeated
    /// identical samples do not reset progress forever.
    pub fn ease_to(&mut self, target: f32) {
        if (target - self.target).abs() > RETARGET_EPSILON {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Jumps to a value instantly, with no interpolation.
    pub fn set(&mut self, value: f32) {
        self.start = value;
        self.current = value;
        self.target = value;
        self.progress = 1.0;
    }

    /// Advances the tween by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress = (self.progress + dt / self.duration).min(1.0);
        } else {
            self.progress = 1.0;
        }

        if self.progress >= 1.0 {
            // Land exactly on the target, never on a rounding neighbour.
            self.current = self.target;
        } else {
            let eased = self.easing.apply(self.progress);
            self.current = self.start + (self.target - self.start) * eased;
        }
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0, Self::DEFAULT_DURATION, Easing::CubicOut)
    }
}

/// A pair of tweens driving a 2D position.
#[derive(Debug, Clone)]
pub struct Tween2D {
    /// X component tween.
    pub x: Tween,
    /// Y component tween.
    pub y: Tween,
}

impl Tween2D {
    /// Creates a 2D tween resting at the given position.
    #[must_use]
    pub fn new(x: f32, y: f32, duration: f32, easing: Easing) -> Self {
        Self {
            x: Tween::new(x, duration, easing),
            y: Tween::new(y, duration, easing),
        }
    }

    /// Returns the current interpolated position.
    #[must_use]
    pub fn value(&self) -> (f32, f32) {
        (self.x.value(), self.y.value())
    }

    /// Retargets both components.
    pub fn ease_to(&mut self, x: f32, y: f32) {
        self.x.ease_to(x);
        self.y.ease_to(y);
    }

    /// Jumps both components instantly.
    pub fn set(&mut self, x: f32, y: f32) {
        self.x.set(x);
        self.y.set(y);
    }

    /// Advances both components by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.x.update(dt);
        self.y.update(dt);
    }

    /// Returns true if both components have settled.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.x.is_complete() && self.y.is_complete()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tween_reaches_target() {
        let mut tween = Tween::new(0.0, 0.4, Easing::CubicOut);
        tween.ease_to(100.0);

        for _ in 0..30 {
            tween.update(0.016); // ~60fps
        }

        assert!((tween.value() - 100.0).abs() < 0.01);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_retarget_restarts_from_current_value() {
        let mut tween = Tween::new(0.0, 0.4, Easing::Linear);
        tween.ease_to(100.0);
        tween.update(0.2); // halfway: current = 50

        let midway = tween.value();
        assert!((midway - 50.0).abs() < 0.01);

        // Quick-to semantics: the new segment departs from 50, not from 0.
        tween.ease_to(-100.0);
        tween.update(0.0);
        assert!((tween.value() - midway).abs() < 0.01);

        tween.update(0.4);
        assert!((tween.value() - (-100.0)).abs() < 0.01);
    }

    #[test]
    fn test_repeated_identical_target_does_not_reset() {
        let mut tween = Tween::new(0.0, 0.4, Easing::Linear);
        tween.ease_to(100.0);
        tween.update(0.2);

        // Same target again - progress must be preserved.
        tween.ease_to(100.0);
        tween.update(0.2);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_set_snaps_instantly() {
        let mut tween = Tween::new(0.0, 0.4, Easing::CubicOut);
        tween.ease_to(100.0);
        tween.set(42.0);

        assert_eq!(tween.value(), 42.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_zero_duration_completes_in_one_step() {
        let mut tween = Tween::new(0.0, 0.0, Easing::CubicOut);
        tween.ease_to(10.0);
        tween.update(0.001);

        assert_eq!(tween.value(), 10.0);
        assert!(tween.is_complete());
    }

    #[test]
    fn test_tween2d_components_settle_together() {
        let mut pos = Tween2D::new(0.0, 0.0, 0.1, Easing::Linear);
        pos.ease_to(10.0, -10.0);

        for _ in 0..20 {
            pos.update(0.016);
        }

        let (x, y) = pos.value();
        assert!((x - 10.0).abs() < 0.01);
        assert!((y + 10.0).abs() < 0.01);
        assert!(pos.is_complete());
    }
}
