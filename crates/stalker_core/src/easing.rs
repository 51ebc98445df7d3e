//! Easing curves for visual motion.
//!
//! HOUSE RULE: the stalker decelerates INTO the pointer. Trailing motion
//! uses ease-out curves - fast departure, soft arrival. Anything that ends
//! at full speed looks like a collision, not a landing.

use serde::{Deserialize, Serialize};

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (mechanical - avoid for visible motion).
    Linear,
    /// Cubic ease-out (fast start, soft landing).
    #[default]
    CubicOut,
    /// Cubic ease-in-out (soft at both ends).
    CubicInOut,
    /// Exponential ease-out (sharper snap than cubic).
    ExponentialOut,
    /// Instant (no interpolation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicOut => {
                // 1 - (1-t)^3
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::ExponentialOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2.0_f32.powf(-10.0 * t)
                }
            }
            Self::Instant => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cubic_out_decelerates() {
        let easing = Easing::CubicOut;

        // Halfway through the duration, cubic-out is already past 80%.
        let value = easing.apply(0.5);
        assert!(value > 0.8, "cubic out should front-load motion: {value}");
    }

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [
            Easing::Linear,
            Easing::CubicOut,
            Easing::CubicInOut,
            Easing::ExponentialOut,
        ] {
            assert!((easing.apply(0.0)).abs() < 1e-6, "{easing:?} at t=0");
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-6, "{easing:?} at t=1");
        }

        // Instant is already done at t=0.
        assert_eq!(Easing::Instant.apply(0.0), 1.0);
    }

    #[test]
    fn test_curves_are_monotonic() {
        for easing in [Easing::Linear, Easing::CubicOut, Easing::CubicInOut] {
            let mut prev = easing.apply(0.0);
            for step in 1..=100 {
                let value = easing.apply(step as f32 / 100.0);
                assert!(value >= prev, "{easing:?} regressed at step {step}");
                prev = value;
            }
        }
    }

    #[test]
    fn test_out_of_range_input_is_clamped() {
        assert_eq!(Easing::CubicOut.apply(-1.0), 0.0);
        assert_eq!(Easing::CubicOut.apply(2.0), 1.0);
    }
}
