//! Degree-domain angle helpers.
//!
//! The widget's heading math lives entirely in degrees in [0, 360): pointer
//! movement produces a target heading, and the smoothed heading chases it
//! along the shorter arc. These helpers keep that arithmetic total over all
//! finite inputs - no panics, no NaN-producing branches of their own.

use crate::math::Vec2;

/// Signed angular difference `a1 - a2` remapped into (-180, 180].
///
/// Interpolating by this difference always turns the short way around the
/// circle: chasing 10 deg from 350 deg yields -20 (backward through 0), not
/// +340 the long way round.
#[inline]
#[must_use]
pub fn shortest_angle_delta(a1: f32, a2: f32) -> f32 {
    let diff = a1 - a2;
    if diff > 180.0 {
        diff - 360.0
    } else if diff < -180.0 {
        diff + 360.0
    } else {
        diff
    }
}

/// Wraps an angle in degrees back into [0, 360).
#[inline]
#[must_use]
pub fn wrap_degrees(degrees: f32) -> f32 {
    let wrapped = degrees.rem_euclid(360.0);
    // rem_euclid rounds to exactly 360.0 for inputs a hair below zero.
    if wrapped < 360.0 {
        wrapped
    } else {
        0.0
    }
}

/// Heading of a movement vector, in degrees in [0, 360).
///
/// The +180 offset remaps atan2's (-180, 180] output so the heading domain
/// matches the smoothed accumulator: 0 deg points toward -X, 90 deg toward
/// -Y (screen-up in client coordinates).
///
/// Callers must not pass a zero vector - a stationary pointer has no
/// heading, and the zero-delta case is handled before this is reached.
#[inline]
#[must_use]
pub fn heading_degrees(delta: Vec2) -> f32 {
    wrap_degrees(delta.y.atan2(delta.x).to_degrees() + 180.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_delta_wraps_backward_through_zero() {
        assert_eq!(shortest_angle_delta(350.0, 10.0), -20.0);
    }

    #[test]
    fn test_shortest_delta_wraps_forward_through_zero() {
        assert_eq!(shortest_angle_delta(10.0, 350.0), 20.0);
    }

    #[test]
    fn test_shortest_delta_plain_difference() {
        assert_eq!(shortest_angle_delta(90.0, 45.0), 45.0);
        assert_eq!(shortest_angle_delta(45.0, 90.0), -45.0);
        assert_eq!(shortest_angle_delta(180.0, 0.0), 180.0);
    }

    #[test]
    fn test_shortest_delta_range_over_domain() {
        // Sweep both angles over (-180, 360] in 1-degree steps.
        let mut a1 = -179.0;
        while a1 <= 360.0 {
            let mut a2 = -179.0;
            while a2 <= 360.0 {
                let d = shortest_angle_delta(a1, a2);
                assert!(
                    d > -180.0 && d <= 180.0,
                    "delta({a1}, {a2}) = {d} out of (-180, 180]"
                );
                a2 += 1.0;
            }
            a1 += 1.0;
        }
    }

    #[test]
    fn test_wrap_degrees_bounds() {
        assert_eq!(wrap_degrees(0.0), 0.0);
        assert_eq!(wrap_degrees(360.0), 0.0);
        assert_eq!(wrap_degrees(365.0), 5.0);
        assert_eq!(wrap_degrees(-5.0), 355.0);
        assert_eq!(wrap_degrees(725.0), 5.0);
        // A hair below zero must not round up to exactly 360.
        assert_eq!(wrap_degrees(-1.0e-9), 0.0);
    }

    #[test]
    fn test_heading_cardinal_directions() {
        // Moving right (+X): atan2 = 0, heading = 180.
        let right = heading_degrees(Vec2::new(1.0, 0.0));
        assert!((right - 180.0).abs() < 1e-4);

        // Moving down (+Y in client coords): atan2 = 90, heading = 270.
        let down = heading_degrees(Vec2::new(0.0, 1.0));
        assert!((down - 270.0).abs() < 1e-4);

        // Moving up (-Y): atan2 = -90, heading = 90.
        let up = heading_degrees(Vec2::new(0.0, -1.0));
        assert!((up - 90.0).abs() < 1e-4);
    }

    #[test]
    fn test_heading_always_in_range() {
        let mut deg = 0.0_f32;
        while deg < 360.0 {
            let rad = deg.to_radians();
            let h = heading_degrees(Vec2::new(rad.cos(), rad.sin()));
            assert!(h >= 0.0 && h < 360.0, "heading {h} out of [0, 360)");
            deg += 7.5;
        }
    }
}
