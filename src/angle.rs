//! Orientation helpers for gradient angles.
//!
//! Line orientation is ambiguous by 180 degrees, so the extractor compares
//! folded angles by default and signed angles when polarity matters.

use std::f32::consts::{FRAC_PI_2, PI, TAU};

/// Fold an angle into `[0, pi)`.
#[inline]
pub fn fold_half_turn(angle: f32) -> f32 {
    let folded = angle.rem_euclid(PI);
    if folded >= PI - 1e-6 {
        0.0
    } else {
        folded
    }
}

/// Wrap an angle into `(-pi, pi]`.
#[inline]
pub fn wrap_signed(angle: f32) -> f32 {
    let mut wrapped = angle.rem_euclid(TAU);
    if wrapped > PI {
        wrapped -= TAU;
    }
    wrapped
}

/// Smallest difference between two line orientations, in `[0, pi/2]`.
#[inline]
pub fn orientation_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(PI);
    if diff > FRAC_PI_2 {
        PI - diff
    } else {
        diff
    }
}

/// Smallest difference between two signed directions, in `[0, pi]`.
#[inline]
pub fn direction_distance(a: f32, b: f32) -> f32 {
    let diff = (a - b).abs().rem_euclid(TAU);
    if diff > PI {
        TAU - diff
    } else {
        diff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn fold_half_turn_maps_into_range() {
        assert_abs_diff_eq!(fold_half_turn(0.5), 0.5, epsilon = 1e-5);
        assert_abs_diff_eq!(
            fold_half_turn(-std::f32::consts::FRAC_PI_4),
            3.0 * std::f32::consts::FRAC_PI_4,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(fold_half_turn(PI), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(fold_half_turn(3.0 * PI), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn orientation_distance_treats_opposites_as_equal() {
        assert_abs_diff_eq!(orientation_distance(0.0, PI), 0.0, epsilon = 1e-5);
        assert_abs_diff_eq!(
            orientation_distance(0.0, FRAC_PI_2),
            FRAC_PI_2,
            epsilon = 1e-5
        );
        assert_abs_diff_eq!(
            orientation_distance(0.25, 1.7),
            orientation_distance(1.7, 0.25),
            epsilon = 1e-6
        );
    }

    #[test]
    fn direction_distance_keeps_polarity() {
        assert_abs_diff_eq!(direction_distance(0.0, PI), PI, epsilon = 1e-5);
        assert_abs_diff_eq!(
            direction_distance(wrap_signed(3.0), wrap_signed(-3.0)),
            TAU - 6.0,
            epsilon = 1e-5
        );
    }
}
