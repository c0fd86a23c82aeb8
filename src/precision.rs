//! Tolerances and angle rectification.
//!
//! Every approximate comparison in the crate takes an explicit epsilon; the
//! constants here are the defaults used by the `approx_eq` shorthands.

use std::f64::consts::PI;

/// Default tolerance for approximate equality of coordinates.
/// Value: 1.0e-9
pub const EPSILON: f64 = 1.0e-9;

/// Below this |sin(half angle)| a quaternion is treated as encoding no
/// rotation, and the decoded axis falls back to +X.
/// Value: 1.0e-8
pub const AXIS_ANGLE_THRESHOLD: f64 = 1.0e-8;

/// 2π, the period of theta.
pub const TWO_PI: f64 = 2.0 * PI;

/// π/2, theta of a point on the positive y axis.
pub const HALF_PI: f64 = PI / 2.0;

/// Returns true if `a` and `b` are no further apart than `epsilon`.
#[inline]
pub fn approximately_equal(a: f64, b: f64, epsilon: f64) -> bool {
    (a - b).abs() <= epsilon
}

/// Separation of two angles around the circle, in [0, π].
///
/// 0 and 2π are the same direction, so angles on either side of the seam
/// are close.
#[inline]
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(TWO_PI);
    d.min(TWO_PI - d)
}

/// [`approximately_equal`] for angles, measured with [`angular_distance`].
#[inline]
pub fn approximately_equal_angle(a: f64, b: f64, epsilon: f64) -> bool {
    angular_distance(a, b) <= epsilon
}

/// Wraps an angle into [0, 2π).
///
/// NaN and infinities come back as NaN.
#[inline]
pub fn rectify_theta(theta: f64) -> f64 {
    let wrapped = theta.rem_euclid(TWO_PI);
    // rem_euclid may round up to exactly 2π for tiny negative inputs
    if wrapped >= TWO_PI {
        0.0
    } else {
        wrapped
    }
}

/// Clamps an angle into [0, π].
#[inline]
pub fn rectify_phi(phi: f64) -> f64 {
    phi.clamp(0.0, PI)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precision_values() {
        assert_eq!(EPSILON, 1.0e-9);
        assert_eq!(AXIS_ANGLE_THRESHOLD, 1.0e-8);
    }

    #[test]
    fn test_angular_distance_across_seam() {
        assert!(angular_distance(1e-12, TWO_PI - 1e-12) < 1e-11);
        assert!(approximately_equal_angle(1e-12, TWO_PI - 1e-12, EPSILON));
        assert!(approximately_equal_angle(-0.1, TWO_PI - 0.1, EPSILON));
        assert!((angular_distance(0.5, 2.0) - 1.5).abs() < 1e-15);
        assert!((angular_distance(0.0, PI) - PI).abs() < 1e-15);
        assert!(!approximately_equal_angle(0.0, 1e-6, EPSILON));
        assert!(!approximately_equal_angle(f64::NAN, 0.0, EPSILON));
    }

    #[test]
    fn test_approximately_equal() {
        assert!(approximately_equal(1.0, 1.0 + 1e-10, EPSILON));
        assert!(!approximately_equal(1.0, 1.0 + 1e-8, EPSILON));
        assert!(approximately_equal(2.0, 2.0, 0.0));
    }

    #[test]
    fn test_rectify_theta() {
        assert_eq!(rectify_theta(2.0), 2.0);
        assert_eq!(rectify_theta(4.0), 4.0);
        assert_eq!(rectify_theta(0.0), 0.0);
        assert_eq!(rectify_theta(TWO_PI), 0.0);
        assert!((rectify_theta(-4.0) - 2.28318530717959).abs() < 1e-12);
        assert!((rectify_theta(7.0 * PI) - PI).abs() < 1e-12);
        assert!(rectify_theta(-1e-18) < TWO_PI);
        assert!(rectify_theta(f64::NAN).is_nan());
    }

    #[test]
    fn test_rectify_theta_range() {
        let mut t = -50.0;
        while t < 50.0 {
            let r = rectify_theta(t);
            assert!((0.0..TWO_PI).contains(&r), "theta {} rectified to {}", t, r);
            t += 0.37;
        }
    }

    #[test]
    fn test_rectify_phi() {
        assert_eq!(rectify_phi(3.0), 3.0);
        assert_eq!(rectify_phi(6.0), PI);
        assert_eq!(rectify_phi(-6.0), 0.0);
        assert_eq!(rectify_phi(PI), PI);
    }
}
