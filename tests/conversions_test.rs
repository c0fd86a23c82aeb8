//! Round trips between the cartesian, spherical and cylindrical forms

use approx::assert_abs_diff_eq;
use math3::precision::TWO_PI;
use math3::{origin, Point3, Point3c, Point3s, PointLike};
use std::f64::consts::PI;

const TOLERANCE: f64 = 1e-9;

fn cartesian_grid() -> Vec<Point3> {
    let values = [-2.0, -1.0, 0.0, 0.5, 2.5];
    let mut points = Vec::new();
    for &x in &values {
        for &y in &values {
            for &z in &values {
                points.push(Point3::new(x, y, z));
            }
        }
    }
    points
}

#[test]
fn test_cartesian_through_spherical() {
    for p in cartesian_grid() {
        let back = p.point3s().point3();
        assert!(
            back.approximately_equals(&p, TOLERANCE),
            "{} came back as {}",
            p,
            back
        );
    }
}

#[test]
fn test_cartesian_through_cylindrical() {
    for p in cartesian_grid() {
        let back = p.point3c().point3();
        assert!(
            back.approximately_equals(&p, TOLERANCE),
            "{} came back as {}",
            p,
            back
        );
    }
}

#[test]
fn test_spherical_through_others() {
    // Angles kept off the poles and off the theta seam
    for &s in &[0.5, 1.0, 3.0] {
        for &theta in &[0.3, 1.2, 2.5, 4.0, 5.5] {
            for &phi in &[0.4, 1.0, 1.5, 2.2, 3.0] {
                let p = Point3s::new(s, theta, phi);
                assert!(p.approximately_equals(&p.point3().point3s(), TOLERANCE));
                assert!(p.approximately_equals(&p.point3c().point3s(), TOLERANCE));
            }
        }
    }
}

#[test]
fn test_cylindrical_through_others() {
    for &c in &[0.5, 1.0, 3.0] {
        for &theta in &[0.3, 1.2, 2.5, 4.0, 5.5] {
            for &z in &[-2.0, 0.0, 1.5] {
                let p = Point3c::new(c, theta, z);
                assert!(p.approximately_equals(&p.point3().point3c(), TOLERANCE));
                assert!(p.approximately_equals(&p.point3s().point3c(), TOLERANCE));
            }
        }
    }
}

#[test]
fn test_theta_always_rectified() {
    let mut t = -20.0;
    while t <= 20.0 {
        let s = Point3s::new(1.0, t, 1.0);
        let c = Point3c::new(1.0, t, 0.0);
        for theta in [s.theta(), c.theta()] {
            assert!((0.0..TWO_PI).contains(&theta), "theta {} from {}", theta, t);
            assert_abs_diff_eq!(theta.cos(), t.cos(), epsilon = 1e-9);
            assert_abs_diff_eq!(theta.sin(), t.sin(), epsilon = 1e-9);
        }
        t += 0.37;
    }
}

#[test]
fn test_phi_always_clamped() {
    let mut t = -10.0;
    while t <= 10.0 {
        let phi = Point3s::new(1.0, 0.0, t).phi();
        assert!((0.0..=PI).contains(&phi));
        if (0.0..=PI).contains(&t) {
            assert_eq!(phi, t);
        }
        t += 0.41;
    }
}

#[test]
fn test_worked_point() {
    let p = Point3::new(1.0, 2.0, 3.0);
    assert_abs_diff_eq!(p.s_radius(), 3.74165738677394, epsilon = 1e-12);
    assert_abs_diff_eq!(p.theta(), 1.10714871779409, epsilon = 1e-12);
    assert_abs_diff_eq!(p.phi(), 0.640522312679424, epsilon = 1e-12);
    assert_abs_diff_eq!(p.c_radius(), 2.23606797749979, epsilon = 1e-12);

    let s = p.point3s();
    assert_abs_diff_eq!(s.point3(), p, epsilon = 1e-12);
    let c = p.point3c();
    assert_abs_diff_eq!(c.z(), 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(c.point3(), p, epsilon = 1e-12);
}

#[test]
fn test_cross_representation_equality() {
    assert_eq!(Point3::new(0.0, 0.0, 0.0), origin());
    assert_eq!(Point3s::new(0.0, 1.0, 2.0), origin());
    assert_eq!(Point3c::new(0.0, 4.0, 0.0), origin());
    assert_ne!(Point3::new(1.0, 0.0, 0.0), origin());

    let p = Point3::new(1.0, 2.0, 3.0);
    assert!(p.point3s().approx_eq(&p));
    assert!(p.point3c().approx_eq(&p.point3s()));
}

#[test]
fn test_cross_representation_equality_over_grid() {
    // Includes every octant, the axes and the origin
    for p in cartesian_grid() {
        let s = p.point3s();
        let c = p.point3c();
        assert!(s.approx_eq(&p), "{} vs {}", s, p);
        assert!(p.approx_eq(&s), "{} vs {}", p, s);
        assert!(c.approx_eq(&p), "{} vs {}", c, p);
        assert!(p.approx_eq(&c), "{} vs {}", p, c);
        assert!(s.approx_eq(&c), "{} vs {}", s, c);
        assert!(c.approx_eq(&s), "{} vs {}", c, s);
        assert!((0.0..TWO_PI).contains(&p.theta()));
        assert_eq!(p.theta(), s.theta());
    }
}

#[test]
fn test_origin_is_fresh() {
    let mut a = origin();
    a.add_coords(1.0, 1.0, 1.0);
    assert_eq!(origin(), Point3::new(0.0, 0.0, 0.0));
    assert_ne!(a, origin());
}
