//! 3D point in spherical coordinates.
//!
//! theta is measured around the z axis from the positive x axis using the
//! right hand rule and always lies in [0, 2π). phi is measured from the
//! positive z axis and always lies in [0, π]. Both are rectified on every
//! write. The radius is stored as given, negative values included.

use std::fmt;

use super::PointLike;
use crate::operand::Operand;
use crate::precision::{self, rectify_phi, rectify_theta};
use crate::{Math3Error, Result};

/// A 3D point {s_radius, theta, phi}.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3s {
    s_radius: f64,
    theta: f64,
    phi: f64,
}

impl Point3s {
    /// Creates a point, rectifying theta and phi.
    #[inline]
    pub fn new(s_radius: f64, theta: f64, phi: f64) -> Self {
        Self {
            s_radius,
            theta: rectify_theta(theta),
            phi: rectify_phi(phi),
        }
    }

    /// Creates a point with the spherical coordinates of any point-like value.
    #[inline]
    pub fn from_point(p: &impl PointLike) -> Self {
        Self::new(p.s_radius(), p.theta(), p.phi())
    }

    /// Returns the spherical radius.
    #[inline]
    pub const fn s_radius(&self) -> f64 {
        self.s_radius
    }

    /// Returns theta in [0, 2π).
    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    /// Returns phi in [0, π].
    #[inline]
    pub const fn phi(&self) -> f64 {
        self.phi
    }

    /// Sets the radius.
    #[inline]
    pub fn set_s_radius(&mut self, s_radius: f64) -> &mut Self {
        self.s_radius = s_radius;
        self
    }

    /// Sets theta, wrapped into [0, 2π).
    #[inline]
    pub fn set_theta(&mut self, theta: f64) -> &mut Self {
        self.theta = rectify_theta(theta);
        self
    }

    /// Sets phi, clamped into [0, π].
    #[inline]
    pub fn set_phi(&mut self, phi: f64) -> &mut Self {
        self.phi = rectify_phi(phi);
        self
    }

    /// Sets all coordinates, rectifying the angles.
    pub fn set_coords(&mut self, s_radius: f64, theta: f64, phi: f64) -> &mut Self {
        *self = Self::new(s_radius, theta, phi);
        self
    }

    /// Copies the spherical coordinates of `p`.
    #[inline]
    pub fn set(&mut self, p: &impl PointLike) -> &mut Self {
        self.set_coords(p.s_radius(), p.theta(), p.phi())
    }

    /// True if the radii are within `epsilon` and, unless the radius is
    /// zero, both angles are too. Any angles describe the origin.
    pub fn approximately_equals(&self, other: &impl PointLike, epsilon: f64) -> bool {
        precision::approximately_equal(self.s_radius, other.s_radius(), epsilon)
            && (precision::approximately_equal(self.s_radius, 0.0, epsilon)
                || (precision::approximately_equal_angle(self.theta, other.theta(), epsilon)
                    && precision::approximately_equal(self.phi, other.phi(), epsilon)))
    }

    /// [`approximately_equals`](Self::approximately_equals) with the default epsilon.
    #[inline]
    pub fn approx_eq(&self, other: &impl PointLike) -> bool {
        self.approximately_equals(other, precision::EPSILON)
    }
}

impl PointLike for Point3s {
    #[inline]
    fn x(&self) -> f64 {
        self.s_radius * self.theta.cos() * self.phi.sin()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.s_radius * self.theta.sin() * self.phi.sin()
    }

    #[inline]
    fn z(&self) -> f64 {
        self.s_radius * self.phi.cos()
    }

    #[inline]
    fn s_radius(&self) -> f64 {
        self.s_radius
    }

    #[inline]
    fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    fn phi(&self) -> f64 {
        self.phi
    }

    #[inline]
    fn c_radius(&self) -> f64 {
        self.s_radius * self.phi.sin()
    }
}

// At radius zero the angles carry no information.
impl<P: PointLike> PartialEq<P> for Point3s {
    fn eq(&self, other: &P) -> bool {
        other.s_radius() == self.s_radius
            && (self.s_radius == 0.0 || (other.theta() == self.theta && other.phi() == self.phi))
    }
}

impl fmt::Display for Point3s {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point3s: s_radius {}  theta {}  phi {}",
            self.s_radius, self.theta, self.phi
        )
    }
}

impl TryFrom<Operand> for Point3s {
    type Error = Math3Error;

    fn try_from(operand: Operand) -> Result<Self> {
        operand.point3s().ok_or(Math3Error::InvalidArgument {
            target: "Point3s",
            found: operand.kind(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::{origin, Point3, Point3c};
    use approx::assert_abs_diff_eq;
    use std::f64::consts::PI;

    #[test]
    fn test_point3s_new_and_equality() {
        let p = Point3s::default();
        assert_eq!((p.s_radius(), p.theta(), p.phi()), (0.0, 0.0, 0.0));

        let p = Point3s::new(1.0, 2.0, 3.0);
        assert_eq!((p.s_radius(), p.theta(), p.phi()), (1.0, 2.0, 3.0));
        assert_eq!(p, Point3s::new(1.0, 2.0, 3.0));
        assert!(p.approx_eq(&Point3s::new(1.0, 2.0, 3.0)));
        assert!(p.approximately_equals(&Point3s::new(1.005, 1.991, 3.0), 0.01));
        assert_ne!(p, Point3s::new(3.0, 2.0, 1.0));
    }

    #[test]
    fn test_point3s_setters_rectify() {
        let mut p = Point3s::default();
        p.set_s_radius(1.0).set_theta(2.0).set_phi(3.0);
        assert_eq!((p.s_radius(), p.theta(), p.phi()), (1.0, 2.0, 3.0));

        p.set_coords(2.0, 4.0, 6.0);
        assert_eq!((p.s_radius(), p.theta(), p.phi()), (2.0, 4.0, PI));

        p.set_coords(-2.0, -4.0, -6.0);
        assert_eq!(p.s_radius(), -2.0);
        assert_abs_diff_eq!(p.theta(), 2.28318530717959, epsilon = 1e-12);
        assert_eq!(p.phi(), 0.0);
    }

    #[test]
    fn test_point3s_repeated_set_is_idempotent() {
        let mut p = Point3s::new(1.0, 9.0, 4.0);
        let first = p;
        p.set(&first);
        assert_eq!((p.s_radius(), p.theta(), p.phi()), (first.s_radius(), first.theta(), first.phi()));
    }

    #[test]
    fn test_point3s_origin_equality() {
        assert_eq!(Point3s::new(0.0, 0.0, 0.0), origin());
        assert_eq!(origin(), Point3s::new(0.0, 0.0, 0.0));
        assert_eq!(Point3s::new(0.0, 1.0, 2.0), origin());
        assert_eq!(origin(), Point3s::new(0.0, 1.0, 2.0));
    }

    #[test]
    fn test_point3s_copy_by_capability() {
        let p = Point3s::new(1.0, 2.0, 3.0);
        let mut q = Point3s::default();
        q.set(&p);
        assert_eq!(q, p);
        assert_eq!(p.point3s(), p);
    }

    #[test]
    fn test_point3s_cartesian_and_cylindrical() {
        let p = Point3s::new(1.0, 2.0, 3.0);
        assert_abs_diff_eq!(p.x(), -0.058726644927621, epsilon = 1e-12);
        assert_abs_diff_eq!(p.y(), 0.128320060202457, epsilon = 1e-12);
        assert_abs_diff_eq!(p.z(), -0.989992496600445, epsilon = 1e-12);
        assert_abs_diff_eq!(p.c_radius(), 0.141120008059867, epsilon = 1e-12);
    }

    #[test]
    fn test_point3s_to_point3_and_back() {
        let p = Point3s::new(1.0, 2.0, 3.0);
        let c: Point3 = p.point3();
        assert_abs_diff_eq!(c.x(), -0.058726644927621, epsilon = 1e-12);
        assert_abs_diff_eq!(c.z(), -0.989992496600445, epsilon = 1e-12);
        assert!(p.approx_eq(&c.point3s()));
    }

    #[test]
    fn test_point3s_to_point3c_and_back() {
        let p = Point3s::new(1.0, 2.0, 3.0);
        let c: Point3c = p.point3c();
        assert_abs_diff_eq!(c.c_radius(), 0.141120008059867, epsilon = 1e-12);
        assert_abs_diff_eq!(c.theta(), p.theta(), epsilon = 1e-12);
        assert_abs_diff_eq!(c.z(), -0.989992496600445, epsilon = 1e-12);
        assert!(p.approx_eq(&c.point3s()));
    }

    #[test]
    fn test_point3s_negative_radius_preserved() {
        let p = Point3s::new(-1.0, 0.0, PI / 2.0);
        assert_eq!(p.s_radius(), -1.0);
        assert_abs_diff_eq!(p.x(), -1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_point3s_display() {
        assert_eq!(
            Point3s::new(1.0, 2.0, 3.0).to_string(),
            "Point3s: s_radius 1  theta 2  phi 3"
        );
    }

    #[test]
    fn test_point3s_from_operand() {
        let p = Point3s::try_from(Operand::from(Point3::new(0.0, 0.0, 2.0))).unwrap();
        assert_eq!(p.s_radius(), 2.0);
        assert!(Point3s::try_from(Operand::Scalar(2.0)).is_err());
    }

    #[test]
    fn test_point3s_matches_cartesian_below_x_axis() {
        let p = Point3::new(1.0, -1.0, 0.5);
        let s = p.point3s();
        assert_abs_diff_eq!(s.theta(), p.theta(), epsilon = 1e-12);
        assert!(s.approx_eq(&p));
        assert!(p.approx_eq(&s));
        assert!(s.approx_eq(&p.point3c()));
    }

    #[test]
    fn test_point3s_theta_seam_is_continuous() {
        let a = Point3s::new(1.0, 1e-12, 1.0);
        let b = Point3s::new(1.0, -1e-12, 1.0);
        assert!(b.theta() > 6.0);
        assert!(a.approx_eq(&b));
        assert!(b.approx_eq(&a));
        assert!(!a.approx_eq(&Point3s::new(1.0, 1e-6, 1.0)));
    }
}
