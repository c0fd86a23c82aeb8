//! 3D point in cylindrical coordinates.
//!
//! The z axis is the cylinder axis. theta is rectified into [0, 2π) on every
//! write; c_radius and z are stored as given.

use std::fmt;

use super::coords::polar_phi;
use super::PointLike;
use crate::operand::Operand;
use crate::precision::{self, rectify_theta};
use crate::{Math3Error, Result};

/// A 3D point {c_radius, theta, z}.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3c {
    c_radius: f64,
    theta: f64,
    z: f64,
}

impl Point3c {
    /// Creates a point, rectifying theta.
    #[inline]
    pub fn new(c_radius: f64, theta: f64, z: f64) -> Self {
        Self {
            c_radius,
            theta: rectify_theta(theta),
            z,
        }
    }

    /// Creates a point with the cylindrical coordinates of any point-like value.
    #[inline]
    pub fn from_point(p: &impl PointLike) -> Self {
        Self::new(p.c_radius(), p.theta(), p.z())
    }

    #[inline]
    pub const fn c_radius(&self) -> f64 {
        self.c_radius
    }

    #[inline]
    pub const fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    pub fn set_c_radius(&mut self, c_radius: f64) -> &mut Self {
        self.c_radius = c_radius;
        self
    }

    /// Sets theta, wrapped into [0, 2π).
    #[inline]
    pub fn set_theta(&mut self, theta: f64) -> &mut Self {
        self.theta = rectify_theta(theta);
        self
    }

    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// Sets all coordinates, rectifying theta.
    pub fn set_coords(&mut self, c_radius: f64, theta: f64, z: f64) -> &mut Self {
        *self = Self::new(c_radius, theta, z);
        self
    }

    /// Copies the cylindrical coordinates of `p`.
    #[inline]
    pub fn set(&mut self, p: &impl PointLike) -> &mut Self {
        self.set_coords(p.c_radius(), p.theta(), p.z())
    }

    /// True if radius and height are within `epsilon` and, unless the point
    /// sits on the axis, theta is too.
    pub fn approximately_equals(&self, other: &impl PointLike, epsilon: f64) -> bool {
        precision::approximately_equal(self.c_radius, other.c_radius(), epsilon)
            && precision::approximately_equal(self.z, other.z(), epsilon)
            && (precision::approximately_equal(self.c_radius, 0.0, epsilon)
                || precision::approximately_equal_angle(self.theta, other.theta(), epsilon))
    }

    /// [`approximately_equals`](Self::approximately_equals) with the default epsilon.
    #[inline]
    pub fn approx_eq(&self, other: &impl PointLike) -> bool {
        self.approximately_equals(other, precision::EPSILON)
    }
}

impl PointLike for Point3c {
    #[inline]
    fn x(&self) -> f64 {
        self.c_radius * self.theta.cos()
    }

    #[inline]
    fn y(&self) -> f64 {
        self.c_radius * self.theta.sin()
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn s_radius(&self) -> f64 {
        (self.c_radius * self.c_radius + self.z * self.z).sqrt()
    }

    #[inline]
    fn theta(&self) -> f64 {
        self.theta
    }

    #[inline]
    fn phi(&self) -> f64 {
        polar_phi(self.z, self.s_radius())
    }

    #[inline]
    fn c_radius(&self) -> f64 {
        self.c_radius
    }
}

// theta is undefined on the axis.
impl<P: PointLike> PartialEq<P> for Point3c {
    fn eq(&self, other: &P) -> bool {
        other.c_radius() == self.c_radius
            && other.z() == self.z
            && (self.c_radius == 0.0 || other.theta() == self.theta)
    }
}

impl fmt::Display for Point3c {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Point3c: c_radius {}  theta {}  z {}",
            self.c_radius, self.theta, self.z
        )
    }
}

impl TryFrom<Operand> for Point3c {
    type Error = Math3Error;

    fn try_from(operand: Operand) -> Result<Self> {
        operand.point3c().ok_or(Math3Error::InvalidArgument {
            target: "Point3c",
            found: operand.kind(),
        })
    }
}
