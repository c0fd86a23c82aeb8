//! 3D point in cartesian coordinates.
//!
//! The canonical representation. Doubles as a vector from the origin, so it
//! carries the full vector algebra. Mutating operations use the verb form and
//! return `&mut Self`; the past participle returns a new point.

use std::fmt;
use std::ops::{AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;

use super::coords::{cartesian_theta, polar_phi};
use super::{Point3c, Point3s, PointLike};
use crate::operand::Operand;
use crate::precision;
use crate::{Math3Error, Result};

/// A 3D cartesian point {x, y, z}.
#[derive(Clone, Copy, Debug, Default)]
pub struct Point3 {
    x: f64,
    y: f64,
    z: f64,
}

/// Factor for [`Point3::scale`]: one scalar for all axes, or one per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale {
    Uniform(f64),
    Axes(Point3),
}

impl From<f64> for Scale {
    fn from(s: f64) -> Self {
        Scale::Uniform(s)
    }
}

impl From<Point3> for Scale {
    fn from(p: Point3) -> Self {
        Scale::Axes(p)
    }
}

impl From<Point3s> for Scale {
    fn from(p: Point3s) -> Self {
        Scale::Axes(p.point3())
    }
}

impl From<Point3c> for Scale {
    fn from(p: Point3c) -> Self {
        Scale::Axes(p.point3())
    }
}

impl Point3 {
    /// Creates a point from coordinates.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// The origin (0, 0, 0).
    #[inline]
    pub const fn origin() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    /// Creates a point with the cartesian coordinates of any point-like value.
    #[inline]
    pub fn from_point(p: &impl PointLike) -> Self {
        Self::new(p.x(), p.y(), p.z())
    }

    /// Returns X coordinate.
    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    /// Returns Y coordinate.
    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    /// Returns Z coordinate.
    #[inline]
    pub const fn z(&self) -> f64 {
        self.z
    }

    /// Returns all coordinates as tuple.
    #[inline]
    pub const fn coords(&self) -> (f64, f64, f64) {
        (self.x, self.y, self.z)
    }

    /// Sets X coordinate.
    #[inline]
    pub fn set_x(&mut self, x: f64) -> &mut Self {
        self.x = x;
        self
    }

    /// Sets Y coordinate.
    #[inline]
    pub fn set_y(&mut self, y: f64) -> &mut Self {
        self.y = y;
        self
    }

    /// Sets Z coordinate.
    #[inline]
    pub fn set_z(&mut self, z: f64) -> &mut Self {
        self.z = z;
        self
    }

    /// Sets all coordinates.
    #[inline]
    pub fn set_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    /// Sets all coordinates from the cartesian view of `p`.
    #[inline]
    pub fn set(&mut self, p: &impl PointLike) -> &mut Self {
        self.set_coords(p.x(), p.y(), p.z())
    }

    /// True if every coordinate is within `epsilon` of the other point's.
    pub fn approximately_equals(&self, other: &impl PointLike, epsilon: f64) -> bool {
        precision::approximately_equal(self.x, other.x(), epsilon)
            && precision::approximately_equal(self.y, other.y(), epsilon)
            && precision::approximately_equal(self.z, other.z(), epsilon)
    }

    /// [`approximately_equals`](Self::approximately_equals) with the default epsilon.
    #[inline]
    pub fn approx_eq(&self, other: &impl PointLike) -> bool {
        self.approximately_equals(other, precision::EPSILON)
    }

    /// Computes the distance to another point.
    #[inline]
    pub fn distance_to(&self, other: &impl PointLike) -> f64 {
        self.square_distance(other).sqrt()
    }

    /// Computes the square distance to another point.
    #[inline]
    pub fn square_distance(&self, other: &impl PointLike) -> f64 {
        let dx = self.x - other.x();
        let dy = self.y - other.y();
        let dz = self.z - other.z();
        dx * dx + dy * dy + dz * dz
    }

    /// Length of the vector: distance to the origin.
    #[inline]
    pub fn modulus(&self) -> f64 {
        self.square_modulus().sqrt()
    }

    /// Square of the modulus.
    #[inline]
    pub const fn square_modulus(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Dot product.
    #[inline]
    pub fn dot(&self, other: &impl PointLike) -> f64 {
        self.dot_coords(other.x(), other.y(), other.z())
    }

    /// Dot product with the vector (x, y, z).
    #[inline]
    pub const fn dot_coords(&self, x: f64, y: f64, z: f64) -> f64 {
        self.x * x + self.y * y + self.z * z
    }

    /// Mirrors through the origin in place.
    #[inline]
    pub fn mirror(&mut self) -> &mut Self {
        self.set_coords(-self.x, -self.y, -self.z)
    }

    /// Returns the point mirrored through the origin.
    #[inline]
    pub fn mirrored(&self) -> Point3 {
        let mut result = *self;
        result.mirror();
        result
    }

    /// Adds another point in place.
    #[inline]
    pub fn add(&mut self, other: &impl PointLike) -> &mut Self {
        self.add_coords(other.x(), other.y(), other.z())
    }

    /// Adds (x, y, z) in place.
    #[inline]
    pub fn add_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set_coords(self.x + x, self.y + y, self.z + z)
    }

    /// Returns sum of this and another point.
    #[inline]
    pub fn added(&self, other: &impl PointLike) -> Point3 {
        let mut result = *self;
        result.add(other);
        result
    }

    /// Returns sum of this and (x, y, z).
    #[inline]
    pub fn added_coords(&self, x: f64, y: f64, z: f64) -> Point3 {
        let mut result = *self;
        result.add_coords(x, y, z);
        result
    }

    /// Subtracts another point in place.
    #[inline]
    pub fn subtract(&mut self, other: &impl PointLike) -> &mut Self {
        self.subtract_coords(other.x(), other.y(), other.z())
    }

    /// Subtracts (x, y, z) in place.
    #[inline]
    pub fn subtract_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.add_coords(-x, -y, -z)
    }

    /// Returns difference of this and another point.
    #[inline]
    pub fn subtracted(&self, other: &impl PointLike) -> Point3 {
        let mut result = *self;
        result.subtract(other);
        result
    }

    /// Returns difference of this and (x, y, z).
    #[inline]
    pub fn subtracted_coords(&self, x: f64, y: f64, z: f64) -> Point3 {
        let mut result = *self;
        result.subtract_coords(x, y, z);
        result
    }

    /// Component-wise multiplication in place.
    #[inline]
    pub fn multiply(&mut self, other: &impl PointLike) -> &mut Self {
        self.multiply_coords(other.x(), other.y(), other.z())
    }

    /// Multiplies each coordinate by the matching factor in place.
    #[inline]
    pub fn multiply_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set_coords(self.x * x, self.y * y, self.z * z)
    }

    /// Returns component-wise multiplication.
    #[inline]
    pub fn multiplied(&self, other: &impl PointLike) -> Point3 {
        let mut result = *self;
        result.multiply(other);
        result
    }

    /// Returns each coordinate multiplied by the matching factor.
    #[inline]
    pub fn multiplied_coords(&self, x: f64, y: f64, z: f64) -> Point3 {
        let mut result = *self;
        result.multiply_coords(x, y, z);
        result
    }

    /// Scales in place, uniformly by a scalar or per axis by a point.
    pub fn scale(&mut self, factor: impl Into<Scale>) -> &mut Self {
        match factor.into() {
            Scale::Uniform(s) => self.multiply_coords(s, s, s),
            Scale::Axes(p) => self.multiply(&p),
        }
    }

    /// Returns scaled point.
    pub fn scaled(&self, factor: impl Into<Scale>) -> Point3 {
        let mut result = *self;
        result.scale(factor);
        result
    }

    /// Scales to length 1 in place.
    ///
    /// The zero vector has no direction and becomes NaN.
    #[doc(alias = "unit")]
    #[inline]
    pub fn normalize(&mut self) -> &mut Self {
        let m = self.modulus();
        self.scale(1.0 / m)
    }

    /// Returns the unit vector with the same direction.
    #[doc(alias = "unit")]
    #[inline]
    pub fn normalized(&self) -> Point3 {
        let mut result = *self;
        result.normalize();
        result
    }

    /// Cross product in place: self = self × other.
    #[inline]
    pub fn cross(&mut self, other: &impl PointLike) -> &mut Self {
        self.cross_coords(other.x(), other.y(), other.z())
    }

    /// Cross product with the vector (x, y, z) in place.
    #[inline]
    pub fn cross_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.set_coords(
            self.y * z - self.z * y,
            self.z * x - self.x * z,
            self.x * y - self.y * x,
        )
    }

    /// Sets this point to a × b.
    #[inline]
    pub fn set_cross(&mut self, a: &impl PointLike, b: &impl PointLike) -> &mut Self {
        self.set(a).cross(b)
    }

    /// Returns cross product.
    #[inline]
    pub fn crossed(&self, other: &impl PointLike) -> Point3 {
        let mut result = *self;
        result.cross(other);
        result
    }

    /// Returns cross product with the vector (x, y, z).
    #[inline]
    pub fn crossed_coords(&self, x: f64, y: f64, z: f64) -> Point3 {
        let mut result = *self;
        result.cross_coords(x, y, z);
        result
    }

    /// Returns the point a distance `d` from this one on the line to `target`.
    ///
    /// With `normalize`, `d` is the fraction of the way to `target` (0 is this
    /// point, 1 is `target`); otherwise it is an absolute distance. A target
    /// equal to this point has no direction and yields NaN.
    pub fn to_along(&self, target: &impl PointLike, d: f64, normalize: bool) -> Point3 {
        let length = if normalize { self.distance_to(target) } else { 1.0 };
        let mut result = Point3::from_point(target);
        result.subtract(self).normalize().scale(d * length).add(self);
        result
    }
}

impl PointLike for Point3 {
    #[inline]
    fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    fn z(&self) -> f64 {
        self.z
    }

    #[inline]
    fn s_radius(&self) -> f64 {
        self.modulus()
    }

    #[inline]
    fn theta(&self) -> f64 {
        cartesian_theta(self.x, self.y)
    }

    #[inline]
    fn phi(&self) -> f64 {
        polar_phi(self.z, self.modulus())
    }

    #[inline]
    fn c_radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

// Exact comparison of cartesian coordinates, whatever the other representation
impl<P: PointLike> PartialEq<P> for Point3 {
    fn eq(&self, other: &P) -> bool {
        self.x == other.x() && self.y == other.y() && self.z == other.z()
    }
}

impl AbsDiffEq for Point3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        precision::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Point3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Point3: x {}  y {}  z {}", self.x, self.y, self.z)
    }
}

// Operators

// Not imported: `Add::add` would shadow the in-place `add` on by-value receivers.
impl std::ops::Add for Point3 {
    type Output = Point3;
    #[inline]
    fn add(self, other: Point3) -> Point3 {
        self.added(&other)
    }
}

impl AddAssign for Point3 {
    #[inline]
    fn add_assign(&mut self, other: Point3) {
        Point3::add(self, &other);
    }
}

impl Sub for Point3 {
    type Output = Point3;
    #[inline]
    fn sub(self, other: Point3) -> Point3 {
        self.subtracted(&other)
    }
}

impl SubAssign for Point3 {
    #[inline]
    fn sub_assign(&mut self, other: Point3) {
        Point3::subtract(self, &other);
    }
}

/// Component-wise product.
impl Mul for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, other: Point3) -> Point3 {
        self.multiplied(&other)
    }
}

impl Mul<f64> for Point3 {
    type Output = Point3;
    #[inline]
    fn mul(self, scalar: f64) -> Point3 {
        self.scaled(scalar)
    }
}

impl Mul<Point3> for f64 {
    type Output = Point3;
    #[inline]
    fn mul(self, p: Point3) -> Point3 {
        p.scaled(self)
    }
}

impl MulAssign<f64> for Point3 {
    #[inline]
    fn mul_assign(&mut self, scalar: f64) {
        self.scale(scalar);
    }
}

impl Neg for Point3 {
    type Output = Point3;
    #[inline]
    fn neg(self) -> Point3 {
        self.mirrored()
    }
}

// Conversions

impl From<[f64; 3]> for Point3 {
    fn from(arr: [f64; 3]) -> Self {
        Point3::new(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Point3 {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Point3::new(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Point3> for [f64; 3] {
    fn from(p: Point3) -> Self {
        [p.x, p.y, p.z]
    }
}

impl From<na::Vector3<f64>> for Point3 {
    fn from(v: na::Vector3<f64>) -> Self {
        Point3::new(v.x, v.y, v.z)
    }
}

impl From<Point3> for na::Vector3<f64> {
    fn from(p: Point3) -> Self {
        na::Vector3::new(p.x, p.y, p.z)
    }
}

impl From<na::Point3<f64>> for Point3 {
    fn from(p: na::Point3<f64>) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for na::Point3<f64> {
    fn from(p: Point3) -> Self {
        na::Point3::new(p.x, p.y, p.z)
    }
}

impl TryFrom<Operand> for Point3 {
    type Error = Math3Error;

    fn try_from(operand: Operand) -> Result<Self> {
        operand.point3().ok_or(Math3Error::InvalidArgument {
            target: "Point3",
            found: operand.kind(),
        })
    }
}
