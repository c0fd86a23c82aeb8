//! Quaternions and axis-angle rotations.
//!
//! A quaternion `real + axis.x·i + axis.y·j + axis.z·k` is stored as its real
//! part and its imaginary "axis" vector. Unit quaternions encode 3D rotations
//! without the gimbal-lock singularities of Euler angles; see
//! [`Quaternion::from_axis_angle`] and [`Quaternion::to_axis_angle`].
//!
//! Nothing here enforces unit norm. Degenerate inputs (zero norm inverse,
//! zero axis) produce non-finite components rather than errors.

use std::fmt;
use std::ops::{Div, Mul, Neg, Sub};

use approx::{AbsDiffEq, RelativeEq};
use nalgebra as na;
use tracing::debug;

use crate::operand::Operand;
use crate::point::{origin, Point3, PointLike};
use crate::precision;
use crate::{Math3Error, Result};

/// A quaternion {axis, real}.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Quaternion {
    axis: Point3,
    real: f64,
}

/// Factor for [`Quaternion::scale`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum QuaternionScale {
    /// Multiplies both parts.
    Real(f64),
    /// Full quaternion product.
    Quaternion(Quaternion),
}

impl From<f64> for QuaternionScale {
    fn from(s: f64) -> Self {
        QuaternionScale::Real(s)
    }
}

impl From<Quaternion> for QuaternionScale {
    fn from(q: Quaternion) -> Self {
        QuaternionScale::Quaternion(q)
    }
}

impl Quaternion {
    /// Creates a quaternion from its imaginary vector and real part.
    #[inline]
    pub fn new(axis: &impl PointLike, real: f64) -> Self {
        Self {
            axis: Point3::from_point(axis),
            real,
        }
    }

    /// The multiplicative identity (0, 1): no rotation.
    #[inline]
    pub const fn identity() -> Self {
        Self {
            axis: origin(),
            real: 1.0,
        }
    }

    /// Encodes a rotation of `angle` radians about `axis`.
    ///
    /// The axis is normalized first; a zero axis yields NaN components.
    pub fn from_axis_angle(axis: &impl PointLike, angle: f64) -> Self {
        let half_angle = angle / 2.0;
        let mut unit = Point3::from_point(axis);
        unit.normalize().scale(half_angle.sin());
        Self {
            axis: unit,
            real: half_angle.cos(),
        }
    }

    /// Decodes the rotation as (axis, angle).
    ///
    /// When the rotation is (nearly) the identity the axis is undefined and
    /// (1, 0, 0) is returned with an angle near zero.
    pub fn to_axis_angle(&self) -> (Point3, f64) {
        let half_angle = self.real.acos();
        let sin_half_angle = half_angle.sin();
        let axis = if sin_half_angle.abs() < precision::AXIS_ANGLE_THRESHOLD {
            debug!(real = self.real, "degenerate rotation axis, using +X");
            Point3::new(1.0, 0.0, 0.0)
        } else {
            self.axis.scaled(1.0 / sin_half_angle)
        };
        (axis, 2.0 * half_angle)
    }

    /// Returns the imaginary vector.
    #[inline]
    pub const fn axis(&self) -> &Point3 {
        &self.axis
    }

    /// Returns mutable access to the imaginary vector.
    #[inline]
    pub fn axis_mut(&mut self) -> &mut Point3 {
        &mut self.axis
    }

    /// Returns the real part.
    #[inline]
    pub const fn real(&self) -> f64 {
        self.real
    }

    #[inline]
    pub fn set_real(&mut self, real: f64) -> &mut Self {
        self.real = real;
        self
    }

    /// Sets both parts.
    #[inline]
    pub fn set(&mut self, axis: &impl PointLike, real: f64) -> &mut Self {
        self.axis.set(axis);
        self.real = real;
        self
    }

    /// Copies another quaternion.
    #[inline]
    pub fn set_quaternion(&mut self, other: &Quaternion) -> &mut Self {
        *self = *other;
        self
    }

    /// True if both parts are within `epsilon`, axis compared per component.
    pub fn approximately_equals(&self, other: &Quaternion, epsilon: f64) -> bool {
        self.axis.approximately_equals(&other.axis, epsilon)
            && precision::approximately_equal(self.real, other.real, epsilon)
    }

    /// [`approximately_equals`](Self::approximately_equals) with the default epsilon.
    #[inline]
    pub fn approx_eq(&self, other: &Quaternion) -> bool {
        self.approximately_equals(other, precision::EPSILON)
    }

    /// Adds another quaternion in place.
    pub fn add(&mut self, other: &Quaternion) -> &mut Self {
        self.axis.add(&other.axis);
        self.real += other.real;
        self
    }

    /// Returns the sum.
    pub fn added(&self, other: &Quaternion) -> Quaternion {
        let mut result = *self;
        result.add(other);
        result
    }

    /// Subtracts another quaternion in place.
    pub fn subtract(&mut self, other: &Quaternion) -> &mut Self {
        self.axis.subtract(&other.axis);
        self.real -= other.real;
        self
    }

    /// Returns the difference.
    pub fn subtracted(&self, other: &Quaternion) -> Quaternion {
        let mut result = *self;
        result.subtract(other);
        result
    }

    /// Hamilton product in place: self = self · other.
    ///
    /// For (v1, r1)·(v2, r2) the result is
    /// (r1·v2 + r2·v1 + v1×v2, r1·r2 − v1·v2). Not commutative.
    pub fn multiply(&mut self, other: &Quaternion) -> &mut Self {
        let (v1, r1) = (self.axis, self.real);
        let (v2, r2) = (other.axis, other.real);
        let real = r1 * r2 - v1.dot(&v2);
        let mut axis = v2.scaled(r1);
        axis.add(&v1.scaled(r2)).add(&v1.crossed(&v2));
        self.axis = axis;
        self.real = real;
        self
    }

    /// Returns the Hamilton product self · other.
    pub fn multiplied(&self, other: &Quaternion) -> Quaternion {
        let mut result = *self;
        result.multiply(other);
        result
    }

    /// Scales in place by a real factor, or multiplies by a quaternion.
    pub fn scale(&mut self, factor: impl Into<QuaternionScale>) -> &mut Self {
        match factor.into() {
            QuaternionScale::Real(s) => {
                self.axis.scale(s);
                self.real *= s;
                self
            }
            QuaternionScale::Quaternion(q) => self.multiply(&q),
        }
    }

    /// Returns scaled quaternion.
    pub fn scaled(&self, factor: impl Into<QuaternionScale>) -> Quaternion {
        let mut result = *self;
        result.scale(factor);
        result
    }

    /// Negates the axis in place.
    pub fn conjugate(&mut self) -> &mut Self {
        self.axis.mirror();
        self
    }

    /// Returns the conjugate.
    pub fn conjugated(&self) -> Quaternion {
        let mut result = *self;
        result.conjugate();
        result
    }

    /// real² + axis·axis
    #[inline]
    pub fn norm(&self) -> f64 {
        self.real * self.real + self.axis.square_modulus()
    }

    /// √norm
    #[inline]
    pub fn abs(&self) -> f64 {
        self.norm().sqrt()
    }

    /// Replaces this quaternion with its multiplicative inverse.
    pub fn invert(&mut self) -> &mut Self {
        let norm = self.norm();
        self.conjugate().scale(1.0 / norm)
    }

    /// Returns the multiplicative inverse: conjugate / norm.
    pub fn inverse(&self) -> Quaternion {
        let mut result = *self;
        result.invert();
        result
    }

    /// Divides in place: self = self · other⁻¹.
    pub fn divide(&mut self, other: &Quaternion) -> &mut Self {
        self.multiply(&other.inverse())
    }

    /// Returns self · other⁻¹.
    pub fn divided(&self, other: &Quaternion) -> Quaternion {
        let mut result = *self;
        result.divide(other);
        result
    }

    /// Rotates a point by the rotation this quaternion encodes: q·p·q⁻¹.
    pub fn rotate_point(&self, p: &impl PointLike) -> Point3 {
        let pure = Quaternion::new(p, 0.0);
        self.multiplied(&pure).multiplied(&self.inverse()).axis
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        precision::EPSILON
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.axis.abs_diff_eq(&other.axis, epsilon) && self.real.abs_diff_eq(&other.real, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.axis.relative_eq(&other.axis, epsilon, max_relative)
            && self.real.relative_eq(&other.real, epsilon, max_relative)
    }
}

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Quaternion: axis: x {}  y {}  z {}   real {}",
            self.axis.x(),
            self.axis.y(),
            self.axis.z(),
            self.real
        )
    }
}

// Operators

impl std::ops::Add for Quaternion {
    type Output = Quaternion;
    fn add(self, other: Quaternion) -> Quaternion {
        self.added(&other)
    }
}

impl Sub for Quaternion {
    type Output = Quaternion;
    fn sub(self, other: Quaternion) -> Quaternion {
        self.subtracted(&other)
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;
    fn mul(self, other: Quaternion) -> Quaternion {
        self.multiplied(&other)
    }
}

impl Mul<f64> for Quaternion {
    type Output = Quaternion;
    fn mul(self, scalar: f64) -> Quaternion {
        self.scaled(scalar)
    }
}

impl Div for Quaternion {
    type Output = Quaternion;
    fn div(self, other: Quaternion) -> Quaternion {
        self.divided(&other)
    }
}

impl Neg for Quaternion {
    type Output = Quaternion;
    fn neg(self) -> Quaternion {
        self.scaled(-1.0)
    }
}

// Conversions

impl From<na::Quaternion<f64>> for Quaternion {
    fn from(q: na::Quaternion<f64>) -> Self {
        Quaternion::new(&Point3::new(q.i, q.j, q.k), q.w)
    }
}

impl From<Quaternion> for na::Quaternion<f64> {
    fn from(q: Quaternion) -> Self {
        na::Quaternion::new(q.real, q.axis.x(), q.axis.y(), q.axis.z())
    }
}

impl TryFrom<Operand> for Quaternion {
    type Error = Math3Error;

    fn try_from(operand: Operand) -> Result<Self> {
        match operand {
            Operand::Quaternion(q) => Ok(q),
            other => Err(Math3Error::InvalidArgument {
                target: "Quaternion",
                found: other.kind(),
            }),
        }
    }
}
