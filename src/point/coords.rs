//! The coordinate capability shared by every point representation.

use super::{Point3, Point3c, Point3s};
use crate::precision::{rectify_theta, HALF_PI};

/// A value with a full complement of cartesian, spherical and cylindrical
/// coordinates.
///
/// Implemented by exactly [`Point3`], [`Point3s`] and [`Point3c`]. Each
/// supplies its native triple directly and derives the rest algebraically.
/// The conversion methods read only these accessors, so converting between
/// two non-cartesian forms never builds an intermediate [`Point3`].
pub trait PointLike {
    /// Cartesian x.
    fn x(&self) -> f64;
    /// Cartesian y.
    fn y(&self) -> f64;
    /// Cartesian z, also the cylindrical z.
    fn z(&self) -> f64;
    /// Spherical radius: distance from the origin.
    fn s_radius(&self) -> f64;
    /// Angle around the z axis, shared by spherical and cylindrical forms.
    fn theta(&self) -> f64;
    /// Spherical angle measured from the positive z axis.
    fn phi(&self) -> f64;
    /// Cylindrical radius: distance from the z axis.
    fn c_radius(&self) -> f64;

    /// Returns the point in cartesian coordinates.
    fn point3(&self) -> Point3 {
        Point3::new(self.x(), self.y(), self.z())
    }

    /// Returns the point in spherical coordinates.
    fn point3s(&self) -> Point3s {
        Point3s::new(self.s_radius(), self.theta(), self.phi())
    }

    /// Returns the point in cylindrical coordinates.
    fn point3c(&self) -> Point3c {
        Point3c::new(self.c_radius(), self.theta(), self.z())
    }

    /// Overwrites `target` with this point's cartesian coordinates.
    fn fill_point3<'a>(&self, target: &'a mut Point3) -> &'a mut Point3 {
        target.set_coords(self.x(), self.y(), self.z())
    }

    /// Overwrites `target` with this point's spherical coordinates.
    fn fill_point3s<'a>(&self, target: &'a mut Point3s) -> &'a mut Point3s {
        target.set_coords(self.s_radius(), self.theta(), self.phi())
    }

    /// Overwrites `target` with this point's cylindrical coordinates.
    fn fill_point3c<'a>(&self, target: &'a mut Point3c) -> &'a mut Point3c {
        target.set_coords(self.c_radius(), self.theta(), self.z())
    }
}

/// theta of a cartesian position, in [0, 2π) like the stored angles.
///
/// On the x = 0 plane this is π/2 for y > 0 and 3π/2 otherwise.
#[inline]
pub(crate) fn cartesian_theta(x: f64, y: f64) -> f64 {
    let raw = if x == 0.0 {
        if y > 0.0 {
            HALF_PI
        } else {
            -HALF_PI
        }
    } else {
        y.atan2(x)
    };
    rectify_theta(raw)
}

/// phi of a point at height `z` and distance `modulus` from the origin.
#[inline]
pub(crate) fn polar_phi(z: f64, modulus: f64) -> f64 {
    if modulus == 0.0 {
        0.0
    } else {
        (z / modulus).acos()
    }
}
