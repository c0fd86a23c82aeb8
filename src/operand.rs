//! Runtime-polymorphic arguments.
//!
//! The statically typed entry points (`add_point`, `set_coords`, ...) cover
//! ordinary use. [`Operand`] is the closed set of values that the dynamic
//! entry points accept, for callers that only know at runtime what kind of
//! value they are holding. Conversions that cannot be satisfied are reported
//! as errors instead of being coerced.

use crate::envelope::Envelope3;
use crate::point::{Point3, Point3c, Point3s, PointLike};
use crate::quaternion::Quaternion;

/// Any value one of the crate's dynamic entry points may be handed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Point3(Point3),
    Point3s(Point3s),
    Point3c(Point3c),
    /// Cartesian coordinates (x, y, z)
    Triple(f64, f64, f64),
    Envelope3(Envelope3),
    Quaternion(Quaternion),
    Scalar(f64),
}

impl Operand {
    /// Short name of the variant, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Point3(_) => "Point3",
            Operand::Point3s(_) => "Point3s",
            Operand::Point3c(_) => "Point3c",
            Operand::Triple(..) => "coordinate triple",
            Operand::Envelope3(_) => "Envelope3",
            Operand::Quaternion(_) => "quaternion",
            Operand::Scalar(_) => "scalar",
        }
    }

    /// Returns true for the variants that answer cartesian coordinates.
    pub fn is_point_like(&self) -> bool {
        matches!(
            self,
            Operand::Point3(_) | Operand::Point3s(_) | Operand::Point3c(_) | Operand::Triple(..)
        )
    }

    /// The operand as a cartesian point, if it is point-like.
    pub fn point3(&self) -> Option<Point3> {
        match self {
            Operand::Point3(p) => Some(*p),
            Operand::Point3s(p) => Some(p.point3()),
            Operand::Point3c(p) => Some(p.point3()),
            Operand::Triple(x, y, z) => Some(Point3::new(*x, *y, *z)),
            _ => None,
        }
    }

    /// The operand as a spherical point, if it is point-like.
    pub fn point3s(&self) -> Option<Point3s> {
        match self {
            Operand::Point3(p) => Some(p.point3s()),
            Operand::Point3s(p) => Some(*p),
            Operand::Point3c(p) => Some(p.point3s()),
            Operand::Triple(x, y, z) => Some(Point3::new(*x, *y, *z).point3s()),
            _ => None,
        }
    }

    /// The operand as a cylindrical point, if it is point-like.
    pub fn point3c(&self) -> Option<Point3c> {
        match self {
            Operand::Point3(p) => Some(p.point3c()),
            Operand::Point3s(p) => Some(p.point3c()),
            Operand::Point3c(p) => Some(*p),
            Operand::Triple(x, y, z) => Some(Point3::new(*x, *y, *z).point3c()),
            _ => None,
        }
    }
}

impl From<Point3> for Operand {
    fn from(p: Point3) -> Self {
        Operand::Point3(p)
    }
}

impl From<Point3s> for Operand {
    fn from(p: Point3s) -> Self {
        Operand::Point3s(p)
    }
}

impl From<Point3c> for Operand {
    fn from(p: Point3c) -> Self {
        Operand::Point3c(p)
    }
}

impl From<[f64; 3]> for Operand {
    fn from(arr: [f64; 3]) -> Self {
        Operand::Triple(arr[0], arr[1], arr[2])
    }
}

impl From<(f64, f64, f64)> for Operand {
    fn from(tuple: (f64, f64, f64)) -> Self {
        Operand::Triple(tuple.0, tuple.1, tuple.2)
    }
}

impl From<Envelope3> for Operand {
    fn from(e: Envelope3) -> Self {
        Operand::Envelope3(e)
    }
}

impl From<Quaternion> for Operand {
    fn from(q: Quaternion) -> Self {
        Operand::Quaternion(q)
    }
}

impl From<f64> for Operand {
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_and_point_like() {
        assert_eq!(Operand::from(Point3::origin()).kind(), "Point3");
        assert_eq!(Operand::from(1.0).kind(), "scalar");
        assert!(Operand::from([1.0, 2.0, 3.0]).is_point_like());
        assert!(!Operand::from(Envelope3::new()).is_point_like());
        assert!(!Operand::from(Quaternion::identity()).is_point_like());
    }

    #[test]
    fn test_point_views() {
        let op = Operand::from(Point3s::new(2.0, 0.0, std::f64::consts::FRAC_PI_2));
        let p = op.point3().unwrap();
        assert!(p.approx_eq(&Point3::new(2.0, 0.0, 0.0)));
        assert!(op.point3c().unwrap().approx_eq(&Point3c::new(2.0, 0.0, 0.0)));
        assert!(Operand::Scalar(1.0).point3().is_none());
        assert!(Operand::from(Envelope3::new()).point3s().is_none());
    }
}
