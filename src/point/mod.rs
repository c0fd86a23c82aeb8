//! Points in three coordinate systems.
//!
//! Each representation stores one native triple and derives the others on
//! demand, so any point answers `x,y,z`, `s_radius,theta,phi` and
//! `c_radius,theta,z` through [`PointLike`].

mod coords;
mod point3;
mod point3s;
mod point3c;

pub use coords::PointLike;
pub use point3::{Point3, Scale};
pub use point3s::Point3s;
pub use point3c::Point3c;

/// The origin of 3D space.
///
/// A fresh value on every call; mutating it affects nobody else.
#[inline]
pub const fn origin() -> Point3 {
    Point3::new(0.0, 0.0, 0.0)
}
