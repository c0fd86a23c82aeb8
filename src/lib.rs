//! math3: 3D points, envelopes and quaternions
//!
//! Points live in three coordinate systems (cartesian [`Point3`], spherical
//! [`Point3s`], cylindrical [`Point3c`]). Every representation answers the
//! accessors of all three through [`PointLike`], so conversions and algebra
//! work regardless of which triple a value stores natively.

pub mod precision;
pub mod point;
pub mod envelope;
pub mod quaternion;
pub mod operand;

// Re-exports for convenience
pub use point::{origin, PointLike, Point3, Point3s, Point3c, Scale};
pub use envelope::{Envelope, Envelope3};
pub use quaternion::{Quaternion, QuaternionScale};
pub use operand::Operand;

/// Result type for math3 operations
pub type Result<T> = std::result::Result<T, Math3Error>;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Math3Error {
    #[error("Invalid argument: cannot convert {found} into {target}")]
    InvalidArgument {
        target: &'static str,
        found: &'static str,
    },

    #[error("Empty envelope: no boundary exists until a value is added")]
    EmptyEnvelope,

    #[error("Unsupported comparand: an envelope cannot use {0}")]
    UnsupportedComparand(&'static str),
}
