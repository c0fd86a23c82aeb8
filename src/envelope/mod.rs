//! Running bounds over streams of values.
//!
//! [`Envelope`] tracks the extent of a set of numbers; [`Envelope3`] composes
//! three of them into an axis-aligned box around a set of 3D points.

mod range;
mod box3;

pub use self::range::Envelope;
pub use self::box3::Envelope3;
