//! Envelope3 - 3D axis-aligned envelope
//!
//! The smallest box parallel to the coordinate axes that contains every point
//! added so far. Points, coordinate triples and other envelopes can be folded
//! in; the box corners are rebuilt from the three axis envelopes on request.

use std::fmt;

use tracing::{debug, trace};

use super::Envelope;
use crate::operand::Operand;
use crate::point::{Point3, PointLike};
use crate::{Math3Error, Result};

/// A 3D bounding envelope over cartesian points
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope3 {
    count: usize,
    x: Envelope,
    y: Envelope,
    z: Envelope,
}

impl Envelope3 {
    /// Creates an empty envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of points the envelope represents
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if no boundary exists yet
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the x coordinate envelope
    pub fn x(&self) -> &Envelope {
        &self.x
    }

    /// Returns the y coordinate envelope
    pub fn y(&self) -> &Envelope {
        &self.y
    }

    /// Returns the z coordinate envelope
    pub fn z(&self) -> &Envelope {
        &self.z
    }

    /// Adds the point (x, y, z)
    pub fn add_coords(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.x.add(x);
        self.y.add(y);
        self.z.add(z);
        self.count += 1;
        self
    }

    /// Adds the cartesian position of any point-like value
    pub fn add_point(&mut self, p: &impl PointLike) -> &mut Self {
        self.add_coords(p.x(), p.y(), p.z())
    }

    /// Coalesces another envelope into this one.
    ///
    /// Its two corners are added, then the count is corrected so it grows by
    /// the number of points `other` represents, not by two. An empty `other`
    /// changes nothing.
    pub fn add_envelope(&mut self, other: &Envelope3) -> &mut Self {
        if let (Ok(high), Ok(low)) = (other.high(), other.low()) {
            self.add_point(&high);
            self.add_point(&low);
            self.count = self.count + other.count - 2;
            trace!(folded = other.count, count = self.count, "coalesced envelope");
        }
        self
    }

    /// Adds any supported operand: an envelope, a point or a triple.
    ///
    /// Anything else fails with [`Math3Error::UnsupportedComparand`] and
    /// leaves the envelope unchanged.
    pub fn add(&mut self, operand: impl Into<Operand>) -> Result<&mut Self> {
        let operand = operand.into();
        if let Operand::Envelope3(other) = operand {
            return Ok(self.add_envelope(&other));
        }
        match operand.point3() {
            Some(p) => Ok(self.add_point(&p)),
            None => Err(unsupported(&operand)),
        }
    }

    /// Returns the corner with the largest coordinates
    pub fn high(&self) -> Result<Point3> {
        if self.count == 0 {
            return Err(Math3Error::EmptyEnvelope);
        }
        Ok(Point3::new(self.x.high()?, self.y.high()?, self.z.high()?))
    }

    /// Returns the corner with the smallest coordinates
    pub fn low(&self) -> Result<Point3> {
        if self.count == 0 {
            return Err(Math3Error::EmptyEnvelope);
        }
        Ok(Point3::new(self.x.low()?, self.y.low()?, self.z.low()?))
    }

    /// Returns true if (x, y, z) lies inside or on the boundary
    pub fn contains_coords(&self, x: f64, y: f64, z: f64) -> bool {
        self.x.contains(x) && self.y.contains(y) && self.z.contains(z)
    }

    /// Returns true if the point lies inside or on the boundary
    pub fn contains_point(&self, p: &impl PointLike) -> bool {
        self.contains_coords(p.x(), p.y(), p.z())
    }

    /// Returns true if both corners of `other` lie within this envelope.
    ///
    /// Fails with [`Math3Error::EmptyEnvelope`] if `other` has no boundary.
    pub fn contains_envelope(&self, other: &Envelope3) -> Result<bool> {
        Ok(self.contains_point(&other.high()?) && self.contains_point(&other.low()?))
    }

    /// Tests any supported operand, failing like [`add`](Self::add) otherwise
    pub fn contains(&self, operand: impl Into<Operand>) -> Result<bool> {
        let operand = operand.into();
        if let Operand::Envelope3(other) = operand {
            return self.contains_envelope(&other);
        }
        match operand.point3() {
            Some(p) => Ok(self.contains_point(&p)),
            None => Err(unsupported(&operand)),
        }
    }
}

fn unsupported(operand: &Operand) -> Math3Error {
    debug!(operand = operand.kind(), "envelope rejected operand");
    Math3Error::UnsupportedComparand(operand.kind())
}

impl<P: PointLike> FromIterator<P> for Envelope3 {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        let mut envelope = Envelope3::new();
        envelope.extend(iter);
        envelope
    }
}

impl<P: PointLike> Extend<P> for Envelope3 {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for p in iter {
            self.add_point(&p);
        }
    }
}

impl fmt::Display for Envelope3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Envelope3: count {}", self.count)?;
        if let (Ok(high), Ok(low)) = (self.high(), self.low()) {
            write!(f, "\n  high  {}\n  low   {}", high, low)?;
        }
        Ok(())
    }
}
