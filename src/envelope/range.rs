//! Envelope - 1D running range

use std::fmt;

use crate::{Math3Error, Result};

/// The smallest interval [low, high] containing every value added so far.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Envelope {
    count: usize,
    low: f64,
    high: f64,
}

impl Envelope {
    /// Creates an empty envelope
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of values added
    pub fn count(&self) -> usize {
        self.count
    }

    /// Returns true if nothing has been added
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Adds a value, widening the bounds if needed
    pub fn add(&mut self, value: f64) -> &mut Self {
        if self.count == 0 {
            self.low = value;
            self.high = value;
        } else {
            self.low = self.low.min(value);
            self.high = self.high.max(value);
        }
        self.count += 1;
        self
    }

    /// Merges another envelope, keeping its tally of values
    pub fn add_envelope(&mut self, other: &Envelope) -> &mut Self {
        if other.count == 0 {
            return self;
        }
        if self.count == 0 {
            *self = *other;
        } else {
            self.low = self.low.min(other.low);
            self.high = self.high.max(other.high);
            self.count += other.count;
        }
        self
    }

    /// Returns the largest value added
    pub fn high(&self) -> Result<f64> {
        if self.count == 0 {
            Err(Math3Error::EmptyEnvelope)
        } else {
            Ok(self.high)
        }
    }

    /// Returns the smallest value added
    pub fn low(&self) -> Result<f64> {
        if self.count == 0 {
            Err(Math3Error::EmptyEnvelope)
        } else {
            Ok(self.low)
        }
    }

    /// Returns (low, high), or None if empty
    pub fn bounds(&self) -> Option<(f64, f64)> {
        if self.count == 0 {
            None
        } else {
            Some((self.low, self.high))
        }
    }

    /// Returns true if the value lies within the bounds, boundary included
    pub fn contains(&self, value: f64) -> bool {
        self.count > 0 && value >= self.low && value <= self.high
    }
}

impl fmt::Display for Envelope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bounds() {
            Some((low, high)) => write!(f, "Envelope: count {}  high {}  low {}", self.count, high, low),
            None => write!(f, "Envelope: count 0"),
        }
    }
}
