//! Nonce type for plot positions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 64-bit nonce, the index of one generated plot unit
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Nonce(pub u64);

impl Nonce {
    /// Create a new Nonce
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Increment the nonce by 1 in place
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Increment the nonce by 1 and return the result
    pub fn incremented(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

impl fmt::Display for Nonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Nonce {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Nonce> for u64 {
    fn from(nonce: Nonce) -> Self {
        nonce.0
    }
}
