//! Base target and deadline types

use crate::core::constants::GENESIS_BASE_TARGET;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents the per-block difficulty divisor
///
/// A base target of zero would make every deadline division undefined, so
/// zero is rejected at construction and the computation paths stay
/// infallible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BaseTarget(u64);

impl BaseTarget {
    /// Create a new BaseTarget, rejecting zero
    pub fn new(value: u64) -> Result<Self> {
        if value == 0 {
            return Err(Error::invalid_base_target("base target must be non-zero"));
        }
        Ok(Self(value))
    }

    /// The base target of the genesis block
    pub const fn genesis() -> Self {
        Self(GENESIS_BASE_TARGET)
    }

    /// Get the inner value
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for BaseTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u64> for BaseTarget {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for BaseTarget {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u64::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Represents a mining deadline in seconds
///
/// The number of seconds after a block's timestamp before the nonce that
/// produced this deadline may forge the next block.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Deadline(pub u64);

impl Deadline {
    /// Create a new Deadline
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the inner value in seconds
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

impl From<Deadline> for u64 {
    fn from(deadline: Deadline) -> Self {
        deadline.0
    }
}
