//! Scoop index, scoop data, and plot layout types

use crate::core::constants::{NUM_SCOOPS, SCOOP_SIZE};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a scoop index in `[0, 4095]`
///
/// The range invariant is enforced at construction, so buffer accesses
/// indexed by scoop number cannot go out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ScoopIndex(u16);

impl ScoopIndex {
    /// Create a new ScoopIndex, rejecting values >= 4096
    pub fn new(value: u16) -> Result<Self> {
        if value as usize >= NUM_SCOOPS {
            return Err(Error::invalid_scoop_index(value));
        }
        Ok(Self(value))
    }

    /// Build an index from raw digest bits, keeping the low 12 bits
    pub(crate) const fn from_digest_bits(raw: u16) -> Self {
        Self(raw & 0x0fff)
    }

    /// Get the inner value
    pub const fn value(self) -> u16 {
        self.0
    }

    /// The scoop this one is paired with under the mirrored layout
    pub const fn mirror(self) -> Self {
        Self((NUM_SCOOPS - 1) as u16 - self.0)
    }
}

impl fmt::Display for ScoopIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u16> for ScoopIndex {
    type Error = Error;

    fn try_from(value: u16) -> Result<Self> {
        Self::new(value)
    }
}

impl<'de> Deserialize<'de> for ScoopIndex {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = u16::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}

/// Plot layout generations
///
/// The two variants encode how a scoop's second half is drawn from the
/// nonce buffer. `PoC1` reads both halves from the same scoop slot; `PoC2`
/// reads the second half from the mirrored slot, which defeats
/// half-buffer optimization attacks on PoC1 plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlotLayout {
    /// Original layout: second half from the same scoop slot
    PoC1,
    /// Mirrored layout: second half from scoop slot `4095 - index`
    PoC2,
}

/// Represents 64 bytes of scoop data extracted from a nonce buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scoop([u8; SCOOP_SIZE]);

impl Scoop {
    /// Create a Scoop from bytes
    pub const fn from_bytes(bytes: [u8; SCOOP_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the scoop as bytes
    pub fn as_bytes(&self) -> &[u8; SCOOP_SIZE] {
        &self.0
    }

    /// First 32-byte half
    pub fn first_half(&self) -> &[u8] {
        &self.0[..SCOOP_SIZE / 2]
    }

    /// Second 32-byte half
    pub fn second_half(&self) -> &[u8] {
        &self.0[SCOOP_SIZE / 2..]
    }
}
