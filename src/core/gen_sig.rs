//! Generation signature type

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 32-byte per-block generation signature
///
/// The signature is an opaque consensus value; its bytes are hashed exactly
/// as supplied and never reinterpreted as an integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GenerationSignature(pub [u8; 32]);

impl GenerationSignature {
    /// Create a new GenerationSignature from bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Create a GenerationSignature from a byte slice
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        if slice.len() != 32 {
            return Err(Error::invalid_generation_signature(format!(
                "Expected 32 bytes, got {}",
                slice.len()
            )));
        }

        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Create a GenerationSignature from a hex string
    ///
    /// The string must be exactly 64 hex characters.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        if hex_str.len() != 64 {
            return Err(Error::invalid_generation_signature(format!(
                "Expected 64 hex characters, got {}",
                hex_str.len()
            )));
        }

        let bytes = hex::decode(hex_str)
            .map_err(|e| Error::invalid_generation_signature(format!("Invalid hex: {}", e)))?;
        Self::from_slice(&bytes)
    }

    /// Get the signature as bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for GenerationSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl Serialize for GenerationSignature {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for GenerationSignature {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex_str = String::deserialize(deserializer)?;
        Self::from_hex(&hex_str).map_err(serde::de::Error::custom)
    }
}
