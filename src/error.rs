//! Error types for the deadline kernel
//!
//! This module provides the error handling surface using `thiserror`
//! for automatic error trait implementations.

use thiserror::Error;

/// Main error type for the deadline kernel
#[derive(Error, Debug)]
pub enum Error {
    /// Base target outside the valid range (must be non-zero)
    #[error("Invalid base target: {0}")]
    InvalidBaseTarget(String),

    /// Scoop index outside `[0, 4095]`
    #[error("Invalid scoop index: {0} (must be < 4096)")]
    InvalidScoopIndex(u16),

    /// Malformed generation signature
    #[error("Invalid generation signature: {0}")]
    InvalidGenerationSignature(String),

    /// Nonce buffer with a wrong length
    #[error("Invalid nonce buffer: {0}")]
    InvalidBuffer(String),

    /// Deadline dispatcher failures (stopped workers, dropped channels)
    #[error("Dispatcher error: {0}")]
    Dispatcher(String),
}

/// Result type alias for the deadline kernel
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an invalid base target error
    pub fn invalid_base_target(msg: impl Into<String>) -> Self {
        Self::InvalidBaseTarget(msg.into())
    }

    /// Create an invalid scoop index error
    pub fn invalid_scoop_index(index: u16) -> Self {
        Self::InvalidScoopIndex(index)
    }

    /// Create an invalid generation signature error
    pub fn invalid_generation_signature(msg: impl Into<String>) -> Self {
        Self::InvalidGenerationSignature(msg.into())
    }

    /// Create an invalid buffer error
    pub fn invalid_buffer(msg: impl Into<String>) -> Self {
        Self::InvalidBuffer(msg.into())
    }

    /// Create a dispatcher error
    pub fn dispatcher(msg: impl Into<String>) -> Self {
        Self::Dispatcher(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_base_target("must be non-zero");
        assert_eq!(err.to_string(), "Invalid base target: must be non-zero");

        let err = Error::invalid_scoop_index(4096);
        assert_eq!(err.to_string(), "Invalid scoop index: 4096 (must be < 4096)");

        let err = Error::dispatcher("workers stopped");
        assert_eq!(err.to_string(), "Dispatcher error: workers stopped");
    }

    #[test]
    fn test_error_helpers() {
        assert!(matches!(
            Error::invalid_generation_signature("too short"),
            Error::InvalidGenerationSignature(_)
        ));
        assert!(matches!(
            Error::invalid_buffer("bad length"),
            Error::InvalidBuffer(_)
        ));
    }
}
