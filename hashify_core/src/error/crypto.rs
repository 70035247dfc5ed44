//! Digest primitive availability errors

use thiserror::Error;

/// Errors raised when the host cannot provide a digest primitive
#[derive(Error, Debug)]
pub enum CryptoError {
    /// The secure digest facility for this algorithm is not available here
    #[error(
        "Crypto primitive for '{algorithm}' is unavailable: a secure execution context is required"
    )]
    UnavailableCryptoPrimitive { algorithm: String },
}

impl CryptoError {
    /// Create an unavailable primitive error
    pub fn unavailable_primitive(algorithm: &str) -> Self {
        Self::UnavailableCryptoPrimitive {
            algorithm: algorithm.to_string(),
        }
    }

    /// Check if this error is recoverable
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::UnavailableCryptoPrimitive { .. })
    }
}
