//! Error types for the Hashify core library
//!
//! Errors are grouped by category so callers can tell a bad request apart
//! from a host that cannot provide a digest primitive.

use thiserror::Error;

pub mod crypto;
pub mod internal;
pub mod validation;

pub use self::crypto::CryptoError;
pub use self::internal::InternalError;
pub use self::validation::ValidationError;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the Hashify core library
///
/// Errors are categorized into three main types:
/// - Validation errors: malformed algorithm selectors and parameters
/// - Crypto errors: digest primitives missing from the current host
/// - Internal errors: library invariants that did not hold
#[derive(Error, Debug)]
pub enum Error {
    /// Validation related errors
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Digest primitive errors
    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// Internal library errors
    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl Error {
    /// Whether the caller can reasonably recover, e.g. by picking another algorithm
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation(_) => false,
            Self::Crypto(err) => err.is_recoverable(),
            Self::Internal(_) => false,
        }
    }
}
