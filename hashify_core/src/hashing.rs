//! Digest algorithms for the Hashify core library
//!
//! This module holds the closed set of supported algorithms and the registry
//! of primitives that implement them.

use crate::{Error, Result, error::ValidationError};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

mod algorithms;
mod registry;
mod traits;

pub use registry::AlgorithmRegistry;
pub use traits::{DigestPrimitive, StreamingHasher};

/// Hash algorithms supported by Hashify
///
/// Deserialization accepts every spelling `FromStr` does, so config files,
/// environment overrides and flags agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum HashAlgorithm {
    /// MD5, 128-bit digest
    MD5,
    /// SHA-256, 256-bit digest
    SHA256,
    /// SHA-512, 512-bit digest
    SHA512,
}

impl HashAlgorithm {
    /// Every supported algorithm, in display order
    pub const ALL: [HashAlgorithm; 3] = [Self::MD5, Self::SHA256, Self::SHA512];

    /// Stable lowercase identifier, also the registry key
    pub fn id(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "md5",
            HashAlgorithm::SHA256 => "sha256",
            HashAlgorithm::SHA512 => "sha512",
        }
    }

    /// Human readable name
    pub fn display_name(&self) -> &'static str {
        match self {
            HashAlgorithm::MD5 => "MD5",
            HashAlgorithm::SHA256 => "SHA-256",
            HashAlgorithm::SHA512 => "SHA-512",
        }
    }

    /// Length of the hex-encoded digest
    pub fn hex_len(&self) -> usize {
        match self {
            HashAlgorithm::MD5 => 32,
            HashAlgorithm::SHA256 => 64,
            HashAlgorithm::SHA512 => 128,
        }
    }

    /// Whether the primitive depends on the host's secure digest facility
    pub fn requires_secure_context(&self) -> bool {
        !matches!(self, HashAlgorithm::MD5)
    }
}

impl std::fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl std::str::FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "md5" => Ok(HashAlgorithm::MD5),
            "sha256" | "sha-256" => Ok(HashAlgorithm::SHA256),
            "sha512" | "sha-512" => Ok(HashAlgorithm::SHA512),
            _ => Err(Error::Validation(ValidationError::unknown_algorithm(s))),
        }
    }
}

impl TryFrom<String> for HashAlgorithm {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl HashAlgorithm {
    /// Look up the primitive for this algorithm in `registry`
    pub fn primitive_in(&self, registry: &AlgorithmRegistry) -> Option<Arc<dyn DigestPrimitive>> {
        registry.get(self.id())
    }
}
