//! Text digest computation with optional salting
//!
//! The salt is joined to the text before hashing, either in front of it
//! (`prefix`) or after it (`postfix`). The joined string is hashed as UTF-8.
//!
//! An empty joined string always yields an empty digest. No primitive is
//! invoked in that case, so `compute("", SHA256, "", Prefix)` is `""` and not
//! the SHA-256 of the empty input.

use crate::error::{CryptoError, InternalError, ValidationError};
use crate::hashing::{AlgorithmRegistry, HashAlgorithm};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::sync::Arc;

/// Where the salt is placed relative to the text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum SaltPosition {
    /// `salt + text`
    #[default]
    Prefix,
    /// `text + salt`
    Postfix,
}

impl std::fmt::Display for SaltPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SaltPosition::Prefix => write!(f, "prefix"),
            SaltPosition::Postfix => write!(f, "postfix"),
        }
    }
}

impl std::str::FromStr for SaltPosition {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "prefix" => Ok(SaltPosition::Prefix),
            "postfix" | "suffix" => Ok(SaltPosition::Postfix),
            _ => Err(Error::Validation(ValidationError::unknown_salt_position(s))),
        }
    }
}

impl TryFrom<String> for SaltPosition {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

/// A single digest request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DigestRequest {
    pub text: String,
    pub algorithm: HashAlgorithm,
    #[serde(default)]
    pub salt: String,
    #[serde(default)]
    pub salt_position: SaltPosition,
}

impl DigestRequest {
    /// Create an unsalted request
    pub fn new(text: impl Into<String>, algorithm: HashAlgorithm) -> Self {
        Self {
            text: text.into(),
            algorithm,
            salt: String::new(),
            salt_position: SaltPosition::default(),
        }
    }

    /// Attach a salt at the given position
    pub fn with_salt(mut self, salt: impl Into<String>, position: SaltPosition) -> Self {
        self.salt = salt.into();
        self.salt_position = position;
        self
    }

    /// Whether a non-empty salt is attached
    pub fn is_salted(&self) -> bool {
        !self.salt.is_empty()
    }

    /// The exact string that gets digested
    pub fn combined(&self) -> Cow<'_, str> {
        if self.salt.is_empty() {
            return Cow::Borrowed(&self.text);
        }

        match self.salt_position {
            SaltPosition::Prefix => Cow::Owned(format!("{}{}", self.salt, self.text)),
            SaltPosition::Postfix => Cow::Owned(format!("{}{}", self.text, self.salt)),
        }
    }
}

/// Computes salted text digests against a registry of primitives
///
/// The computer holds no per-call state; clones share the same registry.
#[derive(Debug, Clone)]
pub struct DigestComputer {
    registry: Arc<AlgorithmRegistry>,
}

impl DigestComputer {
    /// Create a computer backed by every built-in primitive
    pub fn new() -> Self {
        Self {
            registry: AlgorithmRegistry::global(),
        }
    }

    /// Create a computer backed by a custom registry
    pub fn with_registry(registry: Arc<AlgorithmRegistry>) -> Self {
        Self { registry }
    }

    /// Get the registry this computer draws primitives from
    pub fn registry(&self) -> &AlgorithmRegistry {
        &self.registry
    }

    /// Check whether `algorithm` can be computed here
    pub fn supports(&self, algorithm: HashAlgorithm) -> bool {
        self.registry.contains(algorithm.id())
    }

    /// Compute the lowercase hex digest for `request`
    pub fn compute(&self, request: &DigestRequest) -> Result<String> {
        let algorithm = request.algorithm;
        let combined = request.combined();

        if combined.is_empty() {
            log::trace!("Empty input for {algorithm}, skipping digest");
            return Ok(String::new());
        }

        let primitive = algorithm
            .primitive_in(&self.registry)
            .ok_or_else(|| Self::missing_primitive(algorithm))?;

        let hash = primitive.hash_bytes(combined.as_bytes());
        log::debug!(
            "Computed {} digest over {} bytes (salted: {}, position: {})",
            algorithm.display_name(),
            combined.len(),
            request.is_salted(),
            request.salt_position
        );

        if hash.len() != algorithm.hex_len() {
            return Err(Error::Internal(InternalError::hash_calculation(
                algorithm.display_name(),
                &format!(
                    "expected {} hex characters, got {}",
                    algorithm.hex_len(),
                    hash.len()
                ),
            )));
        }

        Ok(hash)
    }

    fn missing_primitive(algorithm: HashAlgorithm) -> Error {
        if algorithm.requires_secure_context() {
            log::warn!("No secure digest primitive for {algorithm}");
            Error::Crypto(CryptoError::unavailable_primitive(algorithm.id()))
        } else {
            Error::Internal(InternalError::assertion(format!(
                "{} primitive is not registered",
                algorithm.display_name()
            )))
        }
    }
}

impl Default for DigestComputer {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the digest of `text` salted with `salt` at `position`
pub fn compute(
    text: &str,
    algorithm: HashAlgorithm,
    salt: &str,
    position: SaltPosition,
) -> Result<String> {
    DigestComputer::new().compute(&DigestRequest::new(text, algorithm).with_salt(salt, position))
}

/// Compute the unsalted digest of `text`
pub fn hash_text(text: &str, algorithm: HashAlgorithm) -> Result<String> {
    DigestComputer::new().compute(&DigestRequest::new(text, algorithm))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_salt_position_deserializes_case_insensitively() {
        let parsed: SaltPosition = serde_json::from_str("\"Postfix\"").unwrap();
        assert_eq!(parsed, SaltPosition::Postfix);
        assert!(serde_json::from_str::<SaltPosition>("\"middle\"").is_err());
    }

    #[test]
    fn test_empty_input_short_circuits() {
        for algorithm in HashAlgorithm::ALL {
            assert_eq!(hash_text("", algorithm).unwrap(), "");
            assert_eq!(compute("", algorithm, "", SaltPosition::Postfix).unwrap(), "");
        }
    }

    #[test]
    fn test_salt_alone_is_hashed() {
        let salted = compute("", HashAlgorithm::MD5, "hello", SaltPosition::Prefix).unwrap();
        assert_eq!(salted, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_prefix_salt_composition() {
        for algorithm in HashAlgorithm::ALL {
            let salted = compute("bar", algorithm, "foo", SaltPosition::Prefix).unwrap();
            assert_eq!(salted, hash_text("foobar", algorithm).unwrap());
        }
    }

    #[test]
    fn test_postfix_salt_composition() {
        for algorithm in HashAlgorithm::ALL {
            let salted = compute("bar", algorithm, "foo", SaltPosition::Postfix).unwrap();
            assert_eq!(salted, hash_text("barfoo", algorithm).unwrap());
        }
    }

    #[test]
    fn test_non_ascii_input_is_hashed_as_utf8() {
        assert_eq!(
            hash_text("héllo", HashAlgorithm::MD5).unwrap(),
            "be50e8478cf24ff3595bc7307fb91b50"
        );
        assert_eq!(
            hash_text("héllo", HashAlgorithm::SHA256).unwrap(),
            "3c48591d8d098a4538f5e013dfcf406e948eac4d3277b10bf614e295d6068179"
        );
    }

    #[test]
    fn test_insecure_context_rejects_sha_family() {
        let computer = DigestComputer::with_registry(Arc::new(AlgorithmRegistry::insecure_context()));

        for algorithm in [HashAlgorithm::SHA256, HashAlgorithm::SHA512] {
            let err = computer
                .compute(&DigestRequest::new("hello", algorithm))
                .unwrap_err();
            assert!(matches!(
                err,
                Error::Crypto(CryptoError::UnavailableCryptoPrimitive { .. })
            ));
            assert!(err.is_recoverable());
        }
    }

    #[test]
    fn test_insecure_context_still_computes_md5() {
        let computer = DigestComputer::with_registry(Arc::new(AlgorithmRegistry::insecure_context()));
        let hash = computer
            .compute(&DigestRequest::new("hello", HashAlgorithm::MD5))
            .unwrap();

        assert_eq!(hash, "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_insecure_context_short_circuits_before_lookup() {
        let computer = DigestComputer::with_registry(Arc::new(AlgorithmRegistry::insecure_context()));
        let hash = computer
            .compute(&DigestRequest::new("", HashAlgorithm::SHA512))
            .unwrap();

        assert_eq!(hash, "");
    }

    #[test]
    fn test_missing_md5_is_an_internal_error() {
        let computer = DigestComputer::with_registry(Arc::new(AlgorithmRegistry::empty()));
        let err = computer
            .compute(&DigestRequest::new("hello", HashAlgorithm::MD5))
            .unwrap_err();

        assert!(matches!(err, Error::Internal(InternalError::Assertion { .. })));
    }

    #[test]
    fn test_combined_borrows_when_unsalted() {
        let request = DigestRequest::new("text", HashAlgorithm::MD5);
        assert!(matches!(request.combined(), Cow::Borrowed("text")));
        assert!(!request.is_salted());
    }

    #[test]
    fn test_salt_position_parsing() {
        assert_eq!("prefix".parse::<SaltPosition>().unwrap(), SaltPosition::Prefix);
        assert_eq!("POSTFIX".parse::<SaltPosition>().unwrap(), SaltPosition::Postfix);
        assert!("middle".parse::<SaltPosition>().is_err());
        assert_eq!(SaltPosition::default(), SaltPosition::Prefix);
    }

    #[test]
    fn test_request_deserializes_with_defaults() {
        let request: DigestRequest =
            serde_json::from_str(r#"{"text":"abc","algorithm":"sha256"}"#).unwrap();

        assert_eq!(request.salt, "");
        assert_eq!(request.salt_position, SaltPosition::Prefix);
    }

    proptest! {
        #[test]
        fn test_compute_is_deterministic(text in ".*", salt in ".*", postfix: bool) {
            let position = if postfix { SaltPosition::Postfix } else { SaltPosition::Prefix };

            for algorithm in HashAlgorithm::ALL {
                let first = compute(&text, algorithm, &salt, position).unwrap();
                let second = compute(&text, algorithm, &salt, position).unwrap();
                prop_assert_eq!(&first, &second);

                if text.is_empty() && salt.is_empty() {
                    prop_assert_eq!(first.len(), 0);
                } else {
                    prop_assert_eq!(first.len(), algorithm.hex_len());
                }
            }
        }
    }
}
