//! Side-by-side digest comparison

use crate::Result;
use crate::digest::{DigestComputer, DigestRequest};
use crate::hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Outcome of hashing two inputs with the same algorithm
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comparison {
    pub algorithm: HashAlgorithm,
    pub first_hash: String,
    pub second_hash: String,
    /// `None` while either input is empty
    pub matches: Option<bool>,
}

impl Comparison {
    /// Whether both inputs were present and their digests are equal
    pub fn is_match(&self) -> bool {
        self.matches == Some(true)
    }
}

/// Hash `first` and `second` without salt and compare the digests
pub fn compare(first: &str, second: &str, algorithm: HashAlgorithm) -> Result<Comparison> {
    compare_with(&DigestComputer::new(), first, second, algorithm)
}

/// Compare two inputs using `computer`
pub fn compare_with(
    computer: &DigestComputer,
    first: &str,
    second: &str,
    algorithm: HashAlgorithm,
) -> Result<Comparison> {
    let first_hash = computer.compute(&DigestRequest::new(first, algorithm))?;
    let second_hash = computer.compute(&DigestRequest::new(second, algorithm))?;

    let matches = if first.is_empty() || second.is_empty() {
        None
    } else {
        Some(first_hash == second_hash)
    };

    Ok(Comparison {
        algorithm,
        first_hash,
        second_hash,
        matches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_inputs_match() {
        let comparison = compare("same", "same", HashAlgorithm::SHA256).unwrap();
        assert_eq!(comparison.matches, Some(true));
        assert!(comparison.is_match());
        assert_eq!(comparison.first_hash, comparison.second_hash);
    }

    #[test]
    fn test_different_inputs_do_not_match() {
        let comparison = compare("same", "Same", HashAlgorithm::MD5).unwrap();
        assert_eq!(comparison.matches, Some(false));
        assert!(!comparison.is_match());
    }

    #[test]
    fn test_empty_side_has_no_verdict() {
        let comparison = compare("", "text", HashAlgorithm::SHA512).unwrap();
        assert_eq!(comparison.matches, None);
        assert_eq!(comparison.first_hash, "");
        assert_eq!(comparison.second_hash.len(), 128);

        let both_empty = compare("", "", HashAlgorithm::MD5).unwrap();
        assert_eq!(both_empty.matches, None);
    }
}
