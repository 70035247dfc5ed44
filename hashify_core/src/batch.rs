//! Line-oriented batch hashing

use crate::Result;
use crate::digest::{DigestComputer, DigestRequest};
use crate::hashing::HashAlgorithm;
use serde::{Deserialize, Serialize};

/// Digest of one input line
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based position among the kept (non-blank) lines
    pub line: usize,
    pub input: String,
    pub hash: String,
}

/// Split `content` into hashable lines
///
/// Lines end at `\n` or `\r\n`. Lines that are blank after trimming are
/// dropped; kept lines are returned untrimmed.
pub fn split_lines(content: &str) -> Vec<&str> {
    content
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.trim().is_empty())
        .collect()
}

/// Hash every non-blank line of `content` without salt
pub fn hash_lines(content: &str, algorithm: HashAlgorithm) -> Result<Vec<BatchEntry>> {
    hash_lines_with(&DigestComputer::new(), content, algorithm)
}

/// Hash every non-blank line of `content` using `computer`
///
/// The first failing line aborts the batch.
pub fn hash_lines_with(
    computer: &DigestComputer,
    content: &str,
    algorithm: HashAlgorithm,
) -> Result<Vec<BatchEntry>> {
    let entries = split_lines(content)
        .into_iter()
        .enumerate()
        .map(|(index, line)| {
            let hash = computer.compute(&DigestRequest::new(line, algorithm))?;
            Ok(BatchEntry {
                line: index + 1,
                input: line.to_string(),
                hash,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    log::debug!("Hashed {} lines with {algorithm}", entries.len());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::digest::hash_text;
    use crate::hashing::AlgorithmRegistry;
    use std::sync::Arc;

    #[test]
    fn test_blank_lines_are_dropped_and_renumbered() {
        let entries = hash_lines("alpha\n\n   \nbeta\n", HashAlgorithm::MD5).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].line, 1);
        assert_eq!(entries[0].input, "alpha");
        assert_eq!(entries[1].line, 2);
        assert_eq!(entries[1].input, "beta");
    }

    #[test]
    fn test_crlf_line_endings() {
        let entries = hash_lines("hello\r\nworld\r\n", HashAlgorithm::SHA256).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].input, "hello");
        assert_eq!(
            entries[0].hash,
            "2cf24dba5fb0a30e26e83b2ac5b9e29e1b161e5c1fa7425e73043362938b9824"
        );
    }

    #[test]
    fn test_lines_are_hashed_untrimmed() {
        let entries = hash_lines("  padded  ", HashAlgorithm::MD5).unwrap();

        assert_eq!(entries[0].input, "  padded  ");
        assert_eq!(
            entries[0].hash,
            hash_text("  padded  ", HashAlgorithm::MD5).unwrap()
        );
    }

    #[test]
    fn test_empty_content() {
        assert!(hash_lines("", HashAlgorithm::SHA512).unwrap().is_empty());
        assert!(hash_lines("\n\r\n\n", HashAlgorithm::SHA512).unwrap().is_empty());
    }

    #[test]
    fn test_unavailable_primitive_aborts_batch() {
        let computer = DigestComputer::with_registry(Arc::new(AlgorithmRegistry::insecure_context()));
        let result = hash_lines_with(&computer, "a\nb", HashAlgorithm::SHA256);

        assert!(matches!(result, Err(Error::Crypto(_))));
    }
}
