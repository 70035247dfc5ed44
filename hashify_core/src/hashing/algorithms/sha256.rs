//! SHA-256 digest primitive

use crate::hashing::traits::{DigestPrimitive, StreamingHasher};
use sha2::{Digest as Sha2Digest, Sha256};

pub struct Sha256Algorithm;

/// SHA-256 streaming hasher
struct Sha256StreamingHasher {
    hasher: Sha256,
}

impl Sha256StreamingHasher {
    fn new() -> Self {
        Self {
            hasher: Sha256::new(),
        }
    }
}

impl StreamingHasher for Sha256StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha2Digest::finalize(self.hasher))
    }
}

impl DigestPrimitive for Sha256Algorithm {
    fn id(&self) -> &'static str {
        "sha256"
    }

    fn display_name(&self) -> &'static str {
        "SHA-256"
    }

    fn requires_secure_context(&self) -> bool {
        true
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha256StreamingHasher::new())
    }
}
