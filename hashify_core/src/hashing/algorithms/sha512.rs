//! SHA-512 digest primitive

use crate::hashing::traits::{DigestPrimitive, StreamingHasher};
use sha2::{Digest as Sha2Digest, Sha512};

pub struct Sha512Algorithm;

/// SHA-512 streaming hasher
struct Sha512StreamingHasher {
    hasher: Sha512,
}

impl Sha512StreamingHasher {
    fn new() -> Self {
        Self {
            hasher: Sha512::new(),
        }
    }
}

impl StreamingHasher for Sha512StreamingHasher {
    fn update(&mut self, data: &[u8]) {
        Sha2Digest::update(&mut self.hasher, data);
    }

    fn finalize(self: Box<Self>) -> String {
        format!("{:x}", Sha2Digest::finalize(self.hasher))
    }
}

impl DigestPrimitive for Sha512Algorithm {
    fn id(&self) -> &'static str {
        "sha512"
    }

    fn display_name(&self) -> &'static str {
        "SHA-512"
    }

    fn requires_secure_context(&self) -> bool {
        true
    }

    fn create_hasher(&self) -> Box<dyn StreamingHasher> {
        Box::new(Sha512StreamingHasher::new())
    }
}
