//! Core traits for digest primitives

/// Core trait that all digest primitives must implement
pub trait DigestPrimitive: Send + Sync {
    /// Unique identifier, matches `HashAlgorithm::id`
    fn id(&self) -> &'static str;

    /// Display name for user interfaces
    fn display_name(&self) -> &'static str;

    /// Whether the host must offer a secure digest facility for this primitive
    fn requires_secure_context(&self) -> bool;

    /// Create a new streaming hasher instance
    fn create_hasher(&self) -> Box<dyn StreamingHasher>;

    /// Calculate the lowercase hex digest of in-memory data
    fn hash_bytes(&self, data: &[u8]) -> String {
        let mut hasher = self.create_hasher();
        hasher.update(data);
        hasher.finalize()
    }
}

/// Trait for streaming hash calculation
pub trait StreamingHasher: Send {
    /// Update the hasher with new data
    fn update(&mut self, data: &[u8]);

    /// Finalize the hash calculation and return the lowercase hex digest
    fn finalize(self: Box<Self>) -> String;
}
