//! Central registry for digest primitives
//!
//! The registry stands in for the host's digest facility. A host that cannot
//! offer secure digests is modelled by a registry without the SHA family.

use super::traits::DigestPrimitive;
use once_cell::sync::OnceCell;
use std::collections::HashMap;
use std::sync::Arc;

/// Registry of the digest primitives available to a `DigestComputer`
pub struct AlgorithmRegistry {
    algorithms: HashMap<&'static str, Arc<dyn DigestPrimitive>>,
}

impl std::fmt::Debug for AlgorithmRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmRegistry")
            .field("algorithms", &self.list())
            .finish()
    }
}

impl AlgorithmRegistry {
    /// Create a new empty registry
    pub fn empty() -> Self {
        Self {
            algorithms: HashMap::new(),
        }
    }

    /// Get the global registry instance with every built-in primitive
    pub fn global() -> Arc<Self> {
        static INSTANCE: OnceCell<Arc<AlgorithmRegistry>> = OnceCell::new();
        INSTANCE
            .get_or_init(|| {
                let mut registry = Self::empty();
                super::algorithms::register_all(&mut registry);
                log::debug!("Initialized digest registry: {:?}", registry.list());
                Arc::new(registry)
            })
            .clone()
    }

    /// Registry for a host without a secure digest facility
    ///
    /// Only primitives that do not require a secure context are registered.
    pub fn insecure_context() -> Self {
        let mut registry = Self::empty();
        super::algorithms::register_all(&mut registry);
        registry
            .algorithms
            .retain(|_, algorithm| !algorithm.requires_secure_context());
        registry
    }

    /// Register a new primitive, replacing any previous one with the same id
    pub fn register(&mut self, algorithm: impl DigestPrimitive + 'static) {
        self.algorithms.insert(algorithm.id(), Arc::new(algorithm));
    }

    /// Get primitive by id
    pub fn get(&self, id: &str) -> Option<Arc<dyn DigestPrimitive>> {
        self.algorithms.get(id).cloned()
    }

    /// Check if a primitive is registered
    pub fn contains(&self, id: &str) -> bool {
        self.algorithms.contains_key(id)
    }

    /// List all registered ids in sorted order
    pub fn list(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.algorithms.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}
