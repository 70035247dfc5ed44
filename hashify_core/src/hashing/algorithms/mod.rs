//! Digest primitive implementations

use super::registry::AlgorithmRegistry;

mod md5;
mod sha256;
mod sha512;

/// Register all built-in primitives with the registry
pub(crate) fn register_all(registry: &mut AlgorithmRegistry) {
    registry.register(md5::Md5Algorithm);
    registry.register(sha256::Sha256Algorithm);
    registry.register(sha512::Sha512Algorithm);
}
