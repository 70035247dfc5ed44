//! Hashify Core Library
//!
//! Salted text digests (MD5, SHA-256, SHA-512), batch hashing, digest
//! comparison and the color fingerprint visualization of a digest.

pub mod batch;
pub mod compare;
pub mod digest;
pub mod error;
pub mod hashing;
pub mod salt;
pub mod visualizer;

// Re-export main types
pub use batch::{BatchEntry, hash_lines};
pub use compare::{Comparison, compare};
pub use digest::{DigestComputer, DigestRequest, SaltPosition, compute, hash_text};
pub use error::{Error, Result};
pub use hashing::{AlgorithmRegistry, HashAlgorithm};
pub use salt::generate_salt;
pub use visualizer::{ColorGrid, Hsl, visualize};
