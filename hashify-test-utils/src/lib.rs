//! Test utilities for Hashify
//!
//! This crate provides reference digest vectors and input builders shared by
//! the core tests, the CLI tests and the benchmarks.

pub mod builders;
pub mod vectors;

// Re-export commonly used types
pub use builders::{BatchInput, BatchInputBuilder, LineEnding};
pub use vectors::{KnownVector, expected_digest, known_vectors};
