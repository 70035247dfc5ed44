//! Hashify CLI library
//!
//! Everything the `hashify` binary needs beyond argument parsing: layered
//! configuration, the hash history store, output formatting and fingerprint
//! rendering.

pub mod config;
pub mod error;
pub mod fingerprint;
pub mod history;
pub mod output;
pub mod paths;
pub mod record;
pub mod terminal;
