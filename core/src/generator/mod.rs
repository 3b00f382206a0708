//! Generator - dataset assembly
//!
//! Validates the configuration, draws every column of the dataset in a fixed
//! order from one seeded RNG stream, and returns the records sorted by date.
//!
//! See `engine.rs` for the full pipeline and `fingerprint.rs` for the
//! deterministic config hash.

pub mod engine;
pub mod fingerprint;

// Re-export main types for convenience
pub use engine::{Generator, GeneratorError};
pub use fingerprint::compute_config_hash;
