//! Synthetic Transaction Dataset Generator - Core
//!
//! Produces a reproducible tabular dataset of transaction records spanning a
//! multi-year date range: weighted categorical labels, seasonally and
//! trend-adjusted amounts, derived fees, and a success/failure outcome with
//! failure-cause attribution. The dataset feeds an external analytics
//! dashboard that reads the exported CSV.
//!
//! # Architecture
//!
//! - **config**: All tunables as explicit immutable structures, fail-fast validation
//! - **rng**: Deterministic random number generation (single shared stream)
//! - **calendar**: Date axis construction and period field derivation
//! - **sampling**: Weighted categorical sampling
//! - **models**: The record type and status literals
//! - **generator**: The batch generation engine and config fingerprint
//! - **export**: Flat CSV export
//!
//! # Critical Invariants
//!
//! 1. Same seed + same config → byte-identical output
//! 2. All randomness flows through one seeded RNG in a fixed draw order
//! 3. A malformed config fails before any sampling; generation is all-or-nothing

// Module declarations
pub mod calendar;
pub mod config;
pub mod export;
pub mod generator;
pub mod models;
pub mod rng;
pub mod sampling;

// Re-exports for convenience
pub use calendar::{period_fields, DateAxis, PeriodFields};
pub use config::{AmountModel, ConfigError, FeeModel, GeneratorConfig, WeightTable};
pub use export::{export_csv, write_csv};
pub use generator::{compute_config_hash, Generator, GeneratorError};
pub use models::{TransactionRecord, TxStatus};
pub use rng::RngManager;
pub use sampling::WeightedSampler;
