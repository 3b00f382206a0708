//! Domain models for the synthetic dataset

pub mod record;

// Re-exports
pub use record::{TransactionRecord, TxStatus};
