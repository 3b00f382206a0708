//! Transaction record model
//!
//! One row of the generated dataset. Field order matters: the CSV exporter
//! derives the header row and column order from this struct, and the
//! external consumer contract fixes the column order as
//! `date, category, channel, region, user_id, amount, fee_amount, status,
//! failure_reason, year, month, week, quarter`.
//!
//! CRITICAL: `amount` is whole units (i64); `fee_amount` carries up to two
//! decimal places.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a transaction
///
/// Serializes to the exact literals the dashboard matches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TxStatus {
    /// Transaction completed
    #[serde(rename = "SUCCESS")]
    Success,

    /// Transaction failed; the record carries a failure reason
    #[serde(rename = "FAILED")]
    Failed,
}

/// One synthetic transaction row
///
/// Invariants (enforced by the generator, checked in tests):
/// - `amount` >= the configured floor
/// - `fee_amount / amount` lies within the configured rate clamp
/// - `failure_reason` is empty iff `status` is [`TxStatus::Success`]
/// - `year`/`month`/`week`/`quarter` are pure functions of `date`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// Transaction date (ISO `YYYY-MM-DD` in the export)
    pub date: NaiveDate,

    /// Product category label
    pub category: String,

    /// Sales channel label
    pub channel: String,

    /// Region label
    pub region: String,

    /// Sampled user id; reused across records, not unique per row
    pub user_id: u32,

    /// Transaction amount in whole units
    pub amount: i64,

    /// Fee charged on the transaction, rounded to 2 decimal places
    pub fee_amount: f64,

    /// SUCCESS or FAILED
    pub status: TxStatus,

    /// Failure cause for FAILED records, empty string otherwise (never null)
    pub failure_reason: String,

    /// Calendar year of `date`
    pub year: i32,

    /// Calendar month of `date`, 1-12
    pub month: u32,

    /// ISO-8601 week number of `date`
    pub week: u32,

    /// Calendar quarter of `date`, 1-4
    pub quarter: u32,
}

impl TransactionRecord {
    /// Whether the status/failure-reason pairing is consistent
    pub fn outcome_consistent(&self) -> bool {
        match self.status {
            TxStatus::Success => self.failure_reason.is_empty(),
            TxStatus::Failed => !self.failure_reason.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serializes_to_exact_literals() {
        assert_eq!(
            serde_json::to_string(&TxStatus::Success).unwrap(),
            "\"SUCCESS\""
        );
        assert_eq!(
            serde_json::to_string(&TxStatus::Failed).unwrap(),
            "\"FAILED\""
        );
    }

    #[test]
    fn test_outcome_consistency() {
        let mut record = TransactionRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 15).unwrap(),
            category: "Airtime".to_string(),
            channel: "App".to_string(),
            region: "Zone 1".to_string(),
            user_id: 10_500,
            amount: 27_000,
            fee_amount: 756.0,
            status: TxStatus::Success,
            failure_reason: String::new(),
            year: 2024,
            month: 3,
            week: 11,
            quarter: 1,
        };
        assert!(record.outcome_consistent());

        record.status = TxStatus::Failed;
        assert!(!record.outcome_consistent());

        record.failure_reason = "Network Timeout".to_string();
        assert!(record.outcome_consistent());
    }
}
