//! Generator configuration
//!
//! All tunables for a generation run live in [`GeneratorConfig`]: the seed,
//! the row count and year span, the four categorical weight tables, and the
//! amount/fee models. The tables that the original tool kept as module-level
//! constants are explicit immutable structures here, so multiple
//! configurations can coexist and be unit-tested independently.
//!
//! Validation is fail-fast: [`GeneratorConfig::validate`] rejects a malformed
//! configuration before any sampling begins (no partial generation).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Errors raised by configuration validation
///
/// All of these are fatal and pre-generation: no output is written.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("rows_total must be > 0")]
    ZeroRows,

    #[error("n_years must be > 0")]
    EmptyYearSpan,

    #[error("{table} weight table is empty")]
    EmptyWeightTable { table: &'static str },

    #[error("{table} weight {weight} for label '{label}' is negative or non-finite")]
    InvalidWeight {
        table: &'static str,
        label: String,
        weight: f64,
    },

    #[error("{table} weights sum to zero")]
    ZeroWeightSum { table: &'static str },

    #[error("failed_rate {0} outside [0, 1]")]
    InvalidFailedRate(f64),

    #[error("amount floor {0} is negative or non-finite")]
    InvalidFloor(f64),

    #[error("amount base std dev {0} is negative or non-finite")]
    InvalidBaseStdDev(f64),

    #[error("user_id range [{min}, {max}) is empty")]
    EmptyUserIdRange { min: u32, max: u32 },

    #[error("fee jitter range [{lo}, {hi}) is invalid")]
    InvalidJitterRange { lo: f64, hi: f64 },

    #[error("fee rate clamp [{min}, {max}] is invalid")]
    InvalidRateClamp { min: f64, max: f64 },

    #[error("fee rate {rate} for channel '{channel}' is negative or non-finite")]
    InvalidFeeRate { channel: String, rate: f64 },

    #[error("category '{0}' has no amount factor")]
    MissingCategoryFactor(String),

    #[error("channel '{0}' has no fee rate")]
    MissingChannelRate(String),

    #[error("calendar year {0} outside supported range")]
    YearOutOfRange(i32),
}

/// An ordered table of (label, weight) pairs for categorical sampling
///
/// Weights need not be pre-normalized; the sampler normalizes them. Entry
/// order is insertion order and is part of the reproducibility contract
/// (it fixes which label a given uniform draw maps to), but carries no
/// other meaning.
///
/// # Example
/// ```
/// use txgen_core_rs::WeightTable;
///
/// let channels = WeightTable::new([("Agent", 0.45), ("App", 0.45), ("Web", 0.10)]);
/// assert_eq!(channels.len(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightTable {
    entries: Vec<(String, f64)>,
}

impl WeightTable {
    /// Build a table from (label, weight) pairs, preserving order
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(label, weight)| (label.into(), weight))
                .collect(),
        }
    }

    /// The (label, weight) pairs in insertion order
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Iterate over the labels in insertion order
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(label, _)| label.as_str())
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Check the table is usable for sampling
    ///
    /// `table` names the table in error messages.
    pub fn validate(&self, table: &'static str) -> Result<(), ConfigError> {
        if self.entries.is_empty() {
            return Err(ConfigError::EmptyWeightTable { table });
        }

        let mut sum = 0.0;
        for (label, weight) in &self.entries {
            if !weight.is_finite() || *weight < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    table,
                    label: label.clone(),
                    weight: *weight,
                });
            }
            sum += weight;
        }

        if sum <= 0.0 {
            return Err(ConfigError::ZeroWeightSum { table });
        }

        Ok(())
    }
}

/// Parameters of the amount synthesis pipeline
///
/// Amounts start from a log-normal base, `exp(normal(base_log_mean,
/// base_log_std))`, then pick up the category, month-seasonality,
/// day-of-week, and year-growth multipliers, and are finally floored and
/// rounded to whole units.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AmountModel {
    /// Mean of the underlying normal (log scale)
    pub base_log_mean: f64,

    /// Std dev of the underlying normal (log scale)
    pub base_log_std: f64,

    /// Relative typical transaction size per category
    pub category_factors: HashMap<String, f64>,

    /// Demand seasonality multiplier, indexed by calendar month - 1
    pub month_season: [f64; 12],

    /// Demand multiplier by weekday, indexed Monday = 0 .. Sunday = 6
    pub weekday_factors: [f64; 7],

    /// Linear year-over-year uplift: factor = 1 + yoy_growth * (year - start_year)
    pub yoy_growth: f64,

    /// Minimum amount after all multipliers (whole units)
    pub floor: f64,
}

/// Parameters of the fee derivation
///
/// The base rate is looked up by channel, jittered per record, clamped to
/// `rate_clamp`, and multiplied by the final amount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeModel {
    /// Base fee rate per channel
    pub channel_rates: HashMap<String, f64>,

    /// Per-record jitter factor drawn uniformly from [lo, hi)
    pub jitter_range: (f64, f64),

    /// Effective rate clamp [min, max] applied after jitter
    pub rate_clamp: (f64, f64),
}

/// Complete generator configuration
///
/// `Default` carries the dashboard dataset's constants: seed 42, six years
/// from 2020, 160 000 rows, 15% failure rate, and the fixed weight and
/// factor tables.
///
/// # Example
/// ```
/// use txgen_core_rs::GeneratorConfig;
///
/// let config = GeneratorConfig::default();
/// assert_eq!(config.rows_total, 160_000);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// RNG seed for deterministic generation
    pub seed: u64,

    /// First calendar year of the date span (inclusive)
    pub start_year: i32,

    /// Number of years in the date span
    pub n_years: u32,

    /// Total number of records to generate
    pub rows_total: usize,

    /// Probability that a record's status is FAILED
    pub failed_rate: f64,

    /// Half-open range [min, max) that user ids are drawn from
    pub user_id_range: (u32, u32),

    /// Category weight table
    pub categories: WeightTable,

    /// Channel weight table
    pub channels: WeightTable,

    /// Region weight table
    pub regions: WeightTable,

    /// Failure-reason weight table (used for FAILED records only)
    pub failure_reasons: WeightTable,

    /// Amount synthesis parameters
    pub amount_model: AmountModel,

    /// Fee derivation parameters
    pub fee_model: FeeModel,
}

impl GeneratorConfig {
    /// Validate the configuration
    ///
    /// Called by the generator before any sampling; a failure here means
    /// no output is ever written for this invocation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_total == 0 {
            return Err(ConfigError::ZeroRows);
        }

        if self.n_years == 0 {
            return Err(ConfigError::EmptyYearSpan);
        }

        if !self.failed_rate.is_finite() || !(0.0..=1.0).contains(&self.failed_rate) {
            return Err(ConfigError::InvalidFailedRate(self.failed_rate));
        }

        let (uid_min, uid_max) = self.user_id_range;
        if uid_min >= uid_max {
            return Err(ConfigError::EmptyUserIdRange {
                min: uid_min,
                max: uid_max,
            });
        }

        self.categories.validate("category")?;
        self.channels.validate("channel")?;
        self.regions.validate("region")?;
        self.failure_reasons.validate("failure_reason")?;

        let amount = &self.amount_model;
        if !amount.floor.is_finite() || amount.floor < 0.0 {
            return Err(ConfigError::InvalidFloor(amount.floor));
        }
        if !amount.base_log_std.is_finite() || amount.base_log_std < 0.0 {
            return Err(ConfigError::InvalidBaseStdDev(amount.base_log_std));
        }

        // Every sampleable category must have an amount factor
        for label in self.categories.labels() {
            if !amount.category_factors.contains_key(label) {
                return Err(ConfigError::MissingCategoryFactor(label.to_string()));
            }
        }

        let fees = &self.fee_model;
        let (jitter_lo, jitter_hi) = fees.jitter_range;
        if !jitter_lo.is_finite() || !jitter_hi.is_finite() || jitter_lo > jitter_hi {
            return Err(ConfigError::InvalidJitterRange {
                lo: jitter_lo,
                hi: jitter_hi,
            });
        }

        let (clamp_min, clamp_max) = fees.rate_clamp;
        if !clamp_min.is_finite() || !clamp_max.is_finite() || clamp_min < 0.0 || clamp_min > clamp_max
        {
            return Err(ConfigError::InvalidRateClamp {
                min: clamp_min,
                max: clamp_max,
            });
        }

        // Every sampleable channel must have a non-negative fee rate
        for label in self.channels.labels() {
            match fees.channel_rates.get(label) {
                None => return Err(ConfigError::MissingChannelRate(label.to_string())),
                Some(rate) if !rate.is_finite() || *rate < 0.0 => {
                    return Err(ConfigError::InvalidFeeRate {
                        channel: label.to_string(),
                        rate: *rate,
                    });
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Last calendar year of the date span (inclusive)
    pub fn end_year(&self) -> i32 {
        self.start_year + self.n_years as i32 - 1
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let category_factors = HashMap::from([
            ("Airtime".to_string(), 1.00),
            ("Data Bundle".to_string(), 1.10),
            ("Electricity Prepaid".to_string(), 0.95),
            ("Water Utility".to_string(), 0.90),
            ("Postpaid Bills".to_string(), 0.92),
            ("Micro-Insurance".to_string(), 0.70),
        ]);

        let channel_rates = HashMap::from([
            ("Agent".to_string(), 0.020),
            ("App".to_string(), 0.028),
            ("Web".to_string(), 0.024),
        ]);

        Self {
            seed: 42,
            start_year: 2020,
            n_years: 6,
            rows_total: 160_000,
            failed_rate: 0.15,
            user_id_range: (10_000, 19_999),
            categories: WeightTable::new([
                ("Airtime", 0.30),
                ("Data Bundle", 0.25),
                ("Electricity Prepaid", 0.15),
                ("Water Utility", 0.10),
                ("Postpaid Bills", 0.10),
                ("Micro-Insurance", 0.10),
            ]),
            channels: WeightTable::new([("Agent", 0.45), ("App", 0.45), ("Web", 0.10)]),
            regions: WeightTable::new([
                ("Zone 1", 0.15),
                ("Zone 2", 0.15),
                ("Zone 3", 0.14),
                ("Zone 4", 0.14),
                ("Zone 5", 0.14),
                ("Zone 6", 0.14),
                ("Unmapped", 0.14 / 6.0),
            ]),
            failure_reasons: WeightTable::new([
                ("Network Timeout", 0.50),
                ("Exceeded Limit", 0.20),
                ("Provider Unreachable", 0.15),
                ("Invalid Account Number", 0.10),
                ("Insufficient Balance", 0.04),
                ("Fraud Suspected", 0.01),
            ]),
            amount_model: AmountModel {
                base_log_mean: 10.2,
                base_log_std: 0.9,
                category_factors,
                // Elevated in Mar-Apr and Dec
                month_season: [
                    0.95, 0.93, 1.08, 1.10, 1.02, 1.00, 1.04, 1.06, 1.05, 1.02, 1.06, 1.15,
                ],
                // Weekend slightly lower
                weekday_factors: [1.00, 1.00, 1.01, 1.01, 1.02, 0.95, 0.94],
                yoy_growth: 0.07,
                floor: 5_000.0,
            },
            fee_model: FeeModel {
                channel_rates,
                jitter_range: (0.9, 1.1),
                rate_clamp: (0.005, 0.08),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_default_config_end_year() {
        let config = GeneratorConfig::default();
        assert_eq!(config.end_year(), 2025);
    }

    #[test]
    fn test_weight_table_preserves_order() {
        let table = WeightTable::new([("b", 2.0), ("a", 1.0), ("c", 3.0)]);
        let labels: Vec<&str> = table.labels().collect();
        assert_eq!(labels, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_weight_table_rejects_negative_weight() {
        let table = WeightTable::new([("ok", 1.0), ("bad", -0.5)]);
        assert_eq!(
            table.validate("category"),
            Err(ConfigError::InvalidWeight {
                table: "category",
                label: "bad".to_string(),
                weight: -0.5,
            })
        );
    }

    #[test]
    fn test_weight_table_rejects_zero_sum() {
        let table = WeightTable::new([("a", 0.0), ("b", 0.0)]);
        assert_eq!(
            table.validate("region"),
            Err(ConfigError::ZeroWeightSum { table: "region" })
        );
    }
}
