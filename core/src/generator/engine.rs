//! Generation engine
//!
//! Composes the date axis, the four weighted samplers, the amount and fee
//! models, and the outcome assignment into one batch run.
//!
//! # Critical Invariants
//!
//! 1. **Determinism**: same seed + same config → identical record set
//! 2. **Fixed draw order**: columns are drawn in batches (dates, category,
//!    channel, region, user_id, amount base, fee jitter, outcome, failure
//!    reason); reordering the batches changes output for a given seed
//! 3. **All-or-nothing**: a malformed config aborts before any sampling
//!
//! # Example
//! ```
//! use txgen_core_rs::{Generator, GeneratorConfig};
//!
//! let mut config = GeneratorConfig::default();
//! config.rows_total = 500;
//!
//! let generator = Generator::new(config).unwrap();
//! let records = generator.generate().unwrap();
//! assert_eq!(records.len(), 500);
//! ```

use crate::calendar::{period_fields, DateAxis};
use crate::config::{ConfigError, GeneratorConfig};
use crate::models::{TransactionRecord, TxStatus};
use crate::rng::RngManager;
use crate::sampling::WeightedSampler;
use chrono::{Datelike, NaiveDate};
use thiserror::Error;
use tracing::{debug, info};

/// Errors raised by a generation run
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// Configuration rejected before any sampling (fatal, no output written)
    #[error("invalid config: {0}")]
    InvalidConfig(#[from] ConfigError),

    /// Output path or write failure (fatal, post-generation)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or write failure
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Config fingerprint serialization failure
    #[error("serialization failed: {0}")]
    Serialization(String),
}

/// Synthetic transaction dataset generator
///
/// Construction validates the configuration; [`Generator::generate`] then
/// produces the full record set in one deterministic batch.
pub struct Generator {
    config: GeneratorConfig,
}

impl Generator {
    /// Create a generator, validating the configuration first
    ///
    /// # Errors
    /// Returns [`GeneratorError::InvalidConfig`] for zero rows, an empty
    /// year span, empty or malformed weight tables, or inconsistent
    /// amount/fee parameters.
    pub fn new(config: GeneratorConfig) -> Result<Self, GeneratorError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The validated configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate the full record set
    ///
    /// Returns `config.rows_total` records sorted by ascending date, ties
    /// keeping original draw order.
    pub fn generate(&self) -> Result<Vec<TransactionRecord>, GeneratorError> {
        let config = &self.config;
        let mut rng = RngManager::new(config.seed);

        let axis = DateAxis::build(config.start_year, config.n_years)?;

        let category_sampler = WeightedSampler::new("category", &config.categories)?;
        let channel_sampler = WeightedSampler::new("channel", &config.channels)?;
        let region_sampler = WeightedSampler::new("region", &config.regions)?;
        let reason_sampler = WeightedSampler::new("failure_reason", &config.failure_reasons)?;

        let n = config.rows_total;
        info!(
            rows = n,
            start = %axis.first(),
            end = %axis.last(),
            seed = config.seed,
            "generating dataset"
        );

        // Draw order is part of the reproducibility contract: one column
        // batch at a time, all from the single shared stream.
        let dates: Vec<NaiveDate> = (0..n).map(|_| axis.sample(&mut rng)).collect();

        let categories: Vec<String> = (0..n)
            .map(|_| category_sampler.sample(&mut rng).to_string())
            .collect();
        let channels: Vec<String> = (0..n)
            .map(|_| channel_sampler.sample(&mut rng).to_string())
            .collect();
        let regions: Vec<String> = (0..n)
            .map(|_| region_sampler.sample(&mut rng).to_string())
            .collect();

        let (uid_min, uid_max) = config.user_id_range;
        let user_ids: Vec<u32> = (0..n)
            .map(|_| rng.range(uid_min as i64, uid_max as i64) as u32)
            .collect();

        let amounts = self.synthesize_amounts(&dates, &categories, &mut rng);
        let fees = self.derive_fees(&amounts, &channels, &mut rng);

        let statuses: Vec<TxStatus> = (0..n)
            .map(|_| {
                if rng.next_f64() < config.failed_rate {
                    TxStatus::Failed
                } else {
                    TxStatus::Success
                }
            })
            .collect();

        // One failure-reason draw per FAILED row, in row order
        let reasons: Vec<String> = statuses
            .iter()
            .map(|status| match status {
                TxStatus::Failed => reason_sampler.sample(&mut rng).to_string(),
                TxStatus::Success => String::new(),
            })
            .collect();

        let mut records = Vec::with_capacity(n);
        for i in 0..n {
            let date = dates[i];
            let periods = period_fields(date);
            records.push(TransactionRecord {
                date,
                category: categories[i].clone(),
                channel: channels[i].clone(),
                region: regions[i].clone(),
                user_id: user_ids[i],
                amount: amounts[i],
                fee_amount: fees[i],
                status: statuses[i],
                failure_reason: reasons[i].clone(),
                year: periods.year,
                month: periods.month,
                week: periods.week,
                quarter: periods.quarter,
            });
        }

        // Stable sort: equal dates keep draw order
        records.sort_by_key(|record| record.date);

        debug!(rows = records.len(), "dataset assembled");
        Ok(records)
    }

    /// Amount pipeline: log-normal base times category, month-seasonality,
    /// day-of-week, and year-growth factors, floored and rounded to whole
    /// units
    ///
    /// Consumes two RNG draws per record (Box-Muller).
    fn synthesize_amounts(
        &self,
        dates: &[NaiveDate],
        categories: &[String],
        rng: &mut RngManager,
    ) -> Vec<i64> {
        let model = &self.config.amount_model;

        let bases: Vec<f64> = (0..dates.len())
            .map(|_| rng.normal(model.base_log_mean, model.base_log_std).exp())
            .collect();

        dates
            .iter()
            .zip(categories)
            .zip(bases)
            .map(|((date, category), base)| {
                let category_factor = model
                    .category_factors
                    .get(category.as_str())
                    .copied()
                    .unwrap_or(1.0);
                let month_factor = model.month_season[date.month() as usize - 1];
                let weekday_factor =
                    model.weekday_factors[date.weekday().num_days_from_monday() as usize];
                let growth =
                    1.0 + model.yoy_growth * (date.year() - self.config.start_year) as f64;

                let raw = base * category_factor * month_factor * weekday_factor * growth;
                raw.max(model.floor).round() as i64
            })
            .collect()
    }

    /// Fee pipeline: channel base rate times per-record jitter, clamped,
    /// applied to the final amount, rounded to 2 decimal places
    ///
    /// Consumes one RNG draw per record.
    fn derive_fees(&self, amounts: &[i64], channels: &[String], rng: &mut RngManager) -> Vec<f64> {
        let model = &self.config.fee_model;
        let (jitter_lo, jitter_hi) = model.jitter_range;
        let (clamp_min, clamp_max) = model.rate_clamp;

        amounts
            .iter()
            .zip(channels)
            .map(|(amount, channel)| {
                let base_rate = model.channel_rates.get(channel.as_str()).copied().unwrap_or(0.0);
                let rate = (base_rate * rng.uniform(jitter_lo, jitter_hi)).clamp(clamp_min, clamp_max);
                round2(*amount as f64 * rate)
            })
            .collect()
    }
}

/// Round to 2 decimal places
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(1.0 / 3.0), 0.33);
        assert_eq!(round2(0.126), 0.13);
        assert_eq!(round2(100.0), 100.0);
    }

    #[test]
    fn test_invalid_config_rejected_at_construction() {
        let mut config = GeneratorConfig::default();
        config.rows_total = 0;
        assert!(matches!(
            Generator::new(config),
            Err(GeneratorError::InvalidConfig(ConfigError::ZeroRows))
        ));
    }

    #[test]
    fn test_small_run_sorted_and_complete() {
        let mut config = GeneratorConfig::default();
        config.rows_total = 1_000;

        let records = Generator::new(config).unwrap().generate().unwrap();
        assert_eq!(records.len(), 1_000);
        assert!(records.windows(2).all(|pair| pair[0].date <= pair[1].date));
    }
}
