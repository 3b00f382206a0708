//! Weighted categorical sampling
//!
//! A [`WeightedSampler`] turns a [`WeightTable`] into independent draws where
//! each label's probability equals its weight divided by the table sum. Four
//! instantiations share one RNG stream per generation run (category, channel,
//! region, failure reason), so reproducibility depends on the order in which
//! the samplers are invoked, not just the seed.

use crate::config::{ConfigError, WeightTable};
use crate::rng::RngManager;

/// Draws labels from a weighted table
///
/// Weights are normalized at construction; each draw consumes exactly one
/// uniform value from the shared RNG stream and selects a label by the
/// linear subtraction scan over the table order.
///
/// # Example
/// ```
/// use txgen_core_rs::{RngManager, WeightTable, WeightedSampler};
///
/// let table = WeightTable::new([("Agent", 0.45), ("App", 0.45), ("Web", 0.10)]);
/// let sampler = WeightedSampler::new("channel", &table).unwrap();
///
/// let mut rng = RngManager::new(42);
/// let label = sampler.sample(&mut rng);
/// assert!(["Agent", "App", "Web"].contains(&label));
/// ```
#[derive(Debug, Clone)]
pub struct WeightedSampler {
    labels: Vec<String>,
    /// Normalized weights, summing to 1.0
    weights: Vec<f64>,
}

impl WeightedSampler {
    /// Build a sampler from a weight table
    ///
    /// `name` identifies the table in validation errors. Fails if the table
    /// is empty, holds a negative or non-finite weight, or sums to zero.
    pub fn new(name: &'static str, table: &WeightTable) -> Result<Self, ConfigError> {
        table.validate(name)?;

        let sum: f64 = table.entries().iter().map(|(_, weight)| weight).sum();
        let labels = table.labels().map(|label| label.to_string()).collect();
        let weights = table
            .entries()
            .iter()
            .map(|(_, weight)| weight / sum)
            .collect();

        Ok(Self { labels, weights })
    }

    /// Draw one label
    ///
    /// Consumes exactly one RNG draw.
    pub fn sample(&self, rng: &mut RngManager) -> &str {
        let mut target = rng.next_f64();

        for (label, weight) in self.labels.iter().zip(&self.weights) {
            target -= weight;
            if target <= 0.0 {
                return label;
            }
        }

        // Floating-point remainder lands on the last label
        self.labels.last().map(String::as_str).unwrap_or_default()
    }

    /// Labels in table order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}
