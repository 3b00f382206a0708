//! Config fingerprinting
//!
//! A generation run is fully determined by its configuration (seed
//! included), so a SHA256 hash of the canonical config serialization
//! identifies the dataset it produces. The CLI logs this hash so
//! reproducibility disputes reduce to comparing fingerprints.

use crate::generator::GeneratorError;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Compute deterministic SHA256 hash of a config
///
/// Uses canonical JSON serialization with sorted keys to ensure
/// deterministic hashing regardless of HashMap iteration order.
pub fn compute_config_hash<T: Serialize>(config: &T) -> Result<String, GeneratorError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(config).map_err(|e| {
        GeneratorError::Serialization(format!("config serialization failed: {}", e))
    })?;

    // Recursively sort all object keys for canonical representation
    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let canonical_value = canonicalize(value);

    let json = serde_json::to_string(&canonical_value).map_err(|e| {
        GeneratorError::Serialization(format!("config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    let result = hasher.finalize();

    Ok(format!("{:x}", result))
}
