//! Configuration fingerprint
//!
//! A SHA-256 digest over the canonical JSON form of a configuration. Every
//! result carries it so that a result set can be matched with the exact
//! configuration that produced it.

use crate::orchestrator::{SimulationConfig, SimulationError};
use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;

/// Compute the hex-encoded SHA-256 of a configuration
///
/// Object keys are sorted recursively so that the hash does not depend on
/// field order.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::orchestrator::{compute_config_hash, Preset};
///
/// let preset = Preset::demo();
/// let hash = compute_config_hash(&preset.config).unwrap();
/// assert_eq!(hash.len(), 64);
/// assert_eq!(hash, compute_config_hash(&preset.config).unwrap());
/// ```
pub fn compute_config_hash(config: &SimulationConfig) -> Result<String, SimulationError> {
    let value = serde_json::to_value(config).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
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

    let json = serde_json::to_string(&canonicalize(value)).map_err(|e| {
        SimulationError::Serialization(format!("Config serialization failed: {}", e))
    })?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}
