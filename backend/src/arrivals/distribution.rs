//! Variate mapping from uniform samples to target distributions.
//!
//! Every function here is pure: the same uniform input always produces the same
//! variate. Inputs are clamped to `[UNIFORM_EPSILON, 1 - UNIFORM_EPSILON]` so
//! that `ln(u)` stays finite.

use crate::orchestrator::{ConfigurationError, Violation};
use serde::{Deserialize, Serialize};

/// Clamp margin applied to every uniform before mapping.
pub const UNIFORM_EPSILON: f64 = 1e-9;

/// Clamp a uniform sample into `[ε, 1 − ε]`.
pub fn clamp_unit(u: f64) -> f64 {
    u.clamp(UNIFORM_EPSILON, 1.0 - UNIFORM_EPSILON)
}

/// Exponential variate with the given mean: `−mean · ln(u)`.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::arrivals::distribution::exponential;
///
/// let t = exponential(0.8, 7.0);
/// assert!((t - 1.562).abs() < 1e-3);
/// ```
pub fn exponential(u: f64, mean: f64) -> f64 {
    -mean * clamp_unit(u).ln()
}

/// Uniform variate on `[min, max]`: `min + (max − min) · u`.
///
/// # Errors
/// Returns a `ConfigurationError` when `max <= min`.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::arrivals::distribution::uniform;
///
/// assert!((uniform(0.5, 2.0, 6.0).unwrap() - 4.0).abs() < 1e-9);
/// assert!(uniform(0.5, 6.0, 2.0).is_err());
/// ```
pub fn uniform(u: f64, min: f64, max: f64) -> Result<f64, ConfigurationError> {
    if !(max > min) {
        return Err(ConfigurationError::new(vec![Violation::InvalidRange {
            min,
            max,
        }]));
    }
    Ok(min + (max - min) * clamp_unit(u))
}

/// Normal variate via Box–Muller on a pair of uniforms, truncated at zero.
///
/// `z = sqrt(−2 ln u1) · cos(2π u2)`, result `max(0, z · std_dev + mean)`.
pub fn truncated_normal(u1: f64, u2: f64, mean: f64, std_dev: f64) -> f64 {
    let radius = (-2.0 * clamp_unit(u1).ln()).sqrt();
    let z = radius * (2.0 * std::f64::consts::PI * clamp_unit(u2)).cos();
    (z * std_dev + mean).max(0.0)
}

/// Distribution of service durations when service is sample-driven.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServiceDistribution {
    /// Normal distribution truncated at zero; consumes two uniforms per client
    Normal { mean: f64, std_dev: f64 },

    /// Uniform distribution on `[min, max]`
    Uniform { min: f64, max: f64 },

    /// Exponential distribution with the given mean
    Exponential { mean: f64 },
}

impl ServiceDistribution {
    /// Number of uniforms consumed per client.
    pub fn samples_per_client(&self) -> usize {
        match self {
            ServiceDistribution::Normal { .. } => 2,
            ServiceDistribution::Uniform { .. } | ServiceDistribution::Exponential { .. } => 1,
        }
    }

    /// Map one client's uniforms (exactly `samples_per_client()` of them) to a duration.
    ///
    /// # Errors
    /// Returns `SampleCount` when the slice length is wrong and propagates the
    /// range error of [`uniform`].
    pub fn sample(&self, uniforms: &[f64]) -> Result<f64, ConfigurationError> {
        match (self, uniforms) {
            (ServiceDistribution::Normal { mean, std_dev }, &[u1, u2]) => {
                Ok(truncated_normal(u1, u2, *mean, *std_dev))
            }
            (ServiceDistribution::Uniform { min, max }, &[u]) => uniform(u, *min, *max),
            (ServiceDistribution::Exponential { mean }, &[u]) => Ok(exponential(u, *mean)),
            _ => Err(ConfigurationError::new(vec![Violation::SampleCount {
                expected: self.samples_per_client(),
                got: uniforms.len(),
            }])),
        }
    }

    /// Collect every parameter problem of this distribution.
    pub fn validate(&self, violations: &mut Vec<Violation>) {
        match *self {
            ServiceDistribution::Normal { mean, std_dev } => {
                Violation::require_positive("service mean", mean, violations);
                Violation::require_positive("service std_dev", std_dev, violations);
            }
            ServiceDistribution::Uniform { min, max } => {
                Violation::require_non_negative("service min", min, violations);
                if !(max > min) || !max.is_finite() {
                    violations.push(Violation::InvalidRange { min, max });
                }
            }
            ServiceDistribution::Exponential { mean } => {
                Violation::require_positive("service mean", mean, violations);
            }
        }
    }
}
