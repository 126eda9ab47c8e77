//! Client generation from uniform samples or fixed values.
//!
//! This module builds the complete, ordered client list before the event loop
//! starts. Each client gets an absolute arrival time, a service duration and a
//! priority class.
//!
//! # Key Principles
//!
//! 1. **Determinism**: Same config + same samples → same clients
//! 2. **Leniency with disclosure**: sample arrays are resized to the exact
//!    required length; padding is always reported as a `SampleWarning`
//! 3. **Complete validation**: every malformed value is reported, not just the first
//!
//! # Example
//!
//! ```
//! use queue_simulator_core_rs::arrivals::{ClientGenerator, SampleSet, ServiceDistribution};
//! use queue_simulator_core_rs::orchestrator::{ArrivalConfig, ServiceConfig, SimulationConfig};
//!
//! let config = SimulationConfig {
//!     client_count: 2,
//!     server_count: 1,
//!     arrivals: ArrivalConfig::Sampled { mean: 7.0 },
//!     service: ServiceConfig::Sampled {
//!         distribution: ServiceDistribution::Uniform { min: 2.0, max: 6.0 },
//!     },
//!     vip: None,
//! };
//! let samples = SampleSet::supplied(vec![0.8, 0.3], vec![0.5, 0.7], vec![]);
//!
//! let generated = ClientGenerator::new(&config).generate(&samples).unwrap();
//! assert_eq!(generated.clients.len(), 2);
//! assert!(generated.warnings.is_empty());
//! ```

pub mod distribution;

pub use distribution::ServiceDistribution;

use crate::models::{Client, PriorityClass};
use crate::orchestrator::{
    ArrivalConfig, ConfigurationError, ServiceConfig, SimulationConfig, Violation,
};
use crate::rng::RngManager;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Value used for missing samples
pub const PADDING_VALUE: f64 = 0.5;

/// Independent stream of uniform samples
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SampleAxis {
    /// Inter-arrival times
    Arrivals,
    /// Service durations
    Service,
    /// VIP classification
    Vip,
}

impl SampleAxis {
    pub const ALL: [SampleAxis; 3] = [SampleAxis::Arrivals, SampleAxis::Service, SampleAxis::Vip];
}

impl fmt::Display for SampleAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleAxis::Arrivals => "arrivals",
            SampleAxis::Service => "service",
            SampleAxis::Vip => "vip",
        })
    }
}

/// Where the uniforms of one axis come from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "source", content = "value", rename_all = "snake_case")]
pub enum SampleSource {
    /// Caller-provided uniforms in (0, 1)
    Supplied(Vec<f64>),

    /// Drawn from a seeded `RngManager` (reproducible)
    Seeded(u64),

    /// Drawn from an entropy-seeded `RngManager` (NOT reproducible)
    Entropy,
}

impl Default for SampleSource {
    fn default() -> Self {
        SampleSource::Supplied(Vec::new())
    }
}

/// Uniform sample sources for every axis of a run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SampleSet {
    #[serde(default)]
    pub arrivals: SampleSource,
    #[serde(default)]
    pub service: SampleSource,
    #[serde(default)]
    pub vip: SampleSource,
}

impl SampleSet {
    /// Caller-provided arrays on every axis
    pub fn supplied(arrivals: Vec<f64>, service: Vec<f64>, vip: Vec<f64>) -> Self {
        Self {
            arrivals: SampleSource::Supplied(arrivals),
            service: SampleSource::Supplied(service),
            vip: SampleSource::Supplied(vip),
        }
    }

    /// Reproducible draws; each axis gets its own stream derived from `seed`
    pub fn seeded(seed: u64) -> Self {
        Self {
            arrivals: SampleSource::Seeded(seed),
            service: SampleSource::Seeded(seed.wrapping_add(1)),
            vip: SampleSource::Seeded(seed.wrapping_add(2)),
        }
    }

    /// Non-reproducible draws on every axis
    pub fn entropy() -> Self {
        Self {
            arrivals: SampleSource::Entropy,
            service: SampleSource::Entropy,
            vip: SampleSource::Entropy,
        }
    }

    pub fn source(&self, axis: SampleAxis) -> &SampleSource {
        match axis {
            SampleAxis::Arrivals => &self.arrivals,
            SampleAxis::Service => &self.service,
            SampleAxis::Vip => &self.vip,
        }
    }

    /// False when any axis draws from entropy
    pub fn is_reproducible(&self) -> bool {
        SampleAxis::ALL
            .iter()
            .all(|axis| !matches!(self.source(*axis), SampleSource::Entropy))
    }
}

/// Leniency outcome of resizing a supplied sample array
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SampleWarning {
    /// Fewer samples than required; missing entries set to `PADDING_VALUE`
    Padded {
        axis: SampleAxis,
        supplied: usize,
        required: usize,
    },

    /// More samples than required; extras ignored
    Truncated {
        axis: SampleAxis,
        supplied: usize,
        required: usize,
    },
}

impl fmt::Display for SampleWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SampleWarning::Padded {
                axis,
                supplied,
                required,
            } => write!(
                f,
                "{axis}: {supplied} sample(s) supplied, {required} required; padded with {PADDING_VALUE}"
            ),
            SampleWarning::Truncated {
                axis,
                supplied,
                required,
            } => write!(
                f,
                "{axis}: {supplied} sample(s) supplied, {required} required; extras ignored"
            ),
        }
    }
}

/// Resize `samples` to exactly `required` entries
///
/// # Example
/// ```
/// use queue_simulator_core_rs::arrivals::{resize_samples, SampleAxis, SampleWarning};
///
/// let (resized, warning) = resize_samples(&[0.1], 3, SampleAxis::Vip);
/// assert_eq!(resized, vec![0.1, 0.5, 0.5]);
/// assert!(matches!(warning, Some(SampleWarning::Padded { supplied: 1, required: 3, .. })));
/// ```
pub fn resize_samples(
    samples: &[f64],
    required: usize,
    axis: SampleAxis,
) -> (Vec<f64>, Option<SampleWarning>) {
    let supplied = samples.len();
    let mut resized: Vec<f64> = samples.iter().take(required).copied().collect();
    resized.resize(required, PADDING_VALUE);

    let warning = if supplied < required {
        Some(SampleWarning::Padded {
            axis,
            supplied,
            required,
        })
    } else if supplied > required {
        Some(SampleWarning::Truncated {
            axis,
            supplied,
            required,
        })
    } else {
        None
    };

    (resized, warning)
}

/// Output of client generation
#[derive(Debug, Clone)]
pub struct GeneratedClients {
    /// Clients in id order (ids 1..=n)
    pub clients: Vec<Client>,

    /// Resizing outcomes of supplied sample arrays
    pub warnings: Vec<SampleWarning>,
}

/// Builds the client list of a run
pub struct ClientGenerator<'a> {
    config: &'a SimulationConfig,
}

impl<'a> ClientGenerator<'a> {
    pub fn new(config: &'a SimulationConfig) -> Self {
        Self { config }
    }

    /// Validate the configuration and samples, then generate all clients.
    ///
    /// # Errors
    /// Returns a `ConfigurationError` listing every configuration violation and
    /// every malformed sample (NaN or outside (0, 1)).
    pub fn generate(&self, samples: &SampleSet) -> Result<GeneratedClients, ConfigurationError> {
        let mut violations = self.config.validate();
        let mut warnings = Vec::new();

        let arrivals = self.resolve(SampleAxis::Arrivals, samples, &mut violations, &mut warnings);
        let service = self.resolve(SampleAxis::Service, samples, &mut violations, &mut warnings);
        let vip = self.resolve(SampleAxis::Vip, samples, &mut violations, &mut warnings);

        if !violations.is_empty() {
            return Err(ConfigurationError::new(violations));
        }

        let per_client_service = self.config.samples_per_client(SampleAxis::Service);
        let mut clients = Vec::with_capacity(self.config.client_count);
        let mut arrival_time = 0.0;

        for index in 0..self.config.client_count {
            arrival_time = match self.config.arrivals {
                ArrivalConfig::Sampled { mean } => {
                    arrival_time + distribution::exponential(arrivals[index], mean)
                }
                ArrivalConfig::Fixed {
                    initial_arrival,
                    interval,
                } => {
                    if index == 0 {
                        initial_arrival
                    } else {
                        arrival_time + interval
                    }
                }
            };

            let service_duration = match &self.config.service {
                ServiceConfig::Sampled { distribution } => {
                    let start = index * per_client_service;
                    distribution.sample(&service[start..start + per_client_service])?
                }
                ServiceConfig::Fixed { duration } => *duration,
            };

            let class = match self.config.vip {
                Some(vip_config) if vip[index] < vip_config.fraction => PriorityClass::Vip,
                _ => PriorityClass::Regular,
            };

            clients.push(Client::new(index + 1, arrival_time, service_duration).with_class(class));
        }

        Ok(GeneratedClients { clients, warnings })
    }

    /// Produce the exact-length uniform array of one axis
    fn resolve(
        &self,
        axis: SampleAxis,
        samples: &SampleSet,
        violations: &mut Vec<Violation>,
        warnings: &mut Vec<SampleWarning>,
    ) -> Vec<f64> {
        // An oversized client count is already reported by `validate`.
        if self.config.client_count > SimulationConfig::MAX_CLIENTS {
            return Vec::new();
        }
        let required = match self.config.required_samples(axis) {
            Some(required) if required > 0 => required,
            _ => return Vec::new(),
        };

        match samples.source(axis) {
            SampleSource::Supplied(values) => {
                let (resized, warning) = resize_samples(values, required, axis);
                if let Some(warning) = warning {
                    let supplied = values.len();
                    match warning {
                        SampleWarning::Padded { .. } => {
                            tracing::warn!(%axis, supplied, required, "sample array padded")
                        }
                        SampleWarning::Truncated { .. } => {
                            tracing::debug!(%axis, supplied, required, "sample array truncated")
                        }
                    }
                    warnings.push(warning);
                }

                let per_client = self.config.samples_per_client(axis);
                for (position, value) in resized.iter().enumerate() {
                    if !(*value > 0.0 && *value < 1.0) {
                        violations.push(Violation::MalformedSample {
                            axis,
                            client: position / per_client + 1,
                            position: position + 1,
                            value: *value,
                        });
                    }
                }
                resized
            }
            SampleSource::Seeded(seed) => RngManager::new(*seed).uniforms(required),
            SampleSource::Entropy => {
                tracing::debug!(%axis, "drawing non-reproducible samples");
                RngManager::from_entropy().uniforms(required)
            }
        }
    }
}
