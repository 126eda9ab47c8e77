//! Simulation configuration
//!
//! An immutable description of one run. Together with a `SampleSet` it fully
//! determines the result of `simulate` (except for entropy-drawn samples).
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::arrivals::ServiceDistribution;
//! use queue_simulator_core_rs::orchestrator::{
//!     ArrivalConfig, ServiceConfig, SimulationConfig, VipConfig,
//! };
//!
//! let config = SimulationConfig {
//!     client_count: 20,
//!     server_count: 2,
//!     arrivals: ArrivalConfig::Sampled { mean: 2.0 },
//!     service: ServiceConfig::Sampled {
//!         distribution: ServiceDistribution::Normal { mean: 10.0, std_dev: 2.0 },
//!     },
//!     vip: Some(VipConfig { fraction: 0.2 }),
//! };
//!
//! assert!(config.validate().is_empty());
//! ```

use crate::arrivals::{SampleAxis, ServiceDistribution};
use crate::orchestrator::Violation;
use crate::policy::PolicyConfig;
use serde::{Deserialize, Serialize};

/// Complete run configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of clients to generate (>= 1)
    pub client_count: usize,

    /// Number of identical servers (>= 1)
    pub server_count: usize,

    /// How arrival times are produced
    pub arrivals: ArrivalConfig,

    /// How service durations are produced
    pub service: ServiceConfig,

    /// VIP classification and priority (None = single FIFO queue)
    #[serde(default)]
    pub vip: Option<VipConfig>,
}

/// Arrival-time generation mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ArrivalConfig {
    /// Exponential inter-arrival times driven by uniform samples
    Sampled { mean: f64 },

    /// Deterministic arrivals: the first client at `initial_arrival`,
    /// each subsequent one `interval` after its predecessor
    Fixed { initial_arrival: f64, interval: f64 },
}

/// Service-duration generation mode
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum ServiceConfig {
    /// Durations mapped from uniform samples
    Sampled { distribution: ServiceDistribution },

    /// Every client is served for `duration`
    Fixed { duration: f64 },
}

/// VIP classification parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VipConfig {
    /// Client i is VIP iff its VIP sample is below this fraction
    pub fraction: f64,
}

impl SimulationConfig {
    /// Largest accepted `client_count`
    pub const MAX_CLIENTS: usize = 1_000_000;

    /// Largest accepted `server_count`
    pub const MAX_SERVERS: usize = 10_000;

    /// Dispatch policy implied by the configuration
    pub fn policy(&self) -> PolicyConfig {
        if self.vip.is_some() {
            PolicyConfig::VipPriority
        } else {
            PolicyConfig::Fifo
        }
    }

    /// Uniform samples consumed per client on an axis (0 when the axis is unused)
    pub fn samples_per_client(&self, axis: SampleAxis) -> usize {
        match axis {
            SampleAxis::Arrivals => match self.arrivals {
                ArrivalConfig::Sampled { .. } => 1,
                ArrivalConfig::Fixed { .. } => 0,
            },
            SampleAxis::Service => match &self.service {
                ServiceConfig::Sampled { distribution } => distribution.samples_per_client(),
                ServiceConfig::Fixed { .. } => 0,
            },
            SampleAxis::Vip => usize::from(self.vip.is_some()),
        }
    }

    /// Exact sample array length required on an axis
    ///
    /// `None` when the length does not fit in `usize`.
    pub fn required_samples(&self, axis: SampleAxis) -> Option<usize> {
        self.samples_per_client(axis).checked_mul(self.client_count)
    }

    /// Collect every parameter problem; empty when the configuration is valid
    pub fn validate(&self) -> Vec<Violation> {
        let mut violations = Vec::new();

        if self.client_count < 1 {
            violations.push(Violation::ClientCount {
                count: self.client_count,
            });
        } else if self.client_count > Self::MAX_CLIENTS {
            violations.push(Violation::TooManyClients {
                count: self.client_count,
                max: Self::MAX_CLIENTS,
            });
        }
        if self.server_count < 1 {
            violations.push(Violation::ServerCount {
                count: self.server_count,
            });
        } else if self.server_count > Self::MAX_SERVERS {
            violations.push(Violation::TooManyServers {
                count: self.server_count,
                max: Self::MAX_SERVERS,
            });
        }

        match self.arrivals {
            ArrivalConfig::Sampled { mean } => {
                Violation::require_positive("arrival mean", mean, &mut violations);
            }
            ArrivalConfig::Fixed {
                initial_arrival,
                interval,
            } => {
                Violation::require_non_negative("initial arrival", initial_arrival, &mut violations);
                Violation::require_non_negative("arrival interval", interval, &mut violations);
            }
        }

        match &self.service {
            ServiceConfig::Sampled { distribution } => distribution.validate(&mut violations),
            ServiceConfig::Fixed { duration } => {
                Violation::require_non_negative("service duration", *duration, &mut violations);
            }
        }

        if let Some(vip) = self.vip {
            if !(0.0..=1.0).contains(&vip.fraction) {
                violations.push(Violation::VipFraction {
                    value: vip.fraction,
                });
            }
        }

        violations
    }
}
