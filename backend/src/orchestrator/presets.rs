//! Ready-made configurations
//!
//! The three classic set-ups of the simulator, expressed as configurations of
//! the one engine: the 5-client single-server demo, a configurable
//! single-server FIFO line, and the two-server line with VIP passes.

use crate::arrivals::{SampleSet, ServiceDistribution, PADDING_VALUE};
use crate::orchestrator::{ArrivalConfig, ServiceConfig, SimulationConfig, VipConfig};
use serde::{Deserialize, Serialize};

/// A named configuration with its samples
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preset {
    pub name: String,
    pub config: SimulationConfig,
    pub samples: SampleSet,
}

impl Preset {
    /// 5 clients, one server, exponential arrivals (mean 7), uniform(2, 6) service
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::orchestrator::{simulate, Preset};
    ///
    /// let preset = Preset::demo();
    /// let result = simulate(&preset.config, &preset.samples).unwrap();
    /// assert_eq!(result.records.len(), 5);
    /// assert_eq!(result.records[0].wait_time(), 0.0);
    /// ```
    pub fn demo() -> Self {
        Self {
            name: "demo".to_string(),
            config: SimulationConfig {
                client_count: 5,
                server_count: 1,
                arrivals: ArrivalConfig::Sampled { mean: 7.0 },
                service: ServiceConfig::Sampled {
                    distribution: ServiceDistribution::Uniform { min: 2.0, max: 6.0 },
                },
                vip: None,
            },
            samples: SampleSet::supplied(
                vec![0.8, 0.3, 0.6, 0.1, 0.9],
                vec![0.5, 0.7, 0.2, 0.9, 0.4],
                Vec::new(),
            ),
        }
    }

    /// One server, FIFO, exponential arrivals (mean 2), normal(10, 2) service
    pub fn single_server_fifo(client_count: usize) -> Self {
        Self {
            name: "single-server-fifo".to_string(),
            config: SimulationConfig {
                client_count,
                server_count: 1,
                arrivals: ArrivalConfig::Sampled { mean: 2.0 },
                service: ServiceConfig::Sampled {
                    distribution: ServiceDistribution::Normal {
                        mean: 10.0,
                        std_dev: 2.0,
                    },
                },
                vip: None,
            },
            samples: SampleSet::supplied(
                vec![PADDING_VALUE; client_count],
                vec![PADDING_VALUE; client_count * 2],
                Vec::new(),
            ),
        }
    }

    /// 20 clients, two servers, 20% VIP, exponential arrivals (mean 2), normal(10, 2) service
    pub fn multi_server_vip() -> Self {
        let client_count = 20;
        Self {
            name: "multi-server-vip".to_string(),
            config: SimulationConfig {
                client_count,
                server_count: 2,
                arrivals: ArrivalConfig::Sampled { mean: 2.0 },
                service: ServiceConfig::Sampled {
                    distribution: ServiceDistribution::Normal {
                        mean: 10.0,
                        std_dev: 2.0,
                    },
                },
                vip: Some(VipConfig { fraction: 0.2 }),
            },
            samples: SampleSet::supplied(
                vec![PADDING_VALUE; client_count],
                vec![PADDING_VALUE; client_count * 2],
                vec![PADDING_VALUE; client_count],
            ),
        }
    }

    /// Look a preset up by name (`demo`, `single-server-fifo`, `multi-server-vip`)
    pub fn by_name(name: &str) -> Option<Self> {
        match name {
            "demo" => Some(Self::demo()),
            "single-server-fifo" => Some(Self::single_server_fifo(20)),
            "multi-server-vip" => Some(Self::multi_server_vip()),
            _ => None,
        }
    }

    /// Names accepted by `by_name`
    pub const NAMES: [&'static str; 3] = ["demo", "single-server-fifo", "multi-server-vip"];
}
