//! Performance metrics
//!
//! Pure reductions over the served records of a run: nothing here mutates its
//! input, so metrics can be recomputed from the same records at any time.
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::metrics::MetricsAggregator;
//! use queue_simulator_core_rs::{Client, ServedRecord, ServerPool};
//!
//! let records = vec![ServedRecord::new(Client::new(1, 0.0, 4.0), 1, 0.0)];
//! let mut servers = ServerPool::new(1);
//! servers.occupy(1, 0.0, 4.0);
//!
//! let metrics = MetricsAggregator::summarize(&records, &servers, false);
//! assert_eq!(metrics.utilization, 100.0);
//! assert_eq!(metrics.overall.zero_wait_count, 1);
//! ```

use crate::models::{PriorityClass, ServedRecord, ServerPool};
use serde::{Deserialize, Serialize};

/// Waits below this are counted as "no wait"
pub const ZERO_WAIT_TOLERANCE: f64 = 1e-6;

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Statistics for one group of clients
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupMetrics {
    pub count: usize,
    pub mean_wait: f64,
    pub max_wait: f64,
    /// Mean satisfaction as a percentage (0–100)
    pub mean_satisfaction: f64,
    /// Clients whose wait is below `ZERO_WAIT_TOLERANCE`
    pub zero_wait_count: usize,
}

impl GroupMetrics {
    /// Reduce a group of records; an empty group reports zeros
    pub fn from_records<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ServedRecord>,
    {
        let mut metrics = GroupMetrics::default();
        let mut total_wait = 0.0;
        let mut total_satisfaction = 0.0;

        for record in records {
            metrics.count += 1;
            total_wait += record.wait_time();
            total_satisfaction += record.satisfaction();
            metrics.max_wait = metrics.max_wait.max(record.wait_time());
            if record.wait_time() < ZERO_WAIT_TOLERANCE {
                metrics.zero_wait_count += 1;
            }
        }

        if metrics.count > 0 {
            let count = metrics.count as f64;
            metrics.mean_wait = total_wait / count;
            metrics.mean_satisfaction = total_satisfaction / count * 100.0;
        }
        metrics
    }

    /// Reporting precision: wait to 2 decimals, satisfaction to whole percent
    pub fn rounded(&self) -> GroupMetrics {
        GroupMetrics {
            count: self.count,
            mean_wait: round_to(self.mean_wait, 2),
            max_wait: round_to(self.max_wait, 2),
            mean_satisfaction: round_to(self.mean_satisfaction, 0),
            zero_wait_count: self.zero_wait_count,
        }
    }
}

/// Per-server occupancy
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerMetrics {
    pub server_id: usize,
    pub clients_served: usize,
    pub busy_time: f64,
    /// `busy_time / total_span` as a percentage
    pub utilization: f64,
}

/// Summary of a whole run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub overall: GroupMetrics,

    /// VIP clients (None when VIP handling is disabled)
    pub vip: Option<GroupMetrics>,

    pub regular: GroupMetrics,

    pub servers: Vec<ServerMetrics>,

    pub server_count: usize,

    /// Latest time any server became free
    pub total_span: f64,

    /// Sum of all service durations
    pub total_service_time: f64,

    /// `total_service_time / (server_count × total_span)` as a percentage; 0 when span is 0
    pub utilization: f64,
}

impl RunMetrics {
    /// Metrics at reporting precision (span to 2 decimals, utilization to whole percent)
    pub fn summary(&self) -> RunMetrics {
        RunMetrics {
            overall: self.overall.rounded(),
            vip: self.vip.as_ref().map(GroupMetrics::rounded),
            regular: self.regular.rounded(),
            servers: self
                .servers
                .iter()
                .map(|server| ServerMetrics {
                    server_id: server.server_id,
                    clients_served: server.clients_served,
                    busy_time: round_to(server.busy_time, 2),
                    utilization: round_to(server.utilization, 0),
                })
                .collect(),
            server_count: self.server_count,
            total_span: round_to(self.total_span, 2),
            total_service_time: round_to(self.total_service_time, 2),
            utilization: round_to(self.utilization, 0),
        }
    }
}

/// Reduces served records into `RunMetrics`
pub struct MetricsAggregator;

impl MetricsAggregator {
    /// Compute the run summary
    ///
    /// # Arguments
    /// * `records` - Every served record of the run
    /// * `servers` - Final server state (for the span and per-server figures)
    /// * `split_by_class` - Whether to report a VIP group
    pub fn summarize(records: &[ServedRecord], servers: &ServerPool, split_by_class: bool) -> RunMetrics {
        let overall = GroupMetrics::from_records(records);
        let regular = GroupMetrics::from_records(
            records
                .iter()
                .filter(|r| r.priority_class() == PriorityClass::Regular),
        );
        let vip = split_by_class.then(|| {
            GroupMetrics::from_records(
                records
                    .iter()
                    .filter(|r| r.priority_class() == PriorityClass::Vip),
            )
        });

        let total_span = servers.max_busy_until();
        let total_service_time: f64 = records.iter().map(ServedRecord::service_duration).sum();
        let server_count = servers.len();
        let utilization = if total_span > 0.0 && server_count > 0 {
            total_service_time / (server_count as f64 * total_span) * 100.0
        } else {
            0.0
        };

        let servers = servers
            .iter()
            .map(|(server_id, state)| ServerMetrics {
                server_id,
                clients_served: state.clients_served(),
                busy_time: state.busy_time(),
                utilization: if total_span > 0.0 {
                    state.busy_time() / total_span * 100.0
                } else {
                    0.0
                },
            })
            .collect();

        RunMetrics {
            overall,
            vip,
            regular,
            servers,
            server_count,
            total_span,
            total_service_time,
            utilization,
        }
    }
}
