//! Simulation engine
//!
//! Event-driven loop integrating all components:
//! - Client generation (samples → arrival times, service durations, classes)
//! - Event scheduling (min-heap on `(time, insertion order)`)
//! - Dispatch (policy decides which waiting client an idle server takes)
//! - Event logging (complete trace of the run)
//! - Metrics (computed from the served records once every client is done)
//!
//! # Architecture
//!
//! ```text
//! Until the scheduler is empty:
//! 1. Pop the earliest event and advance the clock to it
//! 2. ARRIVAL   → route the client into a waiting queue
//!    DEPARTURE → the server that finished becomes idle
//! 3. Dispatch sweep: every server idle at `now`, in ascending id order,
//!    takes the head of the queue the policy selects and schedules its
//!    DEPARTURE at `now + service duration`
//! ```
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::orchestrator::{Preset, Simulation};
//!
//! let preset = Preset::demo();
//! let simulation = Simulation::new(preset.config, &preset.samples).unwrap();
//! let result = simulation.run().unwrap();
//!
//! assert_eq!(result.records.len(), 5);
//! assert_eq!(result.events_processed, 10);
//! ```

use crate::arrivals::{ClientGenerator, SampleSet, SampleWarning};
use crate::core::time::SimClock;
use crate::events::{EventKind, EventScheduler};
use crate::metrics::{MetricsAggregator, RunMetrics};
use crate::models::{Client, Event, EventLog, ServedRecord, ServerPool, WaitingQueues};
use crate::orchestrator::{compute_config_hash, SimulationConfig, SimulationError};
use crate::policy::{DispatchPolicy, PolicyConfig};
use crate::report::{table_rows, TableRow};
use serde::{Deserialize, Serialize};

// ============================================================================
// Result
// ============================================================================

/// Everything a completed run produces
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// SHA-256 of the configuration that produced this result
    pub config_hash: String,

    /// Dispatch policy the run used
    pub policy: PolicyConfig,

    /// One record per client, ordered by client id
    pub records: Vec<ServedRecord>,

    /// Full-precision metrics (see `RunMetrics::summary` for reporting precision)
    pub metrics: RunMetrics,

    /// Resizing outcomes of supplied sample arrays
    pub warnings: Vec<SampleWarning>,

    /// Trace of the run in processing order
    pub event_log: EventLog,

    /// Always `2 × client_count` for a completed run
    pub events_processed: usize,
}

impl SimulationResult {
    /// Records projected into the fixed-column result table
    pub fn table_rows(&self) -> Vec<TableRow> {
        table_rows(&self.records)
    }
}

// ============================================================================
// Simulation
// ============================================================================

/// A single run, from generated clients to the last departure
///
/// The simulation owns all of its state; nothing is shared between runs.
/// Identical configuration and samples always give an identical result.
pub struct Simulation {
    config: SimulationConfig,
    config_hash: String,

    /// Generated clients that have not arrived yet, indexed by `id - 1`
    pending: Vec<Option<Client>>,

    warnings: Vec<SampleWarning>,

    clock: SimClock,
    scheduler: EventScheduler,
    servers: ServerPool,
    queues: WaitingQueues,
    policy: Box<dyn DispatchPolicy>,

    /// Records in admission order
    served: Vec<ServedRecord>,

    event_log: EventLog,
}

impl Simulation {
    /// Validate the configuration, generate clients and schedule their arrivals
    ///
    /// # Errors
    ///
    /// * `SimulationError::Configuration` - every configuration or sample
    ///   problem found, reported together
    pub fn new(config: SimulationConfig, samples: &SampleSet) -> Result<Self, SimulationError> {
        let generated = ClientGenerator::new(&config).generate(samples)?;
        let config_hash = compute_config_hash(&config)?;
        let policy = config.policy().build();

        let mut scheduler = EventScheduler::new();
        for client in &generated.clients {
            scheduler.schedule(
                client.arrival_time(),
                EventKind::Arrival {
                    client_id: client.id(),
                },
            );
        }

        tracing::info!(
            clients = config.client_count,
            servers = config.server_count,
            policy = policy.name(),
            warnings = generated.warnings.len(),
            "simulation initialized"
        );

        Ok(Self {
            servers: ServerPool::new(config.server_count),
            pending: generated.clients.into_iter().map(Some).collect(),
            warnings: generated.warnings,
            config,
            config_hash,
            clock: SimClock::new(),
            scheduler,
            queues: WaitingQueues::new(),
            policy,
            served: Vec::new(),
            event_log: EventLog::new(),
        })
    }

    /// Process every event and return the completed result
    ///
    /// # Errors
    ///
    /// * `SimulationError::InvariantViolation` - internal consistency check
    ///   failed; no partial result is returned
    pub fn run(mut self) -> Result<SimulationResult, SimulationError> {
        while self.step()? {}
        self.finish()
    }

    /// Process the next event; `false` once the scheduler is empty
    fn step(&mut self) -> Result<bool, SimulationError> {
        let Some(event) = self.scheduler.pop() else {
            return Ok(false);
        };
        self.clock.advance_to(event.time)?;

        match event.kind {
            EventKind::Arrival { client_id } => self.handle_arrival(client_id)?,
            EventKind::Departure {
                server_id,
                client_id,
            } => self.handle_departure(server_id, client_id)?,
        }

        self.dispatch_sweep()?;
        Ok(true)
    }

    fn handle_arrival(&mut self, client_id: usize) -> Result<(), SimulationError> {
        let client = self
            .pending
            .get_mut(client_id.wrapping_sub(1))
            .and_then(Option::take)
            .ok_or_else(|| {
                SimulationError::InvariantViolation(format!(
                    "arrival for unknown or already arrived client {}",
                    client_id
                ))
            })?;

        let now = self.clock.now();
        let class = client.priority_class();
        let queue = self.policy.route(&client);
        self.queues.push(queue, client);

        tracing::debug!(time = now, client_id, %class, waiting = self.queues.len(), "arrival");
        self.event_log.log(Event::Arrival {
            time: now,
            client_id,
            class,
            queue_length: self.queues.len(),
        });
        Ok(())
    }

    fn handle_departure(&mut self, server_id: usize, client_id: usize) -> Result<(), SimulationError> {
        let now = self.clock.now();
        let server = self.servers.get(server_id).ok_or_else(|| {
            SimulationError::InvariantViolation(format!("departure from unknown server {}", server_id))
        })?;
        // The server may already hold its next client (admitted at this same instant)
        if server.busy_until() < now {
            return Err(SimulationError::InvariantViolation(format!(
                "server {} departure at {} after it was free at {}",
                server_id,
                now,
                server.busy_until()
            )));
        }

        tracing::debug!(time = now, client_id, server_id, "departure");
        self.event_log.log(Event::Departure {
            time: now,
            client_id,
            server_id,
        });
        Ok(())
    }

    /// Give every idle server the next client the policy selects
    fn dispatch_sweep(&mut self) -> Result<(), SimulationError> {
        let now = self.clock.now();
        for server_id in self.servers.idle_servers(now) {
            let Some(queue) = self.policy.select(&self.queues) else {
                break;
            };
            let client = self.queues.pop(queue).ok_or_else(|| {
                SimulationError::InvariantViolation(format!(
                    "policy {} selected empty queue {:?}",
                    self.policy.name(),
                    queue
                ))
            })?;
            self.admit(server_id, client)?;
        }
        Ok(())
    }

    /// Start serving `client` on `server_id` at the current time
    fn admit(&mut self, server_id: usize, client: Client) -> Result<(), SimulationError> {
        let now = self.clock.now();
        let duration = client.service_duration();
        if !duration.is_finite() || duration < 0.0 {
            return Err(SimulationError::InvariantViolation(format!(
                "client {} has invalid service duration {}",
                client.id(),
                duration
            )));
        }
        if now < client.arrival_time() {
            return Err(SimulationError::InvariantViolation(format!(
                "client {} admitted at {} before arriving at {}",
                client.id(),
                now,
                client.arrival_time()
            )));
        }

        let end = now + duration;
        let client_id = client.id();
        self.servers.occupy(server_id, now, end);
        self.scheduler
            .schedule(end, EventKind::Departure { server_id, client_id });

        let record = ServedRecord::new(client, server_id, now);
        tracing::debug!(
            time = now,
            client_id,
            server_id,
            wait = record.wait_time(),
            "service start"
        );
        self.event_log.log(Event::ServiceStart {
            time: now,
            client_id,
            server_id,
            wait: record.wait_time(),
        });
        self.served.push(record);
        Ok(())
    }

    /// Check conservation and assemble the result
    fn finish(self) -> Result<SimulationResult, SimulationError> {
        let expected = self.config.client_count;
        if self.served.len() != expected {
            return Err(SimulationError::InvariantViolation(format!(
                "{} of {} clients served",
                self.served.len(),
                expected
            )));
        }
        if !self.queues.is_empty() {
            return Err(SimulationError::InvariantViolation(format!(
                "{} clients still waiting after the last event",
                self.queues.len()
            )));
        }
        let events_processed = self.clock.events_processed();
        if events_processed != 2 * expected {
            return Err(SimulationError::InvariantViolation(format!(
                "{} events processed for {} clients",
                events_processed, expected
            )));
        }

        let mut records = self.served;
        records.sort_by_key(ServedRecord::id);

        let metrics =
            MetricsAggregator::summarize(&records, &self.servers, self.config.vip.is_some());

        tracing::info!(
            clients = records.len(),
            events = events_processed,
            mean_wait = metrics.overall.mean_wait,
            utilization = metrics.utilization,
            "simulation complete"
        );

        Ok(SimulationResult {
            config_hash: self.config_hash,
            policy: self.config.policy(),
            records,
            metrics,
            warnings: self.warnings,
            event_log: self.event_log,
            events_processed,
        })
    }
}

// Manual Debug implementation (policies don't implement Debug)
impl std::fmt::Debug for Simulation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulation")
            .field("now", &self.clock.now())
            .field("policy", &self.policy.name())
            .field("served", &self.served.len())
            .field("waiting", &self.queues.len())
            .field("pending_events", &self.scheduler.len())
            .finish()
    }
}

/// Run one simulation to completion
///
/// # Example
///
/// ```rust
/// use queue_simulator_core_rs::orchestrator::{simulate, Preset};
///
/// let preset = Preset::multi_server_vip();
/// let first = simulate(&preset.config, &preset.samples).unwrap();
/// let second = simulate(&preset.config, &preset.samples).unwrap();
/// assert_eq!(first, second);
/// ```
pub fn simulate(config: &SimulationConfig, samples: &SampleSet) -> Result<SimulationResult, SimulationError> {
    Simulation::new(config.clone(), samples)?.run()
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::arrivals::ServiceDistribution;
    use crate::orchestrator::{ArrivalConfig, ServiceConfig, VipConfig};

    fn fixed_config(clients: usize, servers: usize, interval: f64, duration: f64) -> SimulationConfig {
        SimulationConfig {
            client_count: clients,
            server_count: servers,
            arrivals: ArrivalConfig::Fixed {
                initial_arrival: 0.0,
                interval,
            },
            service: ServiceConfig::Fixed { duration },
            vip: None,
        }
    }

    #[test]
    fn test_single_client_starts_on_arrival() {
        let config = fixed_config(1, 1, 1.0, 4.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();

        let record = &result.records[0];
        assert_eq!(record.service_start(), 0.0);
        assert_eq!(record.wait_time(), 0.0);
        assert_eq!(record.service_end(), 4.0);
        assert_eq!(result.metrics.utilization, 100.0);
        assert_eq!(result.events_processed, 2);
    }

    #[test]
    fn test_lowest_idle_server_is_used_first() {
        let config = fixed_config(2, 3, 0.0, 5.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();

        assert_eq!(result.records[0].server_id(), 1);
        assert_eq!(result.records[1].server_id(), 2);
        assert_eq!(result.metrics.servers[2].clients_served, 0);
    }

    #[test]
    fn test_backlog_is_served_in_arrival_order() {
        // Three clients at t=0, one server, 2.0 each
        let config = fixed_config(3, 1, 0.0, 2.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();

        let starts: Vec<f64> = result.records.iter().map(ServedRecord::service_start).collect();
        assert_eq!(starts, vec![0.0, 2.0, 4.0]);
        assert_eq!(result.metrics.total_span, 6.0);
    }

    #[test]
    fn test_departure_and_arrival_at_same_time() {
        // Client 2 arrives exactly when client 1 departs: no wait
        let config = fixed_config(2, 1, 3.0, 3.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();
        assert_eq!(result.records[1].service_start(), 3.0);
        assert_eq!(result.records[1].wait_time(), 0.0);
    }

    #[test]
    fn test_zero_duration_service() {
        let config = fixed_config(3, 1, 0.0, 0.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();
        assert!(result.records.iter().all(|r| r.wait_time() == 0.0));
        assert_eq!(result.metrics.total_span, 0.0);
        assert_eq!(result.metrics.utilization, 0.0);
    }

    #[test]
    fn test_event_log_is_complete() {
        let config = fixed_config(4, 2, 1.0, 3.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();

        assert_eq!(result.event_log.events_of_type("Arrival").len(), 4);
        assert_eq!(result.event_log.events_of_type("ServiceStart").len(), 4);
        assert_eq!(result.event_log.events_of_type("Departure").len(), 4);

        let times: Vec<f64> = result.event_log.events().iter().map(Event::time).collect();
        assert!(times.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_vip_jumps_the_queue() {
        // Client 1 occupies the server; clients 2 (regular) and 3 (VIP) wait
        let config = SimulationConfig {
            client_count: 3,
            server_count: 1,
            arrivals: ArrivalConfig::Fixed {
                initial_arrival: 0.0,
                interval: 1.0,
            },
            service: ServiceConfig::Fixed { duration: 5.0 },
            vip: Some(VipConfig { fraction: 0.5 }),
        };
        let samples = SampleSet::supplied(Vec::new(), Vec::new(), vec![0.9, 0.9, 0.1]);
        let result = simulate(&config, &samples).unwrap();

        assert!(result.records[2].priority_class().is_vip());
        assert_eq!(result.records[2].service_start(), 5.0);
        assert_eq!(result.records[1].service_start(), 10.0);
        assert_eq!(result.policy, PolicyConfig::VipPriority);
        assert!(result.metrics.vip.is_some());
    }

    #[test]
    fn test_invalid_config_is_rejected_before_running() {
        let config = SimulationConfig {
            client_count: 0,
            server_count: 0,
            arrivals: ArrivalConfig::Sampled { mean: 2.0 },
            service: ServiceConfig::Sampled {
                distribution: ServiceDistribution::Uniform { min: 6.0, max: 2.0 },
            },
            vip: None,
        };
        match Simulation::new(config, &SampleSet::default()) {
            Err(SimulationError::Configuration(error)) => assert_eq!(error.len(), 3),
            other => panic!("expected configuration error, got {:?}", other),
        }
    }

    #[test]
    fn test_result_hash_matches_config() {
        let config = fixed_config(2, 1, 1.0, 1.0);
        let result = simulate(&config, &SampleSet::default()).unwrap();
        assert_eq!(result.config_hash, compute_config_hash(&config).unwrap());
    }
}
