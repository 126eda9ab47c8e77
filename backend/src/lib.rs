//! Queue Simulator Core - Rust Engine
//!
//! Discrete-event simulator of multi-server waiting lines with optional VIP
//! priority, driven by caller-supplied or seeded uniform samples.
//!
//! # Architecture
//!
//! - **core**: Simulation clock
//! - **rng**: Deterministic random number generation
//! - **arrivals**: Client generation (arrival times, service durations, classes)
//! - **models**: Domain types (Client, ServedRecord, servers, queues, trace)
//! - **events**: Event scheduler (min-heap on time, then insertion order)
//! - **policy**: Dispatch policies (FIFO, VIP priority)
//! - **orchestrator**: Configuration, validation and the event loop
//! - **metrics**: Waiting, satisfaction and utilization statistics
//! - **report**: Fixed-column result table
//!
//! # Critical Invariants
//!
//! 1. Every client is served exactly once; a run processes exactly 2n events
//! 2. Same configuration + same samples = identical result
//! 3. No client starts service before it arrives; time never moves backwards

// Module declarations
pub mod arrivals;
pub mod core;
pub mod events;
pub mod metrics;
pub mod models;
pub mod orchestrator;
pub mod policy;
pub mod report;
pub mod rng;

// Re-exports for convenience
pub use arrivals::{SampleSet, SampleWarning, ServiceDistribution};
pub use core::time::SimClock;
pub use metrics::{GroupMetrics, RunMetrics};
pub use models::{
    client::{Client, PriorityClass},
    event::{Event, EventLog},
    served::ServedRecord,
    state::{QueueKind, ServerPool, WaitingQueues},
};
pub use orchestrator::{
    simulate, ArrivalConfig, ConfigurationError, Preset, ServiceConfig, Simulation, SimulationConfig,
    SimulationError, SimulationResult, VipConfig,
};
pub use policy::PolicyConfig;
pub use rng::RngManager;
