//! Orchestrator - configuration, validation and the simulation loop
//!
//! See `engine.rs` for the event loop itself.

pub mod config;
pub mod engine;
pub mod error;
pub mod fingerprint;
pub mod presets;

// Re-export main types for convenience
pub use config::{ArrivalConfig, ServiceConfig, SimulationConfig, VipConfig};
pub use engine::{simulate, Simulation, SimulationResult};
pub use error::{ConfigurationError, SimulationError, Violation};
pub use fingerprint::compute_config_hash;
pub use presets::Preset;
