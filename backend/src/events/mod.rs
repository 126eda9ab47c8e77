//! Event scheduling for the simulation clock

pub mod scheduler;
pub mod types;

pub use scheduler::EventScheduler;
pub use types::{EventKind, ScheduledEvent};
