//! Domain models for the queue simulator

pub mod client;
pub mod event;
pub mod served;
pub mod state;

// Re-exports
pub use client::{Client, PriorityClass};
pub use event::{Event, EventLog};
pub use served::{DisplayRecord, ServedRecord};
pub use state::{QueueKind, ServerPool, ServerState, WaitingQueues};
