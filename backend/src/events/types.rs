//! Scheduled event types
//!
//! Events drive the simulation clock. Each carries a timestamp and an
//! insertion sequence number; the sequence breaks ties between events at an
//! identical timestamp so that earlier-enqueued events are processed first.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// What happens when an event fires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum EventKind {
    /// Client enters the system
    Arrival { client_id: usize },

    /// Server finishes its current client
    Departure { server_id: usize, client_id: usize },
}

/// An event queued in the scheduler
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduledEvent {
    pub time: f64,
    /// Insertion order, unique per scheduler
    pub seq: u64,
    pub kind: EventKind,
}

impl Eq for ScheduledEvent {}

impl Ord for ScheduledEvent {
    /// Reversed so that `BinaryHeap` pops the earliest `(time, seq)` first
    fn cmp(&self, other: &Self) -> Ordering {
        self.time
            .total_cmp(&other.time)
            .then_with(|| self.seq.cmp(&other.seq))
            .reverse()
    }
}

impl PartialOrd for ScheduledEvent {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
