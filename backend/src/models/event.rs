//! Event logging for simulation replay and auditing.
//!
//! This module defines the `Event` trace entries which capture every state
//! change of a run. The trace enables:
//! - Debugging (understand what happened and when)
//! - Auditing (verify every client was admitted exactly once)
//! - Analysis (queue lengths at admission, server hand-offs)
//!
//! # Example
//!
//! ```rust
//! use queue_simulator_core_rs::models::{Event, PriorityClass};
//!
//! let event = Event::Arrival {
//!     time: 1.5,
//!     client_id: 1,
//!     class: PriorityClass::Regular,
//!     queue_length: 0,
//! };
//!
//! assert_eq!(event.time(), 1.5);
//! assert_eq!(event.event_type(), "Arrival");
//! ```

use crate::models::client::PriorityClass;
use serde::{Deserialize, Serialize};

/// Trace entry capturing a state change.
///
/// Entries are logged in processing order, which is non-decreasing in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// Client entered the system and joined a queue
    Arrival {
        time: f64,
        client_id: usize,
        class: PriorityClass,
        /// Total waiting clients after joining
        queue_length: usize,
    },

    /// Server accepted a waiting client
    ServiceStart {
        time: f64,
        client_id: usize,
        server_id: usize,
        wait: f64,
    },

    /// Server finished serving a client
    Departure {
        time: f64,
        client_id: usize,
        server_id: usize,
    },
}

impl Event {
    /// Simulation time of the entry
    pub fn time(&self) -> f64 {
        match self {
            Event::Arrival { time, .. } => *time,
            Event::ServiceStart { time, .. } => *time,
            Event::Departure { time, .. } => *time,
        }
    }

    /// Get a short description of the event type
    pub fn event_type(&self) -> &'static str {
        match self {
            Event::Arrival { .. } => "Arrival",
            Event::ServiceStart { .. } => "ServiceStart",
            Event::Departure { .. } => "Departure",
        }
    }

    pub fn client_id(&self) -> usize {
        match self {
            Event::Arrival { client_id, .. } => *client_id,
            Event::ServiceStart { client_id, .. } => *client_id,
            Event::Departure { client_id, .. } => *client_id,
        }
    }

    /// Server involved, if any
    pub fn server_id(&self) -> Option<usize> {
        match self {
            Event::Arrival { .. } => None,
            Event::ServiceStart { server_id, .. } => Some(*server_id),
            Event::Departure { server_id, .. } => Some(*server_id),
        }
    }
}

/// Event log for storing and querying the run trace.
///
/// This is a simple wrapper around Vec<Event> with convenience methods.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EventLog {
    events: Vec<Event>,
}

impl EventLog {
    /// Create a new empty event log
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Add an event to the log
    pub fn log(&mut self, event: Event) {
        self.events.push(event);
    }

    /// Get the number of events logged
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if the log is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Get all events
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Get events of a specific type
    pub fn events_of_type(&self, event_type: &str) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.event_type() == event_type)
            .collect()
    }

    /// Get events for a specific client
    pub fn events_for_client(&self, client_id: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.client_id() == client_id)
            .collect()
    }

    /// Get events for a specific server
    pub fn events_for_server(&self, server_id: usize) -> Vec<&Event> {
        self.events
            .iter()
            .filter(|e| e.server_id() == Some(server_id))
            .collect()
    }
}
