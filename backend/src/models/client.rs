//! Client model
//!
//! A client is an entity that arrives, waits for one of the servers, is served
//! for a fixed duration and departs. Clients are created in bulk by the
//! generator before the event loop starts and are read-only afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority class of a client
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PriorityClass {
    /// Ordinary client, served from the regular queue
    Regular,

    /// Priority client, served ahead of every waiting regular client
    Vip,
}

impl PriorityClass {
    /// Label used in tabular output
    pub fn label(&self) -> &'static str {
        match self {
            PriorityClass::Regular => "Regular",
            PriorityClass::Vip => "VIP",
        }
    }

    pub fn is_vip(&self) -> bool {
        matches!(self, PriorityClass::Vip)
    }
}

impl fmt::Display for PriorityClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A generated client
///
/// # Example
/// ```
/// use queue_simulator_core_rs::{Client, PriorityClass};
///
/// let client = Client::new(1, 1.5, 4.0).with_class(PriorityClass::Vip);
/// assert_eq!(client.id(), 1);
/// assert!(client.priority_class().is_vip());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    /// 1-based sequence number
    id: usize,

    /// Priority class (always Regular unless VIP handling is enabled)
    priority_class: PriorityClass,

    /// Absolute time the client enters the system
    arrival_time: f64,

    /// Service duration, fixed at generation time
    service_duration: f64,
}

impl Client {
    /// Create a regular client
    pub fn new(id: usize, arrival_time: f64, service_duration: f64) -> Self {
        Self {
            id,
            priority_class: PriorityClass::Regular,
            arrival_time,
            service_duration,
        }
    }

    /// Set the priority class (builder pattern)
    pub fn with_class(mut self, priority_class: PriorityClass) -> Self {
        self.priority_class = priority_class;
        self
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn priority_class(&self) -> PriorityClass {
        self.priority_class
    }

    pub fn arrival_time(&self) -> f64 {
        self.arrival_time
    }

    pub fn service_duration(&self) -> f64 {
        self.service_duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_class_is_regular() {
        let client = Client::new(3, 0.0, 1.0);
        assert_eq!(client.priority_class(), PriorityClass::Regular);
    }

    #[test]
    fn test_class_labels() {
        assert_eq!(PriorityClass::Vip.to_string(), "VIP");
        assert_eq!(PriorityClass::Regular.to_string(), "Regular");
    }
}
