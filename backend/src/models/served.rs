//! Served record model
//!
//! A `ServedRecord` is created exactly once per client, at the moment a server
//! accepts it. It carries the client plus the service outcome.

use crate::models::client::{Client, PriorityClass};
use serde::{Deserialize, Serialize};

/// Round to one decimal place (display precision of the result table)
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// A client together with its service outcome
///
/// # Example
/// ```
/// use queue_simulator_core_rs::{Client, ServedRecord};
///
/// let client = Client::new(1, 2.0, 4.0);
/// let record = ServedRecord::new(client, 1, 5.0);
/// assert_eq!(record.wait_time(), 3.0);
/// assert_eq!(record.service_end(), 9.0);
/// assert!((record.satisfaction() - 4.0 / 7.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServedRecord {
    client: Client,

    /// 1-based server that served the client
    server_id: usize,

    service_start: f64,
    service_end: f64,

    /// `service_start − arrival_time`
    wait_time: f64,

    /// `service / (service + wait)`, 1.0 when the client did not wait
    satisfaction: f64,
}

impl ServedRecord {
    /// Record the admission of `client` on `server_id` at `service_start`
    pub fn new(client: Client, server_id: usize, service_start: f64) -> Self {
        let wait_time = service_start - client.arrival_time();
        let service_end = service_start + client.service_duration();
        let satisfaction = if wait_time <= 0.0 {
            1.0
        } else {
            client.service_duration() / (client.service_duration() + wait_time)
        };

        Self {
            client,
            server_id,
            service_start,
            service_end,
            wait_time,
            satisfaction,
        }
    }

    pub fn id(&self) -> usize {
        self.client.id()
    }

    pub fn priority_class(&self) -> PriorityClass {
        self.client.priority_class()
    }

    pub fn arrival_time(&self) -> f64 {
        self.client.arrival_time()
    }

    pub fn service_duration(&self) -> f64 {
        self.client.service_duration()
    }

    pub fn server_id(&self) -> usize {
        self.server_id
    }

    pub fn service_start(&self) -> f64 {
        self.service_start
    }

    pub fn service_end(&self) -> f64 {
        self.service_end
    }

    pub fn wait_time(&self) -> f64 {
        self.wait_time
    }

    pub fn satisfaction(&self) -> f64 {
        self.satisfaction
    }

    /// One-decimal view of the time fields, as shown to users
    pub fn display(&self) -> DisplayRecord {
        DisplayRecord {
            arrival: round1(self.arrival_time()),
            service: round1(self.service_duration()),
            start: round1(self.service_start),
            end: round1(self.service_end),
            wait: round1(self.wait_time),
        }
    }
}

/// Time fields of a `ServedRecord` rounded to one decimal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplayRecord {
    pub arrival: f64,
    pub service: f64,
    pub start: f64,
    pub end: f64,
    pub wait: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_wait_full_satisfaction() {
        let record = ServedRecord::new(Client::new(1, 1.0, 0.0), 1, 1.0);
        assert_eq!(record.wait_time(), 0.0);
        assert_eq!(record.satisfaction(), 1.0);
    }

    #[test]
    fn test_zero_service_with_wait_has_zero_satisfaction() {
        let record = ServedRecord::new(Client::new(1, 1.0, 0.0), 1, 3.0);
        assert_eq!(record.satisfaction(), 0.0);
    }

    #[test]
    fn test_display_rounds_to_one_decimal() {
        let record = ServedRecord::new(Client::new(1, 1.5620, 4.0), 2, 14.7898);
        let view = record.display();
        assert_eq!(view.arrival, 1.6);
        assert_eq!(view.start, 14.8);
        assert_eq!(view.end, 18.8);
        assert_eq!(view.wait, 13.2);
    }
}
