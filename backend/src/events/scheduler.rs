//! Event scheduler
//!
//! The single authority for "what happens next": a min-heap of events keyed
//! by `(time, insertion sequence)`.

use crate::events::types::{EventKind, ScheduledEvent};
use std::collections::BinaryHeap;

/// Time-ordered event queue
///
/// # Example
/// ```
/// use queue_simulator_core_rs::events::{EventKind, EventScheduler};
///
/// let mut scheduler = EventScheduler::new();
/// scheduler.schedule(5.0, EventKind::Arrival { client_id: 2 });
/// scheduler.schedule(1.0, EventKind::Arrival { client_id: 1 });
///
/// assert_eq!(scheduler.pop().unwrap().time, 1.0);
/// assert_eq!(scheduler.pop().unwrap().time, 5.0);
/// assert!(scheduler.pop().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EventScheduler {
    queue: BinaryHeap<ScheduledEvent>,
    next_seq: u64,
    /// Total events ever scheduled
    scheduled: usize,
}

impl EventScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueue an event at `time`
    pub fn schedule(&mut self, time: f64, kind: EventKind) {
        let event = ScheduledEvent {
            time,
            seq: self.next_seq,
            kind,
        };
        self.next_seq += 1;
        self.scheduled += 1;
        self.queue.push(event);
    }

    /// Remove and return the earliest event
    pub fn pop(&mut self) -> Option<ScheduledEvent> {
        self.queue.pop()
    }

    /// Earliest event without removing it
    pub fn peek(&self) -> Option<&ScheduledEvent> {
        self.queue.peek()
    }

    /// Pending events
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Events scheduled over the scheduler's lifetime
    pub fn total_scheduled(&self) -> usize {
        self.scheduled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_timestamps_pop_in_insertion_order() {
        let mut scheduler = EventScheduler::new();
        scheduler.schedule(3.0, EventKind::Arrival { client_id: 7 });
        scheduler.schedule(
            3.0,
            EventKind::Departure {
                server_id: 1,
                client_id: 2,
            },
        );
        scheduler.schedule(3.0, EventKind::Arrival { client_id: 8 });

        let order: Vec<EventKind> = std::iter::from_fn(|| scheduler.pop())
            .map(|e| e.kind)
            .collect();
        assert_eq!(
            order,
            vec![
                EventKind::Arrival { client_id: 7 },
                EventKind::Departure {
                    server_id: 1,
                    client_id: 2
                },
                EventKind::Arrival { client_id: 8 },
            ]
        );
    }

    #[test]
    fn test_unsorted_input_is_time_ordered() {
        let mut scheduler = EventScheduler::new();
        for (id, time) in [(1, 4.0), (2, 0.5), (3, 2.0), (4, 0.5)] {
            scheduler.schedule(time, EventKind::Arrival { client_id: id });
        }
        let times: Vec<f64> = std::iter::from_fn(|| scheduler.pop())
            .map(|e| e.time)
            .collect();
        assert_eq!(times, vec![0.5, 0.5, 2.0, 4.0]);
        assert_eq!(scheduler.total_scheduled(), 4);
    }
}
