//! Time management for the simulation
//!
//! The simulation clock is continuous: it jumps directly to the timestamp of
//! each processed event. Time never moves backwards.

use serde::{Deserialize, Serialize};

use crate::orchestrator::SimulationError;

/// Continuous simulation clock driven by the event scheduler
///
/// # Example
/// ```
/// use queue_simulator_core_rs::SimClock;
///
/// let mut clock = SimClock::new();
/// assert_eq!(clock.now(), 0.0);
///
/// clock.advance_to(3.5).unwrap();
/// assert_eq!(clock.now(), 3.5);
/// assert_eq!(clock.events_processed(), 1);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimClock {
    /// Current simulation time
    now: f64,
    /// Number of events that advanced this clock
    events_processed: usize,
}

impl SimClock {
    /// Create a clock positioned at time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock to the timestamp of the next event
    ///
    /// Advancing to the current time is allowed (simultaneous events).
    ///
    /// # Errors
    /// Returns `SimulationError::InvariantViolation` if `time` is earlier than
    /// the current time or is not a finite number.
    ///
    /// # Example
    /// ```
    /// use queue_simulator_core_rs::SimClock;
    ///
    /// let mut clock = SimClock::new();
    /// clock.advance_to(2.0).unwrap();
    /// assert!(clock.advance_to(1.0).is_err());
    /// ```
    pub fn advance_to(&mut self, time: f64) -> Result<(), SimulationError> {
        if !time.is_finite() || time < self.now {
            return Err(SimulationError::InvariantViolation(format!(
                "clock cannot move from {} to {}",
                self.now, time
            )));
        }
        self.now = time;
        self.events_processed += 1;
        Ok(())
    }

    /// Current simulation time
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Number of events processed so far
    pub fn events_processed(&self) -> usize {
        self.events_processed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simultaneous_events_allowed() {
        let mut clock = SimClock::new();
        clock.advance_to(4.0).unwrap();
        clock.advance_to(4.0).unwrap();
        assert_eq!(clock.now(), 4.0);
        assert_eq!(clock.events_processed(), 2);
    }

    #[test]
    fn test_non_finite_time_rejected() {
        let mut clock = SimClock::new();
        assert!(clock.advance_to(f64::NAN).is_err());
        assert!(clock.advance_to(f64::INFINITY).is_err());
        assert_eq!(clock.events_processed(), 0);
    }
}
