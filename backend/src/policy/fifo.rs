//! FIFO (First-In-First-Out) Policy
//!
//! Simplest baseline policy: every client joins the regular queue and is
//! admitted in arrival order, regardless of its priority class.

use super::DispatchPolicy;
use crate::models::{Client, QueueKind, WaitingQueues};

/// FIFO policy: one queue, first come first served
///
/// # Example
///
/// ```
/// use queue_simulator_core_rs::policy::{DispatchPolicy, FifoPolicy};
/// use queue_simulator_core_rs::{Client, PriorityClass, QueueKind, WaitingQueues};
///
/// let policy = FifoPolicy::new();
/// let vip = Client::new(1, 0.0, 1.0).with_class(PriorityClass::Vip);
///
/// assert_eq!(policy.route(&vip), QueueKind::Regular);
/// assert_eq!(policy.select(&WaitingQueues::new()), None);
/// ```
pub struct FifoPolicy;

impl FifoPolicy {
    /// Create new FIFO policy
    pub fn new() -> Self {
        Self
    }
}

impl Default for FifoPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchPolicy for FifoPolicy {
    fn route(&self, _client: &Client) -> QueueKind {
        QueueKind::Regular
    }

    fn select(&self, queues: &WaitingQueues) -> Option<QueueKind> {
        queues.peek(QueueKind::Regular).map(|_| QueueKind::Regular)
    }

    fn name(&self) -> &'static str {
        "fifo"
    }
}
