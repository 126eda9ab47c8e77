//! VIP priority policy
//!
//! VIP clients join their own queue, which is always drained before the
//! regular queue. Within each queue admission is FIFO.

use super::DispatchPolicy;
use crate::models::{Client, QueueKind, WaitingQueues};

/// VIP-first policy over two FIFO queues
///
/// # Example
///
/// ```
/// use queue_simulator_core_rs::policy::{DispatchPolicy, VipPriorityPolicy};
/// use queue_simulator_core_rs::{Client, PriorityClass, QueueKind, WaitingQueues};
///
/// let policy = VipPriorityPolicy::new();
/// let mut queues = WaitingQueues::new();
/// queues.push(QueueKind::Regular, Client::new(1, 0.0, 1.0));
/// queues.push(QueueKind::Vip, Client::new(2, 1.0, 1.0).with_class(PriorityClass::Vip));
///
/// assert_eq!(policy.select(&queues), Some(QueueKind::Vip));
/// ```
pub struct VipPriorityPolicy;

impl VipPriorityPolicy {
    pub fn new() -> Self {
        Self
    }
}

impl Default for VipPriorityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl DispatchPolicy for VipPriorityPolicy {
    fn route(&self, client: &Client) -> QueueKind {
        if client.priority_class().is_vip() {
            QueueKind::Vip
        } else {
            QueueKind::Regular
        }
    }

    fn select(&self, queues: &WaitingQueues) -> Option<QueueKind> {
        if queues.peek(QueueKind::Vip).is_some() {
            Some(QueueKind::Vip)
        } else if queues.peek(QueueKind::Regular).is_some() {
            Some(QueueKind::Regular)
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "vip_priority"
    }
}
