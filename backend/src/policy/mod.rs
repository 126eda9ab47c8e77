//! Dispatch Policy Module
//!
//! This module defines how waiting clients are admitted to idle servers.
//!
//! # Overview
//!
//! Whenever the engine runs a dispatch sweep, each idle server asks the policy
//! which queue to take its next client from. A policy decides two things:
//! - **Routing**: which queue an arriving client joins
//! - **Selection**: which non-empty queue's head is admitted next
//!
//! Queues are never re-sorted. Priority is expressed purely by which queue is
//! drained first.
//!
//! # Policy Interface
//!
//! All policies implement the `DispatchPolicy` trait:
//! ```rust
//! use queue_simulator_core_rs::policy::DispatchPolicy;
//! use queue_simulator_core_rs::{Client, QueueKind, WaitingQueues};
//!
//! struct RegularOnly;
//!
//! impl DispatchPolicy for RegularOnly {
//!     fn route(&self, _client: &Client) -> QueueKind {
//!         QueueKind::Regular
//!     }
//!
//!     fn select(&self, queues: &WaitingQueues) -> Option<QueueKind> {
//!         queues.peek(QueueKind::Regular).map(|_| QueueKind::Regular)
//!     }
//!
//!     fn name(&self) -> &'static str {
//!         "regular_only"
//!     }
//! }
//! ```
//!
//! Available policies:
//! 1. **Fifo**: one queue, first come first served
//! 2. **VipPriority**: VIP queue drained before the regular queue

use crate::models::{Client, QueueKind, WaitingQueues};
use serde::{Deserialize, Serialize};

pub mod fifo;
pub mod vip;

pub use fifo::FifoPolicy;
pub use vip::VipPriorityPolicy;

/// Admission rule applied during every dispatch sweep
pub trait DispatchPolicy {
    /// Queue an arriving client joins
    fn route(&self, client: &Client) -> QueueKind;

    /// Queue whose head should be admitted next, or `None` to leave the server idle
    fn select(&self, queues: &WaitingQueues) -> Option<QueueKind>;

    /// Short identifier used in logs
    fn name(&self) -> &'static str;
}

/// Policy selection for a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PolicyConfig {
    /// Single FIFO queue
    Fifo,

    /// Two FIFO queues, VIP first
    VipPriority,
}

impl PolicyConfig {
    /// Instantiate the configured policy
    pub fn build(&self) -> Box<dyn DispatchPolicy> {
        match self {
            PolicyConfig::Fifo => Box::new(FifoPolicy::new()),
            PolicyConfig::VipPriority => Box::new(VipPriorityPolicy::new()),
        }
    }
}
