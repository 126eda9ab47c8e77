//! Simulation State
//!
//! Server occupancy and the waiting queues of a single run.
//!
//! # Critical Invariants
//!
//! 1. **Server idleness**: a server is idle at time t iff `busy_until <= t`
//! 2. **Queue order**: both queues are insertion-ordered and never re-sorted;
//!    priority is expressed only by which queue is drained first
//! 3. **Single residence**: a waiting client is in exactly one queue

use crate::models::client::Client;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// Per-server state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ServerState {
    /// Time at which the current service ends (0 initially)
    busy_until: f64,

    /// Accumulated service time
    busy_time: f64,

    /// Number of clients admitted
    clients_served: usize,
}

impl ServerState {
    pub fn busy_until(&self) -> f64 {
        self.busy_until
    }

    pub fn busy_time(&self) -> f64 {
        self.busy_time
    }

    pub fn clients_served(&self) -> usize {
        self.clients_served
    }

    /// Idle at time `now`
    pub fn is_idle(&self, now: f64) -> bool {
        self.busy_until <= now
    }
}

/// The identical servers of a run
///
/// Server ids exposed by this type are 1-based.
///
/// # Example
/// ```
/// use queue_simulator_core_rs::ServerPool;
///
/// let mut pool = ServerPool::new(2);
/// assert_eq!(pool.idle_servers(0.0), vec![1, 2]);
///
/// pool.occupy(1, 0.0, 5.0);
/// assert_eq!(pool.idle_servers(1.0), vec![2]);
/// assert_eq!(pool.idle_servers(5.0), vec![1, 2]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerPool {
    servers: Vec<ServerState>,
}

impl ServerPool {
    /// Create `count` idle servers
    pub fn new(count: usize) -> Self {
        Self {
            servers: vec![ServerState::default(); count],
        }
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }

    /// Server by 1-based id
    pub fn get(&self, server_id: usize) -> Option<&ServerState> {
        server_id
            .checked_sub(1)
            .and_then(|index| self.servers.get(index))
    }

    /// Iterate `(server_id, state)` pairs in id order
    pub fn iter(&self) -> impl Iterator<Item = (usize, &ServerState)> {
        self.servers
            .iter()
            .enumerate()
            .map(|(index, server)| (index + 1, server))
    }

    /// Ids of servers idle at `now`, in ascending order
    pub fn idle_servers(&self, now: f64) -> Vec<usize> {
        self.iter()
            .filter(|(_, server)| server.is_idle(now))
            .map(|(id, _)| id)
            .collect()
    }

    /// Mark a server busy from `start` until `end`
    ///
    /// # Panics
    /// Panics if `server_id` is not in `1..=len()`.
    pub fn occupy(&mut self, server_id: usize, start: f64, end: f64) {
        let server = &mut self.servers[server_id - 1];
        server.busy_until = end;
        server.busy_time += end - start;
        server.clients_served += 1;
    }

    /// Latest `busy_until` over all servers (0 when nothing was served)
    pub fn max_busy_until(&self) -> f64 {
        self.servers
            .iter()
            .map(ServerState::busy_until)
            .fold(0.0, f64::max)
    }
}

/// Which waiting queue a client is placed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum QueueKind {
    Vip,
    Regular,
}

/// VIP and regular FIFO queues
#[derive(Debug, Clone, Default)]
pub struct WaitingQueues {
    vip: VecDeque<Client>,
    regular: VecDeque<Client>,
}

impl WaitingQueues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a client to the tail of a queue
    pub fn push(&mut self, kind: QueueKind, client: Client) {
        match kind {
            QueueKind::Vip => self.vip.push_back(client),
            QueueKind::Regular => self.regular.push_back(client),
        }
    }

    /// Remove the head of a queue
    pub fn pop(&mut self, kind: QueueKind) -> Option<Client> {
        match kind {
            QueueKind::Vip => self.vip.pop_front(),
            QueueKind::Regular => self.regular.pop_front(),
        }
    }

    /// Head of a queue without removing it
    pub fn peek(&self, kind: QueueKind) -> Option<&Client> {
        match kind {
            QueueKind::Vip => self.vip.front(),
            QueueKind::Regular => self.regular.front(),
        }
    }

    /// Total waiting clients
    pub fn len(&self) -> usize {
        self.vip.len() + self.regular.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vip.is_empty() && self.regular.is_empty()
    }
}
