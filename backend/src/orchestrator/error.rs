//! Error types for configuration validation and simulation runs
//!
//! Validation never stops at the first problem: every `Violation` found is
//! collected into one `ConfigurationError` so the configuration can be fixed
//! in a single pass.

use crate::arrivals::SampleAxis;
use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// A single configuration or sample problem
#[derive(Debug, Clone, PartialEq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Violation {
    #[error("client_count must be at least 1 (got {count})")]
    ClientCount { count: usize },

    #[error("client_count must be at most {max} (got {count})")]
    TooManyClients { count: usize, max: usize },

    #[error("server_count must be at least 1 (got {count})")]
    ServerCount { count: usize },

    #[error("server_count must be at most {max} (got {count})")]
    TooManyServers { count: usize, max: usize },

    #[error("{parameter} must be a positive finite number (got {value})")]
    NonPositive { parameter: &'static str, value: f64 },

    #[error("{parameter} must be a non-negative finite number (got {value})")]
    Negative { parameter: &'static str, value: f64 },

    #[error("uniform range requires finite max > min (got min={min}, max={max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("service distribution takes {expected} uniform(s) per client (got {got})")]
    SampleCount { expected: usize, got: usize },

    #[error("vip fraction must be within [0, 1] (got {value})")]
    VipFraction { value: f64 },

    #[error("client {client}: {axis} sample #{position} = {value} is not a uniform in (0, 1)")]
    MalformedSample {
        axis: SampleAxis,
        /// 1-based client index the sample belongs to
        client: usize,
        /// 1-based position in the resized sample array
        position: usize,
        value: f64,
    },
}

impl Violation {
    /// Push `NonPositive` unless `value` is finite and > 0
    pub fn require_positive(parameter: &'static str, value: f64, out: &mut Vec<Violation>) {
        if !(value.is_finite() && value > 0.0) {
            out.push(Violation::NonPositive { parameter, value });
        }
    }

    /// Push `Negative` unless `value` is finite and >= 0
    pub fn require_non_negative(parameter: &'static str, value: f64, out: &mut Vec<Violation>) {
        if !(value.is_finite() && value >= 0.0) {
            out.push(Violation::Negative { parameter, value });
        }
    }
}

/// Every problem found while validating a configuration and its samples
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfigurationError {
    violations: Vec<Violation>,
}

impl ConfigurationError {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid configuration ({} problem(s))", self.violations.len())?;
        for violation in &self.violations {
            write!(f, "\n  - {}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ConfigurationError {}

/// Simulation error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// Rejected before any simulation state was built
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),

    /// Internal consistency check failed; the run is aborted
    #[error("invariant violation: {0}")]
    InvariantViolation(String),

    /// Configuration could not be serialized for fingerprinting
    #[error("serialization error: {0}")]
    Serialization(String),
}
