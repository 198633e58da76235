//! Error taxonomy.
//!
//! Structural and configuration errors surface immediately to the caller
//! before any generation runs. Everything else the loop can encounter
//! (degenerate elite pools, exhausted mutation budgets, crossover
//! overshoot) is resolved locally and never interrupts a valid run.

use std::fmt;

/// Errors reported before the evolutionary loop starts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolverError {
    /// The instance has no cities.
    EmptyInstance,
    /// Two cities share the same id.
    DuplicateCityId(String),
    /// The configuration failed validation.
    InvalidConfig(String),
}

impl fmt::Display for SolverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolverError::EmptyInstance => write!(f, "instance has no cities"),
            SolverError::DuplicateCityId(id) => write!(f, "duplicate city id: {id}"),
            SolverError::InvalidConfig(msg) => write!(f, "invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for SolverError {}
