//! Genetic TSP solver.
//!
//! Searches for a short closed tour over a fixed set of labelled 2-D
//! points with a population-based heuristic:
//!
//! - **Diversity-preserving elitism**: the elite cut culls near-duplicate
//!   solutions (by length) before truncating, trading strict elitism for
//!   resistance to premature convergence.
//! - **Two-point segment-exchange crossover**: children receive one
//!   parent's middle segment inside the other's material, with a cyclic
//!   compaction repair pass that conserves every city.
//! - **2-opt mutation**: a bounded-attempt greedy local search that
//!   reverses a sub-path only when the reconnection shortens the cycle.
//!
//! The loop runs until a configurable number of generations pass without
//! improvement, or until an optional wall-clock budget elapses. This is a
//! best-effort metaheuristic, not an exact solver.
//!
//! # Usage
//!
//! ```
//! use tsp_evolve::model::{City, Instance};
//! use tsp_evolve::{Solver, SolverConfig};
//!
//! let instance = Instance::new(vec![
//!     City::new("a", 0.0, 0.0),
//!     City::new("b", 0.0, 10.0),
//!     City::new("c", 10.0, 10.0),
//!     City::new("d", 10.0, 0.0),
//! ])?;
//! let config = SolverConfig::default().with_seed(42);
//! let result = Solver::run(&instance, &config)?;
//! assert!((result.best_length - 40.0).abs() < 1e-10);
//! # Ok::<(), tsp_evolve::SolverError>(())
//! ```
//!
//! # Feature flags
//!
//! - `serde` — serialization derives on the public value types
//! - `parallel` — rayon-parallel evaluation of freshly created tours

pub mod config;
pub mod crossover;
pub mod distance;
pub mod error;
pub mod model;
pub mod mutation;
pub mod population;
pub mod selection;
pub mod solver;
pub mod tour;

pub use config::SolverConfig;
pub use error::SolverError;
pub use mutation::Mutation;
pub use selection::Selection;
pub use solver::{SolveResult, Solver};
pub use tour::Tour;
