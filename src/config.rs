//! Solver configuration.
//!
//! [`SolverConfig`] holds every parameter of the evolutionary loop. It is
//! set once before solving and never mutated by the loop.

use std::time::Duration;

use crate::mutation::Mutation;
use crate::selection::Selection;

/// Configuration for the genetic TSP solver.
///
/// # Defaults
///
/// ```
/// use tsp_evolve::SolverConfig;
///
/// let config = SolverConfig::default();
/// assert_eq!(config.population_ratio, 10.0);
/// assert_eq!(config.stagnation_limit, 50);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use tsp_evolve::{Selection, SolverConfig};
///
/// let config = SolverConfig::default()
///     .with_selection(Selection::Tournament(15))
///     .with_mutation_fraction(0.3)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolverConfig {
    /// Population size as a multiple of the city count.
    ///
    /// The default 10.0 gives 500 tours for a 50-city instance.
    pub population_ratio: f64,

    /// Elite pool size as a share of the **city count** — not of the
    /// population. An unusual ratio base, kept deliberately; the solver
    /// clamps the resulting count to the population size.
    pub elite_fraction: f64,

    /// Share of the population receiving a mutation call each generation.
    ///
    /// Targets are sampled with replacement, so a tour may be mutated
    /// several times in one generation while another is skipped.
    pub mutation_fraction: f64,

    /// Consecutive generations without improvement before stopping.
    ///
    /// Ignored while a time limit is set.
    pub stagnation_limit: usize,

    /// Length delta under which two tours count as the same solution.
    pub similarity_epsilon: f64,

    /// Random edge-pair draws per 2-opt mutation call.
    pub max_mutation_attempts: usize,

    /// Strategy for extracting the elite pool.
    pub selection: Selection,

    /// Strategy for perturbing sampled tours.
    pub mutation: Mutation,

    /// Optional wall-clock budget.
    ///
    /// When set, the loop runs until the budget elapses and the
    /// stagnation check is disabled. The elapsed check happens once per
    /// generation, so the actual runtime may overshoot by one
    /// generation's worth of work.
    pub time_limit: Option<Duration>,

    /// Random seed for reproducible runs. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Evaluate freshly created tours in parallel using rayon.
    ///
    /// Only effective with the `parallel` feature; RNG consumption is
    /// unaffected either way, so seeded runs stay deterministic.
    pub parallel: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            population_ratio: 10.0,
            elite_fraction: 0.30,
            mutation_fraction: 0.20,
            stagnation_limit: 50,
            similarity_epsilon: 1e-6,
            max_mutation_attempts: 10,
            selection: Selection::default(),
            mutation: Mutation::default(),
            time_limit: None,
            seed: None,
            parallel: false,
        }
    }
}

impl SolverConfig {
    /// Sets the population-to-city-count ratio.
    pub fn with_population_ratio(mut self, ratio: f64) -> Self {
        self.population_ratio = ratio;
        self
    }

    /// Sets the elite fraction (share of the city count).
    pub fn with_elite_fraction(mut self, fraction: f64) -> Self {
        self.elite_fraction = fraction;
        self
    }

    /// Sets the mutated share of the population per generation.
    pub fn with_mutation_fraction(mut self, fraction: f64) -> Self {
        self.mutation_fraction = fraction.clamp(0.0, 1.0);
        self
    }

    /// Sets the stagnation limit.
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Sets the length-similarity epsilon.
    pub fn with_similarity_epsilon(mut self, epsilon: f64) -> Self {
        self.similarity_epsilon = epsilon;
        self
    }

    /// Sets the 2-opt attempt budget.
    pub fn with_max_mutation_attempts(mut self, attempts: usize) -> Self {
        self.max_mutation_attempts = attempts;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    /// Sets the mutation strategy.
    pub fn with_mutation(mut self, mutation: Mutation) -> Self {
        self.mutation = mutation;
        self
    }

    /// Sets a wall-clock budget, switching termination to time mode.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.population_ratio.is_finite() || self.population_ratio <= 0.0 {
            return Err("population_ratio must be positive".into());
        }
        if !self.elite_fraction.is_finite() || self.elite_fraction <= 0.0 {
            return Err("elite_fraction must be positive".into());
        }
        if !(0.0..=1.0).contains(&self.mutation_fraction) {
            return Err("mutation_fraction must be within [0, 1]".into());
        }
        if self.stagnation_limit == 0 && self.time_limit.is_none() {
            return Err("stagnation_limit must be positive without a time limit".into());
        }
        if !self.similarity_epsilon.is_finite() || self.similarity_epsilon <= 0.0 {
            return Err("similarity_epsilon must be positive".into());
        }
        if self.max_mutation_attempts == 0 {
            return Err("max_mutation_attempts must be at least 1".into());
        }
        if let Selection::Tournament(size) = self.selection {
            if size == 0 {
                return Err("tournament size must be at least 1".into());
            }
        }
        if self.time_limit == Some(Duration::ZERO) {
            return Err("time_limit must be positive or None".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SolverConfig::default();
        assert_eq!(config.population_ratio, 10.0);
        assert!((config.elite_fraction - 0.30).abs() < 1e-10);
        assert!((config.mutation_fraction - 0.20).abs() < 1e-10);
        assert_eq!(config.stagnation_limit, 50);
        assert_eq!(config.similarity_epsilon, 1e-6);
        assert_eq!(config.max_mutation_attempts, 10);
        assert_eq!(config.selection, Selection::DiversityElitism);
        assert_eq!(config.mutation, Mutation::TwoOpt);
        assert!(config.time_limit.is_none());
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = SolverConfig::default()
            .with_population_ratio(5.0)
            .with_elite_fraction(0.5)
            .with_mutation_fraction(0.4)
            .with_stagnation_limit(100)
            .with_similarity_epsilon(1e-9)
            .with_max_mutation_attempts(20)
            .with_selection(Selection::Tournament(15))
            .with_mutation(Mutation::Invert)
            .with_seed(42);
        assert_eq!(config.population_ratio, 5.0);
        assert_eq!(config.elite_fraction, 0.5);
        assert_eq!(config.mutation_fraction, 0.4);
        assert_eq!(config.stagnation_limit, 100);
        assert_eq!(config.similarity_epsilon, 1e-9);
        assert_eq!(config.max_mutation_attempts, 20);
        assert_eq!(config.selection, Selection::Tournament(15));
        assert_eq!(config.mutation, Mutation::Invert);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_mutation_fraction_clamps() {
        let config = SolverConfig::default().with_mutation_fraction(1.5);
        assert_eq!(config.mutation_fraction, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_ratio() {
        assert!(SolverConfig::default()
            .with_population_ratio(0.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_population_ratio(f64::NAN)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_zero_elite_fraction() {
        assert!(SolverConfig::default()
            .with_elite_fraction(0.0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_zero_stagnation_without_time_limit() {
        assert!(SolverConfig::default()
            .with_stagnation_limit(0)
            .validate()
            .is_err());
        // With a time limit, stagnation is unused and may be zero.
        assert!(SolverConfig::default()
            .with_stagnation_limit(0)
            .with_time_limit(Duration::from_millis(100))
            .validate()
            .is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_attempts() {
        assert!(SolverConfig::default()
            .with_max_mutation_attempts(0)
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_zero_tournament() {
        assert!(SolverConfig::default()
            .with_selection(Selection::Tournament(0))
            .validate()
            .is_err());
    }

    #[test]
    fn test_validate_rejects_zero_time_limit() {
        assert!(SolverConfig::default()
            .with_time_limit(Duration::ZERO)
            .validate()
            .is_err());
    }
}
