//! Generational evolutionary loop.
//!
//! [`Solver`] drives the full cycle: initialize → select → crossover →
//! mutate → check, tracking the best tour seen across all generations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

use crate::config::SolverConfig;
use crate::crossover;
use crate::error::SolverError;
use crate::model::Instance;
use crate::population::initial_population;
use crate::tour::Tour;

/// Crossover is unstable below this many cities; smaller instances are
/// explored by mutation alone.
const MIN_CITIES_FOR_CROSSOVER: usize = 7;

/// Result of a solver run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResult {
    /// City ids of the best tour found, as a permutation of the input ids.
    pub best_order: Vec<String>,

    /// Closed-cycle Euclidean length of the best tour.
    pub best_length: f64,

    /// Total number of generations executed.
    pub generations: usize,

    /// Whether the run stopped on the stagnation rule (as opposed to the
    /// wall-clock budget).
    pub stagnated: bool,

    /// Best-known length at initialization and after each generation.
    pub length_history: Vec<f64>,
}

/// Executes the evolutionary loop.
///
/// # Usage
///
/// ```
/// use tsp_evolve::model::{City, Instance};
/// use tsp_evolve::{Solver, SolverConfig};
///
/// let instance = Instance::new(vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 10.0),
///     City::new("c", 10.0, 10.0),
///     City::new("d", 10.0, 0.0),
/// ]).unwrap();
/// let result = Solver::run(&instance, &SolverConfig::default().with_seed(42)).unwrap();
/// assert!((result.best_length - 40.0).abs() < 1e-10);
/// ```
pub struct Solver;

impl Solver {
    /// Runs the solver to completion.
    ///
    /// # Errors
    ///
    /// [`SolverError::InvalidConfig`] if the configuration fails
    /// validation. Instance validation happens at [`Instance::new`].
    pub fn run(instance: &Instance, config: &SolverConfig) -> Result<SolveResult, SolverError> {
        Self::run_with_observer(instance, config, |_, _| {})
    }

    /// Runs the solver, invoking `observer` once per generation with the
    /// generation index and the best tour known so far.
    ///
    /// The observer is purely informational — rendering and progress
    /// reporting hang off it, correctness never does.
    pub fn run_with_observer<F>(
        instance: &Instance,
        config: &SolverConfig,
        mut observer: F,
    ) -> Result<SolveResult, SolverError>
    where
        F: FnMut(usize, &Tour),
    {
        config.validate().map_err(SolverError::InvalidConfig)?;

        let n = instance.len();
        let matrix = instance.matrix();

        // A single city admits only the trivial tour.
        if n < 2 {
            return Ok(SolveResult {
                best_order: instance.ids_for(&[0]),
                best_length: 0.0,
                generations: 0,
                stagnated: false,
                length_history: vec![0.0],
            });
        }

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let population_size = ((n as f64) * config.population_ratio).max(1.0) as usize;
        let mut population = Self::initialize(matrix, population_size, config, &mut rng);

        // Elite count is based on the city count, not the population;
        // clamped because small instances would otherwise overshoot.
        let elite_target = ((n as f64) * config.elite_fraction).floor() as usize;

        let mut best = find_best(&population).clone();
        let mut length_history = Vec::with_capacity(config.stagnation_limit + 1);
        length_history.push(best.length());

        let mut stagnation = 0usize;
        let mut generation = 0usize;
        let start = Instant::now();

        loop {
            let keep_going = match config.time_limit {
                Some(limit) => start.elapsed() <= limit,
                None => stagnation < config.stagnation_limit,
            };
            if !keep_going {
                break;
            }

            if n >= MIN_CITIES_FOR_CROSSOVER {
                let elite_count = elite_target.clamp(1, population.len());
                let elites = config.selection.select(
                    population,
                    elite_count,
                    config.similarity_epsilon,
                    &mut rng,
                );
                let deficit = population_size.saturating_sub(elites.len());
                let children = crossover::breed(&elites, deficit, matrix, &mut rng);
                // A degenerate elite pool breeds nothing; the elites
                // alone carry the generation.
                population = elites;
                population.extend(children);
            }

            let mutation_calls =
                (population.len() as f64 * config.mutation_fraction) as usize;
            for _ in 0..mutation_calls {
                let target = rng.random_range(0..population.len());
                config.mutation.apply(
                    &mut population[target],
                    matrix,
                    config.max_mutation_attempts,
                    &mut rng,
                );
            }

            let generation_best = find_best(&population);
            if generation_best.length() < best.length() {
                best = generation_best.clone();
                stagnation = 0;
            } else {
                stagnation += 1;
            }

            generation += 1;
            length_history.push(best.length());
            observer(generation, &best);
        }

        Ok(SolveResult {
            best_order: instance.ids_for(best.order()),
            best_length: best.length(),
            generations: generation,
            stagnated: config.time_limit.is_none(),
            length_history,
        })
    }

    #[cfg(feature = "parallel")]
    fn initialize<R: Rng>(
        matrix: &crate::distance::DistanceMatrix,
        quantity: usize,
        config: &SolverConfig,
        rng: &mut R,
    ) -> Vec<Tour> {
        if config.parallel {
            crate::population::initial_population_parallel(matrix, quantity, rng)
        } else {
            initial_population(matrix, quantity, rng)
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn initialize<R: Rng>(
        matrix: &crate::distance::DistanceMatrix,
        quantity: usize,
        _config: &SolverConfig,
        rng: &mut R,
    ) -> Vec<Tour> {
        initial_population(matrix, quantity, rng)
    }
}

/// The shortest tour in the population.
fn find_best(population: &[Tour]) -> &Tour {
    population
        .iter()
        .min_by(|a, b| {
            a.length()
                .partial_cmp(&b.length())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .expect("population is never empty")
}
