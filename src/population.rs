//! Population initialization.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Builds the initial population: `quantity` uniformly random permutations,
/// each evaluated at creation.
///
/// Duplicate tours are not rejected — at realistic instance sizes they are
/// vanishingly unlikely, and the diversity filter culls them later anyway.
pub fn initial_population<R: Rng>(
    matrix: &DistanceMatrix,
    quantity: usize,
    rng: &mut R,
) -> Vec<Tour> {
    let n = matrix.size();
    let mut population = Vec::with_capacity(quantity);
    while population.len() < quantity {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        population.push(Tour::new(order, matrix));
    }
    population
}

/// Parallel variant: orders are shuffled sequentially (so RNG consumption
/// matches the sequential path and seeded runs stay deterministic), then
/// evaluated across threads.
#[cfg(feature = "parallel")]
pub fn initial_population_parallel<R: Rng>(
    matrix: &DistanceMatrix,
    quantity: usize,
    rng: &mut R,
) -> Vec<Tour> {
    use rayon::prelude::*;

    let n = matrix.size();
    let orders: Vec<Vec<usize>> = (0..quantity)
        .map(|_| {
            let mut order: Vec<usize> = (0..n).collect();
            order.shuffle(rng);
            order
        })
        .collect();
    orders
        .into_par_iter()
        .map(|order| Tour::new(order, matrix))
        .collect()
}
