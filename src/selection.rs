//! Selection strategies.
//!
//! Selection extracts the elite pool that survives a generation boundary.
//! The default strategy trades strict elitism for diversity: sorted
//! near-duplicates (by length) are culled before the cut, so the pool
//! keeps distinct genetic material instead of clones of the current
//! optimum.
//!
//! # References
//!
//! - Sengoku & Yoshihara (1998), "A Fast TSP Solver Using GA on JAVA"

use rand::Rng;

use crate::tour::Tour;

/// Strategy for extracting the elite pool from a population.
///
/// All strategies minimize tour length and return at most `elite_count`
/// tours. The globally best tour of the input is always part of the
/// output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Diversity-preserving elitism (the default).
    ///
    /// Sorts ascending by length, drops the later tour of any adjacent
    /// pair whose lengths differ by less than the similarity epsilon,
    /// then truncates to the elite count. Fewer survivors than requested
    /// is fine; the caller refills with extra crossover children.
    DiversityElitism,

    /// Plain truncation elitism: sort ascending, keep the first
    /// `elite_count` tours.
    TopK,

    /// Tournament selection with the given tournament size.
    ///
    /// Repeatedly draws that many distinct competitors, moves the winner
    /// into the elite pool, and removes it from the population.
    Tournament(usize),
}

impl Default for Selection {
    fn default() -> Self {
        Selection::DiversityElitism
    }
}

impl Selection {
    /// Extracts at most `elite_count` tours from `population`.
    ///
    /// `epsilon` is the length delta under which two tours count as the
    /// same solution (only the default strategy uses it).
    pub fn select<R: Rng>(
        &self,
        population: Vec<Tour>,
        elite_count: usize,
        epsilon: f64,
        rng: &mut R,
    ) -> Vec<Tour> {
        match self {
            Selection::DiversityElitism => diversity_elitism(population, elite_count, epsilon),
            Selection::TopK => top_k(population, elite_count),
            Selection::Tournament(size) => tournament(population, elite_count, *size, rng),
        }
    }
}

fn sort_by_length(population: &mut [Tour]) {
    population.sort_by(|a, b| {
        a.length()
            .partial_cmp(&b.length())
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Sort, cull adjacent near-duplicates, truncate.
///
/// The first tour of each similar run survives, so the global best is
/// never culled.
fn diversity_elitism(mut population: Vec<Tour>, elite_count: usize, epsilon: f64) -> Vec<Tour> {
    sort_by_length(&mut population);
    let mut i = 1;
    while i < population.len() {
        if population[i - 1].is_similar(&population[i], epsilon) {
            population.remove(i);
        } else {
            i += 1;
        }
    }
    population.truncate(elite_count);
    population
}

fn top_k(mut population: Vec<Tour>, elite_count: usize) -> Vec<Tour> {
    sort_by_length(&mut population);
    population.truncate(elite_count);
    population
}

/// Draw `size` distinct competitors, keep the winner, remove it from the
/// pool, repeat until `elite_count` winners are collected or the pool
/// runs dry.
fn tournament<R: Rng>(
    mut population: Vec<Tour>,
    elite_count: usize,
    size: usize,
    rng: &mut R,
) -> Vec<Tour> {
    let size = size.max(1);
    let mut winners = Vec::with_capacity(elite_count);
    while winners.len() < elite_count && !population.is_empty() {
        let draws = size.min(population.len());
        let competitors = rand::seq::index::sample(rng, population.len(), draws);
        let winner = competitors
            .iter()
            .min_by(|&a, &b| {
                population[a]
                    .length()
                    .partial_cmp(&population[b].length())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .expect("tournament draws at least one competitor");
        winners.push(population.swap_remove(winner));
    }
    winners
}
