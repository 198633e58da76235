//! Mutation strategies.
//!
//! The default is a bounded-attempt 2-opt move: pick two disjoint edges
//! at random and reverse the sub-path between them when the reconnection
//! shortens the cycle. It is a greedy local-search step, not a random
//! walk — a tour either strictly improves or stays untouched.
//!
//! # References
//!
//! - Croes (1958), "A method for solving traveling salesman problems"

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Improvements below this threshold are treated as noise.
const IMPROVEMENT_EPS: f64 = 1e-10;

/// Redraws of the second edge before abandoning one attempt.
const EDGE_DRAW_RETRIES: usize = 32;

/// Strategy for perturbing a single tour in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mutation {
    /// 2-opt local improvement (the default).
    ///
    /// Up to the configured attempt budget, draws an edge pair and
    /// applies the first reconnection that strictly shortens the tour.
    /// Exhausting the budget leaves the tour unchanged — never an error.
    TwoOpt,

    /// Exchange the cities at two random positions.
    ///
    /// May worsen the tour; carries no improvement guarantee.
    Swap,

    /// Reverse a random segment unconditionally.
    ///
    /// May worsen the tour; carries no improvement guarantee.
    Invert,
}

impl Default for Mutation {
    fn default() -> Self {
        Mutation::TwoOpt
    }
}

impl Mutation {
    /// Applies this strategy to `tour` in place.
    ///
    /// The cached length is recomputed before returning whenever the
    /// order changed. `max_attempts` bounds the 2-opt edge-pair draws;
    /// the other strategies ignore it.
    pub fn apply<R: Rng>(
        &self,
        tour: &mut Tour,
        matrix: &DistanceMatrix,
        max_attempts: usize,
        rng: &mut R,
    ) {
        match self {
            Mutation::TwoOpt => two_opt(tour, matrix, max_attempts, rng),
            Mutation::Swap => swap(tour, matrix, rng),
            Mutation::Invert => invert(tour, matrix, rng),
        }
    }
}

/// First-improvement 2-opt with a bounded number of random edge draws.
///
/// For each attempt, the first edge is `(p1, p2)` with `p2 = p1 + 1`
/// cyclically, the second `(p3, p4)` is redrawn until it is separated
/// from the first by at least one position on each side. Two
/// reconnections are tested against the current combined edge length:
///
/// - connect `p1–p3` and `p2–p4`: reverse the cyclic segment `p2..=p3`
/// - connect `p1–p4` and `p2–p5` (where `p5` follows `p4`): reverse the
///   cyclic segment `p2..=p4`
///
/// The first strictly improving candidate is applied and the call
/// returns. Tours of fewer than four cities admit no disjoint edge pair
/// and are left alone.
fn two_opt<R: Rng>(tour: &mut Tour, matrix: &DistanceMatrix, max_attempts: usize, rng: &mut R) {
    let n = tour.order().len();
    if n < 4 {
        return;
    }

    for _ in 0..max_attempts {
        let p1 = rng.random_range(0..n);
        let p2 = (p1 + 1) % n;
        let Some(p3) = draw_disjoint_edge(n, p1, rng) else {
            continue;
        };
        let p4 = (p3 + 1) % n;

        let order = tour.order();
        let (c1, c2, c3, c4) = (order[p1], order[p2], order[p3], order[p4]);
        let current = matrix.get(c1, c2) + matrix.get(c3, c4);

        if matrix.get(c1, c3) + matrix.get(c2, c4) < current - IMPROVEMENT_EPS {
            tour.reverse_segment(p2, p3);
            tour.recompute_length(matrix);
            return;
        }

        let p5 = (p4 + 1) % n;
        if p5 != p1 && p5 != p2 {
            let c5 = order[p5];
            let alt_current = matrix.get(c1, c2) + matrix.get(c4, c5);
            if matrix.get(c1, c4) + matrix.get(c2, c5) < alt_current - IMPROVEMENT_EPS {
                tour.reverse_segment(p2, p4);
                tour.recompute_length(matrix);
                return;
            }
        }
    }
}

/// Draws the start of a second edge `(p3, p3+1)` disjoint from
/// `(p1, p1+1)` with at least one position between the edges on each
/// side. Returns `None` when no valid draw lands within the retry cap.
fn draw_disjoint_edge<R: Rng>(n: usize, p1: usize, rng: &mut R) -> Option<usize> {
    let p2 = (p1 + 1) % n;
    for _ in 0..EDGE_DRAW_RETRIES {
        let p3 = rng.random_range(0..n);
        if p3 != p1 && p3 != p2 && (p3 + 1) % n != p1 {
            return Some(p3);
        }
    }
    None
}

fn swap<R: Rng>(tour: &mut Tour, matrix: &DistanceMatrix, rng: &mut R) {
    let n = tour.order().len();
    if n < 2 {
        return;
    }
    let i = rng.random_range(0..n);
    let mut j = rng.random_range(0..n);
    while j == i {
        j = rng.random_range(0..n);
    }
    tour.order_mut().swap(i, j);
    tour.recompute_length(matrix);
}

fn invert<R: Rng>(tour: &mut Tour, matrix: &DistanceMatrix, rng: &mut R) {
    let n = tour.order().len();
    if n < 2 {
        return;
    }
    let a = rng.random_range(0..n);
    let b = rng.random_range(0..n);
    let (start, end) = if a <= b { (a, b) } else { (b, a) };
    tour.order_mut()[start..=end].reverse();
    tour.recompute_length(matrix);
}
