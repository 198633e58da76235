//! Two-point segment-exchange crossover with duplicate repair.
//!
//! Each child keeps one parent's material outside a random cut window and
//! receives the other parent's middle segment inside it. The injected
//! segment duplicates cities already present elsewhere, so a repair pass
//! vacates those positions and compacts the survivors into the ring
//! outside the window — no city is ever lost or duplicated.
//!
//! The transformation is unstable on very small instances; the solver
//! skips crossover entirely at 6 cities or fewer and lets mutation carry
//! the search.

use rand::Rng;

use crate::distance::DistanceMatrix;
use crate::tour::Tour;

/// Give up on a generation's crossover when this many partner redraws in
/// a row return the same tour — the elite pool has collapsed to one
/// genotype and the caller keeps it unchanged.
const PARTNER_RETRIES: usize = 16;

/// Produces up to `quantity` offspring from the elite pool.
///
/// Parents are sampled uniformly with replacement; the partner is redrawn
/// until it differs by order. A pool with fewer than two distinct tours
/// is a recoverable degenerate case: the result is simply short (possibly
/// empty) and the generation proceeds with the elites alone.
///
/// Pair production can overshoot by one child; the excess is discarded.
pub fn breed<R: Rng>(
    elites: &[Tour],
    quantity: usize,
    matrix: &DistanceMatrix,
    rng: &mut R,
) -> Vec<Tour> {
    let mut children = Vec::with_capacity(quantity);
    if quantity == 0 || elites.len() < 2 {
        return children;
    }
    let n = elites[0].order().len();

    'produce: while children.len() < quantity {
        let first = &elites[rng.random_range(0..elites.len())];
        let mut second = &elites[rng.random_range(0..elites.len())];
        let mut retries = 0;
        while first.same_order(second) {
            retries += 1;
            if retries > PARTNER_RETRIES {
                break 'produce;
            }
            second = &elites[rng.random_range(0..elites.len())];
        }
        let (p1, p2) = cut_points(n, rng);
        children.extend(cross_pair(first, second, p1, p2, matrix));
    }

    children.truncate(quantity);
    children
}

/// Two distinct cut positions in `[1, n-2]`, ascending.
///
/// Position 0 and the last position are never cut points, so at least one
/// slot on each side of the window stays outside the exchanged segment.
fn cut_points<R: Rng>(n: usize, rng: &mut R) -> (usize, usize) {
    let a = rng.random_range(1..n - 1);
    let mut b = rng.random_range(1..n - 1);
    while b == a {
        b = rng.random_range(1..n - 1);
    }
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Crosses two parents at the window `[p1, p2)`, returning one or two
/// evaluated children.
///
/// When the parents agree outside the window the mirrored children come
/// out identical in order; only one is emitted.
fn cross_pair(
    first: &Tour,
    second: &Tour,
    p1: usize,
    p2: usize,
    matrix: &DistanceMatrix,
) -> Vec<Tour> {
    let child_a = Tour::new(
        inject_segment(first.order(), &second.order()[p1..p2], p1, p2),
        matrix,
    );
    let child_b = Tour::new(
        inject_segment(second.order(), &first.order()[p1..p2], p1, p2),
        matrix,
    );
    if child_a.same_order(&child_b) {
        vec![child_a]
    } else {
        vec![child_a, child_b]
    }
}

/// Builds a child order: `base` outside `[p1, p2)`, `segment` inside it.
///
/// Repair pass: positions of `base` holding a city that also appears in
/// `segment` are vacated; walking the ring from `p2` cyclically to `p1`,
/// each empty slot pulls the next non-empty value found scanning forward
/// cyclically, vacating the source slot in turn. The survivors end up
/// compacted into the ring, the window ends up free for the segment.
fn inject_segment(base: &[usize], segment: &[usize], p1: usize, p2: usize) -> Vec<usize> {
    let n = base.len();
    let mut in_segment = vec![false; n];
    for &city in segment {
        in_segment[city] = true;
    }
    let mut slots: Vec<Option<usize>> = base
        .iter()
        .map(|&city| if in_segment[city] { None } else { Some(city) })
        .collect();

    let mut i = p2;
    while i != p1 {
        if slots[i].is_none() {
            // The survivor count always matches the ring size, so a
            // non-empty slot exists ahead of every empty ring slot.
            let mut j = (i + 1) % n;
            while slots[j].is_none() {
                j = (j + 1) % n;
            }
            slots[i] = slots[j].take();
        }
        i = (i + 1) % n;
    }

    (0..n)
        .map(|idx| {
            if idx >= p1 && idx < p2 {
                segment[idx - p1]
            } else {
                slots[idx].expect("ring slot filled by compaction")
            }
        })
        .collect()
}
