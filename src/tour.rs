//! Tour representation.
//!
//! A [`Tour`] owns one index permutation (its buffer is never aliased by
//! another tour) and caches the closed-cycle length of that ordering. The
//! cache is recomputed eagerly after any structural change, so comparisons
//! between tours always read a trusted value.

use crate::distance::DistanceMatrix;

/// Total length of the closed cycle described by `order`.
///
/// Sums consecutive pairwise distances plus the wrap-around edge from the
/// last city back to the first. Returns 0.0 for fewer than two cities.
///
/// The result is invariant under cyclic rotation and under full reversal
/// of `order` — both describe the same closed cycle.
pub fn cycle_length(order: &[usize], matrix: &DistanceMatrix) -> f64 {
    if order.len() < 2 {
        return 0.0;
    }
    let mut total = 0.0;
    for pair in order.windows(2) {
        total += matrix.get(pair[0], pair[1]);
    }
    total + matrix.get(order[order.len() - 1], order[0])
}

/// A candidate solution: a permutation of city indices plus its cached
/// closed-cycle length.
#[derive(Debug, Clone)]
pub struct Tour {
    order: Vec<usize>,
    length: f64,
}

impl Tour {
    /// Creates a tour from an index order, computing its length.
    pub fn new(order: Vec<usize>, matrix: &DistanceMatrix) -> Self {
        let length = cycle_length(&order, matrix);
        Self { order, length }
    }

    /// The visiting order as city indices.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Cached closed-cycle length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Recomputes the cached length from the current order.
    ///
    /// Must be called after any in-place change to the order before the
    /// length is read again.
    pub fn recompute_length(&mut self, matrix: &DistanceMatrix) {
        self.length = cycle_length(&self.order, matrix);
    }

    /// Mutable access to the order for in-place operators.
    ///
    /// Callers must recompute the length afterwards.
    pub(crate) fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Reverses the cyclic segment running forward from position `from`
    /// to position `to`, wrapping past the end of the buffer.
    ///
    /// Does not touch the cached length.
    pub(crate) fn reverse_segment(&mut self, from: usize, to: usize) {
        let n = self.order.len();
        let span = (to + n - from) % n + 1;
        for k in 0..span / 2 {
            let i = (from + k) % n;
            let j = (to + n - k) % n;
            self.order.swap(i, j);
        }
    }

    /// `true` iff both tours visit the same city at every position.
    ///
    /// Used to suppress duplicate offspring from symmetric crossover.
    pub fn same_order(&self, other: &Tour) -> bool {
        self.order == other.order
    }

    /// `true` iff the two tours' lengths differ by less than `epsilon`.
    ///
    /// A cheap proxy for near-duplicate solutions; structurally distinct
    /// tours of coincidentally equal length compare as similar, which the
    /// diversity filter accepts.
    pub fn is_similar(&self, other: &Tour, epsilon: f64) -> bool {
        (self.length - other.length).abs() < epsilon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::City;

    fn square_matrix() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new("a", 0.0, 0.0),
            City::new("b", 0.0, 10.0),
            City::new("c", 10.0, 10.0),
            City::new("d", 10.0, 0.0),
        ])
    }

    #[test]
    fn test_square_perimeter() {
        let m = square_matrix();
        let t = Tour::new(vec![0, 1, 2, 3], &m);
        assert!((t.length() - 40.0).abs() < 1e-10);
    }

    #[test]
    fn test_diagonal_order_is_longer() {
        let m = square_matrix();
        let t = Tour::new(vec![0, 2, 1, 3], &m);
        assert!(t.length() > 40.0);
    }

    #[test]
    fn test_rotation_invariance() {
        let m = square_matrix();
        let base = Tour::new(vec![0, 2, 1, 3], &m);
        for rot in 1..4 {
            let mut order = vec![0, 2, 1, 3];
            order.rotate_left(rot);
            let rotated = Tour::new(order, &m);
            assert!((base.length() - rotated.length()).abs() < 1e-10);
        }
    }

    #[test]
    fn test_reversal_invariance() {
        let m = square_matrix();
        let base = Tour::new(vec![0, 2, 1, 3], &m);
        let reversed = Tour::new(vec![3, 1, 2, 0], &m);
        assert!((base.length() - reversed.length()).abs() < 1e-10);
    }

    #[test]
    fn test_short_orders_have_zero_length() {
        let m = square_matrix();
        assert_eq!(cycle_length(&[], &m), 0.0);
        assert_eq!(cycle_length(&[2], &m), 0.0);
    }

    #[test]
    fn test_two_cities_count_both_directions() {
        let m = square_matrix();
        assert!((cycle_length(&[0, 1], &m) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_same_order() {
        let m = square_matrix();
        let a = Tour::new(vec![0, 1, 2, 3], &m);
        let b = Tour::new(vec![0, 1, 2, 3], &m);
        let c = Tour::new(vec![1, 0, 2, 3], &m);
        assert!(a.same_order(&b));
        assert!(!a.same_order(&c));
    }

    #[test]
    fn test_is_similar() {
        let m = square_matrix();
        let a = Tour::new(vec![0, 1, 2, 3], &m);
        // Rotated tour: structurally different order, identical length.
        let b = Tour::new(vec![1, 2, 3, 0], &m);
        let c = Tour::new(vec![0, 2, 1, 3], &m);
        assert!(a.is_similar(&b, 1e-6));
        assert!(!a.is_similar(&c, 1e-6));
    }

    #[test]
    fn test_recompute_after_in_place_change() {
        let m = square_matrix();
        let mut t = Tour::new(vec![0, 1, 2, 3], &m);
        t.order_mut().swap(1, 2);
        t.recompute_length(&m);
        assert!((t.length() - cycle_length(t.order(), &m)).abs() < 1e-10);
    }

    #[test]
    fn test_reverse_segment_plain() {
        let m = square_matrix();
        let mut t = Tour::new(vec![0, 1, 2, 3], &m);
        t.reverse_segment(1, 2);
        assert_eq!(t.order(), &[0, 2, 1, 3]);
    }

    #[test]
    fn test_reverse_segment_wraps() {
        let m = square_matrix();
        let mut t = Tour::new(vec![0, 1, 2, 3], &m);
        // Segment 3 → 0 runs forward past the end of the buffer.
        t.reverse_segment(3, 0);
        assert_eq!(t.order(), &[3, 1, 2, 0]);
    }

    #[test]
    fn test_reverse_segment_full_wrap() {
        let m = square_matrix();
        let mut t = Tour::new(vec![0, 1, 2, 3], &m);
        // Segment 2 → 1 covers the whole cycle, so this is a full reversal
        // anchored at position 2.
        t.reverse_segment(2, 1);
        assert_eq!(t.order(), &[3, 2, 1, 0]);
    }
}
