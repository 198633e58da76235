//! Dense distance matrix.

use crate::model::City;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Computed once per instance so tour evaluation and 2-opt deltas are
/// O(1) lookups instead of repeated square roots.
///
/// # Examples
///
/// ```
/// use tsp_evolve::model::City;
/// use tsp_evolve::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 3.0, 4.0),
/// ];
/// let m = DistanceMatrix::from_cities(&cities);
/// assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(m.size(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a symmetric Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut m = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = cities[i].distance_to(&cities[j]);
                m.set(i, j, d);
                m.set(j, i, d);
            }
        }
        m
    }

    /// Returns the distance between cities `from` and `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance between cities `from` and `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cities() -> Vec<City> {
        vec![
            City::new("a", 0.0, 0.0),
            City::new("b", 3.0, 4.0),
            City::new("c", 0.0, 8.0),
        ]
    }

    #[test]
    fn test_from_cities() {
        let m = DistanceMatrix::from_cities(&sample_cities());
        assert_eq!(m.size(), 3);
        assert!((m.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((m.get(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(m.get(1, 1), 0.0);
    }

    #[test]
    fn test_symmetric() {
        let m = DistanceMatrix::from_cities(&sample_cities());
        for i in 0..3 {
            for j in 0..3 {
                assert!((m.get(i, j) - m.get(j, i)).abs() < 1e-10);
            }
        }
    }

    #[test]
    fn test_set_get() {
        let mut m = DistanceMatrix::new(2);
        m.set(0, 1, 42.0);
        assert_eq!(m.get(0, 1), 42.0);
        assert_eq!(m.get(1, 0), 0.0);
    }

    #[test]
    fn test_empty() {
        let m = DistanceMatrix::new(0);
        assert_eq!(m.size(), 0);
    }
}
