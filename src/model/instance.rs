//! Validated TSP instance.

use std::collections::HashSet;

use super::City;
use crate::distance::DistanceMatrix;
use crate::error::SolverError;

/// A validated TSP instance: the city list plus its precomputed
/// Euclidean distance matrix.
///
/// Construction fails fast on an empty city list or duplicate ids;
/// no partial results are ever produced from an invalid instance.
///
/// # Examples
///
/// ```
/// use tsp_evolve::model::{City, Instance};
///
/// let instance = Instance::new(vec![
///     City::new("a", 0.0, 0.0),
///     City::new("b", 0.0, 10.0),
/// ]).unwrap();
/// assert_eq!(instance.len(), 2);
/// assert!((instance.matrix().get(0, 1) - 10.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone)]
pub struct Instance {
    cities: Vec<City>,
    matrix: DistanceMatrix,
}

impl Instance {
    /// Builds an instance from a city list.
    ///
    /// # Errors
    ///
    /// - [`SolverError::EmptyInstance`] if `cities` is empty
    /// - [`SolverError::DuplicateCityId`] if two cities share an id
    pub fn new(cities: Vec<City>) -> Result<Self, SolverError> {
        if cities.is_empty() {
            return Err(SolverError::EmptyInstance);
        }
        let mut seen = HashSet::with_capacity(cities.len());
        for city in &cities {
            if !seen.insert(city.id()) {
                return Err(SolverError::DuplicateCityId(city.id().to_string()));
            }
        }
        let matrix = DistanceMatrix::from_cities(&cities);
        Ok(Self { cities, matrix })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.cities.len()
    }

    /// Returns `true` if the instance has no cities (never, post-validation).
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// The city list, in input order.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// The precomputed distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    /// Maps a tour's index order back to city ids.
    pub fn ids_for(&self, order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| self.cities[i].id().to_string()).collect()
    }
}
