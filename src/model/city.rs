//! City type.

/// A city (2-D point) in a TSP instance.
///
/// Cities are immutable once created and owned collectively by the
/// [`Instance`](super::Instance); tours refer to them by index.
///
/// # Examples
///
/// ```
/// use tsp_evolve::model::City;
///
/// let a = City::new("a", 0.0, 0.0);
/// let b = City::new("b", 3.0, 4.0);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct City {
    id: String,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city with the given label and coordinates.
    pub fn new(id: impl Into<String>, x: f64, y: f64) -> Self {
        Self { id: id.into(), x, y }
    }

    /// City label, unique within an instance.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
