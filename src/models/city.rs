//! City type.

use serde::{Deserialize, Serialize};

/// A city (waypoint) the tour must visit.
///
/// Cities are immutable once created. Search algorithms address cities by
/// their index in the problem's city list; the `id` is carried through only
/// for reporting.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
///
/// let a = City::new(1, 0.0, 0.0);
/// let b = City::new(2, 3.0, 4.0);
/// assert_eq!(b.id(), 2);
/// assert!((a.distance_to(&b) - 5.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct City {
    id: usize,
    x: f64,
    y: f64,
}

impl City {
    /// Creates a new city.
    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }

    /// Identifier used for reporting.
    pub fn id(&self) -> usize {
        self.id
    }

    /// X-coordinate.
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y-coordinate.
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to another city.
    pub fn distance_to(&self, other: &City) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
