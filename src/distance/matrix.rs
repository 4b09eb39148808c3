//! Dense distance matrix and tour length.

use crate::models::City;

/// Euclidean distance between two cities.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
/// use u_range_tour::distance::edge_distance;
///
/// let d = edge_distance(&City::new(0, 0.0, 0.0), &City::new(1, 6.0, 8.0));
/// assert!((d - 10.0).abs() < 1e-10);
/// ```
pub fn edge_distance(a: &City, b: &City) -> f64 {
    a.distance_to(b)
}

/// A dense n×n distance matrix stored in row-major order.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
/// use u_range_tour::distance::DistanceMatrix;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 3.0, 4.0),
///     City::new(2, 6.0, 8.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from city coordinates.
    pub fn from_cities(cities: &[City]) -> Self {
        let n = cities.len();
        let mut dm = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let d = edge_distance(&cities[i], &cities[j]);
                dm.set(i, j, d);
                dm.set(j, i, d);
            }
        }
        dm
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from city `from` to city `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of cities in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Shortest distance between two distinct cities, or `None` below two cities.
    pub fn min_edge(&self) -> Option<f64> {
        let mut best: Option<f64> = None;
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let d = self.get(i, j);
                if best.is_none_or(|b| d < b) {
                    best = Some(d);
                }
            }
        }
        best
    }
}

/// Length of the closed tour: the sum of all `n` cyclic edges, including the
/// edge from the last city back to the first.
///
/// Allocation-free; empty and single-city tours have length zero.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
/// use u_range_tour::distance::{tour_length, DistanceMatrix};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!((tour_length(&[0, 1, 2, 3], &dm) - 40.0).abs() < 1e-10);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let n = tour.len();
    let mut total = 0.0;
    for i in 0..n {
        total += distances.get(tour[i], tour[(i + 1) % n]);
    }
    total
}
