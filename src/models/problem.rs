//! Range-constrained tour problem.

use crate::distance::{tour_length, DistanceMatrix};
use crate::error::{TourError, TourResult};
use crate::evaluation::{find_violation, fitness, is_feasible, EdgeViolation};

use super::City;

/// A fixed set of cities together with the maximum distance allowed on any
/// leg of the tour.
///
/// The distance matrix is computed once at construction so that length,
/// feasibility, and fitness queries allocate nothing.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem};
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 0.0, 10.0),
///     City::new(3, 10.0, 10.0),
///     City::new(4, 10.0, 0.0),
/// ];
/// let problem = RangeProblem::new(cities, 20.0).unwrap();
/// assert_eq!(problem.num_cities(), 4);
/// assert!((problem.tour_length(&[0, 1, 2, 3]) - 40.0).abs() < 1e-10);
/// assert!(problem.is_feasible(&[0, 2, 1, 3]));
/// ```
#[derive(Debug, Clone)]
pub struct RangeProblem {
    cities: Vec<City>,
    distances: DistanceMatrix,
    max_distance: f64,
}

impl RangeProblem {
    /// Creates a problem instance.
    ///
    /// # Errors
    ///
    /// - [`TourError::TooFewCities`] if fewer than 3 cities are given.
    /// - [`TourError::InvalidConfig`] if a coordinate is non-finite or
    ///   `max_distance` is negative or non-finite.
    pub fn new(cities: Vec<City>, max_distance: f64) -> TourResult<Self> {
        if cities.len() < 3 {
            return Err(TourError::TooFewCities {
                count: cities.len(),
            });
        }
        if !max_distance.is_finite() || max_distance < 0.0 {
            return Err(TourError::config(format!(
                "max distance must be finite and non-negative, got {max_distance}"
            )));
        }
        if let Some(city) = cities.iter().find(|c| !c.is_finite()) {
            return Err(TourError::config(format!(
                "city {} has non-finite coordinates",
                city.id()
            )));
        }
        let distances = DistanceMatrix::from_cities(&cities);
        Ok(Self {
            cities,
            distances,
            max_distance,
        })
    }

    /// All cities, addressed by index.
    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    /// Number of cities.
    pub fn num_cities(&self) -> usize {
        self.cities.len()
    }

    /// Precomputed pairwise distances.
    pub fn distances(&self) -> &DistanceMatrix {
        &self.distances
    }

    /// Longest leg a feasible tour may contain.
    pub fn max_distance(&self) -> f64 {
        self.max_distance
    }

    /// Closed-cycle length of a tour.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        tour_length(tour, &self.distances)
    }

    /// Whether every leg of the tour, including the wrap edge, is within range.
    pub fn is_feasible(&self, tour: &[usize]) -> bool {
        is_feasible(tour, &self.distances, self.max_distance)
    }

    /// First out-of-range leg of the tour, if any.
    pub fn find_violation(&self, tour: &[usize]) -> Option<EdgeViolation> {
        find_violation(tour, &self.distances, self.max_distance)
    }

    /// Feasibility-gated fitness of a tour.
    pub fn fitness(&self, tour: &[usize]) -> f64 {
        fitness(tour, &self.distances, self.max_distance)
    }

    /// Maps a tour of city indices to the ids of the cities it visits.
    pub fn city_ids(&self, tour: &[usize]) -> Vec<usize> {
        tour.iter().map(|&i| self.cities[i].id()).collect()
    }
}
