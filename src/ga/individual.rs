//! Scored tour carried through the population.

use crate::evaluation::fitness_from_length;
use crate::models::{RangeProblem, Tour};

/// A tour together with its length and feasibility-gated fitness.
///
/// Carrying the score with the tour means the population never has to look
/// an individual up by position to find its fitness.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem, Tour};
/// use u_range_tour::ga::Individual;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let problem = RangeProblem::new(cities, 10.0).unwrap();
///
/// let ok = Individual::evaluate(Tour::new(vec![0, 1, 2, 3]), &problem);
/// assert!(ok.is_feasible());
/// assert!((ok.length() - 40.0).abs() < 1e-10);
///
/// let bad = Individual::evaluate(Tour::new(vec![0, 2, 1, 3]), &problem);
/// assert_eq!(bad.fitness(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Individual {
    tour: Tour,
    length: f64,
    fitness: f64,
}

impl Individual {
    /// Scores a tour against the problem.
    pub fn evaluate(tour: Tour, problem: &RangeProblem) -> Self {
        let length = problem.tour_length(tour.order());
        let fitness = problem.fitness(tour.order());
        Self {
            tour,
            length,
            fitness,
        }
    }

    /// Scores a tour the caller has already checked for feasibility.
    pub(crate) fn feasible(tour: Tour, problem: &RangeProblem) -> Self {
        let length = problem.tour_length(tour.order());
        Self {
            tour,
            length,
            fitness: fitness_from_length(length),
        }
    }

    /// The tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Closed-cycle length.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// `1 / (length + ε)` if feasible, `0.0` otherwise.
    pub fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Whether the tour satisfies the maximum edge distance.
    pub fn is_feasible(&self) -> bool {
        self.fitness > 0.0
    }

    /// Consumes the individual, returning its tour.
    pub fn into_tour(self) -> Tour {
        self.tour
    }
}
