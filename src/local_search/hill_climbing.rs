//! Swap-neighbourhood hill climbing.
//!
//! # Algorithm
//!
//! For a fixed number of iterations, swap two random distinct positions of
//! the current tour. Keep the swap if the tour stays feasible and gets
//! strictly shorter; otherwise undo it. There is no early exit.
//!
//! Because only strict improvements are accepted, the length of the current
//! tour never increases.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

use crate::error::{TourError, TourResult};
use crate::ga::distinct_pair;
use crate::models::{RangeProblem, Solution, Strategy, Tour};

/// Draws uniformly random tours until one is feasible.
///
/// # Errors
///
/// Returns [`TourError::InfeasibleInstance`] after `max_attempts`
/// infeasible draws, or with `attempts: 0` without drawing when even the
/// shortest edge of the instance exceeds the maximum distance.
pub fn random_feasible_tour<R: Rng + ?Sized>(
    problem: &RangeProblem,
    max_attempts: usize,
    rng: &mut R,
) -> TourResult<Tour> {
    if problem
        .distances()
        .min_edge()
        .is_some_and(|shortest| shortest > problem.max_distance())
    {
        return Err(TourError::InfeasibleInstance { attempts: 0 });
    }

    let mut order: Vec<usize> = (0..problem.num_cities()).collect();
    for _ in 0..max_attempts {
        order.shuffle(rng);
        if problem.is_feasible(&order) {
            return Ok(Tour::new(order));
        }
    }
    Err(TourError::InfeasibleInstance {
        attempts: max_attempts,
    })
}

/// Result of a hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
pub struct Climb {
    /// Final tour.
    pub tour: Tour,
    /// Length of the final tour.
    pub length: f64,
    /// Number of accepted swaps.
    pub improvements: usize,
}

/// Randomized first-improvement hill climber over the swap neighbourhood.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem, Tour};
/// use u_range_tour::local_search::HillClimber;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let problem = RangeProblem::new(cities, 20.0).unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
///
/// // Start from a self-crossing tour.
/// let climb = HillClimber::new(&problem, 200).climb_from(Tour::new(vec![0, 2, 1, 3]), &mut rng);
/// assert!((climb.length - 40.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone)]
pub struct HillClimber<'a> {
    problem: &'a RangeProblem,
    iterations: usize,
    log_interval: usize,
}

impl<'a> HillClimber<'a> {
    /// Creates a climber with the given iteration budget.
    pub fn new(problem: &'a RangeProblem, iterations: usize) -> Self {
        Self {
            problem,
            iterations,
            log_interval: 0,
        }
    }

    /// Logs progress every `interval` iterations. Zero (the default) is silent.
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Climbs from a caller-supplied tour.
    ///
    /// The start is expected to be feasible; from an infeasible start only a
    /// feasible and shorter neighbour is ever accepted.
    pub fn climb_from<R: Rng + ?Sized>(&self, start: Tour, rng: &mut R) -> Climb {
        let mut tour = start;
        let mut length = self.problem.tour_length(tour.order());
        let mut improvements = 0;
        let n = tour.len();

        if n >= 2 {
            for iteration in 0..self.iterations {
                let (i, j) = distinct_pair(n, rng);
                tour.swap(i, j);
                let accepted = self.problem.is_feasible(tour.order()) && {
                    let candidate = self.problem.tour_length(tour.order());
                    if candidate < length {
                        length = candidate;
                        true
                    } else {
                        false
                    }
                };
                if accepted {
                    improvements += 1;
                } else {
                    tour.swap(i, j);
                }

                if self.log_interval > 0 && iteration % self.log_interval == 0 {
                    info!(iteration, current_length = length, "hill climbing progress");
                }
            }
        }

        Climb {
            tour,
            length,
            improvements,
        }
    }

    /// Standalone run: samples a random feasible tour, then climbs from it.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InfeasibleInstance`] if no feasible starting tour
    /// is found within `max_attempts` draws.
    pub fn run<R: Rng + ?Sized>(&self, max_attempts: usize, rng: &mut R) -> TourResult<Solution> {
        let start = random_feasible_tour(self.problem, max_attempts, rng)?;
        let climb = self.climb_from(start, rng);
        let city_ids = self.problem.city_ids(climb.tour.order());
        Ok(
            Solution::new(Strategy::HillClimbing, climb.tour, climb.length, true)
                .with_city_ids(city_ids),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn square(max_distance: f64) -> RangeProblem {
        RangeProblem::new(
            vec![
                City::new(0, 0.0, 0.0),
                City::new(1, 0.0, 10.0),
                City::new(2, 10.0, 10.0),
                City::new(3, 10.0, 0.0),
            ],
            max_distance,
        )
        .expect("valid")
    }

    fn scattered(n: usize, seed: u64) -> RangeProblem {
        let mut rng = u_numflow::random::create_rng(seed);
        let cities = (0..n)
            .map(|i| City::new(i, rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        RangeProblem::new(cities, 200.0).expect("valid")
    }

    #[test]
    fn test_random_feasible_tour() {
        let problem = square(20.0);
        let mut rng = u_numflow::random::create_rng(42);
        let tour = random_feasible_tour(&problem, 10, &mut rng).expect("all tours feasible");
        assert!(tour.is_permutation(4));
        assert!(problem.is_feasible(tour.order()));
    }

    #[test]
    fn test_random_feasible_tour_exhausts() {
        // Two pairs of close cities, 100 apart: every cycle has a long leg.
        let cities = vec![
            City::new(0, 0.0, 0.0),
            City::new(1, 1.0, 0.0),
            City::new(2, 100.0, 0.0),
            City::new(3, 101.0, 0.0),
        ];
        let problem = RangeProblem::new(cities, 5.0).expect("valid");
        let mut rng = u_numflow::random::create_rng(42);
        let err = random_feasible_tour(&problem, 50, &mut rng).unwrap_err();
        assert!(matches!(err, TourError::InfeasibleInstance { attempts: 50 }));
    }

    #[test]
    fn test_random_feasible_tour_rejects_below_shortest_edge() {
        let problem = square(5.0);
        let mut rng = u_numflow::random::create_rng(42);
        let mut untouched = rng.clone();
        let err = random_feasible_tour(&problem, 100_000, &mut rng).unwrap_err();
        assert!(matches!(err, TourError::InfeasibleInstance { attempts: 0 }));
        assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
    }

    #[test]
    fn test_standalone_run_on_square() {
        let problem = square(20.0);
        let mut rng = u_numflow::random::create_rng(42);
        let sol = HillClimber::new(&problem, 200).run(100, &mut rng).expect("solves");
        assert_eq!(sol.strategy(), Strategy::HillClimbing);
        assert!(sol.is_feasible());
        assert_eq!(sol.city_ids(), problem.city_ids(sol.tour().order()));
        assert!((sol.length() - 40.0).abs() < 1e-9);
    }

    #[test]
    fn test_standalone_run_unsatisfiable() {
        let problem = square(5.0);
        let mut rng = u_numflow::random::create_rng(42);
        assert!(HillClimber::new(&problem, 10).run(100, &mut rng).is_err());
    }

    #[test]
    fn test_climb_never_worsens() {
        let problem = scattered(25, 8);
        let mut rng = u_numflow::random::create_rng(8);
        let start = Tour::random(25, &mut rng);
        let start_length = problem.tour_length(start.order());
        let climb = HillClimber::new(&problem, 2000).climb_from(start, &mut rng);
        assert!(climb.tour.is_permutation(25));
        assert!(climb.length <= start_length);
        assert!((problem.tour_length(climb.tour.order()) - climb.length).abs() < 1e-9);
        assert!(climb.improvements > 0);
    }

    #[test]
    fn test_climb_keeps_feasibility() {
        // Only edges between neighbouring ring points are within range.
        let cities = (0..10)
            .map(|i| {
                let angle = i as f64 / 10.0 * std::f64::consts::TAU;
                City::new(i, 50.0 * angle.cos(), 50.0 * angle.sin())
            })
            .collect();
        let problem = RangeProblem::new(cities, 35.0).expect("valid");
        let mut rng = u_numflow::random::create_rng(4);
        let climb = HillClimber::new(&problem, 500).climb_from(Tour::identity(10), &mut rng);
        assert!(problem.is_feasible(climb.tour.order()));
        assert_eq!(climb.improvements, 0);
    }

    #[test]
    fn test_zero_iterations_returns_start() {
        let problem = square(20.0);
        let mut rng = u_numflow::random::create_rng(42);
        let start = Tour::new(vec![0, 2, 1, 3]);
        let climb = HillClimber::new(&problem, 0).climb_from(start.clone(), &mut rng);
        assert_eq!(climb.tour, start);
        assert_eq!(climb.improvements, 0);
    }
}
