//! Hybrid solver.

use rand::Rng;
use tracing::debug;

use crate::config::SolverConfig;
use crate::error::TourResult;
use crate::ga::{evolve, Evolution, Individual, Population};
use crate::local_search::HillClimber;
use crate::models::{RangeProblem, Solution, Strategy};
use crate::observer::ProgressObserver;

/// Genetic search whose elite is periodically polished by hill climbing.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem};
/// use u_range_tour::hybrid::HybridSolver;
/// use u_range_tour::{NoopObserver, SolverConfig};
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let problem = RangeProblem::new(cities, 20.0).unwrap();
/// let config = SolverConfig::default()
///     .with_max_distance(20.0)
///     .with_population_size(10)
///     .with_generations(10);
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let solution = HybridSolver::new(&problem, &config)
///     .run(&mut rng, &mut NoopObserver)
///     .unwrap();
/// assert!((solution.length() - 40.0).abs() < 1e-9);
/// ```
pub struct HybridSolver<'a> {
    problem: &'a RangeProblem,
    config: &'a SolverConfig,
}

impl<'a> HybridSolver<'a> {
    /// Creates a solver over the given problem and configuration.
    pub fn new(problem: &'a RangeProblem, config: &'a SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Runs `config.generations` generations with periodic polishing.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InfeasibleInstance`](crate::TourError::InfeasibleInstance)
    /// if a generation cannot be filled within `config.max_attempts` children.
    ///
    /// # Panics
    ///
    /// Panics if `config.hill_climbing_frequency` is zero, which
    /// [`SolverConfig::validate`] rejects.
    pub fn run<R, O>(&self, rng: &mut R, observer: &mut O) -> TourResult<Solution>
    where
        R: Rng + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        let evolution = self.evolve_polished(rng, observer, |_| {})?;
        evolution.into_solution(self.problem, Strategy::Hybrid)
    }

    /// The generational loop, calling `on_polish` with each generation whose
    /// elite was polished.
    fn evolve_polished<R, O, P>(
        &self,
        rng: &mut R,
        observer: &mut O,
        mut on_polish: P,
    ) -> TourResult<Evolution>
    where
        R: Rng + ?Sized,
        O: ProgressObserver + ?Sized,
        P: FnMut(usize),
    {
        let climber = HillClimber::new(self.problem, self.config.polish_iterations);
        let frequency = self.config.hill_climbing_frequency;

        evolve(
            self.problem,
            self.config,
            rng,
            observer,
            |generation, population: &mut Population, rng: &mut R| {
                if generation % frequency == 0
                    && polish_best(population, self.problem, &climber, rng)
                {
                    on_polish(generation);
                }
                Ok(())
            },
        )
    }
}

/// Replaces the best member with its hill-climbed version. Returns `false`
/// without touching the population when the best member is infeasible.
fn polish_best<R: Rng + ?Sized>(
    population: &mut Population,
    problem: &RangeProblem,
    climber: &HillClimber<'_>,
    rng: &mut R,
) -> bool {
    let Some(index) = population.best_index() else {
        return false;
    };
    let elite = population.member(index);
    if !elite.is_feasible() {
        return false;
    }

    let before = elite.length();
    let climb = climber.climb_from(elite.tour().clone(), rng);
    if climb.improvements > 0 {
        debug!(
            before,
            after = climb.length,
            improvements = climb.improvements,
            "elite polished"
        );
    }
    population.replace(index, Individual::feasible(climb.tour, problem));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{City, Tour};
    use crate::NoopObserver;

    fn scattered(n: usize, seed: u64, max_distance: f64) -> RangeProblem {
        let mut rng = u_numflow::random::create_rng(seed);
        let cities = (0..n)
            .map(|i| City::new(i, rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
            .collect();
        RangeProblem::new(cities, max_distance).expect("valid")
    }

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_max_distance(200.0)
            .with_population_size(20)
            .with_generations(30)
            .with_log_interval(0)
    }

    #[test]
    fn test_elite_length_never_increases() {
        let problem = scattered(15, 2, 200.0);
        let config = config();
        let mut rng = u_numflow::random::create_rng(2);
        let mut history = Vec::new();
        let mut observer = |_: usize, best: f64| history.push(best);
        let sol = HybridSolver::new(&problem, &config)
            .run(&mut rng, &mut observer)
            .expect("solves");
        assert_eq!(history.len(), 30);
        assert!(history.windows(2).all(|w| w[1] <= w[0] + 1e-10));
        assert!((sol.length() - history[29]).abs() < 1e-9);
        assert!(sol.tour().is_permutation(15));
    }

    #[test]
    fn test_polish_best_improves_elite() {
        let problem = scattered(12, 5, 200.0);
        let mut rng = u_numflow::random::create_rng(5);
        let mut population = Population::from_members(vec![
            Individual::evaluate(Tour::random(12, &mut rng), &problem),
            Individual::evaluate(Tour::random(12, &mut rng), &problem),
        ]);
        let index = population.best_index().expect("non-empty");
        let before = population.member(index).length();

        let climber = HillClimber::new(&problem, 500);
        assert!(polish_best(&mut population, &problem, &climber, &mut rng));

        let after = population.member(index);
        assert!(after.length() < before);
        assert!(after.tour().is_permutation(12));
        assert_eq!(population.best_index(), Some(index));
    }

    #[test]
    fn test_polish_skips_infeasible_population() {
        let problem = scattered(8, 1, 0.5);
        let mut rng = u_numflow::random::create_rng(1);
        let mut population = Population::random(&problem, 4, &mut rng);
        let before = population.clone();
        let climber = HillClimber::new(&problem, 50);
        assert!(!polish_best(&mut population, &problem, &climber, &mut rng));
        assert_eq!(population, before);
    }

    #[test]
    fn test_unsatisfiable_instance_terminates() {
        let problem = scattered(6, 3, 0.5);
        let config = config().with_max_distance(0.5).with_generations(15);
        let mut rng = u_numflow::random::create_rng(3);
        let sol = HybridSolver::new(&problem, &config)
            .run(&mut rng, &mut NoopObserver)
            .expect("terminates");
        assert!(!sol.is_feasible());
        assert_eq!(sol.reinitializations(), 15);
    }

    #[test]
    fn test_polish_runs_every_frequency_generations() {
        let problem = scattered(10, 6, 200.0);
        let config = config()
            .with_generations(23)
            .with_hill_climbing_frequency(5)
            .with_polish_iterations(20);
        let mut rng = u_numflow::random::create_rng(6);
        let mut polished = Vec::new();
        let evolution = HybridSolver::new(&problem, &config)
            .evolve_polished(&mut rng, &mut NoopObserver, |generation| polished.push(generation))
            .expect("solves");
        assert_eq!(evolution.reinitializations, 0);
        assert_eq!(polished, vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn test_regenerated_generations_are_not_polished() {
        let problem = scattered(6, 3, 0.5);
        let config = config().with_max_distance(0.5).with_generations(12);
        let mut rng = u_numflow::random::create_rng(3);
        let mut polished = Vec::new();
        let evolution = HybridSolver::new(&problem, &config)
            .evolve_polished(&mut rng, &mut NoopObserver, |generation| polished.push(generation))
            .expect("terminates");
        assert_eq!(evolution.reinitializations, 12);
        assert!(polished.is_empty());
    }
}
