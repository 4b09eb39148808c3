//! Strategy dispatch.

use rand::Rng;
use tracing::info;

use crate::config::SolverConfig;
use crate::error::TourResult;
use crate::ga::GeneticSolver;
use crate::hybrid::HybridSolver;
use crate::local_search::HillClimber;
use crate::models::{City, RangeProblem, Solution, Strategy};
use crate::observer::{NoopObserver, ProgressObserver};

/// Searches for a short feasible tour over `cities`, seeding the random
/// number generator from `config.seed`.
///
/// Runs with the same cities, configuration, and strategy return identical
/// solutions.
///
/// # Errors
///
/// - [`TourError::InvalidConfig`](crate::TourError::InvalidConfig) for an
///   out-of-range parameter.
/// - [`TourError::TooFewCities`](crate::TourError::TooFewCities) for fewer
///   than 3 cities.
/// - [`TourError::InfeasibleInstance`](crate::TourError::InfeasibleInstance)
///   when a bounded feasibility search is exhausted.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, Strategy};
/// use u_range_tour::{run, SolverConfig};
///
/// let cities = vec![
///     City::new(1, 0.0, 0.0),
///     City::new(2, 0.0, 10.0),
///     City::new(3, 10.0, 10.0),
///     City::new(4, 10.0, 0.0),
/// ];
/// let config = SolverConfig::default()
///     .with_max_distance(20.0)
///     .with_population_size(20)
///     .with_generations(50);
///
/// let solution = run(&cities, &config, Strategy::Genetic).unwrap();
/// assert!((solution.length() - 40.0).abs() < 1e-9);
/// ```
pub fn run(cities: &[City], config: &SolverConfig, strategy: Strategy) -> TourResult<Solution> {
    let mut rng = u_numflow::random::create_rng(config.seed);
    run_with_rng(cities, config, strategy, &mut rng, &mut NoopObserver)
}

/// Like [`run`], with a caller-supplied random number generator and
/// progress observer.
///
/// # Errors
///
/// See [`run`].
pub fn run_with_rng<R, O>(
    cities: &[City],
    config: &SolverConfig,
    strategy: Strategy,
    rng: &mut R,
    observer: &mut O,
) -> TourResult<Solution>
where
    R: Rng + ?Sized,
    O: ProgressObserver + ?Sized,
{
    let problem = RangeProblem::new(cities.to_vec(), config.max_distance)?;
    solve(&problem, config, strategy, rng, observer)
}

/// Runs `strategy` on an already-built problem.
///
/// The problem's own maximum distance is used; `config.max_distance` is
/// ignored here.
///
/// # Errors
///
/// See [`run`].
pub fn solve<R, O>(
    problem: &RangeProblem,
    config: &SolverConfig,
    strategy: Strategy,
    rng: &mut R,
    observer: &mut O,
) -> TourResult<Solution>
where
    R: Rng + ?Sized,
    O: ProgressObserver + ?Sized,
{
    config.validate()?;
    info!(
        strategy = strategy.as_str(),
        cities = problem.num_cities(),
        max_distance = problem.max_distance(),
        "starting search"
    );

    let solution = match strategy {
        Strategy::Genetic => GeneticSolver::new(problem, config).run(rng, observer)?,
        Strategy::HillClimbing => HillClimber::new(problem, config.max_iterations)
            .with_log_interval(config.log_interval)
            .run(config.max_attempts, rng)?,
        Strategy::Hybrid => HybridSolver::new(problem, config).run(rng, observer)?,
    };

    info!(
        strategy = strategy.as_str(),
        length = solution.length(),
        feasible = solution.is_feasible(),
        "search finished"
    );
    Ok(solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TourError;

    fn square() -> Vec<City> {
        vec![
            City::new(1, 0.0, 0.0),
            City::new(2, 0.0, 10.0),
            City::new(3, 10.0, 10.0),
            City::new(4, 10.0, 0.0),
        ]
    }

    fn config() -> SolverConfig {
        SolverConfig::default()
            .with_max_distance(20.0)
            .with_population_size(20)
            .with_generations(50)
            .with_max_iterations(300)
            .with_log_interval(0)
    }

    #[test]
    fn test_square_scenario_all_strategies() {
        for strategy in [Strategy::Genetic, Strategy::HillClimbing, Strategy::Hybrid] {
            let sol = run(&square(), &config(), strategy).expect("solves");
            assert_eq!(sol.strategy(), strategy);
            assert!(sol.is_feasible());
            assert!(sol.tour().is_permutation(4));
            assert!((sol.length() - 40.0).abs() < 1e-9, "{strategy}: {}", sol.length());
        }
    }

    #[test]
    fn test_reproducible_with_fixed_seed() {
        let cities: Vec<City> = (0..30)
            .map(|i| {
                let x = (i * 37 % 100) as f64;
                let y = (i * 61 % 100) as f64;
                City::new(i, x, y)
            })
            .collect();
        let config = config().with_max_distance(150.0).with_seed(1234);
        for strategy in [Strategy::Genetic, Strategy::HillClimbing, Strategy::Hybrid] {
            let a = run(&cities, &config, strategy).expect("solves");
            let b = run(&cities, &config, strategy).expect("solves");
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_rejects_too_few_cities() {
        let err = run(&square()[..2], &config(), Strategy::Genetic).unwrap_err();
        assert!(matches!(err, TourError::TooFewCities { count: 2 }));
    }

    #[test]
    fn test_rejects_invalid_config() {
        let bad = config().with_population_size(0);
        assert!(matches!(
            run(&square(), &bad, Strategy::Hybrid),
            Err(TourError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_run_with_rng_rejects_invalid_config() {
        let bad = config().with_mutation_rate(2.0);
        let mut rng = u_numflow::random::create_rng(42);
        let err = run_with_rng(&square(), &bad, Strategy::Genetic, &mut rng, &mut NoopObserver)
            .unwrap_err();
        assert!(matches!(err, TourError::InvalidConfig { .. }));
    }

    #[test]
    fn test_zero_population_escape() {
        let config = config().with_max_distance(5.0).with_generations(25);
        let mut rng = u_numflow::random::create_rng(42);
        let mut generations = 0;
        let mut count = |_: usize, best: f64| {
            assert_eq!(best, f64::INFINITY);
            generations += 1;
        };
        let sol = run_with_rng(&square(), &config, Strategy::Genetic, &mut rng, &mut count)
            .expect("terminates");
        assert_eq!(generations, 25);
        assert_eq!(sol.reinitializations(), 25);
        assert!(!sol.is_feasible());

        let err = run(&square(), &config, Strategy::HillClimbing).unwrap_err();
        assert!(matches!(err, TourError::InfeasibleInstance { .. }));
    }
}
