//! Generational loop of the genetic strategy.

use rand::Rng;
use tracing::{debug, info, warn};

use crate::config::SolverConfig;
use crate::error::{TourError, TourResult};
use crate::models::{RangeProblem, Solution, Strategy};
use crate::observer::ProgressObserver;

use super::{next_generation, Population, Transition};

/// Final state of a generational run.
#[derive(Debug, Clone)]
pub(crate) struct Evolution {
    pub population: Population,
    pub reinitializations: usize,
}

impl Evolution {
    /// Best member as a [`Solution`] credited to `strategy`.
    pub fn into_solution(
        self,
        problem: &RangeProblem,
        strategy: Strategy,
    ) -> TourResult<Solution> {
        let reinitializations = self.reinitializations;
        let index = self
            .population
            .best_index()
            .ok_or_else(|| TourError::config("population is empty"))?;
        let best = self.population.into_members().swap_remove(index);

        let feasible = best.is_feasible();
        if !feasible {
            warn!(
                strategy = strategy.as_str(),
                reinitializations, "run ended without a feasible tour"
            );
        }
        let length = best.length();
        let city_ids = problem.city_ids(best.tour().order());
        Ok(Solution::new(strategy, best.into_tour(), length, feasible)
            .with_reinitializations(reinitializations)
            .with_city_ids(city_ids))
    }
}

/// Runs the generational loop, calling `after_step` on every evolved
/// (not regenerated) population before it becomes the current one.
pub(crate) fn evolve<R, O, H>(
    problem: &RangeProblem,
    config: &SolverConfig,
    rng: &mut R,
    observer: &mut O,
    mut after_step: H,
) -> TourResult<Evolution>
where
    R: Rng + ?Sized,
    O: ProgressObserver + ?Sized,
    H: FnMut(usize, &mut Population, &mut R) -> TourResult<()>,
{
    let mut population = Population::random(problem, config.population_size, rng);
    let mut reinitializations = 0;

    for generation in 0..config.generations {
        population = match next_generation(population, problem, config, rng)? {
            Transition::Reinitialized(fresh) => {
                reinitializations += 1;
                debug!(generation, "all tours infeasible, population regenerated");
                fresh
            }
            Transition::Evolved(mut next) => {
                after_step(generation, &mut next, rng)?;
                next
            }
        };

        let best_length = population.best_feasible_length();
        if config.should_log(generation) {
            info!(generation, best_length, "generation progress");
        }
        observer.on_generation(generation, best_length);
    }

    Ok(Evolution {
        population,
        reinitializations,
    })
}

/// Evolutionary search for a short feasible tour.
///
/// Roulette-wheel selection, ordered crossover, swap mutation, single-member
/// elitism, and feasibility-gated admission of children. When a generation
/// contains no feasible tour, the population is regenerated instead.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem};
/// use u_range_tour::ga::GeneticSolver;
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
///     .with_population_size(20)
///     .with_generations(30);
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let solution = GeneticSolver::new(&problem, &config)
///     .run(&mut rng, &mut NoopObserver)
///     .unwrap();
/// assert!(solution.is_feasible());
/// assert!((solution.length() - 40.0).abs() < 1e-9);
/// ```
pub struct GeneticSolver<'a> {
    problem: &'a RangeProblem,
    config: &'a SolverConfig,
}

impl<'a> GeneticSolver<'a> {
    /// Creates a solver over the given problem and configuration.
    pub fn new(problem: &'a RangeProblem, config: &'a SolverConfig) -> Self {
        Self { problem, config }
    }

    /// Evolves for `config.generations` generations and returns the best
    /// member of the final population.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InfeasibleInstance`](crate::TourError::InfeasibleInstance)
    /// if a generation cannot be filled within `config.max_attempts` children.
    pub fn run<R, O>(&self, rng: &mut R, observer: &mut O) -> TourResult<Solution>
    where
        R: Rng + ?Sized,
        O: ProgressObserver + ?Sized,
    {
        let evolution = evolve(self.problem, self.config, rng, observer, |_, _, _| Ok(()))?;
        evolution.into_solution(self.problem, Strategy::Genetic)
    }
}
