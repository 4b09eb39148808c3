//! One generation transition.
//!
//! # Algorithm
//!
//! 1. If every member has zero fitness, regenerate the population and stop.
//! 2. Copy the best member unchanged into slot 0 (elitism).
//! 3. Until the population is full: draw two parents by roulette wheel,
//!    apply ordered crossover, then swap mutation, and admit the child only
//!    if it is feasible.
//!
//! Random draws happen in this order for every child: parent 1, parent 2,
//! cut points, mutation coin flip, mutation positions.

use rand::Rng;

use crate::config::SolverConfig;
use crate::error::{TourError, TourResult};
use crate::models::{RangeProblem, Tour};

use super::operators::{order_crossover, swap_mutation};
use super::{reinitialize_if_all_infeasible, Individual, Population, RouletteWheel};

/// Outcome of [`next_generation`].
#[derive(Debug, Clone, PartialEq)]
pub enum Transition {
    /// The population was evolved by selection, crossover, and mutation.
    Evolved(Population),
    /// Every member was infeasible; the population was regenerated at random
    /// and no evolutionary step was applied.
    Reinitialized(Population),
}

impl Transition {
    /// The resulting population.
    pub fn population(&self) -> &Population {
        match self {
            Self::Evolved(p) | Self::Reinitialized(p) => p,
        }
    }

    /// Consumes the transition, returning the resulting population.
    pub fn into_population(self) -> Population {
        match self {
            Self::Evolved(p) | Self::Reinitialized(p) => p,
        }
    }

    /// Whether the population had to be regenerated.
    pub fn is_reinitialized(&self) -> bool {
        matches!(self, Self::Reinitialized(_))
    }
}

/// Produces the next generation from the current one.
///
/// The returned population has the same size as the input. Slot 0 of an
/// evolved population holds the previous generation's best member.
///
/// # Errors
///
/// Returns [`TourError::InfeasibleInstance`] if `config.max_attempts`
/// children are drawn without filling the population.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem};
/// use u_range_tour::ga::{next_generation, Population};
/// use u_range_tour::SolverConfig;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let problem = RangeProblem::new(cities, 20.0).unwrap();
/// let config = SolverConfig::default().with_max_distance(20.0);
/// let mut rng = u_numflow::random::create_rng(42);
///
/// let population = Population::random(&problem, 10, &mut rng);
/// let elite = population.best().unwrap().clone();
/// let next = next_generation(population, &problem, &config, &mut rng).unwrap();
/// assert!(!next.is_reinitialized());
/// assert_eq!(next.population().member(0), &elite);
/// ```
pub fn next_generation<R: Rng + ?Sized>(
    population: Population,
    problem: &RangeProblem,
    config: &SolverConfig,
    rng: &mut R,
) -> TourResult<Transition> {
    let (population, regenerated) = reinitialize_if_all_infeasible(population, problem, rng);
    if regenerated {
        return Ok(Transition::Reinitialized(population));
    }

    let wheel = RouletteWheel::new(&population.fitness_values())?;
    let elite = population.best().ok_or(TourError::NoFeasibleParents)?.clone();

    let target = population.len();
    let mut next = Vec::with_capacity(target);
    next.push(elite);

    let mut attempts = 0;
    while next.len() < target {
        if attempts >= config.max_attempts {
            return Err(TourError::InfeasibleInstance { attempts });
        }
        attempts += 1;

        let parent1 = population.member(wheel.select(rng));
        let parent2 = population.member(wheel.select(rng));
        let mut child = order_crossover(parent1.tour().order(), parent2.tour().order(), rng);
        swap_mutation(&mut child, config.mutation_rate, rng);

        if problem.is_feasible(&child) {
            next.push(Individual::feasible(Tour::new(child), problem));
        }
    }

    Ok(Transition::Evolved(Population::from_members(next)))
}
