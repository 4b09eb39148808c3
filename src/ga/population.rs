//! Population management.

use rand::Rng;

use crate::models::{RangeProblem, Tour};

use super::Individual;

/// A fixed-size collection of scored tours.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{City, RangeProblem};
/// use u_range_tour::ga::Population;
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
/// let population = Population::random(&problem, 10, &mut rng);
/// assert_eq!(population.len(), 10);
/// assert!(!population.all_infeasible());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Population {
    members: Vec<Individual>,
}

impl Population {
    /// Creates `size` independent uniformly random tours, with no
    /// feasibility filtering.
    pub fn random<R: Rng + ?Sized>(problem: &RangeProblem, size: usize, rng: &mut R) -> Self {
        let n = problem.num_cities();
        let members = (0..size)
            .map(|_| Individual::evaluate(Tour::random(n, rng), problem))
            .collect();
        Self { members }
    }

    /// Wraps already-scored individuals.
    pub fn from_members(members: Vec<Individual>) -> Self {
        Self { members }
    }

    /// All members.
    pub fn members(&self) -> &[Individual] {
        &self.members
    }

    /// Member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn member(&self, index: usize) -> &Individual {
        &self.members[index]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if the population has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Fitness of each member, in member order.
    pub fn fitness_values(&self) -> Vec<f64> {
        self.members.iter().map(Individual::fitness).collect()
    }

    /// Returns `true` if every member has zero fitness.
    pub fn all_infeasible(&self) -> bool {
        self.members.iter().all(|m| m.fitness() == 0.0)
    }

    /// Index of the highest-fitness member; ties go to the lowest index.
    pub fn best_index(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (i, member) in self.members.iter().enumerate() {
            if best.is_none_or(|b| member.fitness() > self.members[b].fitness()) {
                best = Some(i);
            }
        }
        best
    }

    /// The highest-fitness member.
    pub fn best(&self) -> Option<&Individual> {
        self.best_index().map(|i| &self.members[i])
    }

    /// Length of the best feasible member, or `f64::INFINITY` if none is feasible.
    pub fn best_feasible_length(&self) -> f64 {
        match self.best() {
            Some(best) if best.is_feasible() => best.length(),
            _ => f64::INFINITY,
        }
    }

    /// Replaces the member at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn replace(&mut self, index: usize, individual: Individual) {
        self.members[index] = individual;
    }

    /// Consumes the population, returning its members.
    pub fn into_members(self) -> Vec<Individual> {
        self.members
    }
}

/// Regenerates the population from scratch when every member is infeasible.
///
/// Returns the (possibly fresh) population and whether it was regenerated.
/// The fresh population has the same size as the one it replaces.
pub fn reinitialize_if_all_infeasible<R: Rng + ?Sized>(
    population: Population,
    problem: &RangeProblem,
    rng: &mut R,
) -> (Population, bool) {
    if population.all_infeasible() {
        let size = population.len();
        (Population::random(problem, size, rng), true)
    } else {
        (population, false)
    }
}
