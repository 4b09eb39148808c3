//! Genetic algorithm for range-constrained tours.
//!
//! - [`Individual`] — Tour scored with length and feasibility-gated fitness
//! - [`Population`] — Random initialization, elite lookup, regeneration
//! - [`RouletteWheel`] — Fitness-proportionate parent selection
//! - [`order_crossover`] / [`swap_mutation`] — Permutation operators
//! - [`next_generation`] — One generation transition
//! - [`GeneticSolver`] — The full generational loop

mod evolution;
mod individual;
mod operators;
mod population;
mod runner;
mod selection;

pub use evolution::{next_generation, Transition};
pub use individual::Individual;
pub use operators::{distinct_pair, order_crossover, order_crossover_with_cuts, swap_mutation};
pub use population::{reinitialize_if_all_infeasible, Population};
pub use runner::GeneticSolver;
pub use selection::RouletteWheel;

pub(crate) use runner::{evolve, Evolution};
