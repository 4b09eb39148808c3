//! Domain model types for range-constrained tours.
//!
//! Provides the core abstractions: cities with coordinates, tours as cyclic
//! permutations of city indices, the problem instance that binds cities to a
//! maximum leg distance, and the solution record returned by every strategy.

mod city;
mod problem;
mod solution;
mod tour;

pub use city::City;
pub use problem::RangeProblem;
pub use solution::{Solution, Strategy};
pub use tour::Tour;
