//! Local search for range-constrained tours.
//!
//! - [`HillClimber`] — Randomized swap hill climbing with feasibility-gated,
//!   strictly improving acceptance
//! - [`random_feasible_tour`] — Bounded rejection sampling of a starting tour

mod hill_climbing;

pub use hill_climbing::{random_feasible_tour, Climb, HillClimber};
