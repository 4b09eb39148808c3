//! Hybrid search: the genetic algorithm with periodic hill-climbing polish.
//!
//! Every `hill_climbing_frequency` generations (counting from generation 0),
//! the best member of the freshly evolved population is handed to the
//! [`HillClimber`](crate::local_search::HillClimber) for `polish_iterations`
//! iterations. The polished tour replaces that member, so it is the elite
//! carried into the next generation. Regenerated populations are not polished.

mod runner;

pub use runner::HybridSolver;
