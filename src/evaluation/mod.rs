//! Tour evaluation: feasibility under the maximum edge distance and the
//! fitness derived from it.

mod feasibility;
mod fitness;

pub use feasibility::{find_violation, is_feasible, EdgeViolation};
pub use fitness::{fitness, fitness_from_length, FITNESS_EPSILON};
