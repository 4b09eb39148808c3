//! # u-range-tour
//!
//! Range-constrained tour search: find a short closed tour over a fixed set
//! of 2-D points such that every leg, including the return leg, is no longer
//! than a maximum distance (for example a drone's range).
//!
//! ## Modules
//!
//! - [`models`] — Domain types (City, Tour, RangeProblem, Solution, Strategy)
//! - [`distance`] — Distance matrix and tour length
//! - [`evaluation`] — Maximum-edge feasibility and fitness
//! - [`ga`] — Genetic algorithm (roulette selection, OX, swap mutation, elitism)
//! - [`local_search`] — Swap hill climbing
//! - [`hybrid`] — Genetic algorithm with periodic hill-climbing polish
//! - [`io`] — City list parsing
//!
//! ## Quick start
//!
//! ```
//! use u_range_tour::models::{City, Strategy};
//! use u_range_tour::{run, SolverConfig};
//!
//! let cities = vec![
//!     City::new(1, 0.0, 0.0),
//!     City::new(2, 0.0, 10.0),
//!     City::new(3, 10.0, 10.0),
//!     City::new(4, 10.0, 0.0),
//! ];
//! let config = SolverConfig::default()
//!     .with_max_distance(20.0)
//!     .with_population_size(20)
//!     .with_generations(30);
//!
//! let solution = run(&cities, &config, Strategy::Hybrid).unwrap();
//! assert!(solution.is_feasible());
//! assert!((solution.length() - 40.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod distance;
pub mod error;
pub mod evaluation;
pub mod ga;
pub mod hybrid;
pub mod io;
pub mod local_search;
pub mod models;
pub mod observer;
pub mod solver;

pub use config::SolverConfig;
pub use error::{TourError, TourResult};
pub use observer::{NoopObserver, ProgressObserver};
pub use solver::{run, run_with_rng, solve};
