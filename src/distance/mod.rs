//! Distance model.
//!
//! Provides a dense distance matrix built once per problem, plus the
//! edge and tour length functions every search strategy shares.

mod matrix;

pub use matrix::{edge_distance, tour_length, DistanceMatrix};
