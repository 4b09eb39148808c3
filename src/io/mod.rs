//! Reading city lists.
//!
//! One city per line: `id x y`, separated by commas, whitespace, or both.
//! Blank lines are skipped. Ids may be written as integral floats (`3.0`).

mod cities;

pub use cities::{load_cities, parse_cities, read_cities};
