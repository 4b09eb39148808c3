//! Search outcome types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TourError;

use super::Tour;

/// Which search strategy produced a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Evolutionary search only.
    Genetic,
    /// Standalone swap hill climbing from a random feasible tour.
    HillClimbing,
    /// Evolutionary search with periodic hill-climbing polish of the elite.
    Hybrid,
}

impl Strategy {
    /// Stable lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Genetic => "genetic",
            Self::HillClimbing => "hill-climbing",
            Self::Hybrid => "hybrid",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "genetic" | "ga" => Ok(Self::Genetic),
            "hill-climbing" | "hill" | "hc" => Ok(Self::HillClimbing),
            "hybrid" => Ok(Self::Hybrid),
            other => Err(TourError::config(format!("unknown strategy '{other}'"))),
        }
    }
}

/// The best tour a search run found.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::{Solution, Strategy, Tour};
///
/// let sol = Solution::new(Strategy::Genetic, Tour::new(vec![0, 1, 2]), 12.0, true);
/// assert_eq!(sol.length(), 12.0);
/// assert!(sol.is_feasible());
/// assert_eq!(sol.reinitializations(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Solution {
    strategy: Strategy,
    tour: Tour,
    length: f64,
    feasible: bool,
    reinitializations: usize,
    #[serde(default)]
    city_ids: Vec<usize>,
}

impl Solution {
    /// Creates a solution record.
    pub fn new(strategy: Strategy, tour: Tour, length: f64, feasible: bool) -> Self {
        Self {
            strategy,
            tour,
            length,
            feasible,
            reinitializations: 0,
            city_ids: Vec::new(),
        }
    }

    /// Attaches the ids of the visited cities, in tour order.
    pub fn with_city_ids(mut self, city_ids: Vec<usize>) -> Self {
        self.city_ids = city_ids;
        self
    }

    /// Records how many times the population was regenerated during the run.
    pub fn with_reinitializations(mut self, count: usize) -> Self {
        self.reinitializations = count;
        self
    }

    /// Strategy that produced this solution.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Best tour found.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Closed-cycle length of the best tour.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Whether the best tour satisfies the maximum edge distance.
    ///
    /// Only population-based runs can end infeasible, when every generation
    /// had to be regenerated.
    pub fn is_feasible(&self) -> bool {
        self.feasible
    }

    /// Number of whole-population regenerations.
    pub fn reinitializations(&self) -> usize {
        self.reinitializations
    }

    /// City ids in tour order, for reporting.
    pub fn city_ids(&self) -> &[usize] {
        &self.city_ids
    }

    /// Consumes the solution, returning `(tour, length)`.
    pub fn into_parts(self) -> (Tour, f64) {
        (self.tour, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_round_trip_names() {
        for s in [Strategy::Genetic, Strategy::HillClimbing, Strategy::Hybrid] {
            assert_eq!(s.as_str().parse::<Strategy>().expect("known"), s);
        }
        assert_eq!("GA".parse::<Strategy>().expect("alias"), Strategy::Genetic);
        assert!("annealing".parse::<Strategy>().is_err());
    }

    #[test]
    fn test_strategy_serde_name() {
        let json = serde_json::to_string(&Strategy::HillClimbing).expect("serialize");
        assert_eq!(json, "\"hill-climbing\"");
    }

    #[test]
    fn test_solution_accessors() {
        let sol = Solution::new(Strategy::Hybrid, Tour::new(vec![2, 0, 1]), 7.5, false)
            .with_reinitializations(3)
            .with_city_ids(vec![12, 10, 11]);
        assert_eq!(sol.strategy(), Strategy::Hybrid);
        assert_eq!(sol.city_ids(), &[12, 10, 11]);
        assert_eq!(sol.tour().order(), &[2, 0, 1]);
        assert!(!sol.is_feasible());
        assert_eq!(sol.reinitializations(), 3);
        let (tour, length) = sol.into_parts();
        assert_eq!(tour.len(), 3);
        assert_eq!(length, 7.5);
    }
}
