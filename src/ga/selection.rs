//! Fitness-proportionate (roulette-wheel) selection.

use rand::distr::weighted::WeightedIndex;
use rand::distr::Distribution;
use rand::Rng;

use crate::error::{TourError, TourResult};

/// Draws population indices with probability `f_i / Σf`.
///
/// Members with zero fitness are never drawn. The wheel is built once per
/// generation and sampled twice per child; both draws are independent, so
/// the same member may fill both parent slots.
///
/// # Examples
///
/// ```
/// use u_range_tour::ga::RouletteWheel;
///
/// let wheel = RouletteWheel::new(&[0.0, 0.5, 0.0]).unwrap();
/// let mut rng = u_numflow::random::create_rng(42);
/// assert_eq!(wheel.select(&mut rng), 1);
///
/// assert!(RouletteWheel::new(&[0.0, 0.0]).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct RouletteWheel {
    index: WeightedIndex<f64>,
}

impl RouletteWheel {
    /// Builds a wheel over the given fitness values.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::NoFeasibleParents`] if no value is positive (or
    /// the slice is empty, or a value is negative or non-finite).
    pub fn new(fitness: &[f64]) -> TourResult<Self> {
        let index = WeightedIndex::new(fitness).map_err(|_| TourError::NoFeasibleParents)?;
        Ok(Self { index })
    }

    /// Draws one index.
    pub fn select<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index.sample(rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_never_selects_zero_fitness() {
        let wheel = RouletteWheel::new(&[0.0, 1.0, 0.0, 3.0, 0.0]).expect("has positive");
        let mut rng = u_numflow::random::create_rng(11);
        for _ in 0..2000 {
            let i = wheel.select(&mut rng);
            assert!(i == 1 || i == 3, "selected zero-fitness member {i}");
        }
    }

    #[test]
    fn test_selection_is_proportional() {
        let wheel = RouletteWheel::new(&[1.0, 3.0]).expect("valid");
        let mut rng = u_numflow::random::create_rng(5);
        let draws = 20_000;
        let ones = (0..draws).filter(|_| wheel.select(&mut rng) == 1).count();
        let share = ones as f64 / draws as f64;
        assert!((share - 0.75).abs() < 0.03, "share was {share}");
    }

    #[test]
    fn test_rejects_degenerate_weights() {
        assert!(matches!(
            RouletteWheel::new(&[0.0, 0.0, 0.0]),
            Err(TourError::NoFeasibleParents)
        ));
        assert!(RouletteWheel::new(&[]).is_err());
    }
}
