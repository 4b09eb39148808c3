//! Feasibility-gated fitness.

use crate::distance::{tour_length, DistanceMatrix};

use super::is_feasible;

/// Added to the tour length before inversion so a zero-length tour still
/// has finite fitness.
pub const FITNESS_EPSILON: f64 = 1e-6;

/// Fitness of a tour: `1 / (length + ε)` if feasible, exactly `0.0` otherwise.
///
/// Zero is a sentinel meaning "excluded from selection", not "poor quality".
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
/// use u_range_tour::distance::DistanceMatrix;
/// use u_range_tour::evaluation::fitness;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!(fitness(&[0, 1, 2, 3], &dm, 20.0) > 0.0);
/// assert_eq!(fitness(&[0, 1, 2, 3], &dm, 5.0), 0.0);
/// ```
pub fn fitness(tour: &[usize], distances: &DistanceMatrix, max_distance: f64) -> f64 {
    if is_feasible(tour, distances, max_distance) {
        fitness_from_length(tour_length(tour, distances))
    } else {
        0.0
    }
}

/// Fitness of a tour already known to be feasible with the given length.
pub fn fitness_from_length(length: f64) -> f64 {
    1.0 / (length + FITNESS_EPSILON)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::City;

    fn square() -> DistanceMatrix {
        DistanceMatrix::from_cities(&[
            City::new(0, 0.0, 0.0),
            City::new(1, 0.0, 10.0),
            City::new(2, 10.0, 10.0),
            City::new(3, 10.0, 0.0),
        ])
    }

    #[test]
    fn test_feasible_fitness_is_inverse_length() {
        let f = fitness(&[0, 1, 2, 3], &square(), 20.0);
        assert!((f - 1.0 / (40.0 + FITNESS_EPSILON)).abs() < 1e-15);
    }

    #[test]
    fn test_infeasible_fitness_is_exactly_zero() {
        assert_eq!(fitness(&[0, 2, 1, 3], &square(), 10.0), 0.0);
    }

    #[test]
    fn test_shorter_tour_is_fitter() {
        let dm = square();
        assert!(fitness(&[0, 1, 2, 3], &dm, 20.0) > fitness(&[0, 2, 1, 3], &dm, 20.0));
    }

    #[test]
    fn test_zero_length_tour_is_finite() {
        let dm = DistanceMatrix::from_cities(&[
            City::new(0, 1.0, 1.0),
            City::new(1, 1.0, 1.0),
            City::new(2, 1.0, 1.0),
        ]);
        let f = fitness(&[0, 1, 2], &dm, 0.0);
        assert!(f.is_finite());
        assert!(f > 0.0);
    }
}
