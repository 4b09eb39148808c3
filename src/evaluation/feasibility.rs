//! Maximum edge distance feasibility.

use serde::Serialize;

use crate::distance::DistanceMatrix;

/// An edge of a tour that exceeds the maximum allowed distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EdgeViolation {
    /// Position `i` of the edge `(tour[i], tour[(i + 1) % n])`.
    pub position: usize,
    /// City index the edge leaves.
    pub from: usize,
    /// City index the edge enters.
    pub to: usize,
    /// Length of the edge.
    pub distance: f64,
}

/// Returns the first cyclic edge longer than `max_distance`, scanning from
/// position 0, or `None` if the tour is feasible.
///
/// The bound is inclusive: an edge exactly `max_distance` long is allowed.
pub fn find_violation(
    tour: &[usize],
    distances: &DistanceMatrix,
    max_distance: f64,
) -> Option<EdgeViolation> {
    let n = tour.len();
    for i in 0..n {
        let from = tour[i];
        let to = tour[(i + 1) % n];
        let distance = distances.get(from, to);
        if distance > max_distance {
            return Some(EdgeViolation {
                position: i,
                from,
                to,
                distance,
            });
        }
    }
    None
}

/// Returns `true` if every cyclic edge of the tour, including the wrap edge,
/// is at most `max_distance` long. Stops at the first violation.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::City;
/// use u_range_tour::distance::DistanceMatrix;
/// use u_range_tour::evaluation::is_feasible;
///
/// let cities = vec![
///     City::new(0, 0.0, 0.0),
///     City::new(1, 0.0, 10.0),
///     City::new(2, 10.0, 10.0),
///     City::new(3, 10.0, 0.0),
/// ];
/// let dm = DistanceMatrix::from_cities(&cities);
/// assert!(is_feasible(&[0, 1, 2, 3], &dm, 10.0));
/// assert!(!is_feasible(&[0, 2, 1, 3], &dm, 10.0));
/// ```
pub fn is_feasible(tour: &[usize], distances: &DistanceMatrix, max_distance: f64) -> bool {
    find_violation(tour, distances, max_distance).is_none()
}
