//! Tour (cyclic permutation) type.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// An ordered visit sequence over city indices, read as a closed cycle.
///
/// A well-formed tour over `n` cities is a permutation of `0..n`; the edge
/// from the last index back to the first is part of the tour. Operators in
/// this crate preserve that invariant; [`Tour::is_permutation`] checks it.
///
/// # Examples
///
/// ```
/// use u_range_tour::models::Tour;
///
/// let tour = Tour::new(vec![2, 0, 1]);
/// assert_eq!(tour.order(), &[2, 0, 1]);
/// assert!(tour.is_permutation(3));
/// assert!(!Tour::new(vec![0, 0, 1]).is_permutation(3));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tour {
    order: Vec<usize>,
}

impl Tour {
    /// Wraps a visit order without validating it.
    pub fn new(order: Vec<usize>) -> Self {
        Self { order }
    }

    /// The tour `0, 1, ..., n-1`.
    pub fn identity(n: usize) -> Self {
        Self::new((0..n).collect())
    }

    /// A uniformly random permutation of `0..n`.
    pub fn random<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self::new(order)
    }

    /// City indices in visiting order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Mutable access to the visiting order. The length cannot change.
    pub fn order_mut(&mut self) -> &mut [usize] {
        &mut self.order
    }

    /// Consumes the tour, returning the visiting order.
    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Number of cities in the tour.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if the tour visits no cities.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Swaps the cities at positions `i` and `j`.
    ///
    /// # Panics
    ///
    /// Panics if either position is out of bounds.
    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// Returns `true` if this tour contains every index in `0..n` exactly once.
    pub fn is_permutation(&self, n: usize) -> bool {
        if self.order.len() != n {
            return false;
        }
        let mut seen = vec![false; n];
        for &city in &self.order {
            if city >= n || seen[city] {
                return false;
            }
            seen[city] = true;
        }
        true
    }
}

impl From<Vec<usize>> for Tour {
    fn from(order: Vec<usize>) -> Self {
        Self::new(order)
    }
}
