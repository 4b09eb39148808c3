//! Permutation operators: ordered crossover and swap mutation.
//!
//! All operators take and return raw visit orders (`&[usize]` / `Vec<usize>`)
//! and preserve the permutation invariant as long as their inputs hold it.

use rand::seq::index;
use rand::Rng;

/// Draws two distinct positions in `0..n`, in draw order.
///
/// # Panics
///
/// Panics if `n < 2`.
pub fn distinct_pair<R: Rng + ?Sized>(n: usize, rng: &mut R) -> (usize, usize) {
    let picked = index::sample(rng, n, 2);
    (picked.index(0), picked.index(1))
}

/// Ordered crossover (OX) with randomly drawn cut points.
///
/// Draws two distinct positions, sorts them into `start < end`, and
/// delegates to [`order_crossover_with_cuts`].
///
/// # Examples
///
/// ```
/// use u_range_tour::ga::order_crossover;
///
/// let mut rng = u_numflow::random::create_rng(42);
/// let mut child = order_crossover(&[0, 1, 2, 3, 4], &[4, 3, 2, 1, 0], &mut rng);
/// child.sort();
/// assert_eq!(child, vec![0, 1, 2, 3, 4]);
/// ```
pub fn order_crossover<R: Rng + ?Sized>(
    parent1: &[usize],
    parent2: &[usize],
    rng: &mut R,
) -> Vec<usize> {
    let (a, b) = distinct_pair(parent1.len(), rng);
    order_crossover_with_cuts(parent1, parent2, a.min(b), a.max(b))
}

/// Ordered crossover (OX) with explicit cut points.
///
/// Copies `parent1[start..=end]` into the same positions of the child, then
/// fills the remaining positions cyclically from `end + 1`, taking the genes
/// of `parent2` in `parent2`'s own order (from its first position) and
/// skipping genes already placed. Cut points given in reverse order are
/// swapped; `start == end` copies a single gene.
///
/// # Panics
///
/// Panics if a cut point is out of bounds or the parents are not
/// permutations of `0..n` of equal length.
///
/// # Examples
///
/// ```
/// use u_range_tour::ga::order_crossover_with_cuts;
///
/// let child = order_crossover_with_cuts(
///     &[0, 1, 2, 3, 4, 5, 6, 7],
///     &[7, 6, 5, 4, 3, 2, 1, 0],
///     2,
///     4,
/// );
/// // Segment [2, 3, 4] kept in place; fill starts at position 5.
/// assert_eq!(child, vec![1, 0, 2, 3, 4, 7, 6, 5]);
/// ```
pub fn order_crossover_with_cuts(
    parent1: &[usize],
    parent2: &[usize],
    start: usize,
    end: usize,
) -> Vec<usize> {
    let n = parent1.len();
    let (start, end) = if start <= end { (start, end) } else { (end, start) };

    let mut child = vec![usize::MAX; n];
    let mut placed = vec![false; n];
    for pos in start..=end {
        child[pos] = parent1[pos];
        placed[parent1[pos]] = true;
    }

    let mut pos = (end + 1) % n;
    for &gene in parent2 {
        if !placed[gene] {
            child[pos] = gene;
            placed[gene] = true;
            pos = (pos + 1) % n;
        }
    }
    child
}

/// Swap mutation: with probability `rate`, swaps two distinct random
/// positions. Returns `true` if a swap was made.
///
/// The coin flip is always drawn; positions are drawn only when it succeeds.
pub fn swap_mutation<R: Rng + ?Sized>(tour: &mut [usize], rate: f64, rng: &mut R) -> bool {
    if rng.random::<f64>() >= rate || tour.len() < 2 {
        return false;
    }
    let (i, j) = distinct_pair(tour.len(), rng);
    tour.swap(i, j);
    true
}
