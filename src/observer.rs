//! Progress observation.

/// Receives per-generation progress from population-based searches.
///
/// Observers are purely passive: nothing they do feeds back into the search.
/// Any `FnMut(usize, f64)` closure is an observer.
///
/// # Examples
///
/// ```
/// use u_range_tour::ProgressObserver;
///
/// let mut seen = Vec::new();
/// let mut record = |generation: usize, best: f64| seen.push((generation, best));
/// record.on_generation(0, 40.0);
/// assert_eq!(seen, vec![(0, 40.0)]);
/// ```
pub trait ProgressObserver {
    /// Called once per generation with the best feasible tour length so far,
    /// or `f64::INFINITY` if no feasible tour exists yet.
    fn on_generation(&mut self, generation: usize, best_length: f64);
}

impl<F> ProgressObserver for F
where
    F: FnMut(usize, f64),
{
    fn on_generation(&mut self, generation: usize, best_length: f64) {
        self(generation, best_length)
    }
}

/// An observer that ignores all progress.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_generation(&mut self, _generation: usize, _best_length: f64) {}
}
