//! Search configuration.

use serde::{Deserialize, Serialize};

use crate::error::{TourError, TourResult};

/// Parameters shared by the genetic, hill-climbing, and hybrid strategies.
///
/// Each strategy reads only the fields it needs. Unspecified fields take
/// their defaults when deserializing.
///
/// # Examples
///
/// ```
/// use u_range_tour::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_max_distance(20.0)
///     .with_population_size(30)
///     .with_generations(200)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.population_size, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Longest leg a feasible tour may contain (inclusive).
    pub max_distance: f64,
    /// Number of tours in each generation.
    pub population_size: usize,
    /// Number of generations to evolve.
    pub generations: usize,
    /// Probability of applying swap mutation to each child.
    pub mutation_rate: f64,
    /// Generations between hill-climbing polishes of the elite (hybrid only).
    pub hill_climbing_frequency: usize,
    /// Iteration budget of standalone hill climbing.
    pub max_iterations: usize,
    /// Iteration budget of each hybrid polish.
    pub polish_iterations: usize,
    /// Cap on candidates drawn when sampling a feasible seed tour, and on
    /// children drawn while filling one generation.
    pub max_attempts: usize,
    /// Seed of the run's random number generator.
    pub seed: u64,
    /// Generations (or iterations) between progress log lines.
    pub log_interval: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_distance: 90.0,
            population_size: 50,
            generations: 1000,
            mutation_rate: 0.05,
            hill_climbing_frequency: 1,
            max_iterations: 1000,
            polish_iterations: 100,
            max_attempts: 100_000,
            seed: 42,
            log_interval: 100,
        }
    }
}

impl SolverConfig {
    /// Sets the maximum leg distance.
    pub fn with_max_distance(mut self, max_distance: f64) -> Self {
        self.max_distance = max_distance;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_generations(mut self, generations: usize) -> Self {
        self.generations = generations;
        self
    }

    /// Sets the mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets how many generations pass between hybrid polishes.
    pub fn with_hill_climbing_frequency(mut self, frequency: usize) -> Self {
        self.hill_climbing_frequency = frequency;
        self
    }

    /// Sets the standalone hill-climbing iteration budget.
    pub fn with_max_iterations(mut self, iterations: usize) -> Self {
        self.max_iterations = iterations;
        self
    }

    /// Sets the per-polish iteration budget of the hybrid strategy.
    pub fn with_polish_iterations(mut self, iterations: usize) -> Self {
        self.polish_iterations = iterations;
        self
    }

    /// Sets the rejection-sampling cap.
    pub fn with_max_attempts(mut self, attempts: usize) -> Self {
        self.max_attempts = attempts;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the progress log interval. Zero disables progress lines.
    pub fn with_log_interval(mut self, interval: usize) -> Self {
        self.log_interval = interval;
        self
    }

    /// Parses a JSON configuration document and validates it.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::Json`] on malformed input and
    /// [`TourError::InvalidConfig`] if validation fails.
    pub fn from_json(json: &str) -> TourResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidConfig`] naming the first bad parameter.
    pub fn validate(&self) -> TourResult<()> {
        if !self.max_distance.is_finite() || self.max_distance < 0.0 {
            return Err(TourError::config(format!(
                "max_distance must be finite and non-negative, got {}",
                self.max_distance
            )));
        }
        if self.population_size < 2 {
            return Err(TourError::config(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(TourError::config(format!(
                "mutation_rate must lie in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if self.hill_climbing_frequency == 0 {
            return Err(TourError::config("hill_climbing_frequency must be positive"));
        }
        if self.max_attempts == 0 {
            return Err(TourError::config("max_attempts must be positive"));
        }
        Ok(())
    }

    /// Whether a progress line is due at this generation or iteration.
    pub(crate) fn should_log(&self, step: usize) -> bool {
        self.log_interval > 0 && step % self.log_interval == 0
    }
}
