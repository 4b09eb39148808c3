//! Error types for range-constrained tour search.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TourResult<T> = Result<T, TourError>;

/// Everything that can go wrong while building a problem or searching it.
///
/// Distance, feasibility, and fitness computations are total and never
/// produce an error; failures come from bad input or from a bound on
/// rejection sampling being exhausted.
#[derive(Debug, Error)]
pub enum TourError {
    /// A tour needs at least three cities for crossover and swaps to be defined.
    #[error("at least 3 cities are required, got {count}")]
    TooFewCities {
        /// Number of cities supplied.
        count: usize,
    },

    /// A configuration or problem parameter is out of range.
    #[error("invalid configuration: {message}")]
    InvalidConfig {
        /// What was wrong.
        message: String,
    },

    /// No feasible tour could be sampled within the attempt budget.
    #[error("infeasible problem instance: no feasible tour after {attempts} attempts")]
    InfeasibleInstance {
        /// Number of candidates drawn before giving up.
        attempts: usize,
    },

    /// Proportional selection was asked to draw from a population with no
    /// positive fitness.
    #[error("no feasible individual available for selection")]
    NoFeasibleParents,

    /// A line of a city file could not be parsed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Reading input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON configuration document was malformed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TourError {
    /// Shorthand for [`TourError::InvalidConfig`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            TourError::TooFewCities { count: 2 }.to_string(),
            "at least 3 cities are required, got 2"
        );
        assert_eq!(
            TourError::InfeasibleInstance { attempts: 10 }.to_string(),
            "infeasible problem instance: no feasible tour after 10 attempts"
        );
        assert_eq!(
            TourError::config("bad").to_string(),
            "invalid configuration: bad"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: TourError = io.into();
        assert!(matches!(err, TourError::Io(_)));
    }
}
