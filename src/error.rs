//! Error types for the TSP genetic algorithm.
//!
//! All errors are structural: they are detected synchronously where the
//! violation happens and are never retried.

use thiserror::Error;

/// Errors raised by the distance model, the genetic operators, and the runner.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TspError {
    /// A run parameter or the city table is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A tour is not a permutation of `0..n` (duplicate, missing, or
    /// out-of-range city index).
    ///
    /// Raised by the operators means an internal defect; it is not corrected.
    #[error("invalid tour: {0}")]
    InvalidTour(String),

    /// A tour of zero or non-finite length was met during
    /// fitness-proportional selection, so its reciprocal fitness is undefined.
    #[error("degenerate fitness: tour at index {index} has zero or non-finite length")]
    DegenerateFitness { index: usize },
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TspError>;
