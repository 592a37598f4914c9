//! Error types for fitness evaluation

use thiserror::Error;

/// Errors reported by the matchup engine and the fitness evaluator
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FitnessError {
    /// A caller-supplied value violates a precondition
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The evaluator's own configuration is invalid at call time
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}

pub type Result<T> = std::result::Result<T, FitnessError>;
