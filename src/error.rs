//! # Error Types
//!
//! This module defines the error type shared by every part of the library.
//! Every variant is fail-fast: the engine never retries or repairs, it
//! propagates the error out of `optimize` and drops the population.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use evolrs::error::{GeneticError, Result};
//!
//! fn check_parents(count: usize) -> Result<()> {
//!     if count != 2 {
//!         return Err(GeneticError::InvalidArity { expected: 2, actual: count });
//!     }
//!     Ok(())
//! }
//!
//! assert!(check_parents(2).is_ok());
//! assert!(check_parents(3).is_err());
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use evolrs::error::{GeneticError, OptionExt};
//!
//! fn find_best_candidate(candidates: &[i32]) -> evolrs::error::Result<i32> {
//!     candidates.iter().max().cloned().ok_or_else_genetic(||
//!         GeneticError::EmptyPopulation
//!     )
//! }
//! ```

use thiserror::Error;

/// Represents errors that can occur while evolving a population.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// The engine was bound to a species descriptor that cannot produce individuals.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Recombination was invoked with a parent count it cannot handle.
    #[error("Invalid arity: recombination expects {expected} parents, got {actual}")]
    InvalidArity { expected: usize, actual: usize },

    /// A chromosome is too short for the requested operation.
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    /// Two sequences that must run in lock-step have different lengths.
    #[error("Size mismatch: population has {population} entries but fitness has {fitness}")]
    SizeMismatch { population: usize, fitness: usize },

    /// The next generation does not have the configured size. Always a logic defect.
    #[error(
        "Internal consistency error: next generation holds {actual} individuals, expected {expected}"
    )]
    InternalConsistency { expected: usize, actual: usize },

    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation yields NaN or infinity.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),
}

/// A specialized Result type for evolution operations.
///
/// This type is a convenience wrapper around `std::result::Result` with the error type
/// fixed to `GeneticError`.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use evolrs::error::{GeneticError, OptionExt};
///
/// let empty: Vec<f64> = Vec::new();
/// let best = empty.first().ok_or_else_genetic(|| GeneticError::EmptyPopulation);
/// assert_eq!(best, Err(GeneticError::EmptyPopulation));
/// ```
pub trait OptionExt<T> {
    /// Converts an `Option<T>` to a `Result<T, GeneticError>` using
    /// a closure to generate the error.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
