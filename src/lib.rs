pub mod error;
pub mod evolution;
pub mod individual;
pub mod rng;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{Callback, EvolutionEngine, EvolutionOptions, EvolutionResult, Termination};
pub use individual::{GenePool, Individual, ListIndividual};
