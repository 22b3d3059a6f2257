pub mod callback;
pub mod engine;
pub mod options;

pub use callback::Callback;
pub use engine::{EvolutionEngine, EvolutionResult, GenerationPlan, Termination};
pub use options::{EvolutionOptions, EvolutionOptionsBuilder, LogLevel};
