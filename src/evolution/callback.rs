//! # Progress Callback
//!
//! After every fitness evaluation the engine hands the population, its fitness
//! vector and the generation index to a [`Callback`]. The callback only gets
//! shared references, so it can observe a run but never alter it.
//!
//! ```rust
//! use evolrs::evolution::{Callback, EvolutionEngine, EvolutionOptions, LogLevel};
//! use evolrs::individual::{GenePool, ListIndividual};
//! use evolrs::rng::RandomNumberGenerator;
//!
//! #[derive(Debug)]
//! struct Bits;
//!
//! impl GenePool for Bits {
//!     type Gene = u8;
//!     fn number_of_genes(&self) -> usize { 4 }
//!     fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 { rng.gen_range(0..=1) }
//!     fn fitness(&self, chromosome: &[u8]) -> f64 { chromosome.iter().map(|&g| g as f64).sum() }
//! }
//!
//! let engine = EvolutionEngine::<ListIndividual<Bits>>::new(Bits).unwrap();
//! let options = EvolutionOptions::builder()
//!     .population_size(20)
//!     .max_generations(5)
//!     .log_level(LogLevel::None)
//!     .build();
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let mut history = Vec::new();
//! let callback = Callback::custom(|_population: &[ListIndividual<Bits>], fitness: &[f64], generation| {
//!     history.push((generation, fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max)));
//! });
//! engine.optimize(&options, callback, &mut rng).unwrap();
//!
//! let generations: Vec<usize> = history.iter().map(|&(generation, _)| generation).collect();
//! assert_eq!(generations, vec![0, 1, 2, 3, 4]);
//! ```

use std::fmt;

use tracing::{debug, info};

use super::options::LogLevel;
use crate::individual::Individual;

/// Observer notified once per generation, before reproduction.
pub enum Callback<'a, I> {
    /// Reports the maximum fitness and the generation index through `tracing`,
    /// as detailed as the run's `LogLevel` asks for.
    Default,
    /// A user supplied function receiving `(population, fitness, generation)`.
    Custom(Box<dyn FnMut(&[I], &[f64], usize) + 'a>),
}

impl<'a, I: Individual> Callback<'a, I> {
    /// Wraps a closure as a custom callback.
    pub fn custom<F>(callback: F) -> Self
    where
        F: FnMut(&[I], &[f64], usize) + 'a,
    {
        Self::Custom(Box::new(callback))
    }

    pub(crate) fn notify(
        &mut self,
        population: &[I],
        fitness: &[f64],
        generation: usize,
        log_level: LogLevel,
    ) {
        match self {
            Self::Custom(callback) => callback(population, fitness, generation),
            Self::Default => report(population, fitness, generation, log_level),
        }
    }
}

impl<I> Default for Callback<'_, I> {
    fn default() -> Self {
        Self::Default
    }
}

impl<I> fmt::Debug for Callback<'_, I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("Callback::Default"),
            Self::Custom(_) => f.write_str("Callback::Custom(..)"),
        }
    }
}

fn report<I: Individual>(population: &[I], fitness: &[f64], generation: usize, log_level: LogLevel) {
    match log_level {
        LogLevel::None => {}
        LogLevel::Minimal => {
            info!(generation, max_fitness = max_fitness(fitness), "generation evaluated");
        }
        LogLevel::Verbose => {
            info!(generation, max_fitness = max_fitness(fitness), "generation evaluated");
            population
                .iter()
                .zip(fitness)
                .for_each(|(individual, score)| debug!(generation, ?individual, score));
        }
    }
}

fn max_fitness(fitness: &[f64]) -> f64 {
    fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}
