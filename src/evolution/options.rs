//! # EvolutionOptions
//!
//! The `EvolutionOptions` struct represents the configuration of one call to
//! `EvolutionEngine::optimize`. It is read-only for the duration of the run.
//!
//! ## Example
//!
//! ```rust
//! use evolrs::evolution::options::{EvolutionOptions, LogLevel};
//!
//! // Create a new EvolutionOptions instance with default parameters
//! let default_options = EvolutionOptions::default();
//! assert_eq!(default_options.get_population_size(), 200);
//!
//! // Or configure one fluently
//! let options = EvolutionOptions::builder()
//!     .population_size(50)
//!     .max_generations(300)
//!     .preservation_rate(0.1)
//!     .max_fitness(5.0)
//!     .log_level(LogLevel::None)
//!     .build();
//! assert!(options.validate().is_ok());
//! ```
//!
//! ## Fields
//!
//! - `population_size`: Number of individuals in every generation.
//! - `max_generations`: Generation budget of the run.
//! - `crossover_rate`: Probability that a selected pair is recombined rather than cloned.
//! - `mutation_rate`: Probability that an offspring receives one mutation.
//! - `preservation_rate`: Share of the population carried over unchanged (elitism).
//! - `max_fitness`: Optional fitness threshold that ends the run early.
//! - `offsprings_per_recombination`: Number of children one mating produces.
//! - `log_level`: How much the default progress callback reports.

use crate::error::{GeneticError, Result};

/// Verbosity of the default progress callback.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Reports every individual and its fitness at debug level.
    Verbose,
    /// Reports the maximum fitness of every generation.
    Minimal,
    /// Reports nothing.
    None,
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionOptions {
    population_size: usize,
    max_generations: usize,
    crossover_rate: f64,
    mutation_rate: f64,
    preservation_rate: f64,
    max_fitness: Option<f64>,
    offsprings_per_recombination: usize,
    log_level: LogLevel,
}

impl EvolutionOptions {
    /// Creates a new `EvolutionOptions` instance with all parameters specified.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        population_size: usize,
        max_generations: usize,
        crossover_rate: f64,
        mutation_rate: f64,
        preservation_rate: f64,
        max_fitness: Option<f64>,
        offsprings_per_recombination: usize,
        log_level: LogLevel,
    ) -> Self {
        Self {
            population_size,
            max_generations,
            crossover_rate,
            mutation_rate,
            preservation_rate,
            max_fitness,
            offsprings_per_recombination,
            log_level,
        }
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_max_generations(&self) -> usize {
        self.max_generations
    }

    pub fn get_crossover_rate(&self) -> f64 {
        self.crossover_rate
    }

    pub fn get_mutation_rate(&self) -> f64 {
        self.mutation_rate
    }

    pub fn get_preservation_rate(&self) -> f64 {
        self.preservation_rate
    }

    pub fn get_max_fitness(&self) -> Option<f64> {
        self.max_fitness
    }

    pub fn get_offsprings_per_recombination(&self) -> usize {
        self.offsprings_per_recombination
    }

    pub fn get_log_level(&self) -> LogLevel {
        self.log_level
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the generation budget.
    pub fn set_max_generations(&mut self, max_generations: usize) {
        self.max_generations = max_generations;
    }

    /// Sets the crossover rate.
    pub fn set_crossover_rate(&mut self, crossover_rate: f64) {
        self.crossover_rate = crossover_rate;
    }

    /// Sets the mutation rate.
    pub fn set_mutation_rate(&mut self, mutation_rate: f64) {
        self.mutation_rate = mutation_rate;
    }

    /// Sets the preservation rate.
    pub fn set_preservation_rate(&mut self, preservation_rate: f64) {
        self.preservation_rate = preservation_rate;
    }

    /// Sets or clears the fitness threshold.
    pub fn set_max_fitness(&mut self, max_fitness: Option<f64>) {
        self.max_fitness = max_fitness;
    }

    /// Sets the number of offsprings per recombination.
    pub fn set_offsprings_per_recombination(&mut self, offsprings: usize) {
        self.offsprings_per_recombination = offsprings;
    }

    /// Sets the log level.
    pub fn set_log_level(&mut self, log_level: LogLevel) {
        self.log_level = log_level;
    }

    /// Checks that the options describe a runnable evolution.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::Configuration` if:
    /// - The population size is zero
    /// - Fewer than two offsprings per recombination are requested
    /// - A rate is not a finite number in `[0, 1]`
    /// - The fitness threshold is NaN or infinite
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(GeneticError::Configuration(
                "Population size cannot be zero".to_string(),
            ));
        }

        if self.offsprings_per_recombination < 2 {
            return Err(GeneticError::Configuration(format!(
                "Recombination must produce at least 2 offsprings, got {}",
                self.offsprings_per_recombination
            )));
        }

        for (name, rate) in [
            ("Crossover rate", self.crossover_rate),
            ("Mutation rate", self.mutation_rate),
            ("Preservation rate", self.preservation_rate),
        ] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(GeneticError::Configuration(format!(
                    "{} must lie in [0, 1], got {}",
                    name, rate
                )));
            }
        }

        if let Some(max_fitness) = self.max_fitness.filter(|value| !value.is_finite()) {
            return Err(GeneticError::Configuration(format!(
                "Maximum fitness must be a finite number, got {}",
                max_fitness
            )));
        }

        Ok(())
    }

    /// Returns a builder for creating an `EvolutionOptions` instance.
    ///
    /// # Example
    ///
    /// ```rust
    /// use evolrs::evolution::options::{EvolutionOptions, LogLevel};
    ///
    /// let options = EvolutionOptions::builder()
    ///     .population_size(50)
    ///     .max_generations(200)
    ///     .crossover_rate(1.0)
    ///     .mutation_rate(1.0)
    ///     .log_level(LogLevel::Minimal)
    ///     .build();
    ///
    /// assert_eq!(options.get_offsprings_per_recombination(), 2);
    /// ```
    pub fn builder() -> EvolutionOptionsBuilder {
        EvolutionOptionsBuilder::default()
    }
}

impl Default for EvolutionOptions {
    fn default() -> Self {
        Self {
            population_size: 200,
            max_generations: 1000,
            crossover_rate: 0.8,
            mutation_rate: 0.1,
            preservation_rate: 0.0,
            max_fitness: None,
            offsprings_per_recombination: 2,
            log_level: LogLevel::Minimal,
        }
    }
}

/// Builder for `EvolutionOptions`.
///
/// Provides a fluent interface for constructing `EvolutionOptions` instances.
/// Unset fields take the values of `EvolutionOptions::default()`.
#[derive(Debug, Clone, Default)]
pub struct EvolutionOptionsBuilder {
    population_size: Option<usize>,
    max_generations: Option<usize>,
    crossover_rate: Option<f64>,
    mutation_rate: Option<f64>,
    preservation_rate: Option<f64>,
    max_fitness: Option<f64>,
    offsprings_per_recombination: Option<usize>,
    log_level: Option<LogLevel>,
}

impl EvolutionOptionsBuilder {
    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the generation budget.
    pub fn max_generations(mut self, value: usize) -> Self {
        self.max_generations = Some(value);
        self
    }

    /// Sets the crossover rate.
    pub fn crossover_rate(mut self, value: f64) -> Self {
        self.crossover_rate = Some(value);
        self
    }

    /// Sets the mutation rate.
    pub fn mutation_rate(mut self, value: f64) -> Self {
        self.mutation_rate = Some(value);
        self
    }

    /// Sets the preservation rate.
    pub fn preservation_rate(mut self, value: f64) -> Self {
        self.preservation_rate = Some(value);
        self
    }

    /// Sets the fitness threshold.
    pub fn max_fitness(mut self, value: f64) -> Self {
        self.max_fitness = Some(value);
        self
    }

    /// Sets the number of offsprings per recombination.
    pub fn offsprings_per_recombination(mut self, value: usize) -> Self {
        self.offsprings_per_recombination = Some(value);
        self
    }

    /// Sets the log level.
    pub fn log_level(mut self, value: LogLevel) -> Self {
        self.log_level = Some(value);
        self
    }

    /// Builds the `EvolutionOptions` instance.
    pub fn build(self) -> EvolutionOptions {
        let defaults = EvolutionOptions::default();
        EvolutionOptions {
            population_size: self.population_size.unwrap_or(defaults.population_size),
            max_generations: self.max_generations.unwrap_or(defaults.max_generations),
            crossover_rate: self.crossover_rate.unwrap_or(defaults.crossover_rate),
            mutation_rate: self.mutation_rate.unwrap_or(defaults.mutation_rate),
            preservation_rate: self
                .preservation_rate
                .unwrap_or(defaults.preservation_rate),
            max_fitness: self.max_fitness.or(defaults.max_fitness),
            offsprings_per_recombination: self
                .offsprings_per_recombination
                .unwrap_or(defaults.offsprings_per_recombination),
            log_level: self.log_level.unwrap_or(defaults.log_level),
        }
    }
}
