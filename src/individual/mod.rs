//! # Individual Trait
//!
//! The `Individual` trait is the capability contract the engine evolves. A type
//! implementing it knows how to create itself at random, score itself, mutate
//! itself and recombine a set of parents into offspring.
//!
//! All operations receive the *species*: one immutable descriptor per run that
//! holds everything the individuals share (chromosome length, gene distribution,
//! fitness target). Individuals never reach for global state.
//!
//! Most problems encode their solution as a fixed-length list of genes. For those,
//! [`list::ListIndividual`] provides the whole contract from a [`list::GenePool`].
//!
//! ## Implementing the Trait
//!
//! ```rust
//! use evolrs::error::{GeneticError, Result};
//! use evolrs::individual::Individual;
//! use evolrs::rng::RandomNumberGenerator;
//!
//! #[derive(Clone, Debug)]
//! struct Bits(Vec<bool>);
//!
//! struct BitsSpecies {
//!     length: usize,
//! }
//!
//! impl Individual for Bits {
//!     type Gene = bool;
//!     type Species = BitsSpecies;
//!
//!     fn new_random(species: &BitsSpecies, rng: &mut RandomNumberGenerator) -> Self {
//!         Bits((0..species.length).map(|_| rng.chance(0.5)).collect())
//!     }
//!
//!     fn fitness(&self, _species: &BitsSpecies) -> f64 {
//!         self.0.iter().filter(|&&bit| bit).count() as f64
//!     }
//!
//!     fn mutate(&mut self, _species: &BitsSpecies, rng: &mut RandomNumberGenerator) {
//!         let pos = rng.gen_range(0..self.0.len());
//!         self.0[pos] = !self.0[pos];
//!     }
//!
//!     fn recombine(
//!         _species: &BitsSpecies,
//!         parents: &[&Self],
//!         _rng: &mut RandomNumberGenerator,
//!     ) -> Result<Vec<Self>> {
//!         match parents {
//!             [a, b] => Ok(vec![(*a).clone(), (*b).clone()]),
//!             _ => Err(GeneticError::InvalidArity { expected: 2, actual: parents.len() }),
//!         }
//!     }
//!
//!     fn chromosome(&self) -> &[bool] {
//!         &self.0
//!     }
//!
//!     fn chromosome_mut(&mut self) -> &mut [bool] {
//!         &mut self.0
//!     }
//! }
//! ```

pub mod list;

use std::fmt::Debug;

use crate::{error::Result, rng::RandomNumberGenerator};

pub use list::{GenePool, ListIndividual};

/// Trait for types that represent one candidate solution.
///
/// `Clone` must be a deep copy: the engine clones parents that are carried into
/// the next generation and then mutates the clone, so a clone may not share
/// chromosome storage with its original.
pub trait Individual: Clone + Debug {
    /// One unit of the chromosome encoding.
    type Gene: Clone + Debug + PartialEq;

    /// The immutable descriptor shared by every individual of a run.
    type Species;

    /// Validates the species the engine is about to be bound to.
    ///
    /// The engine calls this once at construction and reports a failure as
    /// `GeneticError::InvalidArgument`. The default accepts every species.
    fn check_species(_species: &Self::Species) -> Result<()> {
        Ok(())
    }

    /// Creates an individual with an independently randomized chromosome.
    ///
    /// Used to seed the initial population.
    fn new_random(species: &Self::Species, rng: &mut RandomNumberGenerator) -> Self;

    /// Evaluates the fitness of the individual. Higher is better.
    ///
    /// Must be a pure function of the chromosome (and the read-only species). All
    /// individuals of a run have to be comparable on the same scale, and roulette
    /// selection additionally needs the value to be non-negative.
    fn fitness(&self, species: &Self::Species) -> f64;

    /// Mutates the individual in place without changing its chromosome length.
    fn mutate(&mut self, species: &Self::Species, rng: &mut RandomNumberGenerator);

    /// Produces offspring from two or more parents without touching them.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArity` if the implementation cannot handle
    /// the number of parents given.
    fn recombine(
        species: &Self::Species,
        parents: &[&Self],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Self>>;

    /// Returns the gene sequence of the individual.
    fn chromosome(&self) -> &[Self::Gene];

    /// Returns the gene sequence for positional replacement.
    ///
    /// A slice allows genes to be replaced but never added or removed, which keeps
    /// the chromosome length fixed.
    fn chromosome_mut(&mut self) -> &mut [Self::Gene];
}
