use std::fmt::Debug;

use crate::error::Result;
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;

/// Trait for parent selection strategies.
///
/// A selection strategy picks individuals for mating from the current population
/// based on the fitness vector recorded for this generation. Selected parents are
/// returned by reference; the engine decides whether they get recombined or
/// cloned.
///
/// # Examples
///
/// ```
/// use evolrs::individual::{GenePool, ListIndividual};
/// use evolrs::selection::{RouletteWheelSelection, SelectionStrategy};
/// use evolrs::rng::RandomNumberGenerator;
/// use evolrs::error::Result;
///
/// #[derive(Debug)]
/// struct Bytes;
///
/// impl GenePool for Bytes {
///     type Gene = u8;
///     fn number_of_genes(&self) -> usize { 2 }
///     fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 { rng.gen_range(0..=255) }
///     fn fitness(&self, chromosome: &[u8]) -> f64 { chromosome[0] as f64 }
/// }
///
/// fn main() -> Result<()> {
///     let population = vec![
///         ListIndividual::<Bytes>::from_chromosome(vec![1, 0]),
///         ListIndividual::<Bytes>::from_chromosome(vec![2, 0]),
///         ListIndividual::<Bytes>::from_chromosome(vec![3, 0]),
///     ];
///     let fitness = vec![1.0, 2.0, 3.0];
///     let mut rng = RandomNumberGenerator::from_seed(42);
///
///     let selection = RouletteWheelSelection::new();
///     let [mother, father] = selection.select_parents(&population, &fitness, &mut rng)?;
///
///     assert!(population.contains(mother));
///     assert!(population.contains(father));
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy<I>: Debug
where
    I: Individual,
{
    /// Selects one individual from the population.
    ///
    /// # Arguments
    ///
    /// * `population` - The current population of individuals.
    /// * `fitness` - The fitness scores corresponding to each individual in the population.
    /// * `rng` - The random number generator of the run.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The fitness vector length doesn't match the population length
    /// - The population is empty
    fn select_one<'a>(
        &self,
        population: &'a [I],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a I>;

    /// Selects a mating pair by calling `select_one` twice independently.
    ///
    /// Both draws may land on the same individual; self-pairing is allowed.
    fn select_parents<'a>(
        &self,
        population: &'a [I],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<[&'a I; 2]> {
        let first = self.select_one(population, fitness, rng)?;
        let second = self.select_one(population, fitness, rng)?;
        Ok([first, second])
    }
}
