use std::cmp::Ordering;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;

/// Selects the fittest individuals of a generation for carry-over.
///
/// This strategy ranks individuals by the recorded fitness vector and returns
/// deep copies of the top N. It implements elitism: the best solutions found so
/// far survive into the next generation unchanged.
///
/// Ranking is stable. Among individuals with equal fitness the one with the lower
/// population index wins, and NaN ranks below every number.
///
/// # Examples
///
/// ```
/// use evolrs::individual::{GenePool, Individual, ListIndividual};
/// use evolrs::selection::ElitistSelection;
/// use evolrs::rng::RandomNumberGenerator;
/// use evolrs::error::Result;
///
/// #[derive(Debug)]
/// struct Bytes;
///
/// impl GenePool for Bytes {
///     type Gene = u8;
///     fn number_of_genes(&self) -> usize { 1 }
///     fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 { rng.gen_range(0..=255) }
///     fn fitness(&self, chromosome: &[u8]) -> f64 { chromosome[0] as f64 }
/// }
///
/// fn main() -> Result<()> {
///     let population: Vec<ListIndividual<Bytes>> = vec![
///         ListIndividual::from_chromosome(vec![1]),
///         ListIndividual::from_chromosome(vec![2]),
///         ListIndividual::from_chromosome(vec![3]),
///     ];
///     let fitness = vec![0.5, 0.8, 0.3];
///
///     let selected = ElitistSelection::new().select(&population, &fitness, 2)?;
///
///     assert_eq!(selected.len(), 2);
///     assert_eq!(selected[0].chromosome(), &[2]); // Highest fitness (0.8)
///     assert_eq!(selected[1].chromosome(), &[1]); // Second highest fitness (0.5)
///     Ok(())
/// }
/// ```
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct ElitistSelection;

impl ElitistSelection {
    pub fn new() -> Self {
        Self
    }

    /// Returns the indices of the `num_to_select` fittest individuals, best first.
    pub fn rank(&self, fitness: &[f64], num_to_select: usize) -> Vec<usize> {
        let mut indexed_fitness: Vec<(usize, f64)> = fitness.iter().copied().enumerate().collect();

        // `sort_by` is stable, so equal scores keep their population order.
        indexed_fitness.sort_by(|a, b| {
            b.1.partial_cmp(&a.1).unwrap_or_else(|| {
                if a.1.is_nan() && !b.1.is_nan() {
                    Ordering::Greater
                } else if b.1.is_nan() && !a.1.is_nan() {
                    Ordering::Less
                } else {
                    Ordering::Equal
                }
            })
        });

        indexed_fitness
            .into_iter()
            .take(num_to_select)
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Returns deep copies of the `num_to_select` fittest individuals, best first.
    ///
    /// If `num_to_select` exceeds the population size the whole population is
    /// returned in rank order.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::SizeMismatch` if the fitness vector length doesn't
    /// match the population length.
    pub fn select<I: Individual>(
        &self,
        population: &[I],
        fitness: &[f64],
        num_to_select: usize,
    ) -> Result<Vec<I>> {
        if fitness.len() != population.len() {
            return Err(GeneticError::SizeMismatch {
                population: population.len(),
                fitness: fitness.len(),
            });
        }

        Ok(self
            .rank(fitness, num_to_select)
            .into_iter()
            .map(|idx| population[idx].clone())
            .collect())
    }
}
