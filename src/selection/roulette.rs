use tracing::trace;

use crate::error::{GeneticError, Result};
use crate::individual::Individual;
use crate::rng::RandomNumberGenerator;
use crate::selection::selection_strategy::SelectionStrategy;

/// A selection strategy that selects individuals through roulette wheel selection.
///
/// Roulette wheel selection (also known as fitness proportionate selection) selects
/// individuals with probability proportional to their fitness. Individuals with higher
/// fitness have a higher chance of being selected.
///
/// Fitness values must be non-negative. This is a precondition and is not
/// validated. When the fitness values sum to zero (common in the first
/// generations of a hard problem) the wheel has no area and the strategy falls
/// back to a uniform choice.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Default)]
pub struct RouletteWheelSelection;

impl RouletteWheelSelection {
    /// Creates a new RouletteWheelSelection strategy.
    pub fn new() -> Self {
        Self
    }

    /// Spins the wheel and returns the index of the selected individual.
    ///
    /// Draws `pick` uniformly from `[0, total)` and returns the first index whose
    /// running fitness sum strictly exceeds `pick`.
    fn spin(&self, fitness: &[f64], rng: &mut RandomNumberGenerator) -> usize {
        let total: f64 = fitness.iter().sum();

        if !(total > 0.0 && total.is_finite()) {
            trace!(total, "degenerate roulette wheel, selecting uniformly");
            return rng.gen_range(0..fitness.len());
        }

        let pick = rng.uniform() * total;
        let mut current = 0.0;
        for (idx, &fit) in fitness.iter().enumerate() {
            current += fit;
            if current > pick {
                return idx;
            }
        }

        // Rounding can leave the running sum just short of `pick`.
        fitness
            .iter()
            .rposition(|&fit| fit > 0.0)
            .unwrap_or(fitness.len() - 1)
    }
}

impl<I> SelectionStrategy<I> for RouletteWheelSelection
where
    I: Individual,
{
    fn select_one<'a>(
        &self,
        population: &'a [I],
        fitness: &[f64],
        rng: &mut RandomNumberGenerator,
    ) -> Result<&'a I> {
        if fitness.len() != population.len() {
            return Err(GeneticError::SizeMismatch {
                population: population.len(),
                fitness: fitness.len(),
            });
        }

        if population.is_empty() {
            return Err(GeneticError::EmptyPopulation);
        }

        Ok(&population[self.spin(fitness, rng)])
    }
}
