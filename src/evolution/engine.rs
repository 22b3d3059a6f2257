use tracing::{debug, info, instrument};

use super::{callback::Callback, options::EvolutionOptions};
use crate::{
    error::{GeneticError, OptionExt, Result},
    individual::Individual,
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, RouletteWheelSelection, SelectionStrategy},
};

/// Why a run stopped.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// An individual reached `max_fitness`.
    Converged,
    /// The generation budget ran out.
    Exhausted,
}

/// Represents the result of an evolution: the final population and how the run ended.
#[derive(Debug, Clone, PartialEq)]
pub struct EvolutionResult<I> {
    /// The final population.
    ///
    /// After convergence this is the population that was evaluated last. After
    /// exhaustion it is the offspring of the last evaluated generation.
    pub population: Vec<I>,
    /// Number of generations whose fitness was evaluated.
    pub generations: usize,
    /// The terminal state of the run.
    pub termination: Termination,
}

impl<I: Individual> EvolutionResult<I> {
    /// Returns the fittest individual of the final population.
    ///
    /// Ties go to the individual that comes first in the population.
    pub fn fittest(&self, species: &I::Species) -> Result<&I> {
        self.population
            .iter()
            .map(|individual| (individual, individual.fitness(species)))
            .fold(None, |best: Option<(&I, f64)>, (individual, score)| match best {
                Some((_, best_score)) if best_score >= score => best,
                _ => Some((individual, score)),
            })
            .map(|(individual, _)| individual)
            .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
    }

    /// Consumes the result and returns the final population.
    pub fn into_population(self) -> Vec<I> {
        self.population
    }
}

/// How each next generation is put together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationPlan {
    /// Offspring produced by reproduction.
    pub new_individuals: usize,
    /// Individuals carried over unchanged by elitism.
    pub old_individuals: usize,
    /// Matings per generation.
    pub recombinations: usize,
}

impl GenerationPlan {
    /// Splits the population into offspring and elites.
    ///
    /// `new_individuals` is `population_size * (1 - preservation_rate)` rounded down
    /// to a multiple of `offsprings_per_recombination`; the remainder is preserved.
    ///
    /// `optimize` only builds a plan from validated options. Called directly on
    /// unvalidated options, an offspring count of zero is treated as one.
    pub fn new(options: &EvolutionOptions) -> Self {
        let population_size = options.get_population_size();
        let offsprings = options.get_offsprings_per_recombination().max(1);

        let share = (population_size as f64 * (1.0 - options.get_preservation_rate())).floor();
        let share = (share.max(0.0) as usize).min(population_size);
        let new_individuals = share - share % offsprings;

        Self {
            new_individuals,
            old_individuals: population_size - new_individuals,
            recombinations: new_individuals / offsprings,
        }
    }
}

/// Drives a generational evolution of one species.
///
/// The engine is bound to a species descriptor at construction and owns no
/// other state, so `optimize` can be called repeatedly. Randomness comes
/// exclusively from the generator handed to `optimize`.
///
/// # Examples
///
/// ```rust
/// use evolrs::evolution::{Callback, EvolutionEngine, EvolutionOptions, LogLevel, Termination};
/// use evolrs::individual::{GenePool, ListIndividual};
/// use evolrs::rng::RandomNumberGenerator;
///
/// #[derive(Debug)]
/// struct Ones;
///
/// impl GenePool for Ones {
///     type Gene = u8;
///     fn number_of_genes(&self) -> usize { 5 }
///     fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 { rng.gen_range(0..=1) }
///     fn fitness(&self, chromosome: &[u8]) -> f64 {
///         chromosome.iter().filter(|&&gene| gene == 1).count() as f64
///     }
/// }
///
/// let engine = EvolutionEngine::<ListIndividual<Ones>>::new(Ones).unwrap();
/// let options = EvolutionOptions::builder()
///     .population_size(50)
///     .max_generations(500)
///     .preservation_rate(0.1)
///     .max_fitness(5.0)
///     .log_level(LogLevel::None)
///     .build();
/// let mut rng = RandomNumberGenerator::from_seed(7);
///
/// let result = engine.optimize(&options, Callback::Default, &mut rng).unwrap();
/// assert_eq!(result.termination, Termination::Converged);
/// ```
pub struct EvolutionEngine<I, S = RouletteWheelSelection>
where
    I: Individual,
{
    species: I::Species,
    selection: S,
    elitism: ElitistSelection,
}

impl<I> EvolutionEngine<I, RouletteWheelSelection>
where
    I: Individual,
{
    /// Creates an engine for `species` with roulette wheel parent selection.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if `I::check_species` rejects the species.
    pub fn new(species: I::Species) -> Result<Self> {
        Self::with_selection(species, RouletteWheelSelection::new())
    }
}

impl<I, S> EvolutionEngine<I, S>
where
    I: Individual,
    S: SelectionStrategy<I>,
{
    /// Creates an engine for `species` with a custom parent selection strategy.
    ///
    /// # Errors
    ///
    /// Returns `GeneticError::InvalidArgument` if `I::check_species` rejects the species.
    pub fn with_selection(species: I::Species, selection: S) -> Result<Self> {
        I::check_species(&species).map_err(|e| match e {
            GeneticError::InvalidArgument(_) => e,
            other => GeneticError::InvalidArgument(other.to_string()),
        })?;

        Ok(Self {
            species,
            selection,
            elitism: ElitistSelection::new(),
        })
    }

    /// The species this engine evolves.
    pub fn species(&self) -> &I::Species {
        &self.species
    }

    /// Evolves a freshly seeded population until it converges or the budget runs out.
    ///
    /// Every generation is evaluated, reported to `callback` and checked against
    /// `max_fitness` before the next one is bred, so fitness is always evaluated at
    /// least once before the run can stop on the threshold.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options are invalid (`Configuration`)
    /// - A fitness evaluation yields NaN or infinity (`FitnessCalculation`)
    /// - Recombination or selection fails (`InvalidArity`, `InvalidSize`, `SizeMismatch`)
    /// - A recombination yields a different number of children than
    ///   `offsprings_per_recombination` (`Configuration`)
    /// - A next generation does not hold exactly `population_size` individuals
    ///   (`InternalConsistency`)
    ///
    /// No population is returned on error.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = options.get_population_size(),
            max_generations = options.get_max_generations()
        )
    )]
    pub fn optimize(
        &self,
        options: &EvolutionOptions,
        mut callback: Callback<'_, I>,
        rng: &mut RandomNumberGenerator,
    ) -> Result<EvolutionResult<I>> {
        options.validate()?;

        let plan = GenerationPlan::new(options);
        debug!(?plan, "seeding population");

        let mut population: Vec<I> = (0..options.get_population_size())
            .map(|_| I::new_random(&self.species, rng))
            .collect();

        for generation in 0..options.get_max_generations() {
            let fitness = self.evaluate(&population)?;

            callback.notify(&population, &fitness, generation, options.get_log_level());

            if let Some(max_fitness) = options.get_max_fitness() {
                let best = fitness.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                if best >= max_fitness {
                    info!(generation, best, "individual reached maximum fitness");
                    return Ok(EvolutionResult {
                        population,
                        generations: generation + 1,
                        termination: Termination::Converged,
                    });
                }
            }

            population = self.next_generation(&population, &fitness, options, &plan, rng)?;
        }

        info!(
            max_generations = options.get_max_generations(),
            "reached max_generations limit"
        );
        Ok(EvolutionResult {
            population,
            generations: options.get_max_generations(),
            termination: Termination::Exhausted,
        })
    }

    /// Scores every individual, keeping population order.
    fn evaluate(&self, population: &[I]) -> Result<Vec<f64>> {
        population
            .iter()
            .map(|individual| {
                let score = individual.fitness(&self.species);
                if !score.is_finite() {
                    return Err(GeneticError::FitnessCalculation(format!(
                        "Non-finite fitness score encountered: {}",
                        score
                    )));
                }
                Ok(score)
            })
            .collect()
    }

    /// Breeds the next generation: offspring first, then the elites.
    fn next_generation(
        &self,
        population: &[I],
        fitness: &[f64],
        options: &EvolutionOptions,
        plan: &GenerationPlan,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<I>> {
        let mut next = Vec::with_capacity(options.get_population_size());

        for _ in 0..plan.recombinations {
            let parents = self.selection.select_parents(population, fitness, rng)?;

            let offspring = if rng.chance(options.get_crossover_rate()) {
                let children = I::recombine(&self.species, &parents, rng)?;
                if children.len() != options.get_offsprings_per_recombination() {
                    return Err(GeneticError::Configuration(format!(
                        "Recombination produced {} offsprings, but offsprings_per_recombination is {}",
                        children.len(),
                        options.get_offsprings_per_recombination()
                    )));
                }
                children
            } else {
                clone_parents(&parents, options.get_offsprings_per_recombination())
            };

            for mut child in offspring {
                if rng.chance(options.get_mutation_rate()) {
                    child.mutate(&self.species, rng);
                }
                next.push(child);
            }
        }

        if plan.old_individuals > 0 {
            next.extend(self.elitism.select(population, fitness, plan.old_individuals)?);
        }

        if next.len() != options.get_population_size() {
            return Err(GeneticError::InternalConsistency {
                expected: options.get_population_size(),
                actual: next.len(),
            });
        }

        Ok(next)
    }
}

/// Deep copies of the parents, cycling through them until `count` children exist.
fn clone_parents<I: Clone>(parents: &[&I], count: usize) -> Vec<I> {
    parents
        .iter()
        .cycle()
        .take(count)
        .map(|&parent| parent.clone())
        .collect()
}
