use evolrs::{
    error::{GeneticError, Result},
    evolution::{Callback, EvolutionEngine, EvolutionOptions, GenerationPlan, LogLevel, Termination},
    individual::{GenePool, Individual, ListIndividual},
    rng::RandomNumberGenerator,
    selection::{ElitistSelection, RouletteWheelSelection, SelectionStrategy},
};

// Counts the genes equal to one.
#[derive(Debug)]
struct Ones {
    length: usize,
}

impl GenePool for Ones {
    type Gene = u8;

    fn number_of_genes(&self) -> usize {
        self.length
    }

    fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 {
        rng.gen_range(0..=1)
    }

    fn fitness(&self, chromosome: &[u8]) -> f64 {
        chromosome.iter().filter(|&&gene| gene == 1).count() as f64
    }
}

type Bits = ListIndividual<Ones>;

fn engine(length: usize) -> EvolutionEngine<Bits> {
    EvolutionEngine::new(Ones { length }).unwrap()
}

#[test]
fn test_exact_convergence() {
    let engine = engine(5);
    let options = EvolutionOptions::builder()
        .population_size(50)
        .max_generations(1000)
        .crossover_rate(1.0)
        .mutation_rate(1.0)
        .max_fitness(5.0)
        .log_level(LogLevel::None)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let result = engine.optimize(&options, Callback::Default, &mut rng).unwrap();

    assert_eq!(result.termination, Termination::Converged);
    assert!(result.generations <= 1000);
    let best = result.fittest(engine.species()).unwrap();
    assert_eq!(best.fitness(engine.species()), 5.0);
    assert_eq!(best.chromosome(), &[1, 1, 1, 1, 1]);
}

#[test]
fn test_exhaustion_runs_every_generation() {
    let engine = engine(30);
    let options = EvolutionOptions::builder()
        .population_size(40)
        .max_generations(3)
        .log_level(LogLevel::None)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(1);
    let mut generations = Vec::new();

    let result = engine
        .optimize(
            &options,
            Callback::custom(|_: &[Bits], _: &[f64], generation| generations.push(generation)),
            &mut rng,
        )
        .unwrap();

    assert_eq!(generations, vec![0, 1, 2]);
    assert_eq!(result.termination, Termination::Exhausted);
    assert_eq!(result.generations, 3);
    assert_eq!(result.population.len(), 40);
}

#[test]
fn test_population_and_chromosome_invariants() {
    let engine = engine(9);
    let options = EvolutionOptions::builder()
        .population_size(51)
        .max_generations(25)
        .crossover_rate(0.7)
        .mutation_rate(0.5)
        .preservation_rate(0.1)
        .log_level(LogLevel::None)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(9);
    let mut observed = 0;

    let result = engine
        .optimize(
            &options,
            Callback::custom(|population: &[Bits], fitness: &[f64], _| {
                assert_eq!(population.len(), 51);
                assert_eq!(fitness.len(), 51);
                assert!(population.iter().all(|ind| ind.chromosome().len() == 9));
                observed += 1;
            }),
            &mut rng,
        )
        .unwrap();

    assert_eq!(observed, 25);
    assert_eq!(result.population.len(), 51);
    assert!(result
        .population
        .iter()
        .all(|ind| ind.chromosome().len() == 9));
}

#[test]
fn test_elites_survive_unchanged() {
    let engine = engine(40);
    let options = EvolutionOptions::builder()
        .population_size(30)
        .max_generations(15)
        .crossover_rate(1.0)
        .mutation_rate(1.0)
        .preservation_rate(0.2)
        .log_level(LogLevel::None)
        .build();
    let plan = GenerationPlan::new(&options);
    assert_eq!(plan.old_individuals, 6);

    let mut history: Vec<(Vec<Vec<u8>>, Vec<f64>)> = Vec::new();
    let mut rng = RandomNumberGenerator::from_seed(17);

    engine
        .optimize(
            &options,
            Callback::custom(|population: &[Bits], fitness: &[f64], _| {
                let chromosomes = population.iter().map(|ind| ind.chromosome().to_vec()).collect();
                history.push((chromosomes, fitness.to_vec()));
            }),
            &mut rng,
        )
        .unwrap();

    assert_eq!(history.len(), 15);
    for window in history.windows(2) {
        let (population, fitness) = &window[0];
        let (next_population, _) = &window[1];

        let elites = ElitistSelection::new().rank(fitness, plan.old_individuals);
        for (offset, &idx) in elites.iter().enumerate() {
            assert_eq!(next_population[plan.new_individuals + offset], population[idx]);
        }
    }
}

#[test]
fn test_mutating_clones_leaves_parents_untouched() {
    let engine = engine(12);
    let options = EvolutionOptions::builder()
        .population_size(20)
        .max_generations(8)
        .crossover_rate(0.0)
        .mutation_rate(1.0)
        .preservation_rate(0.5)
        .log_level(LogLevel::None)
        .build();
    let plan = GenerationPlan::new(&options);
    assert_eq!(plan.new_individuals, 10);

    let mut history: Vec<(Vec<Vec<u8>>, Vec<f64>)> = Vec::new();
    let mut rng = RandomNumberGenerator::from_seed(23);

    engine
        .optimize(
            &options,
            Callback::custom(|population: &[Bits], fitness: &[f64], _| {
                let chromosomes = population.iter().map(|ind| ind.chromosome().to_vec()).collect();
                history.push((chromosomes, fitness.to_vec()));
            }),
            &mut rng,
        )
        .unwrap();

    assert_eq!(history.len(), 8);
    for window in history.windows(2) {
        let (population, fitness) = &window[0];
        let (next_population, _) = &window[1];

        // Elites are taken after the offspring were mutated, so they show
        // whether a mutation leaked back into a parent.
        let elites = ElitistSelection::new().rank(fitness, plan.old_individuals);
        for (offset, &idx) in elites.iter().enumerate() {
            assert_eq!(next_population[plan.new_individuals + offset], population[idx]);
        }

        // Every offspring is a clone with at most one gene replaced.
        for child in &next_population[..plan.new_individuals] {
            assert!(population.iter().any(|parent| {
                parent.iter().zip(child).filter(|(a, b)| a != b).count() <= 1
            }));
        }
    }
}

#[test]
fn test_best_fitness_never_drops_with_elitism() {
    let engine = engine(25);
    let options = EvolutionOptions::builder()
        .population_size(20)
        .max_generations(40)
        .preservation_rate(0.1)
        .mutation_rate(1.0)
        .log_level(LogLevel::None)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(5);
    let mut best = Vec::new();

    engine
        .optimize(
            &options,
            Callback::custom(|_: &[Bits], fitness: &[f64], _| {
                best.push(fitness.iter().cloned().fold(f64::NEG_INFINITY, f64::max));
            }),
            &mut rng,
        )
        .unwrap();

    assert!(best.windows(2).all(|pair| pair[1] >= pair[0]));
}

#[test]
fn test_same_seed_same_trajectory() {
    let engine = engine(12);
    let options = EvolutionOptions::builder()
        .population_size(24)
        .max_generations(20)
        .preservation_rate(0.25)
        .log_level(LogLevel::None)
        .build();

    let first = engine
        .optimize(&options, Callback::Default, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();
    let second = engine
        .optimize(&options, Callback::Default, &mut RandomNumberGenerator::from_seed(99))
        .unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_selection_size_mismatch() {
    let mut rng = RandomNumberGenerator::from_seed(2);
    let species = Ones { length: 4 };
    let population: Vec<Bits> = (0..5).map(|_| Bits::new_random(&species, &mut rng)).collect();
    let fitness = vec![1.0; 4];

    let result = RouletteWheelSelection::new().select_one(&population, &fitness, &mut rng);

    assert_eq!(
        result.unwrap_err(),
        GeneticError::SizeMismatch {
            population: 5,
            fitness: 4
        }
    );
}

// Always mates the first individual with itself.
#[derive(Debug)]
struct FirstOnly;

impl SelectionStrategy<Bits> for FirstOnly {
    fn select_one<'a>(
        &self,
        population: &'a [Bits],
        _fitness: &[f64],
        _rng: &mut RandomNumberGenerator,
    ) -> Result<&'a Bits> {
        population.first().ok_or(GeneticError::EmptyPopulation)
    }
}

#[test]
fn test_custom_selection_strategy() {
    let engine = EvolutionEngine::with_selection(Ones { length: 6 }, FirstOnly).unwrap();
    let options = EvolutionOptions::builder()
        .population_size(10)
        .max_generations(2)
        .crossover_rate(0.0)
        .mutation_rate(0.0)
        .log_level(LogLevel::None)
        .build();
    let mut rng = RandomNumberGenerator::from_seed(8);
    let mut first_generation = Vec::new();

    let result = engine
        .optimize(
            &options,
            Callback::custom(|population: &[Bits], _: &[f64], generation| {
                if generation == 0 {
                    first_generation = population.to_vec();
                }
            }),
            &mut rng,
        )
        .unwrap();

    // Without crossover and mutation every child is a clone of the first individual.
    assert!(result
        .population
        .iter()
        .all(|ind| ind == &first_generation[0]));
}
