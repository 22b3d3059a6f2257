//! # List Chromosomes
//!
//! Default policy for individuals whose genetic material is an ordered,
//! fixed-length list of genes. A problem only describes its [`GenePool`]
//! (how many genes, how to draw one, how to score a chromosome) and gets a
//! complete [`Individual`] in [`ListIndividual`]:
//!
//! - genesis draws `number_of_genes()` independent genes,
//! - mutation replaces one uniformly chosen gene with a fresh draw,
//! - recombination is homologous single-point crossover of two parents into
//!   two children.
//!
//! ## Example
//!
//! ```rust
//! use evolrs::individual::{GenePool, Individual, ListIndividual};
//! use evolrs::rng::RandomNumberGenerator;
//!
//! #[derive(Debug)]
//! struct Ones {
//!     length: usize,
//! }
//!
//! impl GenePool for Ones {
//!     type Gene = u8;
//!
//!     fn number_of_genes(&self) -> usize {
//!         self.length
//!     }
//!
//!     fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> u8 {
//!         rng.gen_range(0..=1)
//!     }
//!
//!     fn fitness(&self, chromosome: &[u8]) -> f64 {
//!         chromosome.iter().filter(|&&gene| gene == 1).count() as f64
//!     }
//! }
//!
//! let species = Ones { length: 8 };
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let individual = ListIndividual::new_random(&species, &mut rng);
//! assert_eq!(individual.chromosome().len(), 8);
//! ```

use std::fmt::{self, Debug};

use super::Individual;
use crate::{
    error::{GeneticError, Result},
    rng::RandomNumberGenerator,
};

/// Species descriptor for list-chromosome individuals.
///
/// One gene pool is shared read-only by every individual of a run.
pub trait GenePool {
    type Gene: Clone + Debug + PartialEq;

    /// Number of genes in every chromosome of the species.
    fn number_of_genes(&self) -> usize;

    /// Draws one gene from the gene pool.
    fn pick_random_gene(&self, rng: &mut RandomNumberGenerator) -> Self::Gene;

    /// Scores a chromosome. Higher is better.
    fn fitness(&self, chromosome: &[Self::Gene]) -> f64;
}

/// An individual whose chromosome is a list of genes drawn from `P`.
pub struct ListIndividual<P: GenePool> {
    chromosome: Vec<P::Gene>,
}

impl<P: GenePool> ListIndividual<P> {
    /// Creates an individual from a predefined chromosome.
    ///
    /// Offspring are built this way. The caller is responsible for handing in a
    /// chromosome of the species' length.
    pub fn from_chromosome(chromosome: Vec<P::Gene>) -> Self {
        Self { chromosome }
    }

    /// Consumes the individual and returns its chromosome.
    pub fn into_chromosome(self) -> Vec<P::Gene> {
        self.chromosome
    }
}

impl<P: GenePool> Clone for ListIndividual<P> {
    fn clone(&self) -> Self {
        Self {
            chromosome: self.chromosome.clone(),
        }
    }
}

impl<P: GenePool> Debug for ListIndividual<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListIndividual")
            .field("chromosome", &self.chromosome)
            .finish()
    }
}

impl<P: GenePool> PartialEq for ListIndividual<P> {
    fn eq(&self, other: &Self) -> bool {
        self.chromosome == other.chromosome
    }
}

impl<P: GenePool> Individual for ListIndividual<P> {
    type Gene = P::Gene;
    type Species = P;

    fn check_species(species: &P) -> Result<()> {
        if species.number_of_genes() == 0 {
            return Err(GeneticError::InvalidArgument(
                "Gene pool must describe at least one gene".to_string(),
            ));
        }
        Ok(())
    }

    fn new_random(species: &P, rng: &mut RandomNumberGenerator) -> Self {
        let chromosome = (0..species.number_of_genes())
            .map(|_| species.pick_random_gene(rng))
            .collect();
        Self { chromosome }
    }

    fn fitness(&self, species: &P) -> f64 {
        species.fitness(&self.chromosome)
    }

    fn mutate(&mut self, species: &P, rng: &mut RandomNumberGenerator) {
        point_mutation(&mut self.chromosome, species, rng);
    }

    fn recombine(
        _species: &P,
        parents: &[&Self],
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Self>> {
        let [first, second] = parents else {
            return Err(GeneticError::InvalidArity {
                expected: 2,
                actual: parents.len(),
            });
        };

        let (child1, child2) = single_point_crossover(&first.chromosome, &second.chromosome, rng)?;
        Ok(vec![
            Self::from_chromosome(child1),
            Self::from_chromosome(child2),
        ])
    }

    fn chromosome(&self) -> &[P::Gene] {
        &self.chromosome
    }

    fn chromosome_mut(&mut self) -> &mut [P::Gene] {
        &mut self.chromosome
    }
}

/// Replaces the gene at one uniformly random position with a fresh draw from the pool.
///
/// An empty chromosome is left untouched.
pub fn point_mutation<P: GenePool>(
    chromosome: &mut [P::Gene],
    pool: &P,
    rng: &mut RandomNumberGenerator,
) {
    if chromosome.is_empty() {
        return;
    }
    let pos = rng.gen_range_inclusive(0, chromosome.len() - 1);
    chromosome[pos] = pool.pick_random_gene(rng);
}

/// Homologous single-point crossover of two parents into two children.
///
/// The split point is drawn uniformly from `[1, L-1]`, so both children always
/// take at least one gene from each parent.
///
/// # Errors
///
/// - `GeneticError::SizeMismatch` if the parents have different lengths.
/// - `GeneticError::InvalidSize` if the chromosomes hold fewer than two genes.
pub fn single_point_crossover<G: Clone>(
    parent1: &[G],
    parent2: &[G],
    rng: &mut RandomNumberGenerator,
) -> Result<(Vec<G>, Vec<G>)> {
    if parent1.len() != parent2.len() {
        return Err(GeneticError::SizeMismatch {
            population: parent1.len(),
            fitness: parent2.len(),
        });
    }

    let num_genes = parent1.len();
    if num_genes < 2 {
        return Err(GeneticError::InvalidSize(format!(
            "Single-point crossover needs at least 2 genes, got {}",
            num_genes
        )));
    }

    let split = rng.gen_range_inclusive(1, num_genes - 1);
    Ok(crossover_at(parent1, parent2, split))
}

/// Crosses two parents over at `split`.
///
/// Returns `(parent1[..split] ++ parent2[split..], parent2[..split] ++ parent1[split..])`.
///
/// # Panics
///
/// Panics if `split` exceeds the length of either parent.
pub fn crossover_at<G: Clone>(parent1: &[G], parent2: &[G], split: usize) -> (Vec<G>, Vec<G>) {
    let mut child1 = Vec::with_capacity(parent2.len());
    child1.extend_from_slice(&parent1[..split]);
    child1.extend_from_slice(&parent2[split..]);

    let mut child2 = Vec::with_capacity(parent1.len());
    child2.extend_from_slice(&parent2[..split]);
    child2.extend_from_slice(&parent1[split..]);

    (child1, child2)
}
