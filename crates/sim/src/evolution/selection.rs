//! Viability selection.
//!
//! Selection acts on survival before mating: every individual survives
//! independently with probability equal to its genotype's relative
//! viability. Survivors then mate at random, so there is no additional
//! fecundity component.
//!
//! Viabilities are conventionally in [0, 1] but are not clamped. The
//! survival test is `uniform < w`, so `w >= 1` always survives and `w <= 0`
//! never does.

use crate::genome::{Genotype, Individual};
use crate::simulation::{Population, SimulationParams};
use rand::Rng;

/// Fewer survivors than this cannot found a new generation.
pub const MIN_BREEDING_SURVIVORS: usize = 2;

/// Trait for scoring the viability of a genotype.
///
/// `SimulationParams` implements it from its three fitness fields; custom
/// implementations can plug other viability schemes into
/// [`viability_selection`].
pub trait GenotypeFitness {
    /// Probability that an individual of `genotype` survives to breed.
    fn viability(&self, genotype: Genotype) -> f64;

    /// Mean viability of a Hardy-Weinberg population at frequency `p`.
    fn mean_fitness(&self, p: f64) -> f64 {
        let q = 1.0 - p;
        p * p * self.viability(Genotype::HomDominant)
            + 2.0 * p * q * self.viability(Genotype::Het)
            + q * q * self.viability(Genotype::HomRecessive)
    }
}

impl GenotypeFitness for SimulationParams {
    #[inline]
    fn viability(&self, genotype: Genotype) -> f64 {
        self.fitness(genotype)
    }
}

/// Apply one round of viability selection and return the survivors.
///
/// Survivor order follows the input order.
pub fn viability_selection<F, R>(population: &Population, fitness: &F, rng: &mut R) -> Vec<Individual>
where
    F: GenotypeFitness + ?Sized,
    R: Rng + ?Sized,
{
    population
        .iter()
        .filter(|ind| rng.random::<f64>() < fitness.viability(ind.genotype()))
        .copied()
        .collect()
}

/// Whether a survivor set is too small to reproduce.
#[inline]
pub fn is_extinct(survivors: &[Individual]) -> bool {
    survivors.len() < MIN_BREEDING_SURVIVORS
}
