//! Random mating, gamete formation and mutation.
//!
//! Each offspring draws two parents uniformly with replacement from the
//! survivors, so selfing is possible. A homozygous parent always transmits
//! its allele; a heterozygote transmits either allele with probability 1/2.
//! Each gamete then flips independently with probability `mutation_rate`.
//! Sampling a finite number of gametes from a finite survivor pool is the
//! main source of genetic drift.

use crate::genome::{Allele, Genotype, Individual};
use crate::simulation::{Population, SimulationParams};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;
use rayon::prelude::*;

/// Draw the gamete a parent of `genotype` transmits.
#[inline]
pub fn gamete<R: Rng + ?Sized>(genotype: Genotype, rng: &mut R) -> Allele {
    match genotype.fixed_gamete() {
        Some(allele) => allele,
        None => {
            if rng.random::<f64>() < 0.5 {
                Allele::Dominant
            } else {
                Allele::Recessive
            }
        }
    }
}

/// Flip `allele` with probability `rate`.
#[inline]
pub fn mutate<R: Rng + ?Sized>(allele: Allele, rate: f64, rng: &mut R) -> Allele {
    if rng.random::<f64>() < rate {
        allele.flip()
    } else {
        allele
    }
}

/// Produce one offspring from a survivor pool.
fn offspring<R: Rng + ?Sized>(survivors: &[Individual], mutation_rate: f64, rng: &mut R) -> Individual {
    let parent1 = survivors[rng.random_range(0..survivors.len())];
    let parent2 = survivors[rng.random_range(0..survivors.len())];

    let first = mutate(gamete(parent1.genotype(), rng), mutation_rate, rng);
    let second = mutate(gamete(parent2.genotype(), rng), mutation_rate, rng);

    Individual::from_gametes(first, second)
}

/// Build a generation of exactly `params.population_size` offspring.
///
/// Seeds are drawn sequentially from `rng` and each offspring is generated
/// from its own Xoshiro256++ stream in parallel, so the result depends only
/// on the caller's RNG state and not on the thread count.
///
/// Returns an empty population if `survivors` is empty.
pub fn reproduce<R: Rng + ?Sized>(
    survivors: &[Individual],
    params: &SimulationParams,
    rng: &mut R,
) -> Population {
    if survivors.is_empty() {
        return Population::empty();
    }

    let seeds: Vec<u64> = (0..params.population_size).map(|_| rng.random()).collect();
    let mutation_rate = params.mutation_rate;

    let individuals: Vec<Individual> = seeds
        .par_iter()
        .map(|&seed| {
            let mut local_rng = Xoshiro256PlusPlus::seed_from_u64(seed);
            offspring(survivors, mutation_rate, &mut local_rng)
        })
        .collect();

    Population::new(individuals)
}
