//! Initial population construction.
//!
//! Individuals are built from two independent allele draws. Each draw is a
//! separate uniform sample compared against `p`, so a finite population can
//! deviate slightly from Hardy-Weinberg proportions by chance.

use crate::genome::{Allele, Individual};
use crate::simulation::Population;
use rand::Rng;

/// Draw a single allele: `A` with probability `p`, otherwise `a`.
#[inline]
pub fn draw_allele<R: Rng + ?Sized>(p: f64, rng: &mut R) -> Allele {
    if rng.random::<f64>() < p {
        Allele::Dominant
    } else {
        Allele::Recessive
    }
}

/// Draw a new individual whose two alleles are independent samples at `p`.
///
/// This is the primitive shared by population construction and migration.
#[inline]
pub fn draw_individual<R: Rng + ?Sized>(p: f64, rng: &mut R) -> Individual {
    let first = draw_allele(p, rng);
    let second = draw_allele(p, rng);
    Individual::from_gametes(first, second)
}

/// Build a population of `size` individuals at allele frequency `p`.
///
/// `size == 0` yields an empty population. There are no error conditions:
/// `p <= 0` gives all `aa` and `p >= 1` gives all `AA`.
pub fn create_initial_population<R: Rng + ?Sized>(size: usize, p: f64, rng: &mut R) -> Population {
    (0..size).map(|_| draw_individual(p, rng)).collect()
}
