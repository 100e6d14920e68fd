//! Deterministic (infinite-population) recursion.
//!
//! The recursion is the expected-value analogue of one stochastic step and
//! serves as the baseline against which drift is measured. It is pure: the
//! caller owns the running frequency.

use crate::evolution::{GenotypeFitness, MIGRANT_SOURCE_FREQ};
use crate::genome::Genotype;
use crate::simulation::SimulationParams;

/// Advance the theoretical frequency of `A` by one generation.
///
/// Selection, then symmetric mutation at `mutation_rate`, then migration
/// toward the fixed source frequency. If mean fitness is zero the frequency
/// collapses to 0.
pub fn next_theoretical_p(current_p: f64, params: &SimulationParams) -> f64 {
    let p = current_p;
    let q = 1.0 - p;

    let mean_fitness = params.mean_fitness(p);
    if mean_fitness == 0.0 {
        return 0.0;
    }

    // Selection
    let selected = (p * p * params.viability(Genotype::HomDominant)
        + p * q * params.viability(Genotype::Het))
        / mean_fitness;

    // Mutation, u = v
    let u = params.mutation_rate;
    let mutated = selected * (1.0 - u) + (1.0 - selected) * u;

    // Migration
    let m = params.migration_rate;
    mutated * (1.0 - m) + MIGRANT_SOURCE_FREQ * m
}

/// Iterator over the deterministic trajectory starting at `p0`.
///
/// The first item is `p0` itself (generation 0).
pub fn theoretical_trajectory(p0: f64, params: SimulationParams) -> impl Iterator<Item = f64> {
    std::iter::successors(Some(p0), move |&p| Some(next_theoretical_p(p, &params)))
}
