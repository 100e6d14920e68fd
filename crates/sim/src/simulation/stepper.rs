//! One generation of the stochastic model.
//!
//! The phases run in a fixed order, each consuming the previous one's
//! output: viability selection, then reproduction (random mating, drift and
//! mutation), then migration.

use crate::evolution::{is_extinct, migrate, reproduce, viability_selection};
use crate::simulation::{Population, SimulationParams};
use rand::Rng;

/// Result of advancing a population by one generation.
///
/// Extinction is a terminal state, not an error: callers should stop
/// stepping once they see it.
#[derive(Debug, Clone, PartialEq)]
pub enum StepOutcome {
    /// A new generation of exactly `population_size` individuals.
    Survived(Population),
    /// Fewer than two individuals survived selection.
    Extinct,
}

impl StepOutcome {
    pub fn is_extinct(&self) -> bool {
        matches!(self, Self::Extinct)
    }

    /// The resulting population, empty on extinction.
    pub fn into_population(self) -> Population {
        match self {
            Self::Survived(population) => population,
            Self::Extinct => Population::empty(),
        }
    }
}

/// Advance `population` by one generation under `params`.
///
/// No validation is performed on `params`; out-of-range values act through
/// the probabilities as given. An empty input is trivially extinct.
pub fn step<R: Rng + ?Sized>(
    population: &Population,
    params: &SimulationParams,
    rng: &mut R,
) -> StepOutcome {
    // 1. Selection
    let survivors = viability_selection(population, params, rng);
    if is_extinct(&survivors) {
        log::debug!(
            "selection left {} survivor(s) out of {}",
            survivors.len(),
            population.size()
        );
        return StepOutcome::Extinct;
    }

    // 2. Reproduction with drift and mutation
    let mut offspring = reproduce(&survivors, params, rng);

    // 3. Migration
    let migrants = migrate(&mut offspring, params, rng);

    log::trace!(
        "step: {} survivors -> {} offspring, {} migrants",
        survivors.len(),
        offspring.size(),
        migrants
    );

    StepOutcome::Survived(offspring)
}
