//! Local, rule-based commentary.
//!
//! Compares the per-generation strength of each evolutionary force on a
//! common scale: the selection differential `1 - w_min / w_max`, the drift
//! variance scale `1 / (2N)`, the mutation rate `u` and the migration rate
//! `m`. The largest one is reported as dominant.

use crate::analysis::diversity::heterozygosity_loss;
use crate::analysis::narrative::{NarrativeError, Narrator};
use crate::analysis::temporal::{fixation_generation, mean_abs_deviation};
use chimpevo_sim::simulation::{GenerationStats, SimulationParams};
use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DominantForce {
    Selection,
    Drift,
    Mutation,
    Migration,
}

impl DominantForce {
    pub const fn describe(self) -> &'static str {
        match self {
            Self::Selection => "natural selection on coat colour",
            Self::Drift => "genetic drift",
            Self::Mutation => "recurrent mutation",
            Self::Migration => "gene flow from the source population",
        }
    }
}

impl fmt::Display for DominantForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Selection => "selection",
            Self::Drift => "drift",
            Self::Mutation => "mutation",
            Self::Migration => "migration",
        })
    }
}

/// Selection differential between the best and worst genotype.
fn selection_strength(params: &SimulationParams) -> f64 {
    let fitnesses = [
        params.fitness_hom_dominant,
        params.fitness_het,
        params.fitness_hom_recessive,
    ];
    let max = fitnesses.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let min = fitnesses.iter().copied().fold(f64::INFINITY, f64::min);
    if max <= 0.0 {
        0.0
    } else {
        1.0 - min / max
    }
}

/// The force with the largest per-generation effect. Ties go to drift.
pub fn dominant_force(params: &SimulationParams) -> DominantForce {
    let drift = if params.population_size == 0 {
        0.0
    } else {
        1.0 / (2.0 * params.population_size as f64)
    };

    [
        (DominantForce::Selection, selection_strength(params)),
        (DominantForce::Mutation, params.mutation_rate),
        (DominantForce::Migration, params.migration_rate),
        (DominantForce::Drift, drift),
    ]
    .into_iter()
    .max_by(|a, b| a.1.total_cmp(&b.1))
    .map(|(force, _)| force)
    .unwrap_or(DominantForce::Drift)
}

/// Rule-based [`Narrator`] that needs no external service.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicNarrator;

impl Narrator for HeuristicNarrator {
    fn summarize(
        &self,
        history: &[GenerationStats],
        params: &SimulationParams,
    ) -> Result<String, NarrativeError> {
        let (start, end) = match (history.first(), history.last()) {
            (Some(start), Some(end)) => (start, end),
            _ => return Err(NarrativeError::EmptyHistory),
        };

        let force = dominant_force(params);
        let mut sentences = vec![format!(
            "Over generations {}-{}, {} is the dominant force (N={}).",
            start.generation,
            end.generation,
            force.describe(),
            params.population_size
        )];

        sentences.push(format!(
            "The dark allele moved from p={:.2} to p={:.2} against a theoretical {:.2}, \
             a mean drift of {:.3} from the deterministic path.",
            start.freq_dominant,
            end.freq_dominant,
            end.expected_freq,
            mean_abs_deviation(history)
        ));

        match heterozygosity_loss(history) {
            Some(loss) if loss > 0.0 => sentences.push(format!(
                "Expected heterozygosity fell by {:.0}% (F={:.3}).",
                loss * 100.0,
                end.fixation_index
            )),
            Some(loss) if loss < 0.0 => sentences.push(format!(
                "Expected heterozygosity rose by {:.0}% (F={:.3}).",
                -loss * 100.0,
                end.fixation_index
            )),
            _ => {}
        }

        if end.total_population == 0 {
            sentences.push("The population went extinct.".to_string());
        } else if let Some(generation) = fixation_generation(history) {
            let tail = if !end.is_fixed() {
                "diversity was later restored"
            } else if end.freq_dominant == 1.0 {
                "the dark (A) allele is fixed"
            } else {
                "the light (a) allele is fixed"
            };
            sentences.push(format!(
                "An allele was first lost at generation {generation}; {tail}."
            ));
        }

        Ok(sentences.join(" "))
    }
}
