//! Per-generation summary statistics.
//!
//! A [`GenerationStats`] record is a pure function of a population snapshot,
//! its generation index and the externally tracked theoretical frequency.
//! Nothing is carried over between generations.

use crate::simulation::Population;
use serde::{Deserialize, Serialize};

/// Summary of one generation.
///
/// Field names on the wire follow the conventional notation (`freqA`,
/// `countAa`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationStats {
    pub generation: usize,
    /// Observed frequency of `A` (p)
    #[serde(rename = "freqA")]
    pub freq_dominant: f64,
    /// Observed frequency of `a` (q = 1 - p)
    #[serde(rename = "freqa")]
    pub freq_recessive: f64,
    #[serde(rename = "countAA")]
    pub count_hom_dominant: usize,
    #[serde(rename = "countAa")]
    pub count_het: usize,
    #[serde(rename = "countaa")]
    pub count_hom_recessive: usize,
    /// Deterministic-trajectory value of p for this generation
    #[serde(rename = "expectedFreqA")]
    pub expected_freq: f64,
    pub total_population: usize,
    /// Observed heterozygosity, Ho
    pub heterozygosity_obs: f64,
    /// Hardy-Weinberg expected heterozygosity from observed p, He = 2pq
    pub heterozygosity_exp: f64,
    /// F = 1 - Ho / He, or 0 when He = 0
    pub fixation_index: f64,
}

impl GenerationStats {
    /// True when one allele has been lost from the population.
    pub fn is_fixed(&self) -> bool {
        self.total_population > 0 && (self.freq_dominant == 0.0 || self.freq_dominant == 1.0)
    }
}

/// Reduce `population` to a statistics record.
///
/// `theoretical_p` is passed through as `expected_freq`; when `None` the
/// observed frequency is used instead (only meaningful before a theoretical
/// value exists). An empty population reports zero frequencies and ratios.
pub fn compute_stats(
    population: &Population,
    generation: usize,
    theoretical_p: Option<f64>,
) -> GenerationStats {
    let counts = population.genotype_counts();
    let total = counts.total();

    let freq_dominant = if total == 0 {
        0.0
    } else {
        (2 * counts.hom_dominant + counts.het) as f64 / (2 * total) as f64
    };
    let freq_recessive = 1.0 - freq_dominant;

    let heterozygosity_obs = if total == 0 {
        0.0
    } else {
        counts.het as f64 / total as f64
    };
    let heterozygosity_exp = 2.0 * freq_dominant * freq_recessive;

    let fixation_index = if heterozygosity_exp == 0.0 {
        0.0
    } else {
        1.0 - heterozygosity_obs / heterozygosity_exp
    };

    GenerationStats {
        generation,
        freq_dominant,
        freq_recessive,
        count_hom_dominant: counts.hom_dominant,
        count_het: counts.het,
        count_hom_recessive: counts.hom_recessive,
        expected_freq: theoretical_p.unwrap_or(freq_dominant),
        total_population: total,
        heterozygosity_obs,
        heterozygosity_exp,
        fixation_index,
    }
}
