//! Diversity metrics over a recorded history
//!
//! Heterozygosity is the quantity drift erodes: in a closed neutral
//! population of size N the expected He decays by a factor `1 - 1/(2N)`
//! per generation.

use chimpevo_sim::simulation::GenerationStats;

/// Relative loss of expected heterozygosity from the first to the last
/// record.
///
/// `(He_start - He_end) / He_start`. Positive values mean diversity was
/// lost; negative values mean it was gained (e.g. through migration or
/// mutation). Returns `None` for an empty history or when the population
/// started monomorphic.
///
/// # Examples
///
/// ```
/// use chimpevo_analysis::analysis::diversity::heterozygosity_loss;
///
/// assert_eq!(heterozygosity_loss(&[]), None);
/// ```
pub fn heterozygosity_loss(history: &[GenerationStats]) -> Option<f64> {
    let start = history.first()?.heterozygosity_exp;
    let end = history.last()?.heterozygosity_exp;
    if start == 0.0 {
        return None;
    }
    Some((start - end) / start)
}

/// Mean fixation index over records with a living population.
pub fn mean_fixation_index(history: &[GenerationStats]) -> f64 {
    let (sum, n) = history
        .iter()
        .filter(|s| s.total_population > 0)
        .fold((0.0, 0usize), |(sum, n), s| (sum + s.fixation_index, n + 1));
    if n == 0 {
        0.0
    } else {
        sum / n as f64
    }
}
