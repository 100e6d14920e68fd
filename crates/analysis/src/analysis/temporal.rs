//! Temporal analysis
//!
//! Functions for tracking changes over time in a recorded history.

use chimpevo_sim::simulation::GenerationStats;

/// Observed frequency of `A` per recorded generation.
pub fn allele_trajectory(history: &[GenerationStats]) -> Vec<f64> {
    history.iter().map(|s| s.freq_dominant).collect()
}

/// Deterministic reference frequency per recorded generation.
pub fn expected_trajectory(history: &[GenerationStats]) -> Vec<f64> {
    history.iter().map(|s| s.expected_freq).collect()
}

/// Generation of the first record in which one allele is lost.
///
/// Records of an empty population never count as fixed.
pub fn fixation_generation(history: &[GenerationStats]) -> Option<usize> {
    history.iter().find(|s| s.is_fixed()).map(|s| s.generation)
}

/// Mean absolute gap between observed and theoretical frequency.
///
/// This is the drift signal: it stays near 0 in large populations and grows
/// as N shrinks. Returns 0 for an empty history.
pub fn mean_abs_deviation(history: &[GenerationStats]) -> f64 {
    if history.is_empty() {
        return 0.0;
    }
    let total: f64 = history
        .iter()
        .map(|s| (s.freq_dominant - s.expected_freq).abs())
        .sum();
    total / history.len() as f64
}
