//! Population genetics analysis of recorded histories
//!
//! This module provides:
//! - Temporal dynamics (allele trajectories, drift from theory, fixation)
//! - Diversity metrics (heterozygosity loss, mean F)
//! - History sampling and prompt rendering for external commentary
//! - Narrators, including a local rule-based one

pub mod diversity;
pub mod heuristic;
pub mod narrative;
pub mod prompt;
pub mod temporal;

// Re-export commonly used functions
pub use diversity::{heterozygosity_loss, mean_fixation_index};
pub use heuristic::{dominant_force, DominantForce, HeuristicNarrator};
pub use narrative::{summarize_or, NarrativeError, Narrator, Unavailable};
pub use prompt::{analysis_prompt, sample_history, HistorySample};
pub use temporal::{
    allele_trajectory, expected_trajectory, fixation_generation, mean_abs_deviation,
};
