//! Shared default values for the command-line interface.
//! Parameter defaults come from `SimulationParams::default()`; these cover
//! the values only the front end needs.

pub const GENERATIONS: usize = chimpevo_sim::simulation::DEFAULT_GENERATIONS;

/// Shown when narration is requested but fails.
pub const NARRATION_FALLBACK: &str = "Analysis unavailable.";
