//! Analysis tools for chimpevo simulation histories.
//!
//! - Temporal summaries (observed vs deterministic trajectories, fixation)
//! - Diversity summaries (heterozygosity loss, inbreeding)
//! - Narrative commentary behind the [`Narrator`](analysis::Narrator) trait

pub mod analysis;

pub use analysis::*;
