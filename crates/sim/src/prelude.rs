//! Commonly used imports for convenience.
//!
//! This prelude module provides a convenient way to import the most commonly
//! used types and traits in the chimpevo library.
//!
//! # Example
//!
//! ```
//! use chimpevo_sim::prelude::*;
//!
//! let mut sim = SimulationBuilder::new()
//!     .population_size(20)
//!     .generations(10)
//!     .seed(1)
//!     .build()
//!     .unwrap();
//! let report = sim.run();
//! assert_eq!(report.advanced, 10);
//! ```

pub use crate::errors;
pub use crate::evolution::GenotypeFitness;
pub use crate::genome::{Allele, Genotype, Individual, Phenotype};
pub use crate::simulation::{
    compute_stats, step, Event, GenerationStats, Population, Simulation, SimulationBuilder,
    SimulationConfig, SimulationParams, StepOutcome,
};
