//! Evolution module providing the per-generation operators.
//!
//! This module implements the evolutionary processes of the single-locus
//! model:
//! - **Factory**: initial population by independent allele draws
//! - **Selection**: viability filter applied before mating
//! - **Reproduction**: random mating with drift and symmetric mutation
//! - **Migration**: replacement of residents by migrants from a p = 0.5 source

pub mod factory;
pub mod migration;
pub mod reproduction;
pub mod selection;

pub use factory::{create_initial_population, draw_allele, draw_individual};
pub use migration::{migrant_count, migrate, MIGRANT_SOURCE_FREQ};
pub use reproduction::{gamete, mutate, reproduce};
pub use selection::{is_extinct, viability_selection, GenotypeFitness, MIN_BREEDING_SURVIVORS};
