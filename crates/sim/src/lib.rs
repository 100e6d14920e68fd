//! # Simulation Crate
//!
//! The `sim` crate provides the core logic of the two-allele Wright-Fisher
//! model. It includes modules for genotypes and individuals, the
//! evolutionary operators (selection, reproduction with mutation,
//! migration), and the simulation session.

pub mod errors;
pub mod evolution;
pub mod genome;
pub mod prelude;
pub mod simulation;

pub use genome::{Allele, Genotype, Individual, Phenotype};
