//! Genetic types for the single coat-colour locus: alleles, genotypes,
//! phenotypes and individuals.

mod allele;
mod individual;

pub use allele::{Allele, Genotype, Phenotype};
pub use individual::{Individual, IndividualId};
