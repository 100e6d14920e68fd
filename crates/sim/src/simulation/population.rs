//! Population management.
//!
//! A population is an ordered collection of individuals. The order has no
//! biological meaning; it is only kept stable so that scripted edits such as
//! "keep the first 15" are well defined.

use crate::genome::{Genotype, Individual};
use serde::{Deserialize, Serialize};

/// Per-genotype head counts of a population.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenotypeCounts {
    pub hom_dominant: usize,
    pub het: usize,
    pub hom_recessive: usize,
}

impl GenotypeCounts {
    /// Record one more individual of `genotype`.
    #[inline]
    pub fn add(&mut self, genotype: Genotype) {
        match genotype {
            Genotype::HomDominant => self.hom_dominant += 1,
            Genotype::Het => self.het += 1,
            Genotype::HomRecessive => self.hom_recessive += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.hom_dominant + self.het + self.hom_recessive
    }

    pub fn get(&self, genotype: Genotype) -> usize {
        match genotype {
            Genotype::HomDominant => self.hom_dominant,
            Genotype::Het => self.het,
            Genotype::HomRecessive => self.hom_recessive,
        }
    }
}

/// A population of diploid individuals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    /// Create a new population from individuals.
    pub fn new(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// The terminal state left behind by extinction.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Get the number of individuals in the population.
    pub fn size(&self) -> usize {
        self.individuals.len()
    }

    /// Check if population is empty.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get all individuals as a slice.
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// Get a specific individual by index.
    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Individual> {
        self.individuals.iter()
    }

    /// Overwrite the individual at `index`. Out-of-range indices are ignored.
    pub(crate) fn replace(&mut self, index: usize, individual: Individual) {
        if let Some(slot) = self.individuals.get_mut(index) {
            *slot = individual;
        }
    }

    /// Keep only the first `len` individuals.
    pub fn truncate(&mut self, len: usize) {
        self.individuals.truncate(len);
    }

    /// Consume the population and return its individuals.
    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    /// Count genotypes in a single pass.
    pub fn genotype_counts(&self) -> GenotypeCounts {
        let mut counts = GenotypeCounts::default();
        for ind in &self.individuals {
            counts.add(ind.genotype());
        }
        counts
    }
}

impl From<Vec<Individual>> for Population {
    fn from(individuals: Vec<Individual>) -> Self {
        Self::new(individuals)
    }
}

impl FromIterator<Individual> for Population {
    fn from_iter<I: IntoIterator<Item = Individual>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Individual;
    type IntoIter = std::slice::Iter<'a, Individual>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.iter()
    }
}
