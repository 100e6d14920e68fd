use core::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::genome::{Allele, Genotype, Phenotype};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque identity token for an individual.
///
/// Ids are unique within the process and carry no meaning beyond identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndividualId(u64);

impl IndividualId {
    /// Allocate a fresh id.
    #[inline]
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for IndividualId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ind_{}", self.0)
    }
}

/// A diploid individual at the coat-colour locus.
///
/// `Individual` is immutable once created: a new generation is made of new
/// individuals, never of edited ones. The phenotype is derived from the
/// genotype on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Individual {
    id: IndividualId,
    genotype: Genotype,
}

impl Individual {
    /// Create a new individual with a fresh id.
    pub fn new(genotype: Genotype) -> Self {
        Self {
            id: IndividualId::next(),
            genotype,
        }
    }

    /// Create a new individual from its two gametes.
    pub fn from_gametes(first: Allele, second: Allele) -> Self {
        Self::new(Genotype::from_alleles(first, second))
    }

    #[inline]
    pub fn id(&self) -> IndividualId {
        self.id
    }

    #[inline]
    pub fn genotype(&self) -> Genotype {
        self.genotype
    }

    #[inline]
    pub fn phenotype(&self) -> Phenotype {
        self.genotype.phenotype()
    }
}
