use core::fmt;

use serde::{Deserialize, Serialize};

/// One of the two variants at the coat-colour locus.
///
/// `Dominant` is written `A` (dark coat) and `Recessive` is written `a`
/// (light coat).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Allele {
    #[serde(rename = "A")]
    Dominant,
    #[serde(rename = "a")]
    Recessive,
}

impl Allele {
    /// Return the other allele (A <-> a). This is what a mutation does.
    #[inline(always)]
    pub const fn flip(self) -> Self {
        match self {
            Self::Dominant => Self::Recessive,
            Self::Recessive => Self::Dominant,
        }
    }

    /// Convert to the conventional single-letter symbol.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        match self {
            Self::Dominant => 'A',
            Self::Recessive => 'a',
        }
    }
}

impl fmt::Display for Allele {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// A diploid genotype at the single locus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genotype {
    #[serde(rename = "AA")]
    HomDominant,
    #[serde(rename = "Aa")]
    Het,
    #[serde(rename = "aa")]
    HomRecessive,
}

impl Genotype {
    /// Combine two gametes into a genotype.
    ///
    /// Both `A` gives `AA`, both `a` gives `aa`, anything else is `Aa`.
    /// The order of the gametes does not matter.
    #[inline]
    pub const fn from_alleles(first: Allele, second: Allele) -> Self {
        match (first, second) {
            (Allele::Dominant, Allele::Dominant) => Self::HomDominant,
            (Allele::Recessive, Allele::Recessive) => Self::HomRecessive,
            _ => Self::Het,
        }
    }

    /// Number of `A` alleles carried (0, 1 or 2).
    #[inline(always)]
    pub const fn dominant_copies(self) -> u8 {
        match self {
            Self::HomDominant => 2,
            Self::Het => 1,
            Self::HomRecessive => 0,
        }
    }

    #[inline(always)]
    pub const fn is_heterozygous(self) -> bool {
        matches!(self, Self::Het)
    }

    /// The allele a homozygote always transmits, `None` for heterozygotes.
    #[inline]
    pub const fn fixed_gamete(self) -> Option<Allele> {
        match self {
            Self::HomDominant => Some(Allele::Dominant),
            Self::HomRecessive => Some(Allele::Recessive),
            Self::Het => None,
        }
    }

    /// Visible trait: only `aa` shows the recessive light coat.
    #[inline]
    pub const fn phenotype(self) -> Phenotype {
        match self {
            Self::HomRecessive => Phenotype::LightCoat,
            Self::HomDominant | Self::Het => Phenotype::DarkCoat,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::HomDominant => "AA",
            Self::Het => "Aa",
            Self::HomRecessive => "aa",
        }
    }
}

impl fmt::Display for Genotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coat colour derived from a genotype.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phenotype {
    DarkCoat,
    LightCoat,
}

impl Phenotype {
    pub const fn label(self) -> &'static str {
        match self {
            Self::DarkCoat => "Dark coat (dominant)",
            Self::LightCoat => "Light coat (recessive)",
        }
    }
}

impl fmt::Display for Phenotype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
