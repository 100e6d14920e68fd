//! Simulation parameters and configuration.
//!
//! `SimulationParams` is the per-step snapshot consumed by the engine.
//! `SimulationConfig` wraps it with run-level settings and can be
//! deserialized from a JSON file to fully reproduce a simulation setup.

use crate::errors::{ConfigError, ParameterError};
use crate::genome::Genotype;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_POPULATION_SIZE: usize = 100;
pub const DEFAULT_INITIAL_FREQ: f64 = 0.5;
pub const DEFAULT_FITNESS: f64 = 1.0;
pub const DEFAULT_MUTATION_RATE: f64 = 0.001;
pub const DEFAULT_MIGRATION_RATE: f64 = 0.0;
pub const DEFAULT_GENERATIONS: usize = 100;

/// Parameter snapshot for one generation step.
///
/// The engine trusts whatever it is given: out-of-range values propagate
/// numerically. Call [`SimulationParams::validate`] at the boundary where
/// user input enters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationParams {
    /// Target number of individuals after reproduction (N)
    pub population_size: usize,
    /// Starting frequency of allele A (p0)
    #[serde(rename = "initialFreqA")]
    pub initial_freq: f64,
    /// Relative viability of AA (w11)
    #[serde(rename = "fitnessAA")]
    pub fitness_hom_dominant: f64,
    /// Relative viability of Aa (w12)
    #[serde(rename = "fitnessAa")]
    pub fitness_het: f64,
    /// Relative viability of aa (w22)
    #[serde(rename = "fitnessaa")]
    pub fitness_hom_recessive: f64,
    /// Symmetric per-allele mutation probability (u = v)
    pub mutation_rate: f64,
    /// Fraction of N replaced by migrants each generation (m)
    pub migration_rate: f64,
}

impl Default for SimulationParams {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            initial_freq: DEFAULT_INITIAL_FREQ,
            fitness_hom_dominant: DEFAULT_FITNESS,
            fitness_het: DEFAULT_FITNESS,
            fitness_hom_recessive: DEFAULT_FITNESS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            migration_rate: DEFAULT_MIGRATION_RATE,
        }
    }
}

impl SimulationParams {
    /// No selection, no mutation, no migration: drift only.
    pub fn neutral(population_size: usize, initial_freq: f64) -> Self {
        Self {
            population_size,
            initial_freq,
            fitness_hom_dominant: 1.0,
            fitness_het: 1.0,
            fitness_hom_recessive: 1.0,
            mutation_rate: 0.0,
            migration_rate: 0.0,
        }
    }

    /// Relative viability of `genotype`.
    #[inline]
    pub fn fitness(&self, genotype: Genotype) -> f64 {
        match genotype {
            Genotype::HomDominant => self.fitness_hom_dominant,
            Genotype::Het => self.fitness_het,
            Genotype::HomRecessive => self.fitness_hom_recessive,
        }
    }

    /// Set all three genotype fitnesses at once.
    pub fn with_fitness(mut self, hom_dominant: f64, het: f64, hom_recessive: f64) -> Self {
        self.fitness_hom_dominant = hom_dominant;
        self.fitness_het = het;
        self.fitness_hom_recessive = hom_recessive;
        self
    }

    /// Check that every rate is a probability, fitnesses are usable and the
    /// population is non-empty.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if self.population_size == 0 {
            return Err(ParameterError::EmptyPopulation);
        }
        check_unit("initial frequency", self.initial_freq)?;
        check_unit("mutation rate", self.mutation_rate)?;
        check_unit("migration rate", self.migration_rate)?;
        check_fitness("fitness AA", self.fitness_hom_dominant)?;
        check_fitness("fitness Aa", self.fitness_het)?;
        check_fitness("fitness aa", self.fitness_hom_recessive)?;
        Ok(())
    }

    /// True when all genotypes share the same viability.
    pub fn is_neutral(&self) -> bool {
        self.fitness_hom_dominant == self.fitness_het
            && self.fitness_het == self.fitness_hom_recessive
    }
}

fn check_unit(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ParameterError::OutOfUnitRange { name, value })
    }
}

fn check_fitness(name: &'static str, value: f64) -> Result<(), ParameterError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParameterError::InvalidFitness { name, value })
    }
}

/// High-level simulation configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationConfig {
    /// Evolutionary parameters
    pub params: SimulationParams,
    /// Number of generations `Simulation::run` advances
    #[serde(default = "default_generations")]
    pub total_generations: usize,
    /// Optional RNG seed for reproducibility
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_generations() -> usize {
    DEFAULT_GENERATIONS
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            params: SimulationParams::default(),
            total_generations: DEFAULT_GENERATIONS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Create new simulation configuration.
    pub fn new(params: SimulationParams, total_generations: usize, seed: Option<u64>) -> Self {
        Self {
            params,
            total_generations,
            seed,
        }
    }

    /// Parse and validate a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.params.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
