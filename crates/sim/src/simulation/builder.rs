//! Builder pattern for creating simulations.
//!
//! Provides a fluent API for configuring and creating simulations with
//! sensible defaults and validation at `build()`.

pub use crate::errors::BuilderError;
use crate::simulation::{Simulation, SimulationConfig, SimulationParams};

/// Builder for constructing Simulation instances with a fluent API.
///
/// # Examples
///
/// ```
/// use chimpevo_sim::simulation::SimulationBuilder;
///
/// // Neutral drift with defaults
/// let sim = SimulationBuilder::new()
///     .population_size(50)
///     .generations(100)
///     .build()
///     .unwrap();
///
/// // Selection against the recessive homozygote, with migration
/// let sim = SimulationBuilder::new()
///     .population_size(200)
///     .generations(100)
///     .initial_freq(0.2)
///     .fitness(1.0, 1.0, 0.6)
///     .migration_rate(0.01)
///     .seed(42)
///     .build()
///     .unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct SimulationBuilder {
    // Required parameters
    population_size: Option<usize>,
    generations: Option<usize>,

    // Evolutionary parameters (original defaults)
    initial_freq: f64,
    fitness: (f64, f64, f64),
    mutation_rate: f64,
    migration_rate: f64,
    seed: Option<u64>, // Default: None (random)
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    /// Create a new simulation builder with default values.
    pub fn new() -> Self {
        let defaults = SimulationParams::default();
        Self {
            population_size: None,
            generations: None,
            initial_freq: defaults.initial_freq,
            fitness: (
                defaults.fitness_hom_dominant,
                defaults.fitness_het,
                defaults.fitness_hom_recessive,
            ),
            mutation_rate: defaults.mutation_rate,
            migration_rate: defaults.migration_rate,
            seed: None,
        }
    }

    /// Set the population size (required).
    pub fn population_size(mut self, size: usize) -> Self {
        self.population_size = Some(size);
        self
    }

    /// Set the number of generations to run (required).
    pub fn generations(mut self, generations: usize) -> Self {
        self.generations = Some(generations);
        self
    }

    /// Set the starting frequency of allele A.
    pub fn initial_freq(mut self, p0: f64) -> Self {
        self.initial_freq = p0;
        self
    }

    /// Set viabilities for AA, Aa and aa.
    pub fn fitness(mut self, hom_dominant: f64, het: f64, hom_recessive: f64) -> Self {
        self.fitness = (hom_dominant, het, hom_recessive);
        self
    }

    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    pub fn migration_rate(mut self, rate: f64) -> Self {
        self.migration_rate = rate;
        self
    }

    /// Set random seed for reproducibility.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Take every evolutionary parameter from an existing snapshot.
    pub fn params(mut self, params: SimulationParams) -> Self {
        self.population_size = Some(params.population_size);
        self.initial_freq = params.initial_freq;
        self.fitness = (
            params.fitness_hom_dominant,
            params.fitness_het,
            params.fitness_hom_recessive,
        );
        self.mutation_rate = params.mutation_rate;
        self.migration_rate = params.migration_rate;
        self
    }

    /// Assemble and validate the configuration without starting a session.
    pub fn build_config(&self) -> Result<SimulationConfig, BuilderError> {
        let population_size = self
            .population_size
            .ok_or(BuilderError::MissingRequired("population_size"))?;
        let total_generations = self
            .generations
            .ok_or(BuilderError::MissingRequired("generations"))?;

        let (hom_dominant, het, hom_recessive) = self.fitness;
        let params = SimulationParams {
            population_size,
            initial_freq: self.initial_freq,
            fitness_hom_dominant: hom_dominant,
            fitness_het: het,
            fitness_hom_recessive: hom_recessive,
            mutation_rate: self.mutation_rate,
            migration_rate: self.migration_rate,
        };
        params.validate()?;

        Ok(SimulationConfig::new(params, total_generations, self.seed))
    }

    /// Build the simulation.
    pub fn build(self) -> Result<Simulation, BuilderError> {
        Ok(Simulation::new(self.build_config()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ParameterError;

    #[test]
    fn test_builder_basic() {
        let sim = SimulationBuilder::new()
            .population_size(10)
            .generations(5)
            .build()
            .unwrap();

        assert_eq!(sim.population().size(), 10);
        assert_eq!(sim.config().total_generations, 5);
        assert_eq!(sim.params().mutation_rate, 0.001);
        assert_eq!(sim.params().initial_freq, 0.5);
    }

    #[test]
    fn test_builder_all_fields() {
        let config = SimulationBuilder::new()
            .population_size(40)
            .generations(7)
            .initial_freq(0.3)
            .fitness(1.0, 0.9, 0.5)
            .mutation_rate(0.01)
            .migration_rate(0.05)
            .seed(99)
            .build_config()
            .unwrap();

        assert_eq!(config.params.population_size, 40);
        assert_eq!(config.params.initial_freq, 0.3);
        assert_eq!(config.params.fitness_het, 0.9);
        assert_eq!(config.params.fitness_hom_recessive, 0.5);
        assert_eq!(config.params.mutation_rate, 0.01);
        assert_eq!(config.params.migration_rate, 0.05);
        assert_eq!(config.total_generations, 7);
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn test_builder_missing_population_size() {
        let result = SimulationBuilder::new().generations(5).build();
        assert!(matches!(
            result,
            Err(BuilderError::MissingRequired("population_size"))
        ));
    }

    #[test]
    fn test_builder_missing_generations() {
        let result = SimulationBuilder::new().population_size(10).build();
        assert!(matches!(
            result,
            Err(BuilderError::MissingRequired("generations"))
        ));
    }

    #[test]
    fn test_builder_rejects_invalid_rate() {
        let result = SimulationBuilder::new()
            .population_size(10)
            .generations(5)
            .mutation_rate(1.5)
            .build_config();
        assert_eq!(
            result,
            Err(BuilderError::InvalidParameter(ParameterError::OutOfUnitRange {
                name: "mutation rate",
                value: 1.5
            }))
        );
    }

    #[test]
    fn test_builder_rejects_zero_population() {
        let result = SimulationBuilder::new()
            .population_size(0)
            .generations(5)
            .build_config();
        assert_eq!(
            result,
            Err(BuilderError::InvalidParameter(ParameterError::EmptyPopulation))
        );
    }

    #[test]
    fn test_builder_from_params() {
        let params = SimulationParams::neutral(25, 0.7).with_fitness(1.0, 1.0, 0.0);
        let config = SimulationBuilder::new()
            .params(params)
            .generations(3)
            .build_config()
            .unwrap();
        assert_eq!(config.params, params);
    }
}
