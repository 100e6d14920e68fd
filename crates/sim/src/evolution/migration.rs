//! Gene flow from a single external source population.

use crate::evolution::factory::draw_individual;
use crate::simulation::{Population, SimulationParams};
use rand::Rng;

/// Allele frequency of the migrant source population. Fixed, not configurable.
pub const MIGRANT_SOURCE_FREQ: f64 = 0.5;

/// Number of residents replaced by migrants each generation:
/// `floor(population_size * migration_rate)`.
#[inline]
pub fn migrant_count(params: &SimulationParams) -> usize {
    let n = params.population_size as f64 * params.migration_rate;
    if n.is_finite() && n > 0.0 {
        n.floor() as usize
    } else {
        0
    }
}

/// Replace random slots of `population` with migrants.
///
/// Each migrant overwrites a uniformly chosen slot; the same slot may be hit
/// more than once and only the last write survives. Population size is
/// unchanged. Returns the number of migrants drawn.
pub fn migrate<R: Rng + ?Sized>(
    population: &mut Population,
    params: &SimulationParams,
    rng: &mut R,
) -> usize {
    if population.is_empty() {
        return 0;
    }

    let migrants = migrant_count(params);
    for _ in 0..migrants {
        let slot = rng.random_range(0..population.size());
        population.replace(slot, draw_individual(MIGRANT_SOURCE_FREQ, rng));
    }
    migrants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genome::{Genotype, Individual};
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    fn fixed_population(n: usize) -> Population {
        (0..n).map(|_| Individual::new(Genotype::HomDominant)).collect()
    }

    #[test]
    fn test_migrant_count_floors() {
        let mut params = SimulationParams::neutral(99, 0.5);
        params.migration_rate = 0.05;
        assert_eq!(migrant_count(&params), 4);

        params.migration_rate = 0.0;
        assert_eq!(migrant_count(&params), 0);

        params.population_size = 100;
        params.migration_rate = 1.0;
        assert_eq!(migrant_count(&params), 100);
    }

    #[test]
    fn test_migrant_count_ignores_negative_rate() {
        let mut params = SimulationParams::neutral(100, 0.5);
        params.migration_rate = -0.2;
        assert_eq!(migrant_count(&params), 0);
    }

    #[test]
    fn test_migration_preserves_size() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        let mut pop = fixed_population(200);
        let mut params = SimulationParams::neutral(200, 1.0);
        params.migration_rate = 0.5;

        let drawn = migrate(&mut pop, &params, &mut rng);
        assert_eq!(drawn, 100);
        assert_eq!(pop.size(), 200);
    }

    #[test]
    fn test_migration_introduces_recessive_allele() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(2);
        let mut pop = fixed_population(500);
        let mut params = SimulationParams::neutral(500, 1.0);
        params.migration_rate = 0.2;

        migrate(&mut pop, &params, &mut rng);
        let counts = pop.genotype_counts();
        assert!(counts.het + counts.hom_recessive > 0);
    }

    #[test]
    fn test_no_migration_leaves_population_untouched() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(3);
        let mut pop = fixed_population(50);
        let before: Vec<_> = pop.iter().map(|i| i.id()).collect();
        let params = SimulationParams::neutral(50, 1.0);

        assert_eq!(migrate(&mut pop, &params, &mut rng), 0);
        let after: Vec<_> = pop.iter().map(|i| i.id()).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_migration_on_empty_population() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(4);
        let mut pop = Population::empty();
        let mut params = SimulationParams::neutral(10, 0.5);
        params.migration_rate = 0.5;
        assert_eq!(migrate(&mut pop, &params, &mut rng), 0);
        assert!(pop.is_empty());
    }
}
