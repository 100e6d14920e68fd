//! Scripted population events.
//!
//! Events are whole-step edits applied between generations: they may
//! replace the population and override parameter fields, and they never run
//! concurrently with a step.

use crate::errors::EventError;
use crate::simulation::event_log::LogLevel;
use crate::simulation::{Population, SimulationParams};
use core::fmt;
use rand::Rng;
use std::str::FromStr;

/// Per-individual survival probability during a bottleneck.
pub const BOTTLENECK_SURVIVAL: f64 = 0.1;
/// Minimum bottleneck size; below it the first individuals are kept instead.
pub const BOTTLENECK_MIN_SURVIVORS: usize = 5;
/// Size of a founder group.
pub const FOUNDER_SIZE: usize = 15;
/// Mutation rate forced by a radiation event.
pub const RADIATION_MUTATION_RATE: f64 = 0.02;
/// Viabilities (AA, Aa, aa) forced by a selective sweep favouring dark coats.
pub const SWEEP_FITNESS: (f64, f64, f64) = (1.0, 0.8, 0.2);

/// A scripted event that edits the population or the parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Random crash to about 10% of the population.
    Bottleneck,
    /// Strong selection for the dark coat.
    Sweep,
    /// Mutation rate raised to 0.02.
    Radiation,
    /// A small group founds a new, isolated population.
    Founder,
}

/// What an event did, for the caller to log.
#[derive(Debug, Clone, PartialEq)]
pub struct EventOutcome {
    pub message: String,
    pub level: LogLevel,
}

impl Event {
    pub const ALL: [Event; 4] = [Event::Bottleneck, Event::Sweep, Event::Radiation, Event::Founder];

    pub const fn name(self) -> &'static str {
        match self {
            Self::Bottleneck => "bottleneck",
            Self::Sweep => "sweep",
            Self::Radiation => "radiation",
            Self::Founder => "founder",
        }
    }

    /// Apply the event in place.
    pub fn apply<R: Rng + ?Sized>(
        self,
        population: &mut Population,
        params: &mut SimulationParams,
        rng: &mut R,
    ) -> EventOutcome {
        match self {
            Self::Bottleneck => {
                let survivors: Population = population
                    .iter()
                    .filter(|_| rng.random::<f64>() < BOTTLENECK_SURVIVAL)
                    .copied()
                    .collect();
                if survivors.size() < BOTTLENECK_MIN_SURVIVORS {
                    population.truncate(BOTTLENECK_MIN_SURVIVORS);
                } else {
                    *population = survivors;
                }
                params.population_size = population.size();
                EventOutcome {
                    message: format!("EVENT: Bottleneck. N={}", population.size()),
                    level: LogLevel::Danger,
                }
            }
            Self::Sweep => {
                let (hom_dominant, het, hom_recessive) = SWEEP_FITNESS;
                params.fitness_hom_dominant = hom_dominant;
                params.fitness_het = het;
                params.fitness_hom_recessive = hom_recessive;
                EventOutcome {
                    message: "EVENT: Strong selection (dark coat).".to_string(),
                    level: LogLevel::Warning,
                }
            }
            Self::Radiation => {
                params.mutation_rate = RADIATION_MUTATION_RATE;
                EventOutcome {
                    message: format!("EVENT: Radiation (u={RADIATION_MUTATION_RATE})."),
                    level: LogLevel::Warning,
                }
            }
            Self::Founder => {
                population.truncate(FOUNDER_SIZE);
                params.population_size = FOUNDER_SIZE;
                params.migration_rate = 0.0;
                EventOutcome {
                    message: format!("EVENT: Founder effect (N={FOUNDER_SIZE})."),
                    level: LogLevel::Info,
                }
            }
        }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Event {
    type Err = EventError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|event| event.name() == name)
            .ok_or_else(|| EventError::Unknown(s.to_string()))
    }
}
