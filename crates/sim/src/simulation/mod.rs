//! Simulation engine and population management.
//!
//! This module provides the single-generation stepper, the per-generation
//! statistics, the deterministic reference recursion and the session that
//! ties them together.

//! Re-exports
//!
//! The most commonly used simulation types are re-exported here for
//! convenience so consumers can import them from `chimpevo_sim::simulation`.
//!
//! - `Simulation`: the session that runs generations, records history and
//!   applies scripted events.
//! - `Population`: in-memory container for individuals used during simulation.
//! - `SimulationBuilder`: fluent builder for constructing `Simulation` instances
//!   with sensible defaults and validation.

pub mod builder;
pub mod engine;
pub mod event_log;
pub mod events;
pub mod parameters;
pub mod population;
pub mod stats;
pub mod stepper;
pub mod theory;

pub use builder::SimulationBuilder;
pub use engine::{AdvanceReport, Simulation, StepStatus};
pub use event_log::{EventLog, LogEntry, LogLevel};
pub use events::{Event, EventOutcome};
pub use parameters::{
    SimulationConfig, SimulationParams, DEFAULT_FITNESS, DEFAULT_GENERATIONS,
    DEFAULT_INITIAL_FREQ, DEFAULT_MIGRATION_RATE, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
};
pub use population::{GenotypeCounts, Population};
pub use stats::{compute_stats, GenerationStats};
pub use stepper::{step, StepOutcome};
pub use theory::{next_theoretical_p, theoretical_trajectory};
