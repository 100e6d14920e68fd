use std::io;
use thiserror::Error;

/// Error returned when a parameter snapshot fails validation.
///
/// The engine itself never validates; this is raised by the collaborators
/// that sanitize input (the builder, config loading, the CLI).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParameterError {
    /// A probability-valued field lies outside [0, 1] or is not finite.
    #[error("Invalid {name}: {value} (must be between 0.0 and 1.0)")]
    OutOfUnitRange { name: &'static str, value: f64 },

    /// A fitness value is negative or not finite.
    #[error("Invalid {name}: {value} (must be finite and non-negative)")]
    InvalidFitness { name: &'static str, value: f64 },

    /// A live simulation needs at least one individual.
    #[error("Population size must be at least 1")]
    EmptyPopulation,
}

/// Errors that can occur while loading or saving a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(#[from] ParameterError),
}

/// Error returned when an event name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventError {
    #[error("Unknown event '{0}' (expected bottleneck, sweep, radiation or founder)")]
    Unknown(String),
}

/// Errors that can occur during simulation building.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuilderError {
    /// A required parameter is missing
    #[error("Missing required parameter: {0}")]
    MissingRequired(&'static str),

    /// An invalid parameter value was provided
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParameterError),
}
