//! Narrative commentary on a finished history.
//!
//! A [`Narrator`] turns a history into prose. Narration is strictly
//! optional: [`summarize_or`] converts any failure into a fallback string so
//! it can never interrupt a simulation.

use chimpevo_sim::simulation::{GenerationStats, SimulationParams};
use thiserror::Error;

/// Errors a narrator can report.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NarrativeError {
    /// No narrator backend is configured.
    #[error("Narrative analysis is not configured")]
    Unavailable,

    /// There is nothing to comment on.
    #[error("History is empty")]
    EmptyHistory,

    /// The backend failed.
    #[error("Narrator failed: {0}")]
    Backend(String),
}

/// Produces a short commentary on a history.
pub trait Narrator {
    fn summarize(
        &self,
        history: &[GenerationStats],
        params: &SimulationParams,
    ) -> Result<String, NarrativeError>;
}

/// The default narrator: always reports that none is configured.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unavailable;

impl Narrator for Unavailable {
    fn summarize(
        &self,
        _history: &[GenerationStats],
        _params: &SimulationParams,
    ) -> Result<String, NarrativeError> {
        Err(NarrativeError::Unavailable)
    }
}

impl<N: Narrator + ?Sized> Narrator for &N {
    fn summarize(
        &self,
        history: &[GenerationStats],
        params: &SimulationParams,
    ) -> Result<String, NarrativeError> {
        (**self).summarize(history, params)
    }
}

impl<N: Narrator + ?Sized> Narrator for Box<N> {
    fn summarize(
        &self,
        history: &[GenerationStats],
        params: &SimulationParams,
    ) -> Result<String, NarrativeError> {
        (**self).summarize(history, params)
    }
}

/// Run `narrator`, returning `fallback` (and logging the cause) on failure.
pub fn summarize_or<N: Narrator + ?Sized>(
    narrator: &N,
    history: &[GenerationStats],
    params: &SimulationParams,
    fallback: &str,
) -> String {
    match narrator.summarize(history, params) {
        Ok(text) => text,
        Err(err) => {
            log::warn!("narration skipped: {err}");
            fallback.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Fixed(&'static str);

    impl Narrator for Fixed {
        fn summarize(
            &self,
            _history: &[GenerationStats],
            _params: &SimulationParams,
        ) -> Result<String, NarrativeError> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn test_unavailable_errors() {
        let params = SimulationParams::default();
        assert_eq!(
            Unavailable.summarize(&[], &params),
            Err(NarrativeError::Unavailable)
        );
    }

    #[test]
    fn test_summarize_or_fallback() {
        let params = SimulationParams::default();
        let text = summarize_or(&Unavailable, &[], &params, "Analysis unavailable.");
        assert_eq!(text, "Analysis unavailable.");
    }

    #[test]
    fn test_summarize_or_passes_through() {
        let params = SimulationParams::default();
        let boxed: Box<dyn Narrator> = Box::new(Fixed("drift wins"));
        assert_eq!(summarize_or(&boxed, &[], &params, "n/a"), "drift wins");
    }
}
