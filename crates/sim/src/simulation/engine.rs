//! Simulation session.
//!
//! [`Simulation`] owns everything that changes over a run: the population,
//! the generation counter, the deterministic reference frequency, the
//! append-only statistics history and the event log. Each generation is
//! delegated to [`step`](crate::simulation::step), so the session only does
//! bookkeeping.

use crate::errors::ParameterError;
use crate::evolution::create_initial_population;
use crate::simulation::{
    compute_stats, next_theoretical_p, step, Event, EventLog, GenerationStats, LogLevel,
    Population, SimulationConfig, SimulationParams, StepOutcome,
};
use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256PlusPlus;

/// Result of a single [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// A new generation was produced and recorded.
    Advanced,
    /// The population is extinct; nothing was recorded.
    Extinct,
}

/// Summary of a multi-generation [`Simulation::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AdvanceReport {
    /// Generations that produced a surviving population.
    pub advanced: usize,
    /// Whether the run stopped because the population went extinct.
    pub extinct: bool,
}

/// Main simulation session.
#[derive(Debug)]
pub struct Simulation {
    /// Current parameters, total generations and seed
    config: SimulationConfig,
    /// Current population
    population: Population,
    /// Number of steps taken since the last reset
    generation: usize,
    /// Deterministic reference frequency for `generation`
    theoretical_p: f64,
    /// One record per recorded generation, oldest first
    history: Vec<GenerationStats>,
    log: EventLog,
    playing: bool,
    extinct: bool,
    /// Random number generator (using Xoshiro256++ for better performance)
    rng: Xoshiro256PlusPlus,
}

impl Simulation {
    /// Create a session and initialize generation 0.
    ///
    /// The parameters are used as given; see [`Simulation::from_config`] for
    /// a validating constructor.
    pub fn new(config: SimulationConfig) -> Self {
        // Create RNG from seed or thread_rng
        let rng = if let Some(seed) = config.seed {
            Xoshiro256PlusPlus::seed_from_u64(seed)
        } else {
            Xoshiro256PlusPlus::from_seed(rand::rng().random())
        };

        let mut sim = Self {
            theoretical_p: config.params.initial_freq,
            config,
            population: Population::empty(),
            generation: 0,
            history: Vec::new(),
            log: EventLog::new(),
            playing: false,
            extinct: false,
            rng,
        };
        sim.reset();
        sim
    }

    /// Validate the parameters, then create the session.
    pub fn from_config(config: SimulationConfig) -> Result<Self, ParameterError> {
        config.params.validate()?;
        Ok(Self::new(config))
    }

    /// Discard the run and start over from a fresh generation 0.
    ///
    /// The random stream is not rewound, so a reset session draws a new
    /// initial population.
    pub fn reset(&mut self) {
        let params = self.config.params;
        self.playing = false;
        self.extinct = false;
        self.generation = 0;
        self.theoretical_p = params.initial_freq;
        self.population =
            create_initial_population(params.population_size, params.initial_freq, &mut self.rng);
        self.history.clear();
        self.history
            .push(compute_stats(&self.population, 0, Some(params.initial_freq)));
        self.log.clear();
        self.log.push(0, "Simulation initialized.", LogLevel::Info);
    }

    /// Advance by one generation.
    ///
    /// The generation counter and the theoretical frequency advance even
    /// when the population dies out; the extinct generation gets no history
    /// record. A step that leaves no individuals, whatever the cause, is
    /// extinction. Once extinct, further calls are no-ops until [`reset`].
    ///
    /// [`reset`]: Simulation::reset
    pub fn step(&mut self) -> StepStatus {
        if self.extinct {
            return StepStatus::Extinct;
        }

        self.generation += 1;
        self.theoretical_p = next_theoretical_p(self.theoretical_p, &self.config.params);

        match step(&self.population, &self.config.params, &mut self.rng) {
            StepOutcome::Survived(next) if next.is_empty() => self.mark_extinct(),
            StepOutcome::Survived(next) => {
                self.population = next;
                let stats = compute_stats(&self.population, self.generation, Some(self.theoretical_p));
                log::debug!(
                    "generation {}: p={:.4} expected={:.4} Ho={:.4}",
                    self.generation,
                    stats.freq_dominant,
                    stats.expected_freq,
                    stats.heterozygosity_obs
                );
                self.history.push(stats);
                StepStatus::Advanced
            }
            StepOutcome::Extinct => self.mark_extinct(),
        }
    }

    fn mark_extinct(&mut self) -> StepStatus {
        self.population = Population::empty();
        self.extinct = true;
        self.playing = false;
        self.log
            .push(self.generation, "Population extinct!", LogLevel::Danger);
        StepStatus::Extinct
    }

    /// Advance up to `generations` steps, stopping early on extinction.
    pub fn advance(&mut self, generations: usize) -> AdvanceReport {
        let mut report = AdvanceReport::default();
        for _ in 0..generations {
            match self.step() {
                StepStatus::Advanced => report.advanced += 1,
                StepStatus::Extinct => {
                    report.extinct = true;
                    break;
                }
            }
        }
        report
    }

    /// Run for the configured number of generations.
    pub fn run(&mut self) -> AdvanceReport {
        self.advance(self.config.total_generations)
    }

    pub fn play(&mut self) {
        if !self.extinct {
            self.playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    /// One timer tick of continuous play: steps once if playing.
    pub fn tick(&mut self) -> Option<StepStatus> {
        self.playing.then(|| self.step())
    }

    /// Replace the parameters used by subsequent steps.
    ///
    /// At generation 0 the theoretical frequency follows the new initial
    /// frequency. The population itself is untouched; call [`reset`] to
    /// resample it.
    ///
    /// [`reset`]: Simulation::reset
    pub fn set_params(&mut self, params: SimulationParams) {
        self.config.params = params;
        if self.generation == 0 {
            self.theoretical_p = params.initial_freq;
        }
    }

    /// Apply a scripted event between generations.
    ///
    /// Pauses play, edits the population and parameters, logs the event and
    /// replaces the latest history record so it reflects the edited
    /// population.
    pub fn trigger_event(&mut self, event: Event) {
        self.pause();

        let outcome = event.apply(&mut self.population, &mut self.config.params, &mut self.rng);
        self.log.push(self.generation, outcome.message, outcome.level);

        let stats = compute_stats(&self.population, self.generation, Some(self.theoretical_p));
        match self.history.last_mut() {
            Some(last) => *last = stats,
            None => self.history.push(stats),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn params(&self) -> &SimulationParams {
        &self.config.params
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn theoretical_p(&self) -> f64 {
        self.theoretical_p
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Latest statistics record.
    pub fn current_stats(&self) -> Option<&GenerationStats> {
        self.history.last()
    }

    pub fn log(&self) -> &EventLog {
        &self.log
    }

    pub fn is_extinct(&self) -> bool {
        self.extinct
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::SimulationBuilder;

    fn create_test_simulation() -> Simulation {
        SimulationBuilder::new()
            .population_size(50)
            .generations(20)
            .seed(42)
            .build()
            .unwrap()
    }

    #[test]
    fn test_simulation_new() {
        let sim = create_test_simulation();
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.population().size(), 50);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.history()[0].generation, 0);
        assert_eq!(sim.history()[0].expected_freq, 0.5);
        assert_eq!(sim.theoretical_p(), 0.5);
        assert!(!sim.is_playing());
        assert!(!sim.is_extinct());
        assert_eq!(sim.log().len(), 1);
        assert_eq!(sim.log().entries()[0].message, "Simulation initialized.");
    }

    #[test]
    fn test_simulation_step() {
        let mut sim = create_test_simulation();
        assert_eq!(sim.step(), StepStatus::Advanced);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.history().len(), 2);
        assert_eq!(sim.current_stats().unwrap().generation, 1);
        assert_eq!(sim.population().size(), 50);
    }

    #[test]
    fn test_simulation_run() {
        let mut sim = create_test_simulation();
        let report = sim.run();
        assert_eq!(report.advanced, 20);
        assert!(!report.extinct);
        assert_eq!(sim.generation(), 20);
        assert_eq!(sim.history().len(), 21);
        for (i, stats) in sim.history().iter().enumerate() {
            assert_eq!(stats.generation, i);
        }
    }

    #[test]
    fn test_extinction_is_terminal() {
        let mut sim = SimulationBuilder::new()
            .population_size(30)
            .generations(10)
            .fitness(0.0, 0.0, 0.0)
            .seed(7)
            .build()
            .unwrap();
        sim.play();

        let report = sim.advance(5);
        assert_eq!(report, AdvanceReport { advanced: 0, extinct: true });
        assert!(sim.is_extinct());
        assert!(!sim.is_playing());
        assert!(sim.population().is_empty());
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.log().last().unwrap().level, LogLevel::Danger);

        // Further steps do nothing and log nothing.
        assert_eq!(sim.step(), StepStatus::Extinct);
        assert_eq!(sim.generation(), 1);
        assert_eq!(sim.log().len(), 2);
    }

    #[test]
    fn test_zero_population_size_is_extinction() {
        let mut sim = SimulationBuilder::new()
            .population_size(50)
            .generations(10)
            .seed(3)
            .build()
            .unwrap();
        sim.play();
        assert_eq!(sim.step(), StepStatus::Advanced);

        sim.set_params(SimulationParams::neutral(0, 0.5));
        assert_eq!(sim.step(), StepStatus::Extinct);
        assert!(sim.is_extinct());
        assert!(!sim.is_playing());
        assert!(sim.population().is_empty());
        assert_eq!(sim.history().len(), 2);
        assert_eq!(sim.current_stats().unwrap().generation, 1);
        assert_eq!(sim.log().len(), 2);
        assert_eq!(sim.log().last().unwrap().message, "Population extinct!");

        assert_eq!(sim.step(), StepStatus::Extinct);
        assert_eq!(sim.log().len(), 2);
    }

    #[test]
    fn test_reset_after_extinction() {
        let mut sim = SimulationBuilder::new()
            .population_size(30)
            .generations(10)
            .fitness(0.0, 0.0, 0.0)
            .seed(7)
            .build()
            .unwrap();
        sim.step();
        assert!(sim.is_extinct());

        sim.set_params(SimulationParams::neutral(30, 0.5));
        sim.reset();
        assert!(!sim.is_extinct());
        assert_eq!(sim.generation(), 0);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.log().len(), 1);
        assert_eq!(sim.step(), StepStatus::Advanced);
    }

    #[test]
    fn test_theoretical_tracks_recursion() {
        let mut sim = SimulationBuilder::new()
            .population_size(200)
            .generations(10)
            .fitness(1.0, 1.0, 0.5)
            .seed(3)
            .build()
            .unwrap();
        sim.advance(10);

        let params = *sim.params();
        let mut p = params.initial_freq;
        for stats in &sim.history()[1..] {
            p = next_theoretical_p(p, &params);
            assert_eq!(stats.expected_freq, p);
        }
        assert_eq!(sim.theoretical_p(), p);
    }

    #[test]
    fn test_play_pause_tick() {
        let mut sim = create_test_simulation();
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.generation(), 0);

        sim.play();
        assert!(sim.is_playing());
        assert_eq!(sim.tick(), Some(StepStatus::Advanced));
        assert_eq!(sim.generation(), 1);

        sim.pause();
        assert_eq!(sim.tick(), None);
        assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_set_params_at_generation_zero_resets_theory() {
        let mut sim = create_test_simulation();
        sim.set_params(SimulationParams::neutral(50, 0.8));
        assert_eq!(sim.theoretical_p(), 0.8);

        sim.step();
        sim.set_params(SimulationParams::neutral(50, 0.2));
        assert_ne!(sim.theoretical_p(), 0.2);
    }

    #[test]
    fn test_trigger_event_replaces_last_record() {
        let mut sim = create_test_simulation();
        sim.advance(3);
        sim.play();
        let history_len = sim.history().len();

        sim.trigger_event(Event::Founder);

        assert!(!sim.is_playing());
        assert_eq!(sim.population().size(), 15);
        assert_eq!(sim.params().population_size, 15);
        assert_eq!(sim.history().len(), history_len);

        let last = sim.current_stats().unwrap();
        assert_eq!(last.generation, 3);
        assert_eq!(last.total_population, 15);
        assert_eq!(last.expected_freq, sim.theoretical_p());
        assert_eq!(
            sim.log().last().unwrap().message,
            "EVENT: Founder effect (N=15)."
        );

        // The next generation is produced at the new size.
        sim.step();
        assert_eq!(sim.population().size(), 15);
    }

    #[test]
    fn test_trigger_event_parameter_overrides() {
        let mut sim = create_test_simulation();
        sim.trigger_event(Event::Radiation);
        assert_eq!(sim.params().mutation_rate, 0.02);
        sim.trigger_event(Event::Sweep);
        assert_eq!(sim.params().fitness_hom_recessive, 0.2);
        assert_eq!(sim.history().len(), 1);
        assert_eq!(sim.log().len(), 3);
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = create_test_simulation();
        let mut b = create_test_simulation();
        a.run();
        b.run();
        let freqs_a: Vec<f64> = a.history().iter().map(|s| s.freq_dominant).collect();
        let freqs_b: Vec<f64> = b.history().iter().map(|s| s.freq_dominant).collect();
        assert_eq!(freqs_a, freqs_b);
    }

    #[test]
    fn test_from_config_validates() {
        let mut config = SimulationConfig::default();
        config.params.migration_rate = 1.5;
        assert!(Simulation::from_config(config).is_err());
    }
}
