use chimpevo_sim::simulation::{Event, SimulationParams};
use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// Evolutionary parameters. Each flag overrides the configuration file (or
/// the built-in default) when given.
#[derive(Args, Debug, Clone, Default)]
pub struct ParamArgs {
    /// Population size (N)
    #[arg(short = 'n', long)]
    pub population_size: Option<usize>,

    /// Initial frequency of the dark allele A (p0, 0.0-1.0)
    #[arg(short = 'p', long)]
    pub initial_freq: Option<f64>,

    /// Viability of AA (dark coat)
    #[arg(long = "fitness-AA", value_name = "W")]
    pub fitness_hom_dominant: Option<f64>,

    /// Viability of Aa (dark coat)
    #[arg(long = "fitness-Aa", value_name = "W")]
    pub fitness_het: Option<f64>,

    /// Viability of aa (light coat)
    #[arg(long = "fitness-aa", value_name = "W")]
    pub fitness_hom_recessive: Option<f64>,

    /// Symmetric mutation rate per allele per generation (u = v)
    #[arg(short = 'u', long)]
    pub mutation_rate: Option<f64>,

    /// Fraction of the population replaced by migrants each generation (m)
    #[arg(short = 'm', long)]
    pub migration_rate: Option<f64>,
}

impl ParamArgs {
    /// Overlay the given flags on `base`.
    pub fn apply(&self, mut base: SimulationParams) -> SimulationParams {
        if let Some(n) = self.population_size {
            base.population_size = n;
        }
        if let Some(p) = self.initial_freq {
            base.initial_freq = p;
        }
        if let Some(w) = self.fitness_hom_dominant {
            base.fitness_hom_dominant = w;
        }
        if let Some(w) = self.fitness_het {
            base.fitness_het = w;
        }
        if let Some(w) = self.fitness_hom_recessive {
            base.fitness_hom_recessive = w;
        }
        if let Some(u) = self.mutation_rate {
            base.mutation_rate = u;
        }
        if let Some(m) = self.migration_rate {
            base.migration_rate = m;
        }
        base
    }
}

/// Output format for generation tables.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Aligned, human-readable columns
    #[default]
    Table,
    /// JSON document
    Json,
    /// Comma-separated values with a header row
    Csv,
}

/// An event to trigger when the run reaches a given generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub generation: usize,
    pub event: Event,
}

/// Parse `<generation>:<event>`, e.g. `50:bottleneck`.
pub fn parse_scheduled_event(s: &str) -> Result<ScheduledEvent, String> {
    let (generation, name) = s
        .split_once(':')
        .ok_or_else(|| format!("expected <generation>:<event>, got '{s}'"))?;
    let generation = generation
        .trim()
        .parse::<usize>()
        .map_err(|e| format!("invalid generation '{generation}': {e}"))?;
    let event = name.parse::<Event>().map_err(|e| e.to_string())?;
    Ok(ScheduledEvent { generation, event })
}

#[derive(Args, Debug)]
pub struct RunArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Load parameters from a JSON configuration file (flags override it)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of generations
    #[arg(short = 'g', long)]
    pub generations: Option<usize>,

    /// Random seed (default: configured seed, otherwise random)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Scripted event as <generation>:<event>; repeatable.
    ///
    /// Events: bottleneck, sweep, radiation, founder.
    #[arg(short, long = "event", value_name = "GEN:EVENT", value_parser = parse_scheduled_event)]
    pub events: Vec<ScheduledEvent>,

    /// Output format for the generation history
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Write the history to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Append a short rule-based commentary on the run
    #[arg(long)]
    pub narrate: bool,
}

#[derive(Args, Debug)]
pub struct TheoryArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = crate::defaults::GENERATIONS)]
    pub generations: usize,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub params: ParamArgs,

    /// Number of generations
    #[arg(short = 'g', long, default_value_t = crate::defaults::GENERATIONS)]
    pub generations: usize,

    /// Random seed to store in the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Write the configuration to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
