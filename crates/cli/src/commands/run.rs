use anyhow::{Context, Result};
use chimpevo_analysis::{summarize_or, HeuristicNarrator};
use chimpevo_sim::simulation::{Simulation, SimulationConfig, StepStatus};
use indicatif::{ProgressBar, ProgressStyle};

use crate::args::{OutputFormat, RunArgs};
use crate::commands::emit;
use crate::defaults;
use crate::printing::{
    format_log, format_summary, history_csv, history_table, print_parameters, RunDocument,
};

/// Resolve the configuration: file (if any), then flag overrides.
pub fn resolve_config(args: &RunArgs) -> Result<SimulationConfig> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::from_json_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => SimulationConfig {
            total_generations: defaults::GENERATIONS,
            ..SimulationConfig::default()
        },
    };

    config.params = args.params.apply(config.params);
    if let Some(generations) = args.generations {
        config.total_generations = generations;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    Ok(config)
}

pub fn run_simulation(args: &RunArgs) -> Result<()> {
    eprintln!("🐒 ChimpEvo - Running Simulation");
    eprintln!("============================================");

    let config = resolve_config(args)?;
    print_parameters(&config);

    let mut sim = Simulation::from_config(config.clone()).context("Invalid parameters")?;
    let total = config.total_generations;

    let mut schedule = args.events.clone();
    schedule.sort_by_key(|scheduled| scheduled.generation);
    let mut pending = schedule.into_iter().peekable();

    let pb = if args.progress {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {per_sec}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    eprintln!("\nRunning {total} generations...");
    loop {
        if sim.is_extinct() {
            break;
        }
        while let Some(scheduled) = pending.next_if(|s| s.generation <= sim.generation()) {
            sim.trigger_event(scheduled.event);
        }
        if sim.generation() >= total {
            break;
        }
        if sim.step() == StepStatus::Extinct {
            break;
        }
        if let Some(pb) = &pb {
            pb.inc(1);
        }
    }

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }
    for scheduled in pending {
        log::warn!(
            "event '{}' at generation {} was not reached",
            scheduled.event,
            scheduled.generation
        );
    }

    let narrative = args.narrate.then(|| {
        summarize_or(
            &HeuristicNarrator,
            sim.history(),
            sim.params(),
            defaults::NARRATION_FALLBACK,
        )
    });

    let content = match args.format {
        OutputFormat::Table => history_table(sim.history()),
        OutputFormat::Csv => history_csv(sim.history()),
        OutputFormat::Json => {
            let document = RunDocument {
                config: &config,
                final_params: sim.params(),
                extinct: sim.is_extinct(),
                history: sim.history(),
                log: sim.log().entries(),
                narrative: narrative.clone(),
            };
            let mut json = serde_json::to_string_pretty(&document)
                .context("Failed to serialize history")?;
            json.push('\n');
            json
        }
    };
    emit(&content, args.output.as_deref())?;

    eprintln!("\n📜 Event Log");
    eprint!("{}", format_log(sim.log().entries()));

    if sim.is_extinct() {
        eprintln!("\n☠️  Population went extinct at generation {}", sim.generation());
    } else {
        eprintln!("\n✓ Simulation complete!");
    }
    if let Some(stats) = sim.current_stats() {
        eprintln!("  {}", format_summary(stats));
    }
    if let Some(path) = &args.output {
        eprintln!("  History written to: {}", path.display());
    }
    if let Some(text) = narrative {
        eprintln!("\n🔬 Analysis");
        eprintln!("  {text}");
    }

    Ok(())
}
