mod args;
mod commands;
pub mod defaults;
mod printing;

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};

use args::{ConfigArgs, RunArgs, TheoryArgs};
use commands::{config, run, theory};

/// ChimpEvo: a two-allele population genetics simulator
///
/// Simulates the coat colour locus of a chimpanzee population under natural
/// selection, mutation, migration and genetic drift (Wright-Fisher model).
#[derive(Parser, Debug)]
#[command(name = "chimpevo")]
#[command(author, version, about = "Simulates allele frequency change in a finite population", long_about = None)]
struct Cli {
    /// Number of threads to use for parallel processing
    ///
    /// If not specified, defaults to the number of logical CPUs.
    #[arg(short = 't', long, global = true)]
    threads: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    ///
    /// RUST_LOG takes precedence when set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a stochastic simulation and print its history.
    ///
    /// Parameters come from flags, optionally on top of a JSON configuration
    /// file. Scripted events can be scheduled with --event.
    Run(Box<RunArgs>),

    /// Print the deterministic (infinite-population) trajectory of p.
    Theory(TheoryArgs),

    /// Print a configuration file to use with `run --config`.
    Config(ConfigArgs),
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()?;
    }

    match cli.command {
        Commands::Run(args) => {
            run::run_simulation(&args)?;
        }
        Commands::Theory(args) => {
            theory::show_theory(&args)?;
        }
        Commands::Config(args) => {
            config::write_config(&args)?;
        }
    }

    Ok(())
}
