use anyhow::{Context, Result};
use chimpevo_sim::simulation::{theoretical_trajectory, SimulationParams};

use crate::args::{OutputFormat, TheoryArgs};
use crate::commands::emit;

/// Print the deterministic trajectory of p for the given parameters.
pub fn show_theory(args: &TheoryArgs) -> Result<()> {
    let params = args.params.apply(SimulationParams::default());
    params.validate().context("Invalid parameters")?;

    let trajectory: Vec<f64> = theoretical_trajectory(params.initial_freq, params)
        .take(args.generations + 1)
        .collect();

    let mut out = String::new();
    match args.format {
        OutputFormat::Table => {
            out.push_str(&format!("{:>6} {:>9}\n", "gen", "p"));
            for (generation, p) in trajectory.iter().enumerate() {
                out.push_str(&format!("{generation:>6} {p:>9.6}\n"));
            }
        }
        OutputFormat::Csv => {
            out.push_str("generation,expectedFreqA\n");
            for (generation, p) in trajectory.iter().enumerate() {
                out.push_str(&format!("{generation},{p}\n"));
            }
        }
        OutputFormat::Json => {
            out = serde_json::to_string_pretty(&serde_json::json!({
                "params": params,
                "expectedFreqA": trajectory,
            }))
            .context("Failed to serialize trajectory")?;
            out.push('\n');
        }
    }
    emit(&out, None)
}
