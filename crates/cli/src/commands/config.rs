use anyhow::{Context, Result};
use chimpevo_sim::simulation::{SimulationConfig, SimulationParams};

use crate::args::ConfigArgs;
use crate::commands::emit;

/// Write a configuration file usable with `run --config`.
pub fn write_config(args: &ConfigArgs) -> Result<()> {
    let params = args.params.apply(SimulationParams::default());
    params.validate().context("Invalid parameters")?;

    let config = SimulationConfig::new(params, args.generations, args.seed);
    let mut json = config
        .to_json_string()
        .context("Failed to serialize configuration")?;
    json.push('\n');

    emit(&json, args.output.as_deref())?;
    if let Some(path) = &args.output {
        eprintln!("✓ Configuration written to: {}", path.display());
    }
    Ok(())
}
