use chimpevo_sim::simulation::{GenerationStats, LogEntry, SimulationConfig, SimulationParams};
use serde::Serialize;

pub fn print_parameters(config: &SimulationConfig) {
    eprint!("{}", format_parameters(config));
}

pub fn format_parameters(config: &SimulationConfig) -> String {
    let params = &config.params;
    let mut out = String::new();
    out.push_str("\n📋 Simulation Configuration\n");
    out.push_str(&format!(
        "  • Population Size: {} [-n, --population-size]\n",
        params.population_size
    ));
    out.push_str(&format!(
        "  • Generations: {} [-g, --generations]\n",
        config.total_generations
    ));
    match config.seed {
        Some(seed) => out.push_str(&format!("  • Random Seed: {seed} [--seed]\n")),
        None => out.push_str("  • Random Seed: Random [--seed]\n"),
    }

    out.push_str("\n🐒 Coat Colour Locus\n");
    out.push_str(&format!(
        "  • Initial p (dark allele A): {} [-p, --initial-freq]\n",
        params.initial_freq
    ));
    out.push_str(&format!(
        "  • Fitness: wAA={} wAa={} waa={} [--fitness-AA, --fitness-Aa, --fitness-aa]\n",
        params.fitness_hom_dominant, params.fitness_het, params.fitness_hom_recessive
    ));
    out.push_str(&format!("  • Mutation Rate: {} [-u, --mutation-rate]\n", params.mutation_rate));
    out.push_str(&format!("  • Migration Rate: {} [-m, --migration-rate]\n", params.migration_rate));
    out
}

/// One-line summary of the latest record.
pub fn format_summary(stats: &GenerationStats) -> String {
    format!(
        "Generation {}: N={} p={:.3} (theory {:.3}) Ho={:.3} He={:.3} F={:.3}",
        stats.generation,
        stats.total_population,
        stats.freq_dominant,
        stats.expected_freq,
        stats.heterozygosity_obs,
        stats.heterozygosity_exp,
        stats.fixation_index
    )
}

pub fn history_table(history: &[GenerationStats]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>6} {:>7} {:>7} {:>7} {:>6} {:>6} {:>6} {:>7} {:>7} {:>7}\n",
        "gen", "p", "q", "theory", "AA", "Aa", "aa", "Ho", "He", "F"
    ));
    for s in history {
        out.push_str(&format!(
            "{:>6} {:>7.4} {:>7.4} {:>7.4} {:>6} {:>6} {:>6} {:>7.4} {:>7.4} {:>7.4}\n",
            s.generation,
            s.freq_dominant,
            s.freq_recessive,
            s.expected_freq,
            s.count_hom_dominant,
            s.count_het,
            s.count_hom_recessive,
            s.heterozygosity_obs,
            s.heterozygosity_exp,
            s.fixation_index
        ));
    }
    out
}

pub const HISTORY_CSV_HEADER: &str = "generation,freqA,freqa,countAA,countAa,countaa,expectedFreqA,totalPopulation,heterozygosityObs,heterozygosityExp,fixationIndex";

pub fn history_csv(history: &[GenerationStats]) -> String {
    let mut out = String::new();
    out.push_str(&format!("{HISTORY_CSV_HEADER}\n"));
    for s in history {
        out.push_str(&format!(
            "{},{},{},{},{},{},{},{},{},{},{}\n",
            s.generation,
            s.freq_dominant,
            s.freq_recessive,
            s.count_hom_dominant,
            s.count_het,
            s.count_hom_recessive,
            s.expected_freq,
            s.total_population,
            s.heterozygosity_obs,
            s.heterozygosity_exp,
            s.fixation_index
        ));
    }
    out
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RunDocument<'a> {
    pub config: &'a SimulationConfig,
    pub final_params: &'a SimulationParams,
    pub extinct: bool,
    pub history: &'a [GenerationStats],
    pub log: &'a [LogEntry],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

pub fn format_log(entries: &[LogEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&format!("  {} {entry}\n", level_marker(entry)));
    }
    out
}

fn level_marker(entry: &LogEntry) -> &'static str {
    use chimpevo_sim::simulation::LogLevel;
    match entry.level {
        LogLevel::Info => "ℹ️ ",
        LogLevel::Success => "✓",
        LogLevel::Warning => "⚠️ ",
        LogLevel::Danger => "☠️ ",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chimpevo_sim::simulation::SimulationBuilder;

    #[test]
    fn test_csv_rows() {
        let mut sim = SimulationBuilder::new()
            .population_size(10)
            .generations(4)
            .seed(1)
            .build()
            .unwrap();
        sim.run();
        let csv = history_csv(sim.history());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], HISTORY_CSV_HEADER);
        assert!(lines[1].starts_with("0,"));
        assert_eq!(lines[5].split(',').count(), 11);
    }

    #[test]
    fn test_table_has_header_and_rows() {
        let mut sim = SimulationBuilder::new()
            .population_size(10)
            .generations(2)
            .seed(1)
            .build()
            .unwrap();
        sim.run();
        let table = history_table(sim.history());
        assert_eq!(table.lines().count(), 4);
        assert!(table.lines().next().unwrap().contains("theory"));
    }

    #[test]
    fn test_parameters_block() {
        let config = SimulationBuilder::new()
            .population_size(25)
            .generations(8)
            .seed(11)
            .build_config()
            .unwrap();
        let text = format_parameters(&config);
        assert!(text.starts_with("\n📋 Simulation Configuration\n"));
        assert!(text.contains("  • Population Size: 25 [-n, --population-size]\n"));
        assert!(text.contains("  • Random Seed: 11 [--seed]\n"));
        assert!(text.ends_with("[-m, --migration-rate]\n"));

        let unseeded = SimulationConfig { seed: None, ..config };
        assert!(format_parameters(&unseeded).contains("  • Random Seed: Random [--seed]\n"));
    }
}
