//! History sampling and the commentary request sent to external narrators.

use chimpevo_sim::simulation::{GenerationStats, SimulationParams};

/// Start, middle and end records of a history.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HistorySample {
    pub start: GenerationStats,
    pub mid: GenerationStats,
    pub end: GenerationStats,
}

/// Pick the first, middle (`len / 2`) and last records.
///
/// Returns `None` for an empty history. With a single record all three
/// samples are that record.
pub fn sample_history(history: &[GenerationStats]) -> Option<HistorySample> {
    let start = *history.first()?;
    let mid = history[history.len() / 2];
    let end = *history.last()?;
    Some(HistorySample { start, mid, end })
}

/// Render the commentary request for a sampled history.
pub fn analysis_prompt(sample: &HistorySample, params: &SimulationParams) -> String {
    let HistorySample { start, mid, end } = sample;
    format!(
        "Act as a primatologist specialised in population genetics. Analyse the \
         evolution of a chimpanzee (Pan troglodytes) population.\n\
         Trait studied: coat colour (allele A = dark, dominant; allele a = light, recessive).\n\
         \n\
         CONTEXT:\n\
         - Population size (N): {n}\n\
         - Fitness: wAA={w_aa_dom}, wAa={w_het}, waa={w_aa_rec}\n\
         - Mutation: {u}\n\
         - Migration: {m}\n\
         \n\
         RESULTS (generation {g0} -> {g1}):\n\
         - Dark allele frequency (p): {p0:.2} -> {pm:.2} -> {p1:.2} (theory: {pt:.2})\n\
         - Final heterozygosity: {ho:.3} (expected: {he:.3})\n\
         - Fixation index (F): {f:.3}\n\
         \n\
         INSTRUCTIONS:\n\
         1. Which evolutionary force dominates? (natural selection on camouflage, \
         genetic drift from small size, mutation, migration)\n\
         2. Comment on the state of the population (loss of diversity? fixation of the dark allele?).\n\
         3. Be concise (at most 4 sentences) and scientific.",
        n = params.population_size,
        w_aa_dom = params.fitness_hom_dominant,
        w_het = params.fitness_het,
        w_aa_rec = params.fitness_hom_recessive,
        u = params.mutation_rate,
        m = params.migration_rate,
        g0 = start.generation,
        g1 = end.generation,
        p0 = start.freq_dominant,
        pm = mid.freq_dominant,
        p1 = end.freq_dominant,
        pt = end.expected_freq,
        ho = end.heterozygosity_obs,
        he = end.heterozygosity_exp,
        f = end.fixation_index,
    )
}
