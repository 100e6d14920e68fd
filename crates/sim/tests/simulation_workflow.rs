//! End-to-end tests of a simulation session.

use chimpevo_sim::simulation::{
    Event, GenerationStats, LogLevel, Simulation, SimulationBuilder, SimulationConfig,
    SimulationParams,
};
use tempfile::TempDir;

fn assert_record_consistent(stats: &GenerationStats) {
    assert_eq!(
        stats.count_hom_dominant + stats.count_het + stats.count_hom_recessive,
        stats.total_population,
        "counts do not sum at generation {}",
        stats.generation
    );
    assert!((0.0..=1.0).contains(&stats.freq_dominant));
    assert!((0.0..=1.0).contains(&stats.freq_recessive));
    assert!((stats.freq_dominant + stats.freq_recessive - 1.0).abs() < 1e-12);
    assert!(
        (stats.heterozygosity_exp - 2.0 * stats.freq_dominant * stats.freq_recessive).abs() < 1e-12
    );
    if stats.heterozygosity_exp == 0.0 {
        assert_eq!(stats.fixation_index, 0.0);
    }
    assert!((0.0..=1.0).contains(&stats.expected_freq));
}

#[test]
fn test_complete_workflow() {
    let mut sim = SimulationBuilder::new()
        .population_size(120)
        .generations(60)
        .initial_freq(0.4)
        .fitness(1.0, 0.95, 0.8)
        .mutation_rate(0.001)
        .migration_rate(0.02)
        .seed(2024)
        .build()
        .expect("Failed to build simulation");

    let report = sim.run();
    assert_eq!(report.advanced, 60);
    assert!(!report.extinct);
    assert_eq!(sim.history().len(), 61);

    for (gen, stats) in sim.history().iter().enumerate() {
        assert_eq!(stats.generation, gen);
        assert_eq!(stats.total_population, 120);
        assert_record_consistent(stats);
    }
}

#[test]
fn test_workflow_with_scripted_events() {
    let mut sim = SimulationBuilder::new()
        .population_size(300)
        .generations(40)
        .seed(11)
        .build()
        .unwrap();

    sim.advance(10);
    sim.trigger_event(Event::Bottleneck);
    let bottleneck_size = sim.population().size();
    assert!(bottleneck_size >= 5);
    assert_eq!(sim.params().population_size, bottleneck_size);
    assert_eq!(sim.current_stats().unwrap().total_population, bottleneck_size);

    sim.advance(10);
    assert_eq!(sim.population().size(), bottleneck_size);

    sim.trigger_event(Event::Sweep);
    sim.trigger_event(Event::Radiation);
    sim.advance(10);

    assert_eq!(sim.generation(), 30);
    assert_eq!(sim.history().len(), 31);
    sim.history().iter().for_each(assert_record_consistent);

    let levels: Vec<LogLevel> = sim.log().iter().map(|e| e.level).collect();
    assert_eq!(
        levels,
        vec![LogLevel::Info, LogLevel::Danger, LogLevel::Warning, LogLevel::Warning]
    );
    assert_eq!(sim.log().entries()[1].generation, 10);
    assert_eq!(sim.log().entries()[2].generation, 20);
}

#[test]
fn test_config_file_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");

    let params = SimulationParams::neutral(80, 0.25).with_fitness(1.0, 1.0, 0.5);
    let config = SimulationConfig::new(params, 15, Some(5));
    std::fs::write(&path, config.to_json_string().unwrap()).unwrap();

    let loaded = SimulationConfig::from_json_file(&path).unwrap();
    assert_eq!(loaded, config);

    let mut a = Simulation::from_config(loaded).unwrap();
    let mut b = Simulation::new(config);
    a.run();
    b.run();
    assert_eq!(a.history(), b.history());
}

#[test]
fn test_same_seed_same_history() {
    let run = |seed| {
        let mut sim = SimulationBuilder::new()
            .population_size(60)
            .generations(30)
            .mutation_rate(0.01)
            .migration_rate(0.05)
            .seed(seed)
            .build()
            .unwrap();
        sim.run();
        sim.history().to_vec()
    };

    assert_eq!(run(42), run(42));
    assert_ne!(run(42), run(43));
}

#[test]
fn test_extinction_stops_run() {
    let mut sim = SimulationBuilder::new()
        .population_size(50)
        .generations(100)
        .fitness(0.01, 0.01, 0.01)
        .seed(9)
        .build()
        .unwrap();

    let report = sim.run();
    assert!(report.extinct);
    assert!(report.advanced < 100);
    assert!(sim.population().is_empty());
    assert_eq!(sim.history().len(), report.advanced + 1);
    assert_eq!(sim.generation(), report.advanced + 1);

    let extinctions = sim
        .log()
        .iter()
        .filter(|e| e.level == LogLevel::Danger)
        .count();
    assert_eq!(extinctions, 1);
}
