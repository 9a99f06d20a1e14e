use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use foodweb::{
    engine::{EngineBuilder, EngineSettings},
    scenario::{Scenario, ScenarioLoader},
    systems::{GrazingSystem, GrowthSystem, PredationSystem},
    world::Ecosystem,
};

#[derive(Debug, Parser)]
#[command(author, version, about = "Plant/herbivore/predator ecosystem simulator")]
struct Cli {
    /// Path to a scenario YAML file (built-in scenario when omitted)
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Override tick count (uses scenario default when omitted)
    #[arg(long)]
    ticks: Option<u64>,

    /// Override the random seed (scenario seed, else entropy)
    #[arg(long)]
    seed: Option<u64>,

    /// Override snapshot interval in ticks (0 disables snapshots)
    #[arg(long)]
    snapshot_interval: Option<u64>,

    /// Directory for snapshots
    #[arg(long)]
    snapshot_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let scenario = match &cli.scenario {
        Some(path) => ScenarioLoader::new(".").load(path)?,
        None => Scenario::default(),
    };
    let ticks = scenario.ticks(cli.ticks);
    let seed = cli.seed.or(scenario.seed).unwrap_or_else(rand::random);
    let snapshot_interval = cli
        .snapshot_interval
        .unwrap_or(scenario.snapshot_interval_ticks);
    let snapshot_dir = cli
        .snapshot_dir
        .unwrap_or_else(|| PathBuf::from("snapshots"));

    let settings = EngineSettings {
        scenario_name: scenario.name.clone(),
        seed,
        snapshot_interval_ticks: snapshot_interval,
        snapshot_dir,
    };

    let mut engine = EngineBuilder::new(settings)
        .with_system(GrowthSystem::new(scenario.plants.clone()))
        .with_system(GrazingSystem::new(scenario.herbivores.clone()))
        .with_system(PredationSystem::new(scenario.predators.clone()))
        .build();

    let mut world = Ecosystem::new();
    engine.seed(&mut world, &scenario);

    for _ in 0..ticks {
        let report = engine.step(&mut world)?;
        println!("Iteration {}", report.tick);
        println!("Plants: {}", report.plants);
        println!("Herbivores: {}", report.herbivores);
        println!("Predators: {}", report.predators);
    }
    Ok(())
}
