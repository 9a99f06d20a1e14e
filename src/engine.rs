use std::path::PathBuf;

use anyhow::Result;

use crate::{
    organism::{Organism, Position},
    rng::{RngManager, SystemRng},
    scenario::Scenario,
    snapshot::SnapshotWriter,
    world::Ecosystem,
};

pub struct EngineSettings {
    pub scenario_name: String,
    pub seed: u64,
    pub snapshot_interval_ticks: u64,
    pub snapshot_dir: PathBuf,
}

pub struct EngineBuilder {
    settings: EngineSettings,
    systems: Vec<Box<dyn System>>,
}

impl EngineBuilder {
    pub fn new(settings: EngineSettings) -> Self {
        Self {
            settings,
            systems: Vec::new(),
        }
    }

    pub fn with_system(mut self, system: impl System + 'static) -> Self {
        self.systems.push(Box::new(system));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            rng: RngManager::new(self.settings.seed),
            systems: self.systems,
            snapshot_writer: SnapshotWriter::new(
                &self.settings.snapshot_dir,
                self.settings.snapshot_interval_ticks,
            ),
            settings: self.settings,
        }
    }
}

pub struct Engine {
    rng: RngManager,
    systems: Vec<Box<dyn System>>,
    snapshot_writer: SnapshotWriter,
    settings: EngineSettings,
}

impl Engine {
    /// Populate an ecosystem with the scenario's starting organisms, placed
    /// uniformly inside the spawn extent.
    pub fn seed(&mut self, world: &mut Ecosystem, scenario: &Scenario) {
        let mut rng = self.rng.stream("seeding");
        let extent = scenario.spawn_extent;
        for _ in 0..scenario.plants.initial_count {
            world.add_plant(Organism::new(
                Position::random_within(extent, &mut rng),
                scenario.plants.initial_energy.sample(&mut rng),
            ));
        }
        for _ in 0..scenario.herbivores.initial_count {
            world.add_herbivore(Organism::new(
                Position::random_within(extent, &mut rng),
                scenario.herbivores.initial_energy.sample(&mut rng),
            ));
        }
        for _ in 0..scenario.predators.initial_count {
            world.add_predator(Organism::new(
                Position::random_within(extent, &mut rng),
                scenario.predators.initial_energy.sample(&mut rng),
            ));
        }
    }

    /// Run one tick: every system in registration order, then the tick
    /// counter, then an optional snapshot.
    pub fn step(&mut self, world: &mut Ecosystem) -> Result<TickReport> {
        for system in self.systems.iter_mut() {
            let ctx = SystemContext {
                tick: world.tick(),
                scenario_name: &self.settings.scenario_name,
            };
            let mut rng = self.rng.stream(system.name());
            system.run(&ctx, world, &mut rng)?;
        }
        world.advance_time();
        let snapshot_path = self
            .snapshot_writer
            .maybe_write(world, &self.settings.scenario_name)?;
        Ok(TickReport {
            tick: world.tick(),
            plants: world.plant_count(),
            herbivores: world.herbivore_count(),
            predators: world.predator_count(),
            snapshot_path,
        })
    }

    pub fn run(&mut self, world: &mut Ecosystem, ticks: u64) -> Result<()> {
        for _ in 0..ticks {
            self.step(world)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct TickReport {
    pub tick: u64,
    pub plants: usize,
    pub herbivores: usize,
    pub predators: usize,
    pub snapshot_path: Option<PathBuf>,
}

pub struct SystemContext<'a> {
    pub tick: u64,
    pub scenario_name: &'a str,
}

pub trait System {
    fn name(&self) -> &str;
    fn run(
        &mut self,
        ctx: &SystemContext,
        world: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()>;
}
