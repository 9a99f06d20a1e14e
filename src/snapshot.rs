//! Periodic JSON dumps of the full population state, for inspecting a run
//! after the fact. Snapshots are write-only; nothing reads them back.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::organism::Organism;
use crate::world::Ecosystem;

#[derive(Debug, Serialize, Deserialize)]
pub struct OrganismRecord {
    pub x: i32,
    pub y: i32,
    pub energy: i32,
}

impl From<&Organism> for OrganismRecord {
    fn from(organism: &Organism) -> Self {
        Self {
            x: organism.position.x,
            y: organism.position.y,
            energy: organism.energy,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub scenario: String,
    pub tick: u64,
    pub generated_at: String,
    pub plants: Vec<OrganismRecord>,
    pub herbivores: Vec<OrganismRecord>,
    pub predators: Vec<OrganismRecord>,
}

impl WorldSnapshot {
    pub fn capture(world: &Ecosystem, scenario: &str) -> Self {
        Self {
            scenario: scenario.to_string(),
            tick: world.tick(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            plants: world.plants().iter().map(OrganismRecord::from).collect(),
            herbivores: world.herbivores().iter().map(OrganismRecord::from).collect(),
            predators: world.predators().iter().map(OrganismRecord::from).collect(),
        }
    }
}

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("snapshot serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct SnapshotWriter {
    dir: PathBuf,
    interval: u64,
}

impl SnapshotWriter {
    pub fn new(dir: &Path, interval: u64) -> Self {
        Self {
            dir: dir.to_path_buf(),
            interval,
        }
    }

    /// Write a snapshot when the tick lands on the interval. An interval of
    /// zero disables snapshotting entirely.
    pub fn maybe_write(
        &self,
        world: &Ecosystem,
        scenario_name: &str,
    ) -> Result<Option<PathBuf>, SnapshotError> {
        if self.interval == 0 || world.tick() % self.interval != 0 {
            return Ok(None);
        }
        let dir = self.dir.join(scenario_name);
        fs::create_dir_all(&dir)?;
        let path = dir.join(format!("tick_{:06}.json", world.tick()));
        let snapshot = WorldSnapshot::capture(world, scenario_name);
        fs::write(&path, serde_json::to_string_pretty(&snapshot)?)?;
        Ok(Some(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::organism::{Organism, Position};

    #[test]
    fn interval_zero_writes_nothing() {
        let writer = SnapshotWriter::new(Path::new("unused"), 0);
        let world = Ecosystem::new();
        assert!(writer.maybe_write(&world, "test").unwrap().is_none());
    }

    #[test]
    fn snapshot_round_trips_through_json() {
        let mut world = Ecosystem::new();
        world.add_plant(Organism::new(Position::new(2, 3), 8));
        world.add_predator(Organism::new(Position::new(-1, 4), 25));
        let snapshot = WorldSnapshot::capture(&world, "test");

        let json = serde_json::to_string(&snapshot).unwrap();
        let parsed: WorldSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.scenario, "test");
        assert_eq!(parsed.plants.len(), 1);
        assert_eq!(parsed.plants[0].energy, 8);
        assert_eq!(parsed.predators[0].x, -1);
        assert!(parsed.herbivores.is_empty());
    }
}
