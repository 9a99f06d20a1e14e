use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_spawn_extent() -> i32 {
    100
}

fn default_ticks() -> u64 {
    100
}

/// Inclusive integer range, sampled uniformly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EnergyRange {
    pub min: i32,
    pub max: i32,
}

impl EnergyRange {
    pub fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    pub fn sample(&self, rng: &mut impl Rng) -> i32 {
        rng.gen_range(self.min..=self.max)
    }
}

/// Rule table for plants: stochastic growth plus threshold reproduction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlantParams {
    pub initial_count: usize,
    pub initial_energy: EnergyRange,
    pub growth_probability: f64,
    pub growth_increment: EnergyRange,
    pub reproduction_threshold: i32,
    pub reproduction_reset: i32,
    pub offspring_scatter: i32,
}

impl Default for PlantParams {
    fn default() -> Self {
        Self {
            initial_count: 50,
            initial_energy: EnergyRange::new(1, 10),
            growth_probability: 0.2,
            growth_increment: EnergyRange::new(1, 2),
            reproduction_threshold: 15,
            reproduction_reset: 10,
            offspring_scatter: 1,
        }
    }
}

/// Rule table shared by the two consumer kinds. The reproduction reset value
/// doubles as the newborn's starting energy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ForagerParams {
    pub initial_count: usize,
    pub initial_energy: EnergyRange,
    pub forage_radius: f64,
    pub metabolic_cost: i32,
    pub reproduction_threshold: i32,
    pub reproduction_reset: i32,
    pub offspring_scatter: i32,
}

impl ForagerParams {
    pub fn herbivore() -> Self {
        Self {
            initial_count: 10,
            initial_energy: EnergyRange::new(10, 29),
            forage_radius: 5.0,
            metabolic_cost: 1,
            reproduction_threshold: 40,
            reproduction_reset: 20,
            offspring_scatter: 1,
        }
    }

    pub fn predator() -> Self {
        Self {
            initial_count: 5,
            initial_energy: EnergyRange::new(20, 69),
            forage_radius: 10.0,
            metabolic_cost: 2,
            reproduction_threshold: 80,
            reproduction_reset: 40,
            offspring_scatter: 1,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: Option<String>,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_ticks")]
    pub ticks: u64,
    #[serde(default)]
    pub snapshot_interval_ticks: u64,
    #[serde(default = "default_spawn_extent")]
    pub spawn_extent: i32,
    #[serde(default)]
    pub plants: PlantParams,
    #[serde(default = "ForagerParams::herbivore")]
    pub herbivores: ForagerParams,
    #[serde(default = "ForagerParams::predator")]
    pub predators: ForagerParams,
}

impl Default for Scenario {
    fn default() -> Self {
        Self {
            name: "meadow".to_string(),
            description: None,
            seed: None,
            ticks: default_ticks(),
            snapshot_interval_ticks: 0,
            spawn_extent: default_spawn_extent(),
            plants: PlantParams::default(),
            herbivores: ForagerParams::herbivore(),
            predators: ForagerParams::predator(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("spawn_extent must be positive, got {0}")]
    SpawnExtent(i32),
    #[error("{kind}: energy range {min}..={max} is empty")]
    EmptyRange { kind: &'static str, min: i32, max: i32 },
    #[error("plants: growth_probability {0} is outside [0, 1]")]
    GrowthProbability(f64),
    #[error("{kind}: forage_radius must be non-negative, got {0}")]
    ForageRadius { kind: &'static str, radius: f64 },
    #[error("{kind}: reproduction_reset {reset} must stay below threshold {threshold}")]
    ResetAboveThreshold {
        kind: &'static str,
        reset: i32,
        threshold: i32,
    },
    #[error("{kind}: offspring_scatter must be non-negative, got {scatter}")]
    NegativeScatter { kind: &'static str, scatter: i32 },
}

impl Scenario {
    pub fn validate(&self) -> Result<(), ScenarioError> {
        if self.spawn_extent <= 0 {
            return Err(ScenarioError::SpawnExtent(self.spawn_extent));
        }
        if !(0.0..=1.0).contains(&self.plants.growth_probability) {
            return Err(ScenarioError::GrowthProbability(
                self.plants.growth_probability,
            ));
        }
        for (kind, range) in [
            ("plants.initial_energy", self.plants.initial_energy),
            ("plants.growth_increment", self.plants.growth_increment),
            ("herbivores.initial_energy", self.herbivores.initial_energy),
            ("predators.initial_energy", self.predators.initial_energy),
        ] {
            if range.min > range.max {
                return Err(ScenarioError::EmptyRange {
                    kind,
                    min: range.min,
                    max: range.max,
                });
            }
        }
        for (kind, scatter) in [
            ("plants", self.plants.offspring_scatter),
            ("herbivores", self.herbivores.offspring_scatter),
            ("predators", self.predators.offspring_scatter),
        ] {
            if scatter < 0 {
                return Err(ScenarioError::NegativeScatter { kind, scatter });
            }
        }
        for (kind, params) in [
            ("herbivores", &self.herbivores),
            ("predators", &self.predators),
        ] {
            if params.forage_radius < 0.0 {
                return Err(ScenarioError::ForageRadius {
                    kind,
                    radius: params.forage_radius,
                });
            }
            if params.reproduction_reset >= params.reproduction_threshold {
                return Err(ScenarioError::ResetAboveThreshold {
                    kind,
                    reset: params.reproduction_reset,
                    threshold: params.reproduction_threshold,
                });
            }
        }
        Ok(())
    }

    pub fn ticks(&self, override_ticks: Option<u64>) -> u64 {
        override_ticks.unwrap_or(self.ticks)
    }
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<Scenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: Scenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        scenario
            .validate()
            .with_context(|| format!("Invalid scenario {}", path.display()))?;
        Ok(scenario)
    }
}
