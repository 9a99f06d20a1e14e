use anyhow::Result;
use rand::Rng;

use crate::{
    engine::{System, SystemContext},
    organism::Organism,
    rng::SystemRng,
    scenario::PlantParams,
    world::Ecosystem,
};

pub struct GrowthSystem {
    params: PlantParams,
}

impl GrowthSystem {
    pub fn new(params: PlantParams) -> Self {
        Self { params }
    }
}

impl System for GrowthSystem {
    fn name(&self) -> &str {
        "growth"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        grow_pass(&mut world.plants, &self.params, rng);
        Ok(())
    }
}

/// Plant update pass. Growth fires with a fixed probability; crossing the
/// reproduction threshold resets the parent and stages one offspring with a
/// freshly drawn starting energy. The death check runs after growth, so a
/// grazed-to-zero plant that happens to grow this tick survives.
pub(crate) fn grow_pass<R: Rng>(plants: &mut Vec<Organism>, params: &PlantParams, rng: &mut R) {
    let mut newborns = Vec::new();
    for plant in plants.iter_mut() {
        if rng.gen_bool(params.growth_probability) {
            plant.energy += params.growth_increment.sample(rng);
        }
        if plant.energy > params.reproduction_threshold {
            plant.energy = params.reproduction_reset;
            let energy = params.initial_energy.sample(rng);
            newborns.push(plant.offspring(energy, params.offspring_scatter, rng));
        }
        if plant.energy <= 0 {
            plant.alive = false;
        }
    }
    plants.extend(newborns);
    plants.retain(|plant| plant.alive);
}
