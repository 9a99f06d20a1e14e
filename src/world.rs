use crate::organism::{Organism, Position};

/// Owns the three populations and the tick counter. Populations are
/// insertion-ordered; membership changes only by appending newborns and by
/// filtering the dead, both done inside the per-kind update passes.
#[derive(Debug, Default)]
pub struct Ecosystem {
    tick: u64,
    pub(crate) plants: Vec<Organism>,
    pub(crate) herbivores: Vec<Organism>,
    pub(crate) predators: Vec<Organism>,
}

impl Ecosystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn advance_time(&mut self) {
        self.tick += 1;
    }

    pub fn add_plant(&mut self, plant: Organism) {
        self.plants.push(plant);
    }

    pub fn add_herbivore(&mut self, herbivore: Organism) {
        self.herbivores.push(herbivore);
    }

    pub fn add_predator(&mut self, predator: Organism) {
        self.predators.push(predator);
    }

    pub fn plants(&self) -> &[Organism] {
        &self.plants
    }

    pub fn herbivores(&self) -> &[Organism] {
        &self.herbivores
    }

    pub fn predators(&self) -> &[Organism] {
        &self.predators
    }

    pub fn plant_count(&self) -> usize {
        self.plants.len()
    }

    pub fn herbivore_count(&self) -> usize {
        self.herbivores.len()
    }

    pub fn predator_count(&self) -> usize {
        self.predators.len()
    }

    /// Indices of plants within `radius` of `origin`, boundary inclusive.
    pub fn nearby_plants(&self, origin: Position, radius: f64) -> Vec<usize> {
        within_radius(&self.plants, origin, radius)
    }

    /// Indices of herbivores within `radius` of `origin`, boundary inclusive.
    pub fn nearby_herbivores(&self, origin: Position, radius: f64) -> Vec<usize> {
        within_radius(&self.herbivores, origin, radius)
    }
}

/// Linear scan; population sizes here never justify an index structure.
pub(crate) fn within_radius(population: &[Organism], origin: Position, radius: f64) -> Vec<usize> {
    population
        .iter()
        .enumerate()
        .filter(|(_, organism)| origin.distance(organism.position) <= radius)
        .map(|(index, _)| index)
        .collect()
}
