mod grazing;
mod growth;
mod predation;

pub use grazing::GrazingSystem;
pub use growth::GrowthSystem;
pub use predation::PredationSystem;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::{organism::Organism, scenario::ForagerParams, world::within_radius};

/// One consumer update pass: every eater forages against the prey population,
/// pays its metabolic cost, dies at zero energy or reproduces past the
/// threshold. Newborns are staged and merged in after the loop, then the dead
/// are filtered out, so a newborn is first updated on the following tick.
pub(crate) fn forage_pass<R: Rng>(
    eaters: &mut Vec<Organism>,
    prey: &mut [Organism],
    params: &ForagerParams,
    rng: &mut R,
) {
    let mut newborns = Vec::new();
    for i in 0..eaters.len() {
        let nearby = within_radius(prey, eaters[i].position, params.forage_radius);
        if let Some(&target) = nearby.choose(rng) {
            eaters[i].consume(&mut prey[target]);
        }
        let eater = &mut eaters[i];
        eater.energy -= params.metabolic_cost;
        if eater.energy <= 0 {
            eater.alive = false;
        } else if eater.energy > params.reproduction_threshold {
            eater.energy = params.reproduction_reset;
            newborns.push(eater.offspring(params.reproduction_reset, params.offspring_scatter, rng));
        }
    }
    eaters.extend(newborns);
    eaters.retain(|eater| eater.alive);
}
