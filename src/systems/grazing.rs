use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::SystemRng,
    scenario::ForagerParams,
    systems::forage_pass,
    world::Ecosystem,
};

pub struct GrazingSystem {
    params: ForagerParams,
}

impl GrazingSystem {
    pub fn new(params: ForagerParams) -> Self {
        Self { params }
    }
}

impl System for GrazingSystem {
    fn name(&self) -> &str {
        "grazing"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        forage_pass(&mut world.herbivores, &mut world.plants, &self.params, rng);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::organism::{Organism, Position};
    use crate::scenario::ForagerParams;
    use crate::systems::forage_pass;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn herbivore_drains_a_plant_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut herbivores = vec![Organism::new(Position::new(0, 0), 10)];
        let mut plants = vec![Organism::new(Position::new(3, 4), 7)];
        forage_pass(
            &mut herbivores,
            &mut plants,
            &ForagerParams::herbivore(),
            &mut rng,
        );

        // 10 + 7 eaten - 1 metabolic cost.
        assert_eq!(herbivores[0].energy, 16);
        assert_eq!(plants[0].energy, 0);
        assert!(plants[0].alive, "the grazing pass never removes plants");
    }

    #[test]
    fn plant_outside_radius_is_ignored() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut herbivores = vec![Organism::new(Position::new(0, 0), 10)];
        let mut plants = vec![Organism::new(Position::new(4, 4), 7)];
        forage_pass(
            &mut herbivores,
            &mut plants,
            &ForagerParams::herbivore(),
            &mut rng,
        );
        assert_eq!(herbivores[0].energy, 9);
        assert_eq!(plants[0].energy, 7);
    }

    #[test]
    fn starved_herbivore_is_filtered_out() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut herbivores = vec![Organism::new(Position::new(0, 0), 1)];
        let mut plants = Vec::new();
        forage_pass(
            &mut herbivores,
            &mut plants,
            &ForagerParams::herbivore(),
            &mut rng,
        );
        assert!(herbivores.is_empty());
    }

    #[test]
    fn reproduction_threshold_is_strict() {
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        // 41 - 1 = 40, not above the threshold: no offspring.
        let mut herbivores = vec![Organism::new(Position::new(0, 0), 41)];
        forage_pass(
            &mut herbivores,
            &mut Vec::new(),
            &ForagerParams::herbivore(),
            &mut rng,
        );
        assert_eq!(herbivores.len(), 1);
        assert_eq!(herbivores[0].energy, 40);

        // 42 - 1 = 41 crosses it: parent resets, newborn starts at the reset.
        let mut herbivores = vec![Organism::new(Position::new(0, 0), 42)];
        forage_pass(
            &mut herbivores,
            &mut Vec::new(),
            &ForagerParams::herbivore(),
            &mut rng,
        );
        assert_eq!(herbivores.len(), 2);
        assert_eq!(herbivores[0].energy, 20);
        assert_eq!(herbivores[1].energy, 20);
    }

    #[test]
    fn two_grazers_can_pick_the_same_plant() {
        // The second eater may select the already-drained plant and gain 0.
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let mut herbivores = vec![
            Organism::new(Position::new(0, 0), 10),
            Organism::new(Position::new(1, 0), 10),
        ];
        let mut plants = vec![Organism::new(Position::new(0, 1), 6)];
        forage_pass(
            &mut herbivores,
            &mut plants,
            &ForagerParams::herbivore(),
            &mut rng,
        );
        assert_eq!(herbivores[0].energy, 15);
        assert_eq!(herbivores[1].energy, 9);
        assert_eq!(plants[0].energy, 0);
    }
}
