use anyhow::Result;

use crate::{
    engine::{System, SystemContext},
    rng::SystemRng,
    scenario::ForagerParams,
    systems::forage_pass,
    world::Ecosystem,
};

pub struct PredationSystem {
    params: ForagerParams,
}

impl PredationSystem {
    pub fn new(params: ForagerParams) -> Self {
        Self { params }
    }
}

impl System for PredationSystem {
    fn name(&self) -> &str {
        "predation"
    }

    fn run(
        &mut self,
        _ctx: &SystemContext,
        world: &mut Ecosystem,
        rng: &mut SystemRng<'_>,
    ) -> Result<()> {
        forage_pass(
            &mut world.predators,
            &mut world.herbivores,
            &self.params,
            rng,
        );
        Ok(())
    }
}
