pub mod engine;
pub mod organism;
pub mod rng;
pub mod scenario;
pub mod snapshot;
pub mod systems;
pub mod world;

pub use engine::{Engine, EngineBuilder, EngineSettings, TickReport};
pub use organism::{Organism, Position};
pub use scenario::{Scenario, ScenarioLoader};
pub use world::Ecosystem;
