use rand::Rng;
use serde::{Deserialize, Serialize};

/// Integer coordinates on an unbounded plane. Organisms never move once
/// placed; offspring scatter around the parent, so coordinates can go
/// negative or drift past the initial spawn extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another position.
    pub fn distance(self, other: Position) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        (dx * dx + dy * dy).sqrt()
    }

    /// Uniform integer position in [0, extent) on each axis.
    pub fn random_within(extent: i32, rng: &mut impl Rng) -> Self {
        Self {
            x: rng.gen_range(0..extent),
            y: rng.gen_range(0..extent),
        }
    }
}

/// One organism of any kind. Kind-specific behavior lives in the parameter
/// tables carried by the systems, not here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organism {
    pub position: Position,
    pub energy: i32,
    pub alive: bool,
}

impl Organism {
    pub fn new(position: Position, energy: i32) -> Self {
        Self {
            position,
            energy,
            alive: true,
        }
    }

    /// Spawn a newborn next to this organism, displaced by a uniform offset
    /// in [-scatter, scatter] on each axis.
    pub fn offspring(&self, energy: i32, scatter: i32, rng: &mut impl Rng) -> Organism {
        let dx = rng.gen_range(-scatter..=scatter);
        let dy = rng.gen_range(-scatter..=scatter);
        Organism::new(
            Position::new(self.position.x + dx, self.position.y + dy),
            energy,
        )
    }

    /// Transfer all of the victim's energy to this organism. The victim keeps
    /// alive = true; its own kind's next update pass notices the zero.
    pub fn consume(&mut self, victim: &mut Organism) {
        self.energy += victim.energy;
        victim.energy = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn distance_is_euclidean() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 4);
        assert_eq!(a.distance(b), 5.0);
        assert_eq!(b.distance(a), 5.0);
        assert_eq!(a.distance(a), 0.0);
    }

    #[test]
    fn offspring_lands_within_scatter() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let parent = Organism::new(Position::new(10, -3), 20);
        for _ in 0..200 {
            let child = parent.offspring(20, 1, &mut rng);
            assert!(child.alive);
            assert_eq!(child.energy, 20);
            assert!((child.position.x - 10).abs() <= 1);
            assert!((child.position.y + 3).abs() <= 1);
        }
    }

    #[test]
    fn consume_zeroes_the_victim_exactly() {
        let mut eater = Organism::new(Position::new(0, 0), 12);
        let mut victim = Organism::new(Position::new(1, 1), 9);
        eater.consume(&mut victim);
        assert_eq!(eater.energy, 21);
        assert_eq!(victim.energy, 0);
        assert!(victim.alive, "victims die on their own next update pass");
    }
}
