//=========================================================================
// Target Factory
//=========================================================================
//
// Creates ghosts at random or fixed world coordinates.
//
// The factory owns its RNG so a seeded configuration reproduces the same
// horde and the same spawn sequence.
//
//=========================================================================

//=== External Dependencies ===============================================

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::{GhostKind, TargetableItem};
use crate::config::WorldBounds;

//=== TargetFactory =======================================================

pub struct TargetFactory {
    rng: StdRng,
    bounds: WorldBounds,
}

impl TargetFactory {
    /// Creates a factory; `seed` of `None` draws from OS entropy.
    pub fn new(bounds: WorldBounds, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, bounds }
    }

    /// Uniform point inside the world bounds.
    pub fn random_position(&mut self) -> (f32, f32) {
        let x = self.rng.gen_range(self.bounds.min_x..=self.bounds.max_x);
        let y = self.rng.gen_range(self.bounds.min_y..=self.bounds.max_y);
        (x, y)
    }

    pub fn random_ghost_kind_without_king(&mut self) -> GhostKind {
        let index = self.rng.gen_range(0..GhostKind::WITHOUT_KING.len());
        GhostKind::WITHOUT_KING[index]
    }

    pub fn create_ghost(&self, kind: GhostKind, x: f32, y: f32) -> TargetableItem {
        TargetableItem::new(kind, x, y)
    }

    pub fn create_ghost_with_random_coordinates(&mut self, kind: GhostKind) -> TargetableItem {
        let (x, y) = self.random_position();
        self.create_ghost(kind, x, y)
    }

    pub fn create_king_ghost_for_death_to_the_king(&mut self) -> TargetableItem {
        self.create_ghost_with_random_coordinates(GhostKind::King)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
