//=========================================================================
// Ghosts
//=========================================================================
//
// Ghost kinds and the targetable items placed in the world.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== GhostKind ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GhostKind {
    Easy,
    Baby,
    Helmet,
    Hidden,
    Blond,
    King,
}

impl GhostKind {
    /// Every kind the spawner may pick outside of the king's own mode.
    pub const WITHOUT_KING: [GhostKind; 5] = [
        GhostKind::Easy,
        GhostKind::Baby,
        GhostKind::Helmet,
        GhostKind::Hidden,
        GhostKind::Blond,
    ];

    pub fn base_health(self) -> u32 {
        match self {
            Self::Easy | Self::Baby | Self::Hidden | Self::King => 1,
            Self::Blond => 3,
            Self::Helmet => 5,
        }
    }

    pub fn base_points(self) -> u32 {
        match self {
            Self::Easy => 1,
            Self::Baby => 2,
            Self::Hidden => 5,
            Self::Blond => 6,
            Self::Helmet => 10,
            Self::King => 666,
        }
    }
}

//=== TargetableItem ======================================================

/// Session-unique target identifier, assigned when the target joins a session.
pub type TargetId = u64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TargetableItem {
    pub id: TargetId,
    pub kind: GhostKind,
    pub x: f32,
    pub y: f32,
    pub health: u32,
}

impl TargetableItem {
    /// Creates a full-health ghost. The id is assigned by the session.
    pub fn new(kind: GhostKind, x: f32, y: f32) -> Self {
        Self {
            id: 0,
            kind,
            x,
            y,
            health: kind.base_health(),
        }
    }

    /// Applies damage and returns true if this hit killed the ghost.
    pub fn hit(&mut self, damage: u32) -> bool {
        let was_alive = self.is_alive();
        self.health = self.health.saturating_sub(damage);
        was_alive && !self.is_alive()
    }

    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    pub fn points(&self) -> u32 {
        self.kind.base_points()
    }

    /// Squared distance from a world point.
    pub(crate) fn distance_sq(&self, x: f32, y: f32) -> f32 {
        let dx = self.x - x;
        let dy = self.y - y;
        dx * dx + dy * dy
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn helmet_survives_single_hit() {
        let mut ghost = TargetableItem::new(GhostKind::Helmet, 0.0, 0.0);
        assert!(!ghost.hit(1));
        assert_eq!(ghost.health, 4);
        assert!(ghost.is_alive());
    }

    #[test]
    fn kill_is_reported_once() {
        let mut ghost = TargetableItem::new(GhostKind::Easy, 0.0, 0.0);
        assert!(ghost.hit(3));
        assert!(!ghost.hit(1));
        assert_eq!(ghost.health, 0);
    }

    #[test]
    fn king_is_worth_the_most() {
        let best = GhostKind::WITHOUT_KING
            .iter()
            .map(|k| k.base_points())
            .max()
            .unwrap();
        assert!(GhostKind::King.base_points() > best);
        assert!(!GhostKind::WITHOUT_KING.contains(&GhostKind::King));
    }
}
