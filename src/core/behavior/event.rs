//=========================================================================
// Behavior Events
//=========================================================================
//
// What a behavior reports back to its engine after reacting to a routine
// or a player action. The engine forwards every event to the view and
// acts on `GameOver` itself.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::information::TutorialStep;
use crate::core::target::{GhostKind, TargetId};

//=== GameOutcome =========================================================

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// The decreasing clock reached zero.
    TimeUp,
    /// The king ghost was shot down.
    KingKilled,
    /// The player tapped through the final tutorial step.
    TutorialCompleted,
    /// The host stopped the engine before the rules ended the game.
    Abandoned,
}

//=== BehaviorEvent =======================================================

#[derive(Debug, Clone, PartialEq)]
pub enum BehaviorEvent {
    Reloaded {
        ammunition: u32,
    },
    OutOfAmmo,
    ShotMissed,
    TargetHit {
        id: TargetId,
        remaining_health: u32,
    },
    TargetKilled {
        id: TargetId,
        kind: GhostKind,
        points: u32,
    },
    TargetSpawned {
        id: TargetId,
        kind: GhostKind,
        x: f32,
        y: f32,
    },
    TimeChanged {
        current: Duration,
    },
    TutorialStepChanged(TutorialStep),
    GameOver(GameOutcome),
}
