//=========================================================================
// Routines
//=========================================================================
//
// Periodic callback descriptors consumed by the engine's run loop.
//
// Architecture:
//   GameEngine::update(elapsed)
//        ↓
//   RoutineScheduler::advance(elapsed) → Vec<RoutineFiring>
//        ↓
//   GameEngine::on_run(firing) → GameBehavior::{reload, spawn, tick}
//
// Time is supplied by the caller, so the same scheduler serves a real
// fixed-rate loop (see `GameRunner`) and deterministic tests.
//
//=========================================================================

//=== Module Declarations =================================================

mod scheduler;

//=== Public API ==========================================================

pub use scheduler::RoutineScheduler;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== RoutineKind =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoutineKind {
    /// Gives the weapon a bullet back.
    Reloader,
    /// Offers the behavior a chance to add a ghost.
    Spawner,
    /// Advances the mode's clock by the elapsed time.
    Ticker,
}

//=== Routine =============================================================

/// A periodic timer descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Routine {
    pub kind: RoutineKind,
    pub interval: Duration,
}

impl Routine {
    pub fn new(kind: RoutineKind, interval: Duration) -> Self {
        Self { kind, interval }
    }

    /// Clock routine; its firings carry the time since the previous tick.
    pub fn ticker(interval: Duration) -> Self {
        Self::new(RoutineKind::Ticker, interval)
    }
}

//=== RoutineFiring =======================================================

/// One due routine, emitted by [`RoutineScheduler::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoutineFiring {
    pub kind: RoutineKind,
    /// Time since this routine last fired (or was registered/restarted).
    pub elapsed: Duration,
}
