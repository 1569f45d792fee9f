//=========================================================================
// Core Game Model
//
// Everything an engine is assembled from.
//
// Responsibilities:
// - Describe the selected mode and the weapon it hands out
// - Hold mutable session state (score, clock, ghosts, tutorial step)
// - Define per-mode rules and the routines that drive them
// - Turn session state into a presentation model for the host
//
// Notes:
// Nothing in here knows about threads or wall-clock time. Time enters
// through `RoutineScheduler::advance`, called by the engine.
//
//=========================================================================

//=== Module Declarations =================================================

pub mod behavior;
pub mod information;
pub mod mode;
pub mod routine;
pub mod target;
pub mod view;
pub mod weapon;

//=== Public API ==========================================================

pub use behavior::{
    BehaviorEvent, GameBehavior, GameBehaviorFactory, GameOutcome, SessionRef, TimeBehavior,
    TimeRules, TutorialBehavior,
};
pub use information::{
    GameInformation, ScoreInformation, SessionState, TimedInformation, TutorialInformation,
    TutorialStep,
};
pub use mode::{GameMode, GameModeKind};
pub use routine::{Routine, RoutineFiring, RoutineKind, RoutineScheduler};
pub use target::{GhostKind, TargetFactory, TargetId, TargetableItem};
pub use view::{GameView, GameViewKind, Hud, TimeDecreasingView, TimeView, TutorialView};
pub use weapon::{Weapon, WeaponFactory};
