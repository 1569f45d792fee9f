//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use wraith_engine::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine and factory
pub use crate::engine::event::{EngineUpdate, PlayerCommand};
pub use crate::engine::factory::GameEngineFactory;
pub use crate::engine::runner::{GameRunner, RunnerHandle};
pub use crate::engine::{EngineState, GameEngine, GameEngineListener, NoopListener};

// Configuration and errors
pub use crate::config::{GameConfig, WorldBounds};
pub use crate::error::{GameError, Result};

// Game model
pub use crate::core::behavior::{BehaviorEvent, GameBehavior, GameOutcome};
pub use crate::core::information::{ScoreInformation, SessionState, TutorialStep};
pub use crate::core::mode::{GameMode, GameModeKind};
pub use crate::core::routine::{Routine, RoutineKind};
pub use crate::core::view::{GameView, Hud};
