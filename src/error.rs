//=========================================================================
// Errors
//=========================================================================
//
// Crate-wide error type.
//
// Every fallible operation (mode parsing, engine assembly, engine state
// transitions, runner startup) reports through `GameError`.
//
//=========================================================================

//=== External Dependencies ===============================================

use thiserror::Error;

//=== Internal Dependencies ===============================================

use crate::core::mode::GameModeKind;
use crate::engine::EngineState;

//=== GameError ===========================================================

/// Errors produced while assembling or driving a game engine.
#[derive(Debug, Error)]
pub enum GameError {
    /// A raw mode id did not name any known game mode.
    #[error("Unknown game mode id: {0}")]
    UnknownGameMode(u8),

    /// The mode level cannot produce a playable session.
    #[error("Invalid level {level} for game mode {kind:?}")]
    InvalidLevel { kind: GameModeKind, level: u32 },

    /// A restored session state does not belong to the mode it claims.
    #[error("Session state of kind {state} cannot restore game mode {kind:?}")]
    ModeStateMismatch {
        kind: GameModeKind,
        state: &'static str,
    },

    /// A configuration loaded without the builder holds unusable values.
    #[error("Invalid game configuration: {0}")]
    InvalidConfig(&'static str),

    /// A restored session had already ended when it was saved.
    #[error("Session for game mode {0:?} is already over")]
    SessionFinished(GameModeKind),

    /// A routine was registered with a zero interval.
    #[error("Routine interval must be positive")]
    InvalidRoutineInterval,

    /// The engine was asked to move between states it cannot connect.
    #[error("Cannot {action} an engine that is {from:?}")]
    InvalidTransition {
        from: EngineState,
        action: &'static str,
    },

    /// The logic thread could not be spawned.
    #[error("Runner thread failed to start: {0}")]
    RunnerSpawn(#[from] std::io::Error),

    /// The logic thread panicked before handing the engine back.
    #[error("Runner thread panicked")]
    RunnerPanicked,
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, GameError>;
