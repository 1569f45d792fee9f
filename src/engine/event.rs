//=========================================================================
// Runner Messages
//
// The only types crossing the thread boundary between a host and the
// logic thread driving a `GameEngine`.
//
//   Host ──PlayerCommand──> logic thread ──EngineUpdate──> Host
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::behavior::GameOutcome;
use crate::core::information::ScoreInformation;
use crate::core::view::Hud;

//=== PlayerCommand =======================================================

/// Input forwarded from the host to the logic thread.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlayerCommand {
    /// Crosshair moved to world coordinates.
    Aim { x: f32, y: f32 },
    Fire,
    Pause,
    Resume,
    /// Abandon the session and shut the logic thread down.
    Quit,
}

//=== EngineUpdate ========================================================

/// Output published by the logic thread.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineUpdate {
    /// The HUD changed since the last published one.
    Hud(Hud),

    /// The engine stopped; this is the last update sent.
    Stopped {
        outcome: GameOutcome,
        score: ScoreInformation,
    },
}
