//=========================================================================
// Session State
//=========================================================================
//
// Mode-specific wrappers around `GameInformation` and the tagged union
// the engine hands out on save and takes back on restore.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use super::GameInformation;
use crate::core::mode::GameMode;
use crate::core::weapon::Weapon;

//=== TimedInformation ====================================================

/// Session state for clock-driven modes.
///
/// `current_time` is the remaining time for decreasing modes and the
/// elapsed chronometer for Death to the King.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimedInformation {
    pub info: GameInformation,
    pub current_time: Duration,
    pub starting_time: Duration,
}

impl TimedInformation {
    pub fn new(mode: GameMode, weapon: Weapon, starting_time: Duration) -> Self {
        Self {
            info: GameInformation::new(mode, weapon),
            current_time: starting_time,
            starting_time,
        }
    }
}

//=== TutorialStep ========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TutorialStep {
    Welcome,
    Crosshair,
    Ammo,
    Target,
    Kill,
    Congratulation,
    TargetTwo,
    KillTwo,
    CongratulationTwo,
    Score,
    End,
}

impl TutorialStep {
    /// The step after this one; `End` is terminal.
    pub fn next(self) -> Self {
        match self {
            Self::Welcome => Self::Crosshair,
            Self::Crosshair => Self::Ammo,
            Self::Ammo => Self::Target,
            Self::Target => Self::Kill,
            Self::Kill => Self::Congratulation,
            Self::Congratulation => Self::TargetTwo,
            Self::TargetTwo => Self::KillTwo,
            Self::KillTwo => Self::CongratulationTwo,
            Self::CongratulationTwo => Self::Score,
            Self::Score => Self::End,
            Self::End => Self::End,
        }
    }

    /// Steps that wait for the player to shoot a ghost instead of a tap.
    pub fn awaits_kill(self) -> bool {
        matches!(self, Self::Kill | Self::KillTwo)
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::Welcome => "Welcome, hunter. Tap to begin your training.",
            Self::Crosshair => "This is your crosshair. Turn around to move it.",
            Self::Ammo => "Each shot costs a bullet. Bullets come back over time.",
            Self::Target => "A ghost has appeared. Find it.",
            Self::Kill => "Aim at the ghost and shoot it.",
            Self::Congratulation => "Well done! That one was easy.",
            Self::TargetTwo => "This ghost wears a helmet. Find it.",
            Self::KillTwo => "Helmets take several hits. Keep shooting.",
            Self::CongratulationTwo => "Impressive shooting.",
            Self::Score => "Every kill adds to your score.",
            Self::End => "Training complete. Tap to leave.",
        }
    }
}

//=== TutorialInformation =================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TutorialInformation {
    pub info: GameInformation,
    pub step: TutorialStep,
}

impl TutorialInformation {
    pub fn new(mode: GameMode, weapon: Weapon) -> Self {
        Self {
            info: GameInformation::new(mode, weapon),
            step: TutorialStep::Welcome,
        }
    }
}

//=== SessionState ========================================================

/// Complete mutable state of one game session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionState {
    Timed(TimedInformation),
    Tutorial(TutorialInformation),
}

impl SessionState {
    pub fn info(&self) -> &GameInformation {
        match self {
            Self::Timed(timed) => &timed.info,
            Self::Tutorial(tutorial) => &tutorial.info,
        }
    }

    pub fn mode(&self) -> GameMode {
        self.info().mode
    }

    /// Short variant name, used in diagnostics.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Timed(_) => "Timed",
            Self::Tutorial(_) => "Tutorial",
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
