//=========================================================================
// Game Modes
//=========================================================================
//
// Identifies the selected play style and its level.
//
// Raw ids come from persisted sessions and menus; unknown ids are
// rejected at conversion time so the factory only ever sees valid kinds.
//
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::GameError;

//=== GameModeKind ========================================================

/// The four supported play styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameModeKind {
    /// Time-limited sprint (level 1) or marathon (higher levels).
    RemainingTime,
    /// Find and shoot the king hidden in a fixed horde.
    DeathToTheKing,
    /// Clock runs down, every kill buys time back.
    Survival,
    /// Guided walk through crosshair, ammunition and targets.
    Tutorial,
}

impl GameModeKind {
    /// Stable numeric id used by menus and saved sessions.
    pub fn id(self) -> u8 {
        match self {
            Self::RemainingTime => 0,
            Self::DeathToTheKing => 1,
            Self::Survival => 2,
            Self::Tutorial => 3,
        }
    }
}

impl TryFrom<u8> for GameModeKind {
    type Error = GameError;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::RemainingTime),
            1 => Ok(Self::DeathToTheKing),
            2 => Ok(Self::Survival),
            3 => Ok(Self::Tutorial),
            other => Err(GameError::UnknownGameMode(other)),
        }
    }
}

//=== GameMode ============================================================

/// A selected play mode.
///
/// Only [`GameModeKind::RemainingTime`] interprets the level: the starting
/// clock is the configured starting time multiplied by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameMode {
    pub kind: GameModeKind,
    pub level: u32,
}

impl GameMode {
    pub const SPRINT_LEVEL: u32 = 1;
    pub const MARATHON_LEVEL: u32 = 3;

    pub fn new(kind: GameModeKind, level: u32) -> Self {
        Self { kind, level }
    }

    pub fn sprint() -> Self {
        Self::new(GameModeKind::RemainingTime, Self::SPRINT_LEVEL)
    }

    pub fn marathon() -> Self {
        Self::new(GameModeKind::RemainingTime, Self::MARATHON_LEVEL)
    }

    pub fn death_to_the_king() -> Self {
        Self::new(GameModeKind::DeathToTheKing, 1)
    }

    pub fn survival() -> Self {
        Self::new(GameModeKind::Survival, 1)
    }

    pub fn tutorial() -> Self {
        Self::new(GameModeKind::Tutorial, 1)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_convert_back_to_kinds() {
        for kind in [
            GameModeKind::RemainingTime,
            GameModeKind::DeathToTheKing,
            GameModeKind::Survival,
            GameModeKind::Tutorial,
        ] {
            assert_eq!(GameModeKind::try_from(kind.id()).unwrap(), kind);
        }
    }

    #[test]
    fn unknown_id_is_rejected() {
        let err = GameModeKind::try_from(9).unwrap_err();
        assert!(matches!(err, GameError::UnknownGameMode(9)));
    }

    #[test]
    fn sprint_and_marathon_share_kind() {
        assert_eq!(GameMode::sprint().kind, GameMode::marathon().kind);
        assert!(GameMode::marathon().level > GameMode::sprint().level);
    }
}
