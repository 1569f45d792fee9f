//=========================================================================
// Game Information
//=========================================================================
//
// Mutable session state shared by every mode: the selected mode, the
// weapon, the score tally, the ghosts alive in the world and where the
// crosshair points.
//
// Mode-specific state wraps `GameInformation`:
//   TimedInformation    → remaining or elapsed clock
//   TutorialInformation → current tutorial step
//   SessionState        → either of the above, the unit of save/restore
//
//=========================================================================

//=== Module Declarations =================================================

mod score;
mod session;

//=== Public API ==========================================================

pub use score::ScoreInformation;
pub use session::{SessionState, TimedInformation, TutorialInformation, TutorialStep};

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::mode::GameMode;
use crate::core::target::{TargetId, TargetableItem};
use crate::core::weapon::Weapon;

//=== GameInformation =====================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInformation {
    pub mode: GameMode,
    pub weapon: Weapon,
    pub score: ScoreInformation,
    targets: Vec<TargetableItem>,
    crosshair: (f32, f32),
    next_target_id: TargetId,
}

impl GameInformation {
    pub fn new(mode: GameMode, weapon: Weapon) -> Self {
        Self {
            mode,
            weapon,
            score: ScoreInformation::default(),
            targets: Vec::new(),
            crosshair: (0.0, 0.0),
            next_target_id: 1,
        }
    }

    //--- Targets ----------------------------------------------------------

    /// Adds a ghost to the world and returns the id assigned to it.
    pub fn add_targetable_item(&mut self, mut item: TargetableItem) -> TargetId {
        let id = self.next_target_id;
        self.next_target_id += 1;
        item.id = id;
        self.targets.push(item);
        id
    }

    pub fn remove_target(&mut self, id: TargetId) -> Option<TargetableItem> {
        let pos = self.targets.iter().position(|t| t.id == id)?;
        Some(self.targets.remove(pos))
    }

    pub fn targets(&self) -> &[TargetableItem] {
        &self.targets
    }

    pub fn target_mut(&mut self, id: TargetId) -> Option<&mut TargetableItem> {
        self.targets.iter_mut().find(|t| t.id == id)
    }

    /// Closest living ghost within `radius` of the crosshair.
    pub fn target_under_crosshair(&self, radius: f32) -> Option<TargetId> {
        let (cx, cy) = self.crosshair;
        let limit = radius * radius;

        self.targets
            .iter()
            .filter(|t| t.is_alive())
            .map(|t| (t.id, t.distance_sq(cx, cy)))
            .filter(|&(_, d)| d <= limit)
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(id, _)| id)
    }

    //--- Crosshair --------------------------------------------------------

    pub fn aim(&mut self, x: f32, y: f32) {
        self.crosshair = (x, y);
    }

    pub fn crosshair(&self) -> (f32, f32) {
        self.crosshair
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
