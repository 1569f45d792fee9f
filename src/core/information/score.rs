//=========================================================================
// Score Information
//=========================================================================

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== ScoreInformation ====================================================

/// Running tally of a session's shooting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreInformation {
    pub score: u64,
    pub kills: u32,
    pub bullets_fired: u32,
    pub bullets_missed: u32,
    pub current_combo: u32,
    pub max_combo: u32,
}

impl ScoreInformation {
    pub(crate) fn record_shot(&mut self) {
        self.bullets_fired += 1;
    }

    pub(crate) fn record_miss(&mut self) {
        self.bullets_missed += 1;
        self.current_combo = 0;
    }

    /// Registers a hit that did not kill; keeps the combo alive.
    pub(crate) fn record_hit(&mut self) {
        self.bump_combo();
    }

    pub(crate) fn record_kill(&mut self, points: u32) {
        self.kills += 1;
        self.score += u64::from(points);
        self.bump_combo();
    }

    /// Share of fired bullets that hit something, in `[0, 1]`.
    pub fn accuracy(&self) -> f32 {
        if self.bullets_fired == 0 {
            return 0.0;
        }
        let hits = self.bullets_fired - self.bullets_missed;
        hits as f32 / self.bullets_fired as f32
    }

    fn bump_combo(&mut self) {
        self.current_combo += 1;
        self.max_combo = self.max_combo.max(self.current_combo);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn miss_breaks_combo_but_keeps_max() {
        let mut score = ScoreInformation::default();
        for _ in 0..3 {
            score.record_shot();
            score.record_kill(2);
        }
        score.record_shot();
        score.record_miss();

        assert_eq!(score.score, 6);
        assert_eq!(score.kills, 3);
        assert_eq!(score.current_combo, 0);
        assert_eq!(score.max_combo, 3);
        assert_eq!(score.accuracy(), 0.75);
    }

    #[test]
    fn accuracy_without_shots_is_zero() {
        assert_eq!(ScoreInformation::default().accuracy(), 0.0);
    }
}
