//=========================================================================
// HUD Model
//=========================================================================
//
// Renderer-agnostic snapshot of what a game view shows, plus the bounded
// feedback log views fill from behavior events.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::collections::VecDeque;
use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::behavior::BehaviorEvent;

//=== Hud =================================================================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Hud {
    pub score: u64,
    pub ammunition: u32,
    pub ammunition_limit: u32,
    pub clock: Option<String>,
    pub warning: bool,
    pub message: Option<String>,
    pub visible_targets: usize,
    pub feedback: Vec<String>,
}

/// Formats a duration as `mm:ss`, rounding partial seconds up.
pub fn format_clock(time: Duration) -> String {
    let total = time.as_millis().div_ceil(1000);
    format!("{:02}:{:02}", total / 60, total % 60)
}

//=== FeedbackLog =========================================================

/// Most recent player-facing notifications, oldest dropped first.
#[derive(Debug, Clone)]
pub struct FeedbackLog {
    lines: VecDeque<String>,
    capacity: usize,
}

impl FeedbackLog {
    pub const DEFAULT_CAPACITY: usize = 4;

    pub fn new(capacity: usize) -> Self {
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Records the line an event deserves, if any.
    pub fn record(&mut self, event: &BehaviorEvent) {
        let line = match event {
            BehaviorEvent::TargetKilled { kind, points, .. } => {
                format!("{:?} ghost down +{}", kind, points)
            }
            BehaviorEvent::TargetHit {
                remaining_health, ..
            } => format!("Hit! {} left", remaining_health),
            BehaviorEvent::OutOfAmmo => "Out of ammo".to_string(),
            _ => return,
        };

        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }
}

impl Default for FeedbackLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::target::GhostKind;

    #[test]
    fn clock_rounds_up_partial_seconds() {
        assert_eq!(format_clock(Duration::from_millis(90_000)), "01:30");
        assert_eq!(format_clock(Duration::from_millis(1)), "00:01");
        assert_eq!(format_clock(Duration::ZERO), "00:00");
    }

    #[test]
    fn feedback_drops_oldest() {
        let mut log = FeedbackLog::new(2);
        log.record(&BehaviorEvent::OutOfAmmo);
        log.record(&BehaviorEvent::TargetHit {
            id: 1,
            remaining_health: 3,
        });
        log.record(&BehaviorEvent::TargetKilled {
            id: 1,
            kind: GhostKind::Helmet,
            points: 10,
        });
        assert_eq!(log.lines(), vec!["Hit! 3 left", "Helmet ghost down +10"]);
    }

    #[test]
    fn silent_events_are_not_logged() {
        let mut log = FeedbackLog::default();
        log.record(&BehaviorEvent::ShotMissed);
        log.record(&BehaviorEvent::Reloaded { ammunition: 3 });
        assert!(log.lines().is_empty());
    }
}
