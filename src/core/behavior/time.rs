//=========================================================================
// Time Behaviors
//=========================================================================
//
// Rules shared by the clock-driven modes. The variant decides the clock
// direction, whether the spawner does anything and what ends the game.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{reload_weapon, shoot, BehaviorEvent, GameBehavior, GameOutcome, SessionRef};
use crate::config::GameConfig;
use crate::core::information::{SessionState, TimedInformation};
use crate::core::target::{GhostKind, TargetFactory};

//=== TimeRules ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeRules {
    /// Clock counts down; the spawner keeps the world populated.
    SprintOrMarathon,
    /// As sprint, and every kill adds `time_bonus` to the clock.
    Survival { time_bonus: Duration },
    /// Clock counts up; shooting the king ends the game.
    DeathToTheKing,
}

impl TimeRules {
    fn counts_down(self) -> bool {
        !matches!(self, Self::DeathToTheKing)
    }

    fn spawns(self) -> bool {
        !matches!(self, Self::DeathToTheKing)
    }
}

//=== TimeBehavior ========================================================

pub struct TimeBehavior {
    rules: TimeRules,
    timed: TimedInformation,
    targets: TargetFactory,
    hit_radius: f32,
    max_targets: usize,
    events: Vec<BehaviorEvent>,
    over: bool,
}

impl TimeBehavior {
    pub fn new(
        rules: TimeRules,
        config: &GameConfig,
        timed: TimedInformation,
        targets: TargetFactory,
    ) -> Self {
        Self {
            rules,
            timed,
            targets,
            hit_radius: config.hit_radius,
            max_targets: config.max_targets,
            events: Vec::new(),
            over: false,
        }
    }

    pub fn rules(&self) -> TimeRules {
        self.rules
    }

    pub fn information(&self) -> &TimedInformation {
        &self.timed
    }

    fn game_over(&mut self, outcome: GameOutcome) {
        if self.over {
            return;
        }
        info!(
            "{:?} over ({:?}), score {}",
            self.rules, outcome, self.timed.info.score.score
        );
        self.over = true;
        self.events.push(BehaviorEvent::GameOver(outcome));
    }

    fn on_kill(&mut self, kind: GhostKind) {
        match self.rules {
            TimeRules::Survival { time_bonus } => {
                self.timed.current_time += time_bonus;
                self.events.push(BehaviorEvent::TimeChanged {
                    current: self.timed.current_time,
                });
            }
            TimeRules::DeathToTheKing if kind == GhostKind::King => {
                self.game_over(GameOutcome::KingKilled);
            }
            _ => {}
        }
    }
}

impl GameBehavior for TimeBehavior {
    fn reload(&mut self) {
        if self.over {
            return;
        }
        reload_weapon(&mut self.timed.info, &mut self.events);
    }

    fn tick(&mut self, elapsed: Duration) {
        if self.over {
            return;
        }

        if self.rules.counts_down() {
            self.timed.current_time = self.timed.current_time.saturating_sub(elapsed);
        } else {
            self.timed.current_time += elapsed;
        }
        self.events.push(BehaviorEvent::TimeChanged {
            current: self.timed.current_time,
        });

        if self.rules.counts_down() && self.timed.current_time.is_zero() {
            self.game_over(GameOutcome::TimeUp);
        }
    }

    fn spawn(&mut self, x: f32, y: f32) {
        if self.over || !self.rules.spawns() {
            return;
        }

        let alive = self.timed.info.targets().iter().filter(|t| t.is_alive()).count();
        if alive >= self.max_targets {
            debug!("Spawn skipped: {} targets already alive", alive);
            return;
        }

        let kind = self.targets.random_ghost_kind_without_king();
        let ghost = self.targets.create_ghost(kind, x, y);
        let id = self.timed.info.add_targetable_item(ghost);
        debug!("Spawned {:?} ghost #{} at ({:.1}, {:.1})", kind, id, x, y);
        self.events.push(BehaviorEvent::TargetSpawned { id, kind, x, y });
    }

    fn fire(&mut self) {
        if self.over {
            return;
        }
        if let Some(kind) = shoot(&mut self.timed.info, self.hit_radius, &mut self.events) {
            self.on_kill(kind);
        }
    }

    fn aim(&mut self, x: f32, y: f32) {
        self.timed.info.aim(x, y);
    }

    fn session(&self) -> SessionRef<'_> {
        SessionRef::Timed(&self.timed)
    }

    fn into_state(self: Box<Self>) -> SessionState {
        SessionState::Timed(self.timed)
    }

    fn drain_events(&mut self) -> Vec<BehaviorEvent> {
        std::mem::take(&mut self.events)
    }

    fn is_over(&self) -> bool {
        self.over
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorldBounds;
    use crate::core::mode::GameMode;
    use crate::core::target::TargetableItem;
    use crate::core::weapon::WeaponFactory;

    fn secs(n: u64) -> Duration {
        Duration::from_secs(n)
    }

    fn behavior(rules: TimeRules, start: Duration) -> TimeBehavior {
        let config = GameConfig::new().with_max_targets(2).with_seed(11);
        let timed = TimedInformation::new(
            GameMode::sprint(),
            WeaponFactory::create_basic_weapon(),
            start,
        );
        let targets = TargetFactory::new(WorldBounds::default(), Some(11));
        TimeBehavior::new(rules, &config, timed, targets)
    }

    #[test]
    fn sprint_clock_runs_out() {
        let mut behavior = behavior(TimeRules::SprintOrMarathon, secs(2));
        behavior.tick(secs(1));
        assert!(!behavior.is_over());

        behavior.tick(secs(1));
        assert!(behavior.is_over());
        assert_eq!(
            behavior.drain_events().last(),
            Some(&BehaviorEvent::GameOver(GameOutcome::TimeUp))
        );
    }

    #[test]
    fn clock_does_not_underflow() {
        let mut behavior = behavior(TimeRules::SprintOrMarathon, Duration::from_millis(300));
        behavior.tick(secs(1));
        assert_eq!(behavior.information().current_time, Duration::ZERO);
    }

    #[test]
    fn nothing_happens_after_game_over() {
        let mut behavior = behavior(TimeRules::SprintOrMarathon, secs(1));
        behavior.tick(secs(1));
        behavior.drain_events();

        behavior.tick(secs(1));
        behavior.spawn(0.0, 0.0);
        behavior.fire();
        assert!(behavior.drain_events().is_empty());
    }

    #[test]
    fn spawner_respects_max_targets() {
        let mut behavior = behavior(TimeRules::SprintOrMarathon, secs(30));
        for _ in 0..5 {
            behavior.spawn(10.0, 10.0);
        }
        assert_eq!(behavior.information().info.targets().len(), 2);
        assert!(behavior
            .information()
            .info
            .targets()
            .iter()
            .all(|t| t.kind != GhostKind::King));
    }

    #[test]
    fn survival_kill_buys_time() {
        let mut behavior = behavior(
            TimeRules::Survival {
                time_bonus: secs(1),
            },
            secs(10),
        );
        behavior.spawn(0.0, 0.0);
        behavior.aim(0.0, 0.0);

        // Helmets need several shots; keep firing until the kill
        while !behavior.information().info.targets().is_empty() {
            behavior.fire();
        }
        assert_eq!(behavior.information().current_time, secs(11));
    }

    #[test]
    fn king_mode_counts_up_and_ignores_spawner() {
        let mut behavior = behavior(TimeRules::DeathToTheKing, secs(1));
        behavior.tick(secs(1));
        behavior.spawn(0.0, 0.0);
        assert_eq!(behavior.information().current_time, secs(2));
        assert!(behavior.information().info.targets().is_empty());
    }

    #[test]
    fn killing_the_king_ends_the_game() {
        let mut behavior = behavior(TimeRules::DeathToTheKing, secs(1));
        behavior
            .timed
            .info
            .add_targetable_item(TargetableItem::new(GhostKind::Easy, 50.0, 0.0));
        behavior
            .timed
            .info
            .add_targetable_item(TargetableItem::new(GhostKind::King, 0.0, 0.0));

        behavior.aim(50.0, 0.0);
        behavior.fire();
        assert!(!behavior.is_over());

        behavior.aim(0.0, 0.0);
        behavior.fire();
        assert!(behavior.is_over());
        assert!(behavior
            .drain_events()
            .contains(&BehaviorEvent::GameOver(GameOutcome::KingKilled)));
    }
}
