//=========================================================================
// Tutorial Behavior
//=========================================================================
//
// Step machine driven by the fire button. Informational steps advance on
// a tap without spending ammunition; kill steps only advance once the
// ghost spawned for them is gone.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{reload_weapon, shoot, BehaviorEvent, GameBehavior, GameOutcome, SessionRef};
use crate::config::GameConfig;
use crate::core::information::{SessionState, TutorialInformation, TutorialStep};
use crate::core::target::{GhostKind, TargetableItem};

//=== TutorialBehavior ====================================================

pub struct TutorialBehavior {
    tutorial: TutorialInformation,
    hit_radius: f32,
    events: Vec<BehaviorEvent>,
    over: bool,
}

impl TutorialBehavior {
    /// Where the first training ghost appears.
    pub const FIRST_GHOST_POSITION: (f32, f32) = (20.0, 10.0);
    /// Where the helmeted training ghost appears.
    pub const SECOND_GHOST_POSITION: (f32, f32) = (-20.0, 10.0);

    pub fn new(config: &GameConfig, tutorial: TutorialInformation) -> Self {
        Self {
            tutorial,
            hit_radius: config.hit_radius,
            events: Vec::new(),
            over: false,
        }
    }

    pub fn step(&self) -> TutorialStep {
        self.tutorial.step
    }

    pub fn information(&self) -> &TutorialInformation {
        &self.tutorial
    }

    fn advance(&mut self) {
        let step = self.tutorial.step.next();
        debug!("Tutorial step {:?} -> {:?}", self.tutorial.step, step);
        self.tutorial.step = step;
        self.events.push(BehaviorEvent::TutorialStepChanged(step));

        match step {
            TutorialStep::Target => self.summon(GhostKind::Easy, Self::FIRST_GHOST_POSITION),
            TutorialStep::TargetTwo => self.summon(GhostKind::Helmet, Self::SECOND_GHOST_POSITION),
            _ => {}
        }
    }

    fn summon(&mut self, kind: GhostKind, (x, y): (f32, f32)) {
        let id = self
            .tutorial
            .info
            .add_targetable_item(TargetableItem::new(kind, x, y));
        self.events.push(BehaviorEvent::TargetSpawned { id, kind, x, y });
    }
}

impl GameBehavior for TutorialBehavior {
    fn reload(&mut self) {
        if self.over {
            return;
        }
        reload_weapon(&mut self.tutorial.info, &mut self.events);
    }

    fn tick(&mut self, _elapsed: Duration) {}

    fn spawn(&mut self, _x: f32, _y: f32) {}

    fn fire(&mut self) {
        if self.over {
            return;
        }

        let step = self.tutorial.step;
        if step.awaits_kill() {
            shoot(&mut self.tutorial.info, self.hit_radius, &mut self.events);
            if self.tutorial.info.targets().is_empty() {
                self.advance();
            }
        } else if step == TutorialStep::End {
            info!("Tutorial completed");
            self.over = true;
            self.events
                .push(BehaviorEvent::GameOver(GameOutcome::TutorialCompleted));
        } else {
            self.advance();
        }
    }

    fn aim(&mut self, x: f32, y: f32) {
        self.tutorial.info.aim(x, y);
    }

    fn session(&self) -> SessionRef<'_> {
        SessionRef::Tutorial(&self.tutorial)
    }

    fn into_state(self: Box<Self>) -> SessionState {
        SessionState::Tutorial(self.tutorial)
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
    use crate::core::mode::GameMode;
    use crate::core::weapon::WeaponFactory;

    fn behavior() -> TutorialBehavior {
        TutorialBehavior::new(
            &GameConfig::new(),
            TutorialInformation::new(GameMode::tutorial(), WeaponFactory::create_basic_weapon()),
        )
    }

    /// Taps through informational steps until `target` is reached.
    fn tap_until(behavior: &mut TutorialBehavior, target: TutorialStep) {
        while behavior.step() != target {
            assert!(!behavior.step().awaits_kill(), "stuck on {:?}", behavior.step());
            behavior.fire();
        }
    }

    #[test]
    fn taps_do_not_spend_ammo() {
        let mut behavior = behavior();
        tap_until(&mut behavior, TutorialStep::Target);
        assert_eq!(behavior.information().info.weapon.current_ammunition(), 8);
        assert_eq!(behavior.information().info.targets().len(), 1);
    }

    #[test]
    fn kill_step_waits_for_the_ghost() {
        let mut behavior = behavior();
        tap_until(&mut behavior, TutorialStep::Kill);

        behavior.aim(-100.0, -50.0);
        behavior.fire();
        assert_eq!(behavior.step(), TutorialStep::Kill);

        let (x, y) = TutorialBehavior::FIRST_GHOST_POSITION;
        behavior.aim(x, y);
        behavior.fire();
        assert_eq!(behavior.step(), TutorialStep::Congratulation);
        assert_eq!(behavior.information().info.score.kills, 1);
    }

    #[test]
    fn full_walkthrough_completes() {
        let mut behavior = behavior();
        tap_until(&mut behavior, TutorialStep::Kill);
        let (x, y) = TutorialBehavior::FIRST_GHOST_POSITION;
        behavior.aim(x, y);
        behavior.fire();

        tap_until(&mut behavior, TutorialStep::KillTwo);
        let (x, y) = TutorialBehavior::SECOND_GHOST_POSITION;
        behavior.aim(x, y);
        for _ in 0..GhostKind::Helmet.base_health() {
            behavior.fire();
        }
        assert_eq!(behavior.step(), TutorialStep::CongratulationTwo);

        tap_until(&mut behavior, TutorialStep::End);
        behavior.drain_events();
        behavior.fire();
        assert!(behavior.is_over());
        assert_eq!(
            behavior.drain_events(),
            vec![BehaviorEvent::GameOver(GameOutcome::TutorialCompleted)]
        );
    }

    #[test]
    fn tick_and_spawn_are_ignored() {
        let mut behavior = behavior();
        behavior.tick(Duration::from_secs(5));
        behavior.spawn(0.0, 0.0);
        assert!(behavior.drain_events().is_empty());
        assert!(behavior.information().info.targets().is_empty());
    }
}
