//=========================================================================
// Game Behaviors
//=========================================================================
//
// Per-mode rule objects. A behavior owns the session state and reacts to
// routine firings (reload, tick, spawn) and to player actions (aim, fire),
// queueing `BehaviorEvent`s for the engine to drain.
//
// Variants:
//   TimeBehavior(SprintOrMarathon) → clock down, spawner, time up ends
//   TimeBehavior(Survival)         → clock down, spawner, kills add time
//   TimeBehavior(DeathToTheKing)   → clock up, fixed horde, king ends
//   TutorialBehavior               → step machine, reloader only
//
//=========================================================================

//=== Module Declarations =================================================

mod event;
mod time;
mod tutorial;

//=== Public API ==========================================================

pub use event::{BehaviorEvent, GameOutcome};
pub use time::{TimeBehavior, TimeRules};
pub use tutorial::TutorialBehavior;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::config::GameConfig;
use crate::core::information::{
    GameInformation, SessionState, TimedInformation, TutorialInformation,
};
use crate::core::target::{GhostKind, TargetFactory};

//=== SessionRef ==========================================================

/// Borrowed view of a behavior's session, for views and inspection.
#[derive(Debug, Clone, Copy)]
pub enum SessionRef<'a> {
    Timed(&'a TimedInformation),
    Tutorial(&'a TutorialInformation),
}

impl<'a> SessionRef<'a> {
    pub fn info(&self) -> &'a GameInformation {
        match *self {
            Self::Timed(timed) => &timed.info,
            Self::Tutorial(tutorial) => &tutorial.info,
        }
    }

    pub fn to_owned_state(&self) -> SessionState {
        match *self {
            Self::Timed(timed) => SessionState::Timed(timed.clone()),
            Self::Tutorial(tutorial) => SessionState::Tutorial(tutorial.clone()),
        }
    }
}

impl<'a> From<&'a SessionState> for SessionRef<'a> {
    fn from(state: &'a SessionState) -> Self {
        match state {
            SessionState::Timed(timed) => Self::Timed(timed),
            SessionState::Tutorial(tutorial) => Self::Tutorial(tutorial),
        }
    }
}

//=== GameBehavior Trait ==================================================

/// Rules of one game mode.
///
/// Routine callbacks (`reload`, `tick`, `spawn`) are invoked by the engine
/// when the matching routine fires; `aim` and `fire` come from the player.
/// Once a behavior has queued `GameOver` it ignores everything but `aim`.
pub trait GameBehavior: Send {
    fn reload(&mut self);

    fn tick(&mut self, elapsed: Duration);

    fn spawn(&mut self, x: f32, y: f32);

    fn fire(&mut self);

    fn aim(&mut self, x: f32, y: f32);

    fn session(&self) -> SessionRef<'_>;

    fn into_state(self: Box<Self>) -> SessionState;

    /// Takes every event queued since the previous drain.
    fn drain_events(&mut self) -> Vec<BehaviorEvent>;

    fn is_over(&self) -> bool;
}

//=== Shared Rules ========================================================

/// Puts one bullet back in the magazine.
pub(crate) fn reload_weapon(info: &mut GameInformation, events: &mut Vec<BehaviorEvent>) {
    if info.weapon.reload(1) {
        events.push(BehaviorEvent::Reloaded {
            ammunition: info.weapon.current_ammunition(),
        });
    }
}

/// Fires one bullet at whatever sits under the crosshair.
///
/// Returns the kind of ghost killed by this shot, if any.
pub(crate) fn shoot(
    info: &mut GameInformation,
    hit_radius: f32,
    events: &mut Vec<BehaviorEvent>,
) -> Option<GhostKind> {
    let damage = info.weapon.fire();
    if damage == 0 {
        events.push(BehaviorEvent::OutOfAmmo);
        return None;
    }
    info.score.record_shot();

    let Some(id) = info.target_under_crosshair(hit_radius) else {
        info.score.record_miss();
        events.push(BehaviorEvent::ShotMissed);
        return None;
    };

    let target = info.target_mut(id)?;
    if !target.hit(damage) {
        let remaining_health = target.health;
        info.score.record_hit();
        events.push(BehaviorEvent::TargetHit {
            id,
            remaining_health,
        });
        return None;
    }

    let killed = info.remove_target(id)?;
    let points = killed.points();
    info.score.record_kill(points);
    events.push(BehaviorEvent::TargetKilled {
        id,
        kind: killed.kind,
        points,
    });
    Some(killed.kind)
}

//=== GameBehaviorFactory =================================================

/// Builds the behavior for each mode from the shared configuration.
///
/// `targets` supplies the ghost kinds picked by spawning behaviors.
pub struct GameBehaviorFactory;

impl GameBehaviorFactory {
    pub fn create_sprint_or_marathon(
        config: &GameConfig,
        timed: TimedInformation,
        targets: TargetFactory,
    ) -> TimeBehavior {
        TimeBehavior::new(TimeRules::SprintOrMarathon, config, timed, targets)
    }

    pub fn create_survival(
        config: &GameConfig,
        timed: TimedInformation,
        targets: TargetFactory,
    ) -> TimeBehavior {
        let rules = TimeRules::Survival {
            time_bonus: config.survival_time_bonus,
        };
        TimeBehavior::new(rules, config, timed, targets)
    }

    pub fn create_death_to_the_king(
        config: &GameConfig,
        timed: TimedInformation,
        targets: TargetFactory,
    ) -> TimeBehavior {
        TimeBehavior::new(TimeRules::DeathToTheKing, config, timed, targets)
    }

    pub fn create_tutorial(config: &GameConfig, tutorial: TutorialInformation) -> TutorialBehavior {
        TutorialBehavior::new(config, tutorial)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
