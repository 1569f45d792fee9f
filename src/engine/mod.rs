//=========================================================================
// Game Engine
//
// Runtime for one game session.
//
// Architecture:
// ```text
//     GameEngineFactory ──create()/restore()──> GameEngine
//                                                  │
//     update(elapsed) ──> RoutineScheduler ──> on_run(firing)
//                                                  │
//                         GameBehavior <───────────┘
//                              │ drain_events()
//                              ├─► GameView::on_event
//                              └─► GameOver ─► stop ─► GameEngineListener
// ```
//
// Lifecycle:
//   Idle ──start──> Running ──pause──> Paused ──resume──> Running
//     │                │                  │
//     └──────stop──────┴──────stop────────┴──> Stopped (terminal)
//
//=========================================================================

//=== Module Declarations =================================================

pub mod event;
pub mod factory;
pub mod runner;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::core::behavior::{BehaviorEvent, GameBehavior, GameOutcome, SessionRef};
use crate::core::information::{ScoreInformation, SessionState};
use crate::core::routine::{Routine, RoutineFiring, RoutineKind, RoutineScheduler};
use crate::core::target::TargetFactory;
use crate::core::view::{GameView, GameViewKind, Hud};
use crate::error::{GameError, Result};

//=== EngineState =========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngineState {
    /// Assembled, routines not yet running.
    Idle,
    Running,
    Paused,
    /// Finished; the session can only be saved or inspected.
    Stopped,
}

//=== GameEngineListener ==================================================

/// Host-side callback notified when a session ends.
#[cfg_attr(test, mockall::automock)]
pub trait GameEngineListener: Send {
    /// Called exactly once, when the engine reaches [`EngineState::Stopped`].
    fn on_game_engine_stop(&mut self, outcome: GameOutcome, score: &ScoreInformation);
}

/// Listener for hosts that poll the engine instead.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopListener;

impl GameEngineListener for NoopListener {
    fn on_game_engine_stop(&mut self, _outcome: GameOutcome, _score: &ScoreInformation) {}
}

//=== GameEngine ==========================================================

pub struct GameEngine {
    state: EngineState,
    behavior: Box<dyn GameBehavior>,
    routines: RoutineScheduler,
    view: Option<Box<dyn GameView>>,
    listener: Box<dyn GameEngineListener>,
    spawn_points: TargetFactory,
    outcome: Option<GameOutcome>,
}

impl GameEngine {
    //--- Construction -----------------------------------------------------

    /// Wraps a behavior. Routines and the view are attached afterwards.
    ///
    /// `spawn_points` supplies the coordinates handed to spawner firings.
    pub fn new(
        behavior: Box<dyn GameBehavior>,
        listener: Box<dyn GameEngineListener>,
        spawn_points: TargetFactory,
    ) -> Self {
        Self {
            state: EngineState::Idle,
            behavior,
            routines: RoutineScheduler::new(),
            view: None,
            listener,
            spawn_points,
            outcome: None,
        }
    }

    pub fn add_routine(&mut self, routine: Routine) -> Result<()> {
        self.routines.add_routine(routine)
    }

    pub fn set_game_view(&mut self, view: Box<dyn GameView>) {
        self.view = Some(view);
    }

    //--- Lifecycle --------------------------------------------------------

    pub fn start(&mut self) -> Result<()> {
        self.transition(EngineState::Idle, EngineState::Running, "start")?;
        info!(
            "Engine started ({:?}, {} routines)",
            self.behavior.session().info().mode.kind,
            self.routines.len()
        );
        self.routines.start();
        Ok(())
    }

    pub fn pause(&mut self) -> Result<()> {
        self.transition(EngineState::Running, EngineState::Paused, "pause")?;
        debug!("Engine paused");
        self.routines.stop();
        Ok(())
    }

    pub fn resume(&mut self) -> Result<()> {
        self.transition(EngineState::Paused, EngineState::Running, "resume")?;
        debug!("Engine resumed");
        self.routines.start();
        Ok(())
    }

    /// Ends the session from the host side.
    pub fn stop(&mut self) -> Result<()> {
        if self.state == EngineState::Stopped {
            return Err(GameError::InvalidTransition {
                from: self.state,
                action: "stop",
            });
        }
        self.finish(GameOutcome::Abandoned);
        Ok(())
    }

    fn transition(
        &mut self,
        from: EngineState,
        to: EngineState,
        action: &'static str,
    ) -> Result<()> {
        if self.state != from {
            return Err(GameError::InvalidTransition {
                from: self.state,
                action,
            });
        }
        self.state = to;
        Ok(())
    }

    fn finish(&mut self, outcome: GameOutcome) {
        self.routines.stop();
        self.state = EngineState::Stopped;
        self.outcome = Some(outcome);

        let score = &self.behavior.session().info().score;
        info!("Engine stopped: {:?}, score {}", outcome, score.score);
        self.listener.on_game_engine_stop(outcome, score);
    }

    //--- Run Loop ---------------------------------------------------------

    /// Advances the routines and dispatches everything that became due.
    ///
    /// Returns the behavior events produced along the way. Firings left
    /// after the game ends are dropped.
    pub fn update(&mut self, elapsed: Duration) -> Vec<BehaviorEvent> {
        let mut events = Vec::new();
        if self.state != EngineState::Running {
            return events;
        }

        for firing in self.routines.advance(elapsed) {
            events.extend(self.on_run(firing));
            if self.state == EngineState::Stopped {
                break;
            }
        }
        events
    }

    /// Routes one routine firing to the behavior and drains what it caused.
    ///
    /// Ignored unless the engine is running. A `GameOver` raised by the
    /// firing stops the engine before this returns.
    pub fn on_run(&mut self, firing: RoutineFiring) -> Vec<BehaviorEvent> {
        if self.state != EngineState::Running {
            warn!("Routine {:?} ignored while engine is {:?}", firing.kind, self.state);
            return Vec::new();
        }

        debug!("Routine {:?} fired after {:?}", firing.kind, firing.elapsed);
        match firing.kind {
            RoutineKind::Reloader => self.behavior.reload(),
            RoutineKind::Spawner => {
                let (x, y) = self.spawn_points.random_position();
                self.behavior.spawn(x, y);
            }
            RoutineKind::Ticker => self.behavior.tick(firing.elapsed),
        }
        self.flush_events()
    }

    //--- Player Actions ---------------------------------------------------

    /// Pulls the trigger. Ignored unless the engine is running.
    pub fn fire(&mut self) -> Vec<BehaviorEvent> {
        if self.state != EngineState::Running {
            warn!("Fire ignored while engine is {:?}", self.state);
            return Vec::new();
        }
        self.behavior.fire();
        self.flush_events()
    }

    /// Moves the crosshair. Allowed in every state but `Stopped`.
    pub fn aim(&mut self, x: f32, y: f32) {
        if self.state == EngineState::Stopped {
            return;
        }
        self.behavior.aim(x, y);
    }

    fn flush_events(&mut self) -> Vec<BehaviorEvent> {
        let events = self.behavior.drain_events();
        for event in &events {
            if let Some(view) = self.view.as_mut() {
                view.on_event(event);
            }
            if let BehaviorEvent::GameOver(outcome) = event {
                if self.state != EngineState::Stopped {
                    self.finish(*outcome);
                }
            }
        }
        events
    }

    //--- Queries ----------------------------------------------------------

    pub fn state(&self) -> EngineState {
        self.state
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn session(&self) -> SessionRef<'_> {
        self.behavior.session()
    }

    pub fn routines(&self) -> &RoutineScheduler {
        &self.routines
    }

    pub fn view_kind(&self) -> Option<GameViewKind> {
        self.view.as_ref().map(|view| view.kind())
    }

    /// Current HUD, or `None` if no view is attached.
    pub fn hud(&self) -> Option<Hud> {
        self.view
            .as_ref()
            .map(|view| view.hud(self.behavior.session()))
    }

    /// Copies the session out for saving; the engine keeps running.
    pub fn snapshot(&self) -> SessionState {
        self.behavior.session().to_owned_state()
    }

    /// Consumes the engine and hands back its session.
    pub fn into_state(self) -> SessionState {
        self.behavior.into_state()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
