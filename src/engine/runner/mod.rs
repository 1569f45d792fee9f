//=========================================================================
// Game Runner
//
// Drives a `GameEngine` on its own logic thread at a fixed tick rate.
//
// Architecture:
// ```text
//  Host Thread:                      Logic Thread (@ TPS):
//  ┌────────────────────────┐       ┌───────────────────────────┐
//  │ RunnerHandle::send()   │──────>│ CommandCollector          │
//  │   PlayerCommand        │       │   └─ aim/fire/pause/quit  │
//  │                        │       │ GameEngine::update(dt)    │
//  │ RunnerHandle::updates()│<──────│   └─ routines → behavior  │
//  │   EngineUpdate         │       │ publish HUD if changed    │
//  └────────────────────────┘       └───────────────────────────┘
// ```
//
// Exit conditions: the engine stops on its own, the host sends `Quit`,
// or the host drops its command sender. The engine is handed back
// through `RunnerHandle::join` so the session can be saved.
//
//=========================================================================

//=== Submodules ==========================================================

mod command_collector;

//=== Standard Library Imports ============================================

use std::thread;
use std::time::{Duration, Instant};

//=== External Crates =====================================================

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use log::{debug, error, info, warn};

//=== Internal Imports ====================================================

use super::event::{EngineUpdate, PlayerCommand};
use super::{EngineState, GameEngine};
use crate::core::behavior::GameOutcome;
use crate::core::view::Hud;
use crate::error::{GameError, Result};
use command_collector::{CommandCollector, TickControl};

//=== GameRunner ==========================================================

/// Configures and launches the logic thread for one engine.
///
/// # Default Values
///
/// - **TPS**: 60.0 (logic updates per second)
/// - **Channel capacity**: 128 messages each way
///
/// # Examples
///
/// ```no_run
/// use wraith_engine::prelude::*;
///
/// let engine = GameEngineFactory::default()
///     .create(GameMode::sprint(), Box::new(NoopListener))
///     .unwrap();
///
/// let handle = GameRunner::new(engine).with_tps(30.0).spawn().unwrap();
/// handle.send(PlayerCommand::Fire);
/// handle.send(PlayerCommand::Quit);
/// let engine = handle.join().unwrap();
/// ```
pub struct GameRunner {
    engine: GameEngine,
    tps: f64,
    channel_capacity: usize,
}

impl GameRunner {
    pub fn new(engine: GameEngine) -> Self {
        Self {
            engine,
            tps: 60.0,
            channel_capacity: 128,
        }
    }

    /// Sets the target ticks per second for the logic thread.
    ///
    /// # Panics
    ///
    /// Panics if `tps <= 0.0`.
    pub fn with_tps(mut self, tps: f64) -> Self {
        assert!(tps > 0.0, "TPS must be positive, got {}", tps);
        self.tps = tps;
        self
    }

    /// Sets the capacity of both the command and the update channel.
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Starts the engine (if idle) on a new logic thread.
    pub fn spawn(self) -> Result<RunnerHandle> {
        let (command_tx, command_rx) = bounded(self.channel_capacity);
        let (update_tx, update_rx) = bounded(self.channel_capacity);
        let frame_duration = Duration::from_secs_f64(1.0 / self.tps);

        info!(
            "Spawning logic thread (TPS: {}, channel: {})",
            self.tps, self.channel_capacity
        );

        let engine = self.engine;
        let publisher = UpdatePublisher {
            updates: update_tx,
            backlog: update_rx.clone(),
        };
        let thread = thread::Builder::new()
            .name("game-logic".into())
            .spawn(move || {
                run_logic_loop(engine, CommandCollector::new(command_rx), publisher, frame_duration)
            })?;

        Ok(RunnerHandle {
            commands: command_tx,
            updates: update_rx,
            thread,
        })
    }
}

//=== Logic Loop ==========================================================

fn run_logic_loop(
    mut engine: GameEngine,
    mut collector: CommandCollector,
    publisher: UpdatePublisher,
    frame_duration: Duration,
) -> GameEngine {
    if engine.state() == EngineState::Idle {
        if let Err(e) = engine.start() {
            error!("Engine failed to start: {}", e);
        }
    }

    let mut last_hud: Option<Hud> = None;
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();

        //--- Step 1: Apply player commands ---------------------------------
        if collector.collect_frame(&mut engine) == TickControl::Exit {
            info!("Logic thread exiting on host request");
            break;
        }

        //--- Step 2: Advance routines --------------------------------------
        let now = Instant::now();
        engine.update(now - last_tick);
        last_tick = now;

        //--- Step 3: Publish HUD -------------------------------------------
        let hud = engine.hud();
        if hud != last_hud {
            if let Some(hud) = hud.clone() {
                publisher.publish_hud(hud);
            }
            last_hud = hud;
        }

        if engine.state() == EngineState::Stopped {
            info!("Logic thread exiting: engine stopped");
            break;
        }

        //--- Step 4: Maintain fixed pacing ---------------------------------
        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            thread::sleep(frame_duration - elapsed);
        }
    }

    if engine.state() != EngineState::Stopped {
        if let Err(e) = engine.stop() {
            warn!("Engine stop on exit failed: {}", e);
        }
    }

    let outcome = engine.outcome().unwrap_or(GameOutcome::Abandoned);
    let score = engine.session().info().score.clone();
    publisher.publish_stopped(EngineUpdate::Stopped { outcome, score });

    engine
}

//=== UpdatePublisher =====================================================

/// Logic-thread end of the update channel.
///
/// HUD frames are best effort. The final `Stopped` is always delivered
/// while the host still holds a receiver: stale frames are evicted to
/// make room for it.
struct UpdatePublisher {
    updates: Sender<EngineUpdate>,
    backlog: Receiver<EngineUpdate>,
}

impl UpdatePublisher {
    fn publish_hud(&self, hud: Hud) {
        match self.updates.try_send(EngineUpdate::Hud(hud)) {
            Ok(()) => {}
            Err(TrySendError::Full(_)) => debug!("Update channel full, dropping HUD frame"),
            Err(TrySendError::Disconnected(_)) => {}
        }
    }

    fn publish_stopped(&self, mut update: EngineUpdate) {
        loop {
            match self.updates.try_send(update) {
                Ok(()) => return,
                Err(TrySendError::Full(rejected)) => {
                    if self.backlog.try_recv().is_ok() {
                        debug!("Evicted stale update to deliver Stopped");
                    }
                    update = rejected;
                }
                Err(TrySendError::Disconnected(_)) => return,
            }
        }
    }
}

//=== RunnerHandle ========================================================

/// Host-side end of a running logic thread.
pub struct RunnerHandle {
    commands: Sender<PlayerCommand>,
    updates: Receiver<EngineUpdate>,
    thread: thread::JoinHandle<GameEngine>,
}

impl RunnerHandle {
    /// Queues a command. Returns false once the logic thread has exited.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    pub fn updates(&self) -> &Receiver<EngineUpdate> {
        &self.updates
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the logic thread and returns the engine it drove.
    ///
    /// Dropping the command sender here makes the thread exit if it is
    /// still running.
    pub fn join(self) -> Result<GameEngine> {
        drop(self.commands);
        self.thread.join().map_err(|_| GameError::RunnerPanicked)
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::core::mode::GameMode;
    use crate::engine::factory::GameEngineFactory;
    use crate::engine::NoopListener;

    fn engine() -> GameEngine {
        GameEngineFactory::new(GameConfig::new().with_seed(3))
            .create(GameMode::survival(), Box::new(NoopListener))
            .unwrap()
    }

    #[test]
    fn runner_defaults() {
        let runner = GameRunner::new(engine());
        assert_eq!(runner.tps, 60.0);
        assert_eq!(runner.channel_capacity, 128);
    }

    #[test]
    #[should_panic(expected = "TPS must be positive")]
    fn runner_with_tps_panics_on_zero() {
        GameRunner::new(engine()).with_tps(0.0);
    }

    #[test]
    #[should_panic(expected = "Channel capacity must be positive")]
    fn runner_with_channel_capacity_panics_on_zero() {
        GameRunner::new(engine()).with_channel_capacity(0);
    }

    #[test]
    fn quit_returns_abandoned_engine() {
        let handle = GameRunner::new(engine()).with_tps(200.0).spawn().unwrap();
        assert!(handle.send(PlayerCommand::Quit));

        let engine = handle.join().unwrap();
        assert_eq!(engine.state(), EngineState::Stopped);
        assert_eq!(engine.outcome(), Some(GameOutcome::Abandoned));
    }

    #[test]
    fn last_update_is_stopped() {
        let handle = GameRunner::new(engine()).with_tps(200.0).spawn().unwrap();
        handle.send(PlayerCommand::Quit);

        let updates = handle.updates().clone();
        handle.join().unwrap();

        let last = updates.try_iter().last();
        assert!(matches!(
            last,
            Some(EngineUpdate::Stopped {
                outcome: GameOutcome::Abandoned,
                ..
            })
        ));
    }

    #[test]
    fn stopped_survives_a_full_update_channel() {
        let handle = GameRunner::new(engine())
            .with_tps(200.0)
            .with_channel_capacity(1)
            .spawn()
            .unwrap();
        thread::sleep(Duration::from_millis(50));
        handle.send(PlayerCommand::Quit);

        let updates = handle.updates().clone();
        handle.join().unwrap();

        let received: Vec<EngineUpdate> = updates.try_iter().collect();
        assert_eq!(received.len(), 1);
        assert!(matches!(
            received[0],
            EngineUpdate::Stopped {
                outcome: GameOutcome::Abandoned,
                ..
            }
        ));
    }

    #[test]
    fn hud_is_published_when_the_clock_moves() {
        let config = GameConfig::new()
            .with_ticking_interval(Duration::from_millis(20))
            .with_seed(3);
        let engine = GameEngineFactory::new(config)
            .create(GameMode::survival(), Box::new(NoopListener))
            .unwrap();
        let handle = GameRunner::new(engine).with_tps(200.0).spawn().unwrap();
        let updates = handle.updates().clone();

        let mut clocks = Vec::new();
        while clocks.len() < 2 {
            match updates.recv_timeout(Duration::from_secs(5)) {
                Ok(EngineUpdate::Hud(hud)) => {
                    if clocks.last() != Some(&hud.clock) {
                        clocks.push(hud.clock);
                    }
                }
                other => panic!("expected HUD frames, got {:?}", other),
            }
        }
        handle.send(PlayerCommand::Quit);
        handle.join().unwrap();

        assert_eq!(clocks[0].as_deref(), Some("00:30"));
        assert_eq!(clocks[1].as_deref(), Some("00:29"));
    }
}
