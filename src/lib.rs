//=========================================================================
// Wraith Engine — Library Root
//
// Game-mode engine factory for a first-person ghost hunting game.
//
// Responsibilities:
// - Expose the factory that assembles an engine per game mode
// - Expose the core model (modes, weapons, ghosts, behaviors, routines,
//   views) for hosts that need to inspect or extend it
// - Provide a fixed-rate runner for hosts without their own game loop
//
// Typical usage:
// ```no_run
// use wraith_engine::prelude::*;
//
// let factory = GameEngineFactory::new(GameConfig::default());
// let engine = factory.create(GameMode::sprint(), Box::new(NoopListener)).unwrap();
// let handle = GameRunner::new(engine).spawn().unwrap();
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds the game model the factory assembles from. `engine`
// holds the session runtime, the factory itself and the threaded runner.
//
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod prelude;

//--- Public Exports ------------------------------------------------------

pub use config::{GameConfig, WorldBounds};
pub use engine::factory::GameEngineFactory;
pub use engine::runner::{GameRunner, RunnerHandle};
pub use engine::{EngineState, GameEngine, GameEngineListener, NoopListener};
pub use error::{GameError, Result};
