//=========================================================================
// Game Engine Factory
//=========================================================================
//
// Selects and assembles the engine for a game mode.
//
// Every mode is built in two halves:
//   create_*  → fresh weapon and session state for the mode
//   assemble_* → behavior, routines and view around a session
//
// `create` runs both halves; `restore` runs only the second around a
// saved session, so the state is picked up exactly where it was left.
//
// | Mode             | Behavior         | Routines                  | View           |
// |------------------|------------------|---------------------------|----------------|
// | RemainingTime    | SprintOrMarathon | reloader, spawner, ticker | TimeDecreasing |
// | DeathToTheKing   | DeathToTheKing   | reloader, ticker          | Time           |
// | Survival         | Survival         | reloader, spawner, ticker | TimeDecreasing |
// | Tutorial         | Tutorial         | reloader                  | Tutorial       |
//
//=========================================================================

//=== External Dependencies ===============================================

use log::{debug, info};

//=== Internal Dependencies ===============================================

use super::{GameEngine, GameEngineListener};
use crate::config::GameConfig;
use crate::core::behavior::GameBehaviorFactory;
use crate::core::information::{SessionState, TimedInformation, TutorialInformation};
use crate::core::mode::{GameMode, GameModeKind};
use crate::core::routine::{Routine, RoutineKind};
use crate::core::target::{GhostKind, TargetFactory};
use crate::core::view::{TimeDecreasingView, TimeView, TutorialView};
use crate::core::weapon::WeaponFactory;
use crate::error::{GameError, Result};

//=== RNG Streams =========================================================

// Distinct streams per consumer so a seeded config stays reproducible
// no matter how often each consumer draws.
const HORDE_STREAM: u64 = 0x9e37_79b9_7f4a_7c15;
const BEHAVIOR_STREAM: u64 = 0xbf58_476d_1ce4_e5b9;
const SPAWN_POINT_STREAM: u64 = 0x94d0_49bb_1331_11eb;

//=== GameEngineFactory ===================================================

/// Builds ready-to-start engines for every game mode.
///
/// # Examples
///
/// ```
/// use wraith_engine::prelude::*;
///
/// let factory = GameEngineFactory::new(GameConfig::new().with_seed(1));
/// let mut engine = factory
///     .create(GameMode::survival(), Box::new(NoopListener))
///     .unwrap();
///
/// engine.start().unwrap();
/// engine.update(std::time::Duration::from_secs(1));
/// assert_eq!(engine.hud().unwrap().clock.as_deref(), Some("00:29"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GameEngineFactory {
    config: GameConfig,
}

impl GameEngineFactory {
    pub fn new(config: GameConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Entry Points -----------------------------------------------------

    /// Builds a fresh engine for `mode`.
    pub fn create(
        &self,
        mode: GameMode,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        info!("Creating engine for {:?} (level {})", mode.kind, mode.level);
        self.config.validate()?;

        match mode.kind {
            GameModeKind::RemainingTime => self.create_sprint_or_marathon(mode, listener),
            GameModeKind::DeathToTheKing => self.create_death_to_the_king(mode, listener),
            GameModeKind::Survival => self.create_survival(mode, listener),
            GameModeKind::Tutorial => self.create_tutorial(mode, listener),
        }
    }

    /// Rebuilds an engine around a saved session.
    ///
    /// The session's own mode selects the branch; a session whose variant
    /// cannot belong to that mode is rejected, as is a timed session that
    /// had already ended (clock run out, or king already killed).
    pub fn restore(
        &self,
        state: SessionState,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let kind = state.mode().kind;
        info!("Restoring engine for {:?} from {} session", kind, state.variant_name());
        self.config.validate()?;

        if let SessionState::Timed(timed) = &state {
            if is_finished(kind, timed) {
                return Err(GameError::SessionFinished(kind));
            }
        }

        match (kind, state) {
            (GameModeKind::RemainingTime, SessionState::Timed(timed)) => {
                self.assemble_sprint_or_marathon(timed, listener)
            }
            (GameModeKind::DeathToTheKing, SessionState::Timed(timed)) => {
                self.assemble_death_to_the_king(timed, listener)
            }
            (GameModeKind::Survival, SessionState::Timed(timed)) => {
                self.assemble_survival(timed, listener)
            }
            (GameModeKind::Tutorial, SessionState::Tutorial(tutorial)) => {
                self.assemble_tutorial(tutorial, listener)
            }
            (kind, state) => Err(GameError::ModeStateMismatch {
                kind,
                state: state.variant_name(),
            }),
        }
    }

    //--- Sprint / Marathon ------------------------------------------------

    fn create_sprint_or_marathon(
        &self,
        mode: GameMode,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let starting_time = self
            .config
            .starting_time
            .checked_mul(mode.level)
            .filter(|time| !time.is_zero())
            .ok_or(GameError::InvalidLevel {
                kind: mode.kind,
                level: mode.level,
            })?;

        let weapon = WeaponFactory::create_basic_weapon();
        let timed = TimedInformation::new(mode, weapon, starting_time);

        self.assemble_sprint_or_marathon(timed, listener)
    }

    fn assemble_sprint_or_marathon(
        &self,
        timed: TimedInformation,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let reloading_time = timed.info.weapon.reloading_time();
        let behavior = GameBehaviorFactory::create_sprint_or_marathon(
            &self.config,
            timed,
            self.target_factory(BEHAVIOR_STREAM),
        );

        let mut engine = GameEngine::new(
            Box::new(behavior),
            listener,
            self.target_factory(SPAWN_POINT_STREAM),
        );
        engine.add_routine(Routine::new(RoutineKind::Reloader, reloading_time))?;
        engine.add_routine(Routine::new(RoutineKind::Spawner, self.config.spawning_interval))?;
        engine.add_routine(Routine::ticker(self.config.ticking_interval))?;
        engine.set_game_view(Box::new(TimeDecreasingView::new()));

        Ok(engine)
    }

    //--- Death to the King ------------------------------------------------

    fn create_death_to_the_king(
        &self,
        mode: GameMode,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let weapon = WeaponFactory::create_basic_weapon();
        let mut timed = TimedInformation::new(mode, weapon, self.config.king_starting_time);

        let mut horde = self.target_factory(HORDE_STREAM);
        for i in 0..self.config.king_horde_size {
            let ghost = if i == self.config.king_index {
                horde.create_king_ghost_for_death_to_the_king()
            } else {
                let kind = horde.random_ghost_kind_without_king();
                horde.create_ghost_with_random_coordinates(kind)
            };
            timed.info.add_targetable_item(ghost);
        }
        debug!(
            "Horde of {} ghosts summoned, king at index {}",
            self.config.king_horde_size, self.config.king_index
        );

        self.assemble_death_to_the_king(timed, listener)
    }

    fn assemble_death_to_the_king(
        &self,
        timed: TimedInformation,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let reloading_time = timed.info.weapon.reloading_time();
        let behavior = GameBehaviorFactory::create_death_to_the_king(
            &self.config,
            timed,
            self.target_factory(BEHAVIOR_STREAM),
        );

        let mut engine = GameEngine::new(
            Box::new(behavior),
            listener,
            self.target_factory(SPAWN_POINT_STREAM),
        );
        engine.add_routine(Routine::new(RoutineKind::Reloader, reloading_time))?;
        engine.add_routine(Routine::ticker(self.config.ticking_interval))?;
        engine.set_game_view(Box::new(TimeView::new()));

        Ok(engine)
    }

    //--- Survival ---------------------------------------------------------

    fn create_survival(
        &self,
        mode: GameMode,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let weapon = WeaponFactory::create_basic_weapon();
        let timed = TimedInformation::new(mode, weapon, self.config.starting_time);

        self.assemble_survival(timed, listener)
    }

    fn assemble_survival(
        &self,
        timed: TimedInformation,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let reloading_time = timed.info.weapon.reloading_time();
        let behavior = GameBehaviorFactory::create_survival(
            &self.config,
            timed,
            self.target_factory(BEHAVIOR_STREAM),
        );

        let mut engine = GameEngine::new(
            Box::new(behavior),
            listener,
            self.target_factory(SPAWN_POINT_STREAM),
        );
        engine.add_routine(Routine::new(RoutineKind::Reloader, reloading_time))?;
        engine.add_routine(Routine::new(RoutineKind::Spawner, self.config.spawning_interval))?;
        engine.add_routine(Routine::ticker(self.config.ticking_interval))?;
        engine.set_game_view(Box::new(TimeDecreasingView::new()));

        Ok(engine)
    }

    //--- Tutorial ---------------------------------------------------------

    fn create_tutorial(
        &self,
        mode: GameMode,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let weapon = WeaponFactory::create_basic_weapon();
        let tutorial = TutorialInformation::new(mode, weapon);

        self.assemble_tutorial(tutorial, listener)
    }

    fn assemble_tutorial(
        &self,
        tutorial: TutorialInformation,
        listener: Box<dyn GameEngineListener>,
    ) -> Result<GameEngine> {
        let reloading_time = tutorial.info.weapon.reloading_time();
        let behavior = GameBehaviorFactory::create_tutorial(&self.config, tutorial);

        let mut engine = GameEngine::new(
            Box::new(behavior),
            listener,
            self.target_factory(SPAWN_POINT_STREAM),
        );
        engine.add_routine(Routine::new(RoutineKind::Reloader, reloading_time))?;
        engine.set_game_view(Box::new(TutorialView::new()));

        Ok(engine)
    }

    //--- Helpers ----------------------------------------------------------

    fn target_factory(&self, stream: u64) -> TargetFactory {
        let seed = self.config.seed.map(|seed| seed ^ stream);
        TargetFactory::new(self.config.world_bounds, seed)
    }
}

/// Whether a saved timed session had already reached its end condition.
fn is_finished(kind: GameModeKind, timed: &TimedInformation) -> bool {
    match kind {
        GameModeKind::RemainingTime | GameModeKind::Survival => timed.current_time.is_zero(),
        GameModeKind::DeathToTheKing => !timed
            .info
            .targets()
            .iter()
            .any(|target| target.kind == GhostKind::King),
        GameModeKind::Tutorial => false,
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
