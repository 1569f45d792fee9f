//=========================================================================
// Game Configuration
//=========================================================================
//
// Tunables shared by the engine factory, the behaviors and the target
// factory.
//
// Defaults reproduce the stock game: one-second spawner and ticker,
// thirty seconds on the clock, a hundred-ghost horde with the king in
// the middle.
//
//=========================================================================

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Dependencies ===============================================

use serde::{Deserialize, Serialize};

//=== Internal Dependencies ===============================================

use crate::error::{GameError, Result};

//=== WorldBounds =========================================================

/// Rectangle in which ghosts may appear, in world degrees.
///
/// `x` is the horizontal bearing around the player and `y` the elevation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorldBounds {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl WorldBounds {
    /// Returns true if the point lies inside the bounds (edges included).
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.min_x && x <= self.max_x && y >= self.min_y && y <= self.max_y
    }

    /// Finite and not inverted on either axis.
    pub fn is_valid(&self) -> bool {
        [self.min_x, self.max_x, self.min_y, self.max_y]
            .iter()
            .all(|v| v.is_finite())
            && self.min_x <= self.max_x
            && self.min_y <= self.max_y
    }
}

impl Default for WorldBounds {
    fn default() -> Self {
        Self {
            min_x: -170.0,
            max_x: 170.0,
            min_y: -80.0,
            max_y: 80.0,
        }
    }
}

//=== GameConfig ==========================================================

/// Configuration consumed by [`crate::GameEngineFactory`].
///
/// # Default Values
///
/// - **Spawning interval**: 1000 ms
/// - **Ticking interval**: 1000 ms
/// - **Starting time**: 30000 ms (multiplied by the level for sprint/marathon)
/// - **King starting time**: 1000 ms
/// - **King horde**: 100 ghosts, king at index 50
/// - **Survival time bonus**: 1000 ms per kill
/// - **Max targets**: 10 alive at once for spawning modes
/// - **Hit radius**: 8 degrees around the crosshair
/// - **Seed**: none (entropy seeded)
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use wraith_engine::GameConfig;
///
/// let config = GameConfig::new()
///     .with_starting_time(Duration::from_secs(60))
///     .with_seed(7);
/// assert_eq!(config.starting_time, Duration::from_secs(60));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub spawning_interval: Duration,
    pub ticking_interval: Duration,
    pub starting_time: Duration,
    pub king_starting_time: Duration,
    pub king_horde_size: usize,
    pub king_index: usize,
    pub survival_time_bonus: Duration,
    pub max_targets: usize,
    pub hit_radius: f32,
    pub world_bounds: WorldBounds,
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Creates a configuration with the stock defaults.
    pub fn new() -> Self {
        Self {
            spawning_interval: Duration::from_millis(1000),
            ticking_interval: Duration::from_millis(1000),
            starting_time: Duration::from_millis(30000),
            king_starting_time: Duration::from_millis(1000),
            king_horde_size: 100,
            king_index: 50,
            survival_time_bonus: Duration::from_millis(1000),
            max_targets: 10,
            hit_radius: 8.0,
            world_bounds: WorldBounds::default(),
            seed: None,
        }
    }

    /// Sets how often the spawner routine fires.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_spawning_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Spawning interval must be positive");
        self.spawning_interval = interval;
        self
    }

    /// Sets how often the ticker routine fires.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    pub fn with_ticking_interval(mut self, interval: Duration) -> Self {
        assert!(!interval.is_zero(), "Ticking interval must be positive");
        self.ticking_interval = interval;
        self
    }

    /// Sets the clock for survival and for a level-1 sprint.
    pub fn with_starting_time(mut self, time: Duration) -> Self {
        self.starting_time = time;
        self
    }

    /// Sets the chronometer start for Death to the King.
    pub fn with_king_starting_time(mut self, time: Duration) -> Self {
        self.king_starting_time = time;
        self
    }

    /// Sets the horde layout for Death to the King.
    ///
    /// # Panics
    ///
    /// Panics if `king_index` does not fall inside the horde.
    pub fn with_king_horde(mut self, size: usize, king_index: usize) -> Self {
        assert!(
            king_index < size,
            "King index {} outside horde of {}",
            king_index,
            size
        );
        self.king_horde_size = size;
        self.king_index = king_index;
        self
    }

    /// Sets the time credited per kill in survival.
    pub fn with_survival_time_bonus(mut self, bonus: Duration) -> Self {
        self.survival_time_bonus = bonus;
        self
    }

    /// Caps how many ghosts the spawner keeps alive at once.
    pub fn with_max_targets(mut self, max: usize) -> Self {
        self.max_targets = max;
        self
    }

    /// Sets how far from the crosshair a ghost still counts as hit.
    ///
    /// # Panics
    ///
    /// Panics if `radius <= 0.0`.
    pub fn with_hit_radius(mut self, radius: f32) -> Self {
        assert!(radius > 0.0, "Hit radius must be positive, got {}", radius);
        self.hit_radius = radius;
        self
    }

    /// Sets the area ghosts can appear in.
    ///
    /// # Panics
    ///
    /// Panics if a bound range is inverted or not finite.
    pub fn with_world_bounds(mut self, bounds: WorldBounds) -> Self {
        assert!(bounds.is_valid(), "World bounds are inverted or not finite");
        self.world_bounds = bounds;
        self
    }

    /// Makes ghost placement reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Re-checks what the `with_*` setters assert.
    ///
    /// Fields are public and deserializable, so a loaded configuration
    /// can hold values the builder would have refused.
    pub fn validate(&self) -> Result<()> {
        if self.spawning_interval.is_zero() || self.ticking_interval.is_zero() {
            return Err(GameError::InvalidConfig("routine intervals must be positive"));
        }
        if self.king_index >= self.king_horde_size {
            return Err(GameError::InvalidConfig("king index outside the horde"));
        }
        if !(self.hit_radius.is_finite() && self.hit_radius > 0.0) {
            return Err(GameError::InvalidConfig("hit radius must be positive"));
        }
        if !self.world_bounds.is_valid() {
            return Err(GameError::InvalidConfig(
                "world bounds are inverted or not finite",
            ));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_game() {
        let config = GameConfig::new();
        assert_eq!(config.spawning_interval, Duration::from_millis(1000));
        assert_eq!(config.ticking_interval, Duration::from_millis(1000));
        assert_eq!(config.starting_time, Duration::from_millis(30000));
        assert_eq!(config.king_starting_time, Duration::from_millis(1000));
        assert_eq!(config.king_horde_size, 100);
        assert_eq!(config.king_index, 50);
        assert!(config.seed.is_none());
    }

    #[test]
    fn fluent_api_chaining() {
        let config = GameConfig::new()
            .with_ticking_interval(Duration::from_millis(500))
            .with_king_horde(10, 3)
            .with_max_targets(4)
            .with_seed(42);

        assert_eq!(config.ticking_interval, Duration::from_millis(500));
        assert_eq!(config.king_horde_size, 10);
        assert_eq!(config.king_index, 3);
        assert_eq!(config.max_targets, 4);
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    #[should_panic(expected = "Ticking interval must be positive")]
    fn ticking_interval_panics_on_zero() {
        GameConfig::new().with_ticking_interval(Duration::ZERO);
    }

    #[test]
    #[should_panic(expected = "King index 5 outside horde of 5")]
    fn king_horde_panics_when_king_outside() {
        GameConfig::new().with_king_horde(5, 5);
    }

    #[test]
    #[should_panic(expected = "Hit radius must be positive")]
    fn hit_radius_panics_on_negative() {
        GameConfig::new().with_hit_radius(-1.0);
    }

    #[test]
    fn builder_config_validates() {
        assert!(GameConfig::new().validate().is_ok());
        assert!(GameConfig::new().with_king_horde(1, 0).validate().is_ok());
    }

    #[test]
    fn loaded_config_with_bad_bounds_is_rejected() {
        let mut config = GameConfig::new();
        config.world_bounds.min_x = 200.0;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));

        config.world_bounds = WorldBounds::default();
        config.world_bounds.max_y = f32::NAN;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    fn loaded_config_with_king_outside_horde_is_rejected() {
        let mut config = GameConfig::new();
        config.king_index = config.king_horde_size;
        assert!(matches!(config.validate(), Err(GameError::InvalidConfig(_))));
    }

    #[test]
    #[should_panic(expected = "World bounds are inverted")]
    fn world_bounds_panics_when_inverted() {
        GameConfig::new().with_world_bounds(WorldBounds {
            min_x: 1.0,
            max_x: -1.0,
            min_y: 0.0,
            max_y: 0.0,
        });
    }

    #[test]
    fn bounds_contain_edges() {
        let bounds = WorldBounds::default();
        assert!(bounds.contains(bounds.min_x, bounds.max_y));
        assert!(!bounds.contains(bounds.max_x + 1.0, 0.0));
    }
}
