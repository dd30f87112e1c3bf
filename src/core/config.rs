//! Game configuration.
//!
//! A `GameConfig` fixes everything a session needs before the first state is
//! built: grid shape, player count and the tunable rule constants. The
//! per-turn rules that travel with every `GameState` are split out into the
//! small `Copy` struct `Rules`.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Health a snake starts with and returns to after eating.
pub const MAX_HEALTH: i32 = 10;

/// Player-0 moves between food spawns.
pub const FOOD_SPAWN_INTERVAL: u32 = 10;

/// Bodies shorter than this never lose their tail.
pub const GROWTH_GRACE_LENGTH: usize = 3;

/// Number of board layers shared by all players (the food layer).
pub const SHARED_LAYERS: usize = 1;

/// Rule constants consulted on every transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rules {
    /// Starting and post-meal health.
    pub max_health: i32,

    /// Spawn one food whenever player 0 is to move and its turn counter is a
    /// multiple of this. Zero disables runtime spawns.
    pub food_spawn_interval: u32,

    /// Minimum body length before the tail starts following the head.
    pub growth_grace_length: usize,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_health: MAX_HEALTH,
            food_spawn_interval: FOOD_SPAWN_INTERVAL,
            growth_grace_length: GROWTH_GRACE_LENGTH,
        }
    }
}

/// Complete game configuration.
///
/// ```
/// use snek_engine::core::GameConfig;
///
/// let config = GameConfig::new(7, 7, 2).with_max_health(20);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.layer_count(), 3);
/// assert_eq!(config.initial_food_count(), 7);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Grid width (number of columns).
    pub width: usize,

    /// Grid height (number of rows).
    pub height: usize,

    /// Number of snakes (1-255).
    pub player_count: usize,

    /// Rule constants.
    pub rules: Rules,

    /// Food placed at session start. `None` means one per column.
    pub initial_food: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(7, 7, 2)
    }
}

impl GameConfig {
    /// Create a configuration with default rules.
    ///
    /// Nothing is checked here; call `validate` (sessions and builders do).
    pub fn new(width: usize, height: usize, player_count: usize) -> Self {
        Self {
            width,
            height,
            player_count,
            rules: Rules::default(),
            initial_food: None,
        }
    }

    /// Set the maximum health.
    #[must_use]
    pub fn with_max_health(mut self, max_health: i32) -> Self {
        self.rules.max_health = max_health;
        self
    }

    /// Set the food spawn interval (0 disables runtime spawns).
    #[must_use]
    pub fn with_food_spawn_interval(mut self, interval: u32) -> Self {
        self.rules.food_spawn_interval = interval;
        self
    }

    /// Set the minimum length at which tails start to follow.
    #[must_use]
    pub fn with_growth_grace_length(mut self, length: usize) -> Self {
        self.rules.growth_grace_length = length;
        self
    }

    /// Set the number of food items placed at session start.
    #[must_use]
    pub fn with_initial_food(mut self, count: usize) -> Self {
        self.initial_food = Some(count);
        self
    }

    /// Check that the grid and player count are usable.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "grid dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(GameError::InvalidConfiguration(format!(
                "grid {}x{} exceeds coordinate range",
                self.width, self.height
            )));
        }
        if self.player_count == 0 {
            return Err(GameError::InvalidConfiguration(
                "at least one player is required".to_string(),
            ));
        }
        if self.player_count > 255 {
            return Err(GameError::InvalidConfiguration(format!(
                "at most 255 players supported, got {}",
                self.player_count
            )));
        }
        if self.rules.max_health <= 0 {
            return Err(GameError::InvalidConfiguration(format!(
                "max health must be positive, got {}",
                self.rules.max_health
            )));
        }
        Ok(())
    }

    /// Number of cells in one layer.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// One layer per player plus the shared food layer.
    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.player_count + SHARED_LAYERS
    }

    /// Food placed at session start.
    #[must_use]
    pub fn initial_food_count(&self) -> usize {
        self.initial_food.unwrap_or(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!((config.width, config.height), (7, 7));
        assert_eq!(config.player_count, 2);
        assert_eq!(config.rules.max_health, 10);
        assert_eq!(config.rules.food_spawn_interval, 10);
        assert_eq!(config.rules.growth_grace_length, 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = GameConfig::new(5, 4, 3)
            .with_max_health(25)
            .with_food_spawn_interval(0)
            .with_growth_grace_length(1)
            .with_initial_food(2);

        assert_eq!(config.rules.max_health, 25);
        assert_eq!(config.rules.food_spawn_interval, 0);
        assert_eq!(config.rules.growth_grace_length, 1);
        assert_eq!(config.initial_food_count(), 2);
        assert_eq!(config.cell_count(), 20);
        assert_eq!(config.layer_count(), 4);
    }

    #[test]
    fn test_validate_rejects_bad_shapes() {
        assert!(matches!(
            GameConfig::new(0, 7, 2).validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 0, 2).validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 7, 0).validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 7, 256).validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameConfig::new(7, 7, 2).with_max_health(0).validate(),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_config_serde() {
        let config = GameConfig::new(9, 9, 4).with_initial_food(3);
        let json = serde_json::to_string(&config).unwrap();
        let restored: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, restored);
    }
}
