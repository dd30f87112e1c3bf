//! Core engine types: coordinates, players, RNG, configuration, errors.
//!
//! Everything here is independent of the board layout and game rules.

pub mod coord;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use coord::{Coord, Direction};
pub use player::{PlayerId, PlayerMap};
pub use rng::GameRng;
pub use config::{GameConfig, Rules, FOOD_SPAWN_INTERVAL, GROWTH_GRACE_LENGTH, MAX_HEALTH, SHARED_LAYERS};
pub use error::{GameError, Result};
