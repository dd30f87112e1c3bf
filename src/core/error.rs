//! Error taxonomy for the engine.
//!
//! Every failure is reported synchronously by the call that triggers it.
//! Nothing is retried internally, and a failed call never leaves a
//! half-built state behind.

use thiserror::Error;

use super::coord::Direction;
use super::player::PlayerId;

/// Errors produced by board setup, state transitions and sessions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// More distinct cells were requested than the grid holds.
    #[error("requested {requested} distinct positions but the grid only has {available} cells")]
    CapacityExceeded {
        /// Number of positions asked for.
        requested: usize,
        /// Number of cells on the grid.
        available: usize,
    },

    /// Action index outside `0..4`.
    #[error("action index {0} is not one of 0 (up), 1 (down), 2 (left), 3 (right)")]
    InvalidAction(usize),

    /// A well-formed direction that is not legal in the current state.
    #[error("{player} cannot move {direction}: destination is off the board or occupied")]
    IllegalMove {
        /// The rejected direction.
        direction: Direction,
        /// The player whose turn it was.
        player: PlayerId,
    },

    /// An action was submitted to a terminal state.
    #[error("the game is over; no further actions are accepted")]
    GameOver,

    /// Grid dimensions or player count are unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// A state was handed to an encoder built for a different board shape.
    #[error("encoder expects shape {expected:?} but the state has shape {actual:?}")]
    ShapeMismatch {
        /// `[layers, height, width]` the encoder was built for.
        expected: Vec<usize>,
        /// `[layers, height, width]` of the state's board.
        actual: Vec<usize>,
    },

    /// A hand-built scenario is inconsistent (bad snake count, overlap, bounds).
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;
