//! # snek-engine
//!
//! A deterministic multi-player snake engine built as an environment for
//! self-play search and reinforcement learning.
//!
//! ## Design Principles
//!
//! 1. **Value-semantic states**: every `GameState` owns its board and bodies.
//!    Taking an action never mutates the state it was taken from, so search
//!    branches can share and clone states freely.
//!
//! 2. **One mover per ply**: players act in fixed round-robin order
//!    `(active + 1) mod player_count`.
//!
//! 3. **Explicit failures**: illegal actions, impossible spawns and bad
//!    configurations are reported as `GameError`s instead of corrupting state
//!    or looping.
//!
//! ## Architecture
//!
//! - **Board encoding**: one occupancy layer per player plus a food layer,
//!   flattened into a single `u8` array that doubles as the state encoding.
//!
//! - **Persistent bodies**: snake bodies are `im::Vector`s, giving O(1)
//!   clones for search.
//!
//! - **Deterministic RNG**: spawns and food come from seeded ChaCha8 streams
//!   carried inside each state.
//!
//! ## Modules
//!
//! - `core`: coordinates, players, RNG, configuration, errors
//! - `board`: flat multi-layer board and random placement
//! - `game`: `GameState`, `GameSession`, builder, stats, rendering
//! - `nn`: tensor encoding for neural networks
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod board;
pub mod game;
pub mod nn;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Coord, Direction, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result, Rules,
    MAX_HEALTH,
};

pub use crate::board::{index, random_distinct_positions, Board, BoardLayout};

pub use crate::game::{
    render, ExplorationStats, GameSession, GameState, GameStateBuilder, StateId, Transition,
};

pub use crate::nn::{BoardEncoder, EncodedState, StateEncoder};
