//! Game state, transitions and sessions.
//!
//! - `state`: immutable per-ply `GameState` and `take_action`
//! - `builder`: `GameStateBuilder` for exact scenarios
//! - `session`: `GameSession` with reset/step for external agents
//! - `stats`: `ExplorationStats` counters owned by callers
//! - `render`: plain-text board rendering

pub mod builder;
pub mod render;
pub mod session;
pub mod state;
pub mod stats;

pub use builder::GameStateBuilder;
pub use render::{log_render, render};
pub use session::GameSession;
pub use state::{Body, GameState, LegalActions, StateId, Transition, Value, LOSS_VALUE, ONGOING_VALUE};
pub use stats::ExplorationStats;
