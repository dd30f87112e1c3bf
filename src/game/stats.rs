//! Exploration counters for diagnostics.
//!
//! Searches own an `ExplorationStats` (or borrow the session's) and record
//! each state they construct; there is no process-wide counter.

use log::debug;
use rustc_hash::FxHashSet;

use super::state::{GameState, StateId};

/// Log a progress line every this many recorded states.
pub const PROGRESS_INTERVAL: u64 = 100;

/// Counts constructed states and the distinct boards among them.
#[derive(Clone, Debug, Default)]
pub struct ExplorationStats {
    states_constructed: u64,
    seen: FxHashSet<StateId>,
}

impl ExplorationStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one constructed state.
    ///
    /// Returns true if its board had not been seen before.
    pub fn record(&mut self, state: &GameState) -> bool {
        self.states_constructed += 1;
        if self.states_constructed % PROGRESS_INTERVAL == 0 {
            debug!(
                "states explored = {} ({} distinct)",
                self.states_constructed,
                self.seen.len()
            );
        }
        self.seen.insert(state.id().clone())
    }

    #[must_use]
    pub fn states_constructed(&self) -> u64 {
        self.states_constructed
    }

    #[must_use]
    pub fn distinct_states(&self) -> usize {
        self.seen.len()
    }

    /// Whether a board has been recorded.
    #[must_use]
    pub fn contains(&self, id: &StateId) -> bool {
        self.seen.contains(id)
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
