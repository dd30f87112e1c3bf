//! Mutable game session: the entry point for agents and training loops.
//!
//! A session draws random spawns once, keeps the resulting opening position,
//! and then advances a "current" state one ply per `step`.
//!
//! ```
//! use snek_engine::core::GameConfig;
//! use snek_engine::game::GameSession;
//!
//! let mut session = GameSession::new(GameConfig::new(7, 7, 2), 42).unwrap();
//! let action = session.reset().allowed_action_indices().next().unwrap();
//!
//! let outcome = session.step(action).unwrap();
//! assert_eq!(outcome.state.turn_number().as_slice(), &[1, 0]);
//! ```

use log::{debug, info};

use crate::board::random_distinct_positions;
use crate::core::{Direction, GameConfig, GameRng, Result};

use super::builder::GameStateBuilder;
use super::stats::ExplorationStats;
use super::state::{GameState, Transition};

/// One game between `player_count` snakes.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    initial: GameState,
    state: GameState,
    stats: ExplorationStats,
}

impl GameSession {
    /// Create a session with random, distinct snake spawns and an
    /// independent batch of opening food.
    ///
    /// Food is drawn separately from the snakes and may land under a
    /// starting head.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate()?;
        let root = GameRng::new(seed);

        let spawns = random_distinct_positions(
            config.player_count,
            config.width,
            config.height,
            &mut root.for_context("spawn"),
        )?;
        let food = random_distinct_positions(
            config.initial_food_count(),
            config.width,
            config.height,
            &mut root.for_context("food"),
        )?;

        let builder = spawns
            .into_iter()
            .fold(GameStateBuilder::new(config.clone()), |b, head| b.snake([head]))
            .foods(food)
            .rng(root.for_context("runtime"));
        let initial = builder.build()?;

        debug!(
            "new {}x{} session with {} players (seed {seed})",
            config.width, config.height, config.player_count
        );

        let mut stats = ExplorationStats::new();
        stats.record(&initial);

        Ok(Self {
            config,
            state: initial.clone(),
            initial,
            stats,
        })
    }

    /// Return to the opening position drawn at construction.
    ///
    /// Positions are not re-randomised.
    pub fn reset(&mut self) -> &GameState {
        self.state = self.initial.clone();
        &self.state
    }

    /// Apply `action` to the current state and adopt the successor.
    ///
    /// A rejected action leaves the session unchanged.
    pub fn step(&mut self, action: usize) -> Result<Transition> {
        let transition = self.state.take_action(action)?;
        self.stats.record(&transition.state);
        self.state = transition.state.clone();

        if transition.terminal {
            info!(
                "game over: {} cannot continue (turns {:?})",
                self.state.active_player(),
                self.state.turn_number().as_slice()
            );
        }
        Ok(transition)
    }

    /// Symmetry-augmented copies of `(state, action_values)` for training.
    ///
    /// Only the identity pair is produced; flips and rotations are not
    /// generated.
    pub fn identities(&self, state: &GameState, action_values: &[f32]) -> Vec<(GameState, Vec<f32>)> {
        vec![(state.clone(), action_values.to_vec())]
    }

    // === Accessors ===

    /// The current state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// `(width, height)`.
    #[must_use]
    pub fn grid_shape(&self) -> (usize, usize) {
        (self.config.width, self.config.height)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.config.player_count
    }

    #[must_use]
    pub fn layer_count(&self) -> usize {
        self.config.layer_count()
    }

    #[must_use]
    pub fn food_layer(&self) -> usize {
        self.state.layout().food_layer()
    }

    /// `(layers, height, width)` of the encoded board.
    #[must_use]
    pub fn input_shape(&self) -> (usize, usize, usize) {
        (self.layer_count(), self.config.height, self.config.width)
    }

    /// Number of distinct actions.
    #[must_use]
    pub fn action_size(&self) -> usize {
        Direction::COUNT
    }

    /// Length of the encoded state.
    #[must_use]
    pub fn state_size(&self) -> usize {
        self.state.binary().len()
    }

    /// `1` when player 0 is to move, `-1` otherwise.
    #[must_use]
    pub fn current_player(&self) -> i8 {
        self.state.player_sign()
    }

    #[must_use]
    pub fn stats(&self) -> &ExplorationStats {
        &self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameError, PlayerId};

    #[test]
    fn test_session_sizes() {
        let session = GameSession::new(GameConfig::new(7, 7, 2), 1).unwrap();

        assert_eq!(session.grid_shape(), (7, 7));
        assert_eq!(session.player_count(), 2);
        assert_eq!(session.layer_count(), 3);
        assert_eq!(session.food_layer(), 2);
        assert_eq!(session.input_shape(), (3, 7, 7));
        assert_eq!(session.action_size(), 4);
        assert_eq!(session.state_size(), 147);
        assert_eq!(session.current_player(), 1);
    }

    #[test]
    fn test_opening_position() {
        let session = GameSession::new(GameConfig::new(7, 7, 3), 5).unwrap();
        let state = session.state();

        for player in PlayerId::all(3) {
            assert_eq!(state.snake(player).len(), 1);
        }
        // Seven distinct opening food cells plus the turn-zero spawn on a
        // cell without food.
        assert_eq!(state.board().food_count(), 8);
    }

    #[test]
    fn test_same_seed_same_opening() {
        let a = GameSession::new(GameConfig::default(), 99).unwrap();
        let b = GameSession::new(GameConfig::default(), 99).unwrap();
        assert_eq!(a.state().id(), b.state().id());
        assert_eq!(a.state(), b.state());
    }

    #[test]
    fn test_reset_restores_opening() {
        let mut session = GameSession::new(GameConfig::default(), 3).unwrap();
        let opening = session.state().clone();

        let action = opening.allowed_action_indices().next().unwrap();
        session.step(action).unwrap();
        assert_ne!(session.state(), &opening);

        assert_eq!(session.reset(), &opening);
        assert_eq!(session.reset().id(), opening.id());
    }

    #[test]
    fn test_rejected_step_keeps_state() {
        let mut session = GameSession::new(GameConfig::default(), 3).unwrap();
        let before = session.state().clone();

        assert_eq!(session.step(9).unwrap_err(), GameError::InvalidAction(9));
        assert_eq!(session.state(), &before);
    }

    #[test]
    fn test_identities_is_identity() {
        let session = GameSession::new(GameConfig::default(), 3).unwrap();
        let pairs = session.identities(session.state(), &[0.1, 0.2, 0.3, 0.4]);

        assert_eq!(pairs.len(), 1);
        assert_eq!(&pairs[0].0, session.state());
        assert_eq!(pairs[0].1, vec![0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn test_invalid_configuration() {
        assert!(matches!(
            GameSession::new(GameConfig::new(0, 7, 2), 0),
            Err(GameError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GameSession::new(GameConfig::new(7, 7, 0), 0),
            Err(GameError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_too_many_players() {
        let err = GameSession::new(GameConfig::new(2, 2, 5), 0).unwrap_err();
        assert_eq!(
            err,
            GameError::CapacityExceeded {
                requested: 5,
                available: 4
            }
        );
    }

    #[test]
    fn test_stats_track_steps() {
        let mut session = GameSession::new(GameConfig::default(), 8).unwrap();
        let action = session.state().allowed_action_indices().next().unwrap();
        session.step(action).unwrap();

        assert_eq!(session.stats().states_constructed(), 2);
    }
}
