//! Builder for arbitrary starting positions.
//!
//! Sessions use it with random spawns; tests and external tools use it to
//! set up exact scenarios (a boxed-in snake, a turn counter one move before
//! a food spawn, a starving player).

use crate::board::{Board, BoardLayout};
use crate::core::{Coord, GameConfig, GameError, GameRng, PlayerId, PlayerMap, Result};

use super::state::{Body, GameState};

/// Builder for a `GameState`.
///
/// ```
/// use snek_engine::core::{Coord, GameConfig, PlayerId};
/// use snek_engine::game::GameStateBuilder;
///
/// let state = GameStateBuilder::new(GameConfig::new(5, 5, 2))
///     .snake([Coord::new(0, 0)])
///     .snake([Coord::new(4, 4), Coord::new(4, 3)])
///     .food(Coord::new(2, 2))
///     .seed(7)
///     .build()
///     .unwrap();
///
/// assert_eq!(state.active_player(), PlayerId::new(0));
/// assert_eq!(state.snake(PlayerId::new(1)).len(), 2);
/// ```
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    config: GameConfig,
    snakes: Vec<Vec<Coord>>,
    food: Vec<Coord>,
    active_player: PlayerId,
    turn_numbers: Vec<(PlayerId, u32)>,
    health: Vec<(PlayerId, i32)>,
    rng: GameRng,
}

impl GameStateBuilder {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            snakes: Vec::new(),
            food: Vec::new(),
            active_player: PlayerId::new(0),
            turn_numbers: Vec::new(),
            health: Vec::new(),
            rng: GameRng::new(0),
        }
    }

    /// Add the next player's body, head first.
    #[must_use]
    pub fn snake(mut self, body: impl IntoIterator<Item = Coord>) -> Self {
        self.snakes.push(body.into_iter().collect());
        self
    }

    /// Place one food item.
    #[must_use]
    pub fn food(mut self, coord: Coord) -> Self {
        self.food.push(coord);
        self
    }

    /// Place several food items. Duplicates collapse into one cell.
    #[must_use]
    pub fn foods(mut self, coords: impl IntoIterator<Item = Coord>) -> Self {
        self.food.extend(coords);
        self
    }

    #[must_use]
    pub fn active_player(mut self, player: PlayerId) -> Self {
        self.active_player = player;
        self
    }

    #[must_use]
    pub fn turn_number(mut self, player: PlayerId, turns: u32) -> Self {
        self.turn_numbers.push((player, turns));
        self
    }

    #[must_use]
    pub fn health(mut self, player: PlayerId, health: i32) -> Self {
        self.health.push((player, health));
        self
    }

    /// Seed the stream used for runtime food spawns.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = GameRng::new(seed);
        self
    }

    /// Use an existing stream for runtime food spawns.
    #[must_use]
    pub fn rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Validate the scenario and construct the state.
    pub fn build(self) -> Result<GameState> {
        self.config.validate()?;
        let player_count = self.config.player_count;
        let layout = BoardLayout::new(self.config.width, self.config.height, player_count);
        let rules = self.config.rules;

        if self.snakes.len() != player_count {
            return Err(GameError::InvalidSetup(format!(
                "expected {player_count} snakes, got {}",
                self.snakes.len()
            )));
        }

        let check_player = |player: PlayerId| {
            if player.index() < player_count {
                Ok(())
            } else {
                Err(GameError::InvalidSetup(format!(
                    "{player} does not exist in a {player_count}-player game"
                )))
            }
        };
        let check_cell = |coord: Coord| {
            if layout.contains(coord) {
                Ok(())
            } else {
                Err(GameError::InvalidSetup(format!(
                    "{coord} is off the {}x{} board",
                    layout.width, layout.height
                )))
            }
        };

        let mut board = Board::new(layout);
        let mut bodies: Vec<Body> = Vec::with_capacity(player_count);
        for (player, segments) in PlayerId::all(player_count).zip(&self.snakes) {
            if segments.is_empty() {
                return Err(GameError::InvalidSetup(format!("{player} has an empty body")));
            }
            for &coord in segments {
                check_cell(coord)?;
                if let Some(owner) = board.occupant(coord) {
                    return Err(GameError::InvalidSetup(format!(
                        "{player} overlaps {owner} at {coord}"
                    )));
                }
                board.set_body(coord, player);
            }
            bodies.push(segments.iter().copied().collect());
        }

        for &coord in &self.food {
            check_cell(coord)?;
            board.place_food(coord);
        }

        check_player(self.active_player)?;

        let mut turn_number = PlayerMap::with_value(player_count, 0u32);
        for &(player, turns) in &self.turn_numbers {
            check_player(player)?;
            if turns == u32::MAX {
                return Err(GameError::InvalidSetup(format!(
                    "turn counter {turns} for {player} leaves no room for another move"
                )));
            }
            turn_number[player] = turns;
        }

        let mut health = PlayerMap::with_value(player_count, rules.max_health);
        for &(player, value) in &self.health {
            check_player(player)?;
            if !(0..=rules.max_health).contains(&value) {
                return Err(GameError::InvalidSetup(format!(
                    "health {value} for {player} is outside 0..={}",
                    rules.max_health
                )));
            }
            health[player] = value;
        }

        let snakes = PlayerMap::new(player_count, |p| bodies[p.index()].clone());

        Ok(GameState::assemble(
            board,
            snakes,
            health,
            turn_number,
            self.active_player,
            rules,
            self.rng,
        ))
    }
}
