//! Immutable per-ply game snapshot and the transition function.
//!
//! A `GameState` is built once per ply and never mutated afterwards.
//! Construction derives everything a search needs (legal actions, terminal
//! flag, value, state id), so repeated queries are free.
//!
//! ## Ownership
//!
//! Each state owns its board and bodies. Bodies are `im::Vector`s, so
//! cloning a state for a search branch is cheap and mutating a successor
//! never touches its predecessor.

use im::Vector;
use log::trace;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{random_food_cell, Board, BoardLayout};
use crate::core::{Coord, Direction, GameError, GameRng, PlayerId, PlayerMap, Result, Rules};

/// A snake's segments, head first.
pub type Body = Vector<Coord>;

/// Legal moves for the active player, in action-index order.
pub type LegalActions = SmallVec<[Direction; 4]>;

/// Value triple reported for a state.
pub type Value = (i32, i32, i32);

/// Value of a non-terminal state.
pub const ONGOING_VALUE: Value = (0, 0, 0);

/// Value of a terminal state, from the perspective of the player to move.
pub const LOSS_VALUE: Value = (-1, -1, -1);

/// Exact key of a board's contents, for transposition and visited-set lookups.
///
/// Two states share an id exactly when their boards are equal. `Display`
/// prints the cells as a string of `0`/`1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StateId(Box<[u8]>);

impl StateId {
    fn from_board(board: &Board) -> Self {
        Self(board.cells().into())
    }

    /// Raw board cells behind this id.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for StateId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for &cell in self.0.iter() {
            write!(f, "{cell}")?;
        }
        Ok(())
    }
}

/// Result of applying one action.
#[derive(Clone, Debug)]
pub struct Transition {
    /// The successor state.
    pub state: GameState,

    /// `state.value().0` if the successor is terminal, otherwise 0.
    pub value: i32,

    /// Whether the successor is terminal.
    pub terminal: bool,
}

/// Snapshot of a game between two plies.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    snakes: PlayerMap<Body>,
    health: PlayerMap<i32>,
    turn_number: PlayerMap<u32>,
    active_player: PlayerId,
    rules: Rules,
    rng: GameRng,

    // Derived on construction.
    id: StateId,
    legal_actions: LegalActions,
    is_end_game: bool,
    value: Value,
}

impl GameState {
    /// Assemble a state from already-consistent parts.
    ///
    /// Runs the player-0 food spawn, then derives legality, terminal flag,
    /// value and id. Callers guarantee that bodies are non-empty, on the
    /// board, non-overlapping and mirrored in the board's player layers.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn assemble(
        mut board: Board,
        snakes: PlayerMap<Body>,
        health: PlayerMap<i32>,
        turn_number: PlayerMap<u32>,
        active_player: PlayerId,
        rules: Rules,
        mut rng: GameRng,
    ) -> Self {
        if Self::food_due(active_player, &turn_number, rules) {
            match random_food_cell(&board, &mut rng) {
                Some(cell) => {
                    board.place_food(cell);
                    trace!("food spawned at {cell}");
                }
                None => trace!("food spawn skipped: every cell already holds food"),
            }
        }

        let head = snakes[active_player].front().copied();
        let legal_actions = head
            .map(|head| Self::compute_legal_actions(&board, head))
            .unwrap_or_default();
        let is_end_game = legal_actions.is_empty() || health[active_player] <= 0;
        let value = if is_end_game { LOSS_VALUE } else { ONGOING_VALUE };
        let id = StateId::from_board(&board);

        Self {
            board,
            snakes,
            health,
            turn_number,
            active_player,
            rules,
            rng,
            id,
            legal_actions,
            is_end_game,
            value,
        }
    }

    fn food_due(active_player: PlayerId, turn_number: &PlayerMap<u32>, rules: Rules) -> bool {
        active_player.index() == 0
            && rules.food_spawn_interval > 0
            && turn_number[active_player] % rules.food_spawn_interval == 0
    }

    /// A move is legal when it stays on the board and lands on no body
    /// segment, tails included.
    fn compute_legal_actions(board: &Board, head: Coord) -> LegalActions {
        let layout = board.layout();
        Direction::ALL
            .iter()
            .copied()
            .filter(|&dir| {
                let next = head.step(dir);
                layout.contains(next) && !board.is_occupied(next)
            })
            .collect()
    }

    // === Queries ===

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        self.board.layout()
    }

    /// Identity encoding of the state: the flat board.
    #[must_use]
    pub fn binary(&self) -> &[u8] {
        self.board.cells()
    }

    /// Exact key of the board contents.
    #[must_use]
    pub fn id(&self) -> &StateId {
        &self.id
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.snakes.player_count()
    }

    #[must_use]
    pub fn snakes(&self) -> &PlayerMap<Body> {
        &self.snakes
    }

    #[must_use]
    pub fn snake(&self, player: PlayerId) -> &Body {
        &self.snakes[player]
    }

    #[must_use]
    pub fn head(&self, player: PlayerId) -> Option<Coord> {
        self.snakes[player].front().copied()
    }

    #[must_use]
    pub fn health(&self) -> &PlayerMap<i32> {
        &self.health
    }

    #[must_use]
    pub fn turn_number(&self) -> &PlayerMap<u32> {
        &self.turn_number
    }

    /// The player to move.
    #[must_use]
    pub fn active_player(&self) -> PlayerId {
        self.active_player
    }

    /// `1` when player 0 is to move, `-1` otherwise.
    #[must_use]
    pub fn player_sign(&self) -> i8 {
        if self.active_player.index() == 0 {
            1
        } else {
            -1
        }
    }

    #[must_use]
    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Legal directions for the active player.
    #[must_use]
    pub fn allowed_actions(&self) -> &[Direction] {
        &self.legal_actions
    }

    /// Legal action indices (0 = up, 1 = down, 2 = left, 3 = right).
    pub fn allowed_action_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.legal_actions.iter().map(|d| d.index())
    }

    #[must_use]
    pub fn is_allowed(&self, direction: Direction) -> bool {
        self.legal_actions.contains(&direction)
    }

    /// True when the active player cannot move or has no health left.
    #[must_use]
    pub fn is_end_game(&self) -> bool {
        self.is_end_game
    }

    #[must_use]
    pub fn value(&self) -> Value {
        self.value
    }

    /// The last two components of `value`.
    #[must_use]
    pub fn score(&self) -> (i32, i32) {
        (self.value.1, self.value.2)
    }

    // === Transition ===

    /// Apply action `action` (0 = up, 1 = down, 2 = left, 3 = right).
    ///
    /// The action is validated against the legal set; a rejected action
    /// leaves nothing changed.
    pub fn take_action(&self, action: usize) -> Result<Transition> {
        let direction = Direction::from_index(action).ok_or(GameError::InvalidAction(action))?;
        self.apply(direction)
    }

    /// Move the active player's head one cell in `direction`.
    pub fn apply(&self, direction: Direction) -> Result<Transition> {
        if self.is_end_game {
            return Err(GameError::GameOver);
        }
        if !self.is_allowed(direction) {
            return Err(GameError::IllegalMove {
                direction,
                player: self.active_player,
            });
        }

        let mover = self.active_player;
        let mut board = self.board.clone();
        let mut body = self.snakes[mover].clone();
        let Some(head) = body.front().copied() else {
            return Err(GameError::IllegalMove { direction, player: mover });
        };
        let destination = head.step(direction);

        let has_food = board.take_food(destination);

        if body.len() >= self.rules.growth_grace_length && !has_food {
            if let Some(tail) = body.pop_back() {
                board.clear_body(tail, mover);
            }
        }

        board.set_body(destination, mover);
        body.push_front(destination);

        let mut snakes = self.snakes.clone();
        snakes[mover] = body;

        let mut turn_number = self.turn_number.clone();
        turn_number[mover] = turn_number[mover].checked_add(1).ok_or_else(|| {
            GameError::InvalidSetup(format!("turn counter for {mover} is exhausted"))
        })?;

        let mut health = self.health.clone();
        let remaining = if has_food {
            self.rules.max_health
        } else {
            health[mover] - 1
        };
        health[mover] = remaining;

        trace!(
            "{mover} moved {direction} to {destination} (food: {has_food}, health: {})",
            health[mover]
        );

        let state = Self::assemble(
            board,
            snakes,
            health,
            turn_number,
            mover.next(self.player_count()),
            self.rules,
            self.rng.clone(),
        );
        let terminal = state.is_end_game;
        let value = if terminal { state.value.0 } else { 0 };

        Ok(Transition {
            state,
            value,
            terminal,
        })
    }
}

impl PartialEq for GameState {
    /// States compare by position: board, bodies, counters and the mover.
    fn eq(&self, other: &Self) -> bool {
        self.board == other.board
            && self.snakes == other.snakes
            && self.health == other.health
            && self.turn_number == other.turn_number
            && self.active_player == other.active_player
    }
}

impl Eq for GameState {}
