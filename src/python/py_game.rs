//! Game bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::{GameConfig, PlayerId};
use crate::game::{render, GameSession, GameState};

use super::to_py_err;

/// Python wrapper for an immutable GameState.
#[pyclass(name = "GameState")]
#[derive(Clone)]
pub struct PyGameState(pub GameState);

#[pymethods]
impl PyGameState {
    /// Legal action indices (0 = up, 1 = down, 2 = left, 3 = right).
    #[getter]
    fn allowed_actions(&self) -> Vec<usize> {
        self.0.allowed_action_indices().collect()
    }

    /// Board contents as a 0/1 string, usable as a dictionary key.
    #[getter]
    fn id(&self) -> String {
        self.0.id().to_string()
    }

    /// Flat board as a numpy uint8 array.
    #[getter]
    fn binary<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<u8>> {
        PyArray1::from_slice_bound(py, self.0.binary())
    }

    #[getter]
    fn is_end_game(&self) -> bool {
        self.0.is_end_game()
    }

    #[getter]
    fn value(&self) -> (i32, i32, i32) {
        self.0.value()
    }

    #[getter]
    fn score(&self) -> (i32, i32) {
        self.0.score()
    }

    /// Index of the player to move.
    #[getter]
    fn player_turn(&self) -> usize {
        self.0.active_player().index()
    }

    #[getter]
    fn health(&self) -> Vec<i32> {
        self.0.health().as_slice().to_vec()
    }

    #[getter]
    fn turn_number(&self) -> Vec<u32> {
        self.0.turn_number().as_slice().to_vec()
    }

    /// Body of `player` as `(x, y)` tuples, head first.
    fn snake(&self, player: u8) -> PyResult<Vec<(i32, i32)>> {
        let player = PlayerId::new(player);
        if player.index() >= self.0.player_count() {
            return Err(pyo3::exceptions::PyIndexError::new_err(format!("{player} does not exist")));
        }
        Ok(self.0.snake(player).iter().map(|c| (c.x, c.y)).collect())
    }

    /// Apply an action, returning `(next_state, value, done)`.
    fn take_action(&self, action: usize) -> PyResult<(PyGameState, i32, bool)> {
        let transition = self.0.take_action(action).map_err(to_py_err)?;
        Ok((PyGameState(transition.state), transition.value, transition.terminal))
    }

    fn render(&self) -> String {
        render(&self.0)
    }

    fn __hash__(&self) -> u64 {
        use std::hash::{Hash, Hasher};
        let mut hasher = rustc_hash::FxHasher::default();
        self.0.id().hash(&mut hasher);
        hasher.finish()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __repr__(&self) -> String {
        format!(
            "GameState(to_move={}, health={:?}, end={})",
            self.0.active_player().index(),
            self.0.health().as_slice(),
            self.0.is_end_game()
        )
    }
}

/// Python wrapper for GameSession.
#[pyclass(name = "Game")]
pub struct PyGame {
    session: GameSession,
}

#[pymethods]
impl PyGame {
    /// Create a new game.
    ///
    /// # Arguments
    /// - grid_shape: (width, height)
    /// - num_players: Number of snakes
    /// - seed: RNG seed for spawns and food
    #[new]
    #[pyo3(signature = (grid_shape = (7, 7), num_players = 2, seed = 42))]
    fn new(grid_shape: (usize, usize), num_players: usize, seed: u64) -> PyResult<Self> {
        let config = GameConfig::new(grid_shape.0, grid_shape.1, num_players);
        let session = GameSession::new(config, seed).map_err(to_py_err)?;
        Ok(Self { session })
    }

    fn reset(&mut self) -> PyGameState {
        PyGameState(self.session.reset().clone())
    }

    /// Apply an action, returning `(next_state, value, done, info)`.
    fn step(&mut self, action: usize) -> PyResult<(PyGameState, i32, bool, Option<PyObject>)> {
        let transition = self.session.step(action).map_err(to_py_err)?;
        Ok((PyGameState(transition.state), transition.value, transition.terminal, None))
    }

    /// Symmetry-augmented `(state, action_values)` pairs (identity only).
    fn identities(&self, state: &PyGameState, action_values: Vec<f32>) -> Vec<(PyGameState, Vec<f32>)> {
        self.session
            .identities(&state.0, &action_values)
            .into_iter()
            .map(|(s, av)| (PyGameState(s), av))
            .collect()
    }

    #[getter]
    fn game_state(&self) -> PyGameState {
        PyGameState(self.session.state().clone())
    }

    #[getter]
    fn current_player(&self) -> i8 {
        self.session.current_player()
    }

    #[getter]
    fn grid_shape(&self) -> (usize, usize) {
        self.session.grid_shape()
    }

    #[getter]
    fn num_players(&self) -> usize {
        self.session.player_count()
    }

    #[getter]
    fn input_shape(&self) -> (usize, usize, usize) {
        self.session.input_shape()
    }

    #[getter]
    fn state_size(&self) -> usize {
        self.session.state_size()
    }

    #[getter]
    fn action_size(&self) -> usize {
        self.session.action_size()
    }

    #[getter]
    fn name(&self) -> &'static str {
        "snek"
    }

    fn __repr__(&self) -> String {
        let (w, h) = self.session.grid_shape();
        format!(
            "Game({w}x{h}, players={}, to_move={})",
            self.session.player_count(),
            self.session.state().active_player().index()
        )
    }
}
