//! Python bindings for the snek engine.
//!
//! # Quick Start
//!
//! ```python
//! import snek_engine as snek
//!
//! game = snek.Game(grid_shape=(7, 7), num_players=2, seed=42)
//! state = game.reset()
//!
//! while not state.is_end_game:
//!     state, value, done, _ = game.step(state.allowed_actions[0])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::GameError;

mod py_game;
mod py_nn;

pub use py_game::*;
pub use py_nn::*;

pub(crate) fn to_py_err(err: GameError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

/// snek_engine: a multi-player snake environment for self-play training.
#[pymodule]
fn snek_engine(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyGame>()?;
    m.add_class::<PyGameState>()?;
    m.add_class::<PyEncodedState>()?;
    m.add_class::<PyBoardEncoder>()?;
    m.add("MAX_HEALTH", crate::core::MAX_HEALTH)?;

    Ok(())
}
