//! Neural network type bindings for Python.

use numpy::PyArray1;
use pyo3::prelude::*;

use crate::core::PlayerId;
use crate::nn::{BoardEncoder, EncodedState, StateEncoder};

use super::py_game::PyGameState;
use super::to_py_err;

/// Python wrapper for EncodedState.
#[pyclass(name = "EncodedState")]
#[derive(Clone, Debug)]
pub struct PyEncodedState(pub EncodedState);

#[pymethods]
impl PyEncodedState {
    /// Get the tensor data as a list.
    #[getter]
    fn tensor(&self) -> Vec<f32> {
        self.0.tensor.clone()
    }

    /// Get the tensor shape.
    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.0.shape.clone()
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    /// Convert tensor to numpy array (flat).
    fn to_numpy<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f32>> {
        PyArray1::from_slice_bound(py, &self.0.tensor)
    }

    fn __repr__(&self) -> String {
        format!("EncodedState(shape={:?}, len={})", self.0.shape, self.0.len())
    }
}

/// Board-layer encoder.
#[pyclass(name = "BoardEncoder")]
#[derive(Clone)]
pub struct PyBoardEncoder(BoardEncoder);

#[pymethods]
impl PyBoardEncoder {
    #[new]
    #[pyo3(signature = (width = 7, height = 7, num_players = 2, relative_layers = false))]
    fn new(width: usize, height: usize, num_players: usize, relative_layers: bool) -> Self {
        let encoder = BoardEncoder::new(width, height, num_players);
        Self(if relative_layers {
            encoder.with_relative_layers()
        } else {
            encoder
        })
    }

    /// Encode a state from `perspective`'s point of view.
    fn encode(&self, state: &PyGameState, perspective: u8) -> PyResult<PyEncodedState> {
        self.0
            .encode(&state.0, PlayerId::new(perspective))
            .map(PyEncodedState)
            .map_err(to_py_err)
    }

    fn output_shape(&self) -> Vec<usize> {
        self.0.output_shape()
    }

    #[getter]
    fn action_space_size(&self) -> usize {
        self.0.action_space_size()
    }
}
