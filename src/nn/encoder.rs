//! State encoding for neural network input.
//!
//! Transforms a `GameState` into a `[layers, height, width]` tensor.

use crate::core::{Direction, GameError, PlayerId, Result};
use crate::game::GameState;
use crate::nn::traits::EncodedState;

/// Encodes game state into tensors for neural network input.
pub trait StateEncoder: Send + Sync {
    /// Encode the game state from a player's perspective.
    ///
    /// Fails with `ShapeMismatch` when the state's board does not have the
    /// shape this encoder was built for.
    fn encode(&self, state: &GameState, perspective: PlayerId) -> Result<EncodedState>;

    /// Get the shape of encoded states.
    fn output_shape(&self) -> Vec<usize>;

    /// Get the total number of possible actions.
    ///
    /// This defines the size of the policy output vector.
    fn action_space_size(&self) -> usize;

    /// Get the number of players this encoder supports.
    fn player_count(&self) -> usize;
}

/// Board-layer encoder.
///
/// By default the tensor is the board itself (player layers in id order,
/// then food). With `relative_layers` the player layers are rotated so the
/// perspective player comes first, which lets one network play every seat.
#[derive(Clone, Debug)]
pub struct BoardEncoder {
    width: usize,
    height: usize,
    player_count: usize,
    relative_layers: bool,
}

impl BoardEncoder {
    pub fn new(width: usize, height: usize, player_count: usize) -> Self {
        Self {
            width,
            height,
            player_count,
            relative_layers: false,
        }
    }

    /// Rotate player layers so the perspective player is layer 0.
    #[must_use]
    pub fn with_relative_layers(mut self) -> Self {
        self.relative_layers = true;
        self
    }

    fn cells(&self) -> usize {
        self.width * self.height
    }
}

impl StateEncoder for BoardEncoder {
    fn encode(&self, state: &GameState, perspective: PlayerId) -> Result<EncodedState> {
        let layout = state.layout();
        let actual = vec![layout.layers(), layout.height, layout.width];
        let expected = self.output_shape();
        if actual != expected {
            return Err(GameError::ShapeMismatch { expected, actual });
        }

        let cells = self.cells();
        let binary = state.binary();

        let mut tensor = vec![0.0f32; binary.len()];
        for layer in 0..=self.player_count {
            let source = if self.relative_layers && layer < self.player_count {
                (layer + perspective.index()) % self.player_count
            } else {
                layer
            };
            let src = &binary[source * cells..(source + 1) * cells];
            let dst = &mut tensor[layer * cells..(layer + 1) * cells];
            for (d, &s) in dst.iter_mut().zip(src) {
                *d = f32::from(s);
            }
        }

        Ok(EncodedState::new(tensor, expected))
    }

    fn output_shape(&self) -> Vec<usize> {
        vec![self.player_count + 1, self.height, self.width]
    }

    fn action_space_size(&self) -> usize {
        Direction::COUNT
    }

    fn player_count(&self) -> usize {
        self.player_count
    }
}
