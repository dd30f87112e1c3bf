//! Neural network input encoding.
//!
//! - **Traits**: `StateEncoder`
//! - **Encoding**: `BoardEncoder` (board layers as a `[layers, height, width]` tensor)
//!
//! ```rust
//! use snek_engine::core::{GameConfig, PlayerId};
//! use snek_engine::game::GameSession;
//! use snek_engine::nn::{BoardEncoder, StateEncoder};
//!
//! let session = GameSession::new(GameConfig::new(7, 7, 2), 42).unwrap();
//! let encoder = BoardEncoder::new(7, 7, 2);
//!
//! let encoded = encoder.encode(session.state(), PlayerId::new(0)).unwrap();
//! assert_eq!(encoded.shape, vec![3, 7, 7]);
//! ```

pub mod encoder;
pub mod traits;

pub use encoder::{BoardEncoder, StateEncoder};
pub use traits::EncodedState;
