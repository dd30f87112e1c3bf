//! Board encoding: the flat multi-layer grid and random placement.
//!
//! - `layout`: index arithmetic, `BoardLayout`, `Board`
//! - `spawn`: distinct-position sampling for snakes and food

pub mod layout;
pub mod spawn;

pub use layout::{index, Board, BoardLayout};
pub use spawn::{random_distinct_positions, random_food_cell};
