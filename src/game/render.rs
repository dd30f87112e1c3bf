//! Plain-text board rendering for logs and debugging.
//!
//! ```text
//! to move: Player 0  health: [10, 9]  turns: [0, 1]
//! -------
//! A....*.
//! a......
//! ....B..
//! ```
//!
//! Heads are upper-case letters, bodies lower-case, `*` is food and `.` an
//! empty cell. A body drawn over food hides it.

use std::fmt::Write as _;

use log::info;

use crate::core::{Coord, PlayerId};

use super::state::GameState;

fn glyph(state: &GameState, coord: Coord) -> char {
    let board = state.board();
    match board.occupant(coord) {
        Some(player) => {
            let head = head_glyph(player);
            if state.head(player) == Some(coord) {
                head
            } else {
                head.to_ascii_lowercase()
            }
        }
        None if board.has_food(coord) => '*',
        None => '.',
    }
}

/// Render the state as a multi-line string.
#[must_use]
pub fn render(state: &GameState) -> String {
    let layout = state.layout();
    let mut out = String::with_capacity((layout.width + 1) * (layout.height + 2) + 64);

    let _ = writeln!(
        out,
        "to move: {}  health: {:?}  turns: {:?}",
        state.active_player(),
        state.health().as_slice(),
        state.turn_number().as_slice()
    );
    out.push_str(&"-".repeat(layout.width));
    out.push('\n');

    for y in 0..layout.height as i32 {
        for x in 0..layout.width as i32 {
            out.push(glyph(state, Coord::new(x, y)));
        }
        out.push('\n');
    }
    out
}

/// Emit the rendered board at `info` level, one record per line.
pub fn log_render(state: &GameState) {
    for line in render(state).lines() {
        info!("{line}");
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render(self))
    }
}

/// Letter used for `player`'s head in rendered boards.
#[must_use]
pub fn head_glyph(player: PlayerId) -> char {
    if player.index() < 26 {
        char::from(b'A' + player.0)
    } else {
        '#'
    }
}
