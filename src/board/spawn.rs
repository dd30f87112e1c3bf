//! Random placement of snakes and food.

use crate::core::{Coord, GameError, GameRng, Result};

use super::layout::{Board, BoardLayout};

/// Draw `n` distinct coordinates uniformly from a `width` × `height` grid.
///
/// Sampling is without replacement, so the call always terminates; asking
/// for more cells than the grid holds is `GameError::CapacityExceeded`.
///
/// ```
/// use snek_engine::board::random_distinct_positions;
/// use snek_engine::core::{GameError, GameRng};
///
/// let mut rng = GameRng::new(1);
/// assert_eq!(random_distinct_positions(9, 3, 3, &mut rng).unwrap().len(), 9);
/// assert!(matches!(
///     random_distinct_positions(10, 3, 3, &mut rng),
///     Err(GameError::CapacityExceeded { requested: 10, available: 9 })
/// ));
/// ```
pub fn random_distinct_positions(
    n: usize,
    width: usize,
    height: usize,
    rng: &mut GameRng,
) -> Result<Vec<Coord>> {
    let available = width * height;
    if n > available {
        return Err(GameError::CapacityExceeded {
            requested: n,
            available,
        });
    }

    let layout = BoardLayout::new(width, height, 0);
    Ok(rng
        .sample_indices(available, n)
        .into_iter()
        .map(|cell| layout.coord_of(cell))
        .collect())
}

/// Pick a uniformly random cell that has no food.
///
/// Bodies are not considered: food may appear under a snake. Returns `None`
/// when every cell already holds food.
pub fn random_food_cell(board: &Board, rng: &mut GameRng) -> Option<Coord> {
    let free: Vec<Coord> = board
        .layout()
        .coords()
        .filter(|&c| !board.has_food(c))
        .collect();
    rng.choose(&free).copied()
}
