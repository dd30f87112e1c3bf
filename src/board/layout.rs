//! Flat multi-layer occupancy grid.
//!
//! The board is one `u8` per (cell, layer): layers `0..player_count` hold
//! each player's body, the final layer holds food. Cells are stored
//! row-major inside a layer and layers are stacked:
//!
//! ```text
//! index(x, y, layer) = x + y * width + width * height * layer
//! ```

use serde::{Deserialize, Serialize};

use crate::core::{Coord, PlayerId, SHARED_LAYERS};

/// Flat offset of `coord` in `layer`.
///
/// Pure arithmetic: the coordinate must already be on the grid and the
/// layer must exist.
///
/// ```
/// use snek_engine::board::index;
/// use snek_engine::core::Coord;
///
/// assert_eq!(index(Coord::new(0, 0), 7, 7, 0), 0);
/// assert_eq!(index(Coord::new(1, 2), 7, 7, 1), 1 + 14 + 49);
/// ```
#[inline]
#[must_use]
pub fn index(coord: Coord, width: usize, height: usize, layer: usize) -> usize {
    debug_assert!(coord.in_bounds(width, height), "{coord} is off a {width}x{height} grid");
    coord.x as usize + coord.y as usize * width + width * height * layer
}

/// Shape of a board: grid size and the layer assignment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardLayout {
    pub width: usize,
    pub height: usize,
    pub player_count: usize,
}

impl BoardLayout {
    #[must_use]
    pub const fn new(width: usize, height: usize, player_count: usize) -> Self {
        Self {
            width,
            height,
            player_count,
        }
    }

    /// Cells per layer.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.width * self.height
    }

    /// Player layers plus the food layer.
    #[must_use]
    pub const fn layers(&self) -> usize {
        self.player_count + SHARED_LAYERS
    }

    /// Index of the food layer (the last one).
    #[must_use]
    pub const fn food_layer(&self) -> usize {
        self.player_count
    }

    /// Total length of the flat board.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cell_count() * self.layers()
    }

    /// Always false: a layout has at least one cell and one layer once validated.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.in_bounds(self.width, self.height)
    }

    #[inline]
    #[must_use]
    pub fn index(&self, coord: Coord, layer: usize) -> usize {
        index(coord, self.width, self.height, layer)
    }

    /// The coordinate of cell `cell` (0-based, row-major) within a layer.
    #[must_use]
    pub fn coord_of(&self, cell: usize) -> Coord {
        Coord::new((cell % self.width) as i32, (cell / self.width) as i32)
    }

    /// Every coordinate on the grid, row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.cell_count()).map(move |cell| self.coord_of(cell))
    }
}

/// Multi-layer occupancy grid owned by one game state.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    layout: BoardLayout,
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new(layout: BoardLayout) -> Self {
        Self {
            layout,
            cells: vec![0; layout.len()],
        }
    }

    #[must_use]
    pub fn layout(&self) -> BoardLayout {
        self.layout
    }

    /// Raw flat cells (the identity encoding of the board).
    #[must_use]
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    #[must_use]
    pub fn get(&self, coord: Coord, layer: usize) -> bool {
        self.cells[self.layout.index(coord, layer)] == 1
    }

    pub fn set(&mut self, coord: Coord, layer: usize) {
        let i = self.layout.index(coord, layer);
        self.cells[i] = 1;
    }

    pub fn clear(&mut self, coord: Coord, layer: usize) {
        let i = self.layout.index(coord, layer);
        self.cells[i] = 0;
    }

    /// Mark a body segment of `player`.
    pub fn set_body(&mut self, coord: Coord, player: PlayerId) {
        self.set(coord, player.index());
    }

    /// Clear a body segment of `player`.
    pub fn clear_body(&mut self, coord: Coord, player: PlayerId) {
        self.clear(coord, player.index());
    }

    #[must_use]
    pub fn has_food(&self, coord: Coord) -> bool {
        self.get(coord, self.layout.food_layer())
    }

    pub fn place_food(&mut self, coord: Coord) {
        self.set(coord, self.layout.food_layer());
    }

    /// Remove food at `coord`, returning whether there was any.
    pub fn take_food(&mut self, coord: Coord) -> bool {
        let had = self.has_food(coord);
        self.clear(coord, self.layout.food_layer());
        had
    }

    /// The player whose body covers `coord`, if any.
    #[must_use]
    pub fn occupant(&self, coord: Coord) -> Option<PlayerId> {
        PlayerId::all(self.layout.player_count).find(|p| self.get(coord, p.index()))
    }

    /// True if any player layer is set at `coord`.
    #[must_use]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.occupant(coord).is_some()
    }

    /// Coordinates currently holding food, row by row.
    pub fn food_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        self.layout.coords().filter(move |&c| self.has_food(c))
    }

    #[must_use]
    pub fn food_count(&self) -> usize {
        let start = self.layout.cell_count() * self.layout.food_layer();
        self.cells[start..].iter().filter(|&&v| v == 1).count()
    }
}
