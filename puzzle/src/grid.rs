//! Grid geometry: board indices, row/column positions, and adjacency.
//!
//! Board positions are row-major indices in `0..TILE_COUNT`. Everything that
//! needs a row or column goes through [`Position`] so the `index / 3`,
//! `index % 3` arithmetic lives in one place.

#[cfg(test)]
#[path = "grid_test.rs"]
mod grid_test;

use crate::consts::{GRID_SIZE, OFFSET_STEP_PCT, TILE_COUNT};

/// A cell on the board, addressed by row and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Position of a row-major board index, or `None` when the index is off the board.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < TILE_COUNT).then_some(Self { row: index / GRID_SIZE, col: index % GRID_SIZE })
    }

    /// Row-major board index of this position.
    #[must_use]
    pub fn index(self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    /// Manhattan distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

/// Background offset, in percent, that shows one cell's slice of the image.
///
/// The slice for row `r`, column `c` sits at `(-(c * 100)%, -(r * 100)%)`
/// relative to the cell when the image spans the whole grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BackgroundOffset {
    pub x_pct: i32,
    pub y_pct: i32,
}

impl BackgroundOffset {
    /// Offset for the slice whose home is board index `index`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
    pub fn for_index(index: usize) -> Self {
        let row = (index / GRID_SIZE) as i32;
        let col = (index % GRID_SIZE) as i32;
        Self { x_pct: -(col * OFFSET_STEP_PCT), y_pct: -(row * OFFSET_STEP_PCT) }
    }
}

/// True iff `a` and `b` are both on the board and share an edge.
///
/// Diagonal neighbours and a cell compared with itself are not adjacent.
#[must_use]
pub fn is_adjacent(a: usize, b: usize) -> bool {
    match (Position::from_index(a), Position::from_index(b)) {
        (Some(pa), Some(pb)) => pa.distance(pb) == 1,
        _ => false,
    }
}

/// Board indices that share an edge with `index`, in ascending order.
#[must_use]
pub fn neighbors(index: usize) -> Vec<usize> {
    (0..TILE_COUNT).filter(|&other| is_adjacent(index, other)).collect()
}
