//! Tiles and the board permutation.
//!
//! A [`Board`] is always a permutation of tile ids `1..=TILE_COUNT` with
//! exactly one empty tile. The tile vector is private and every constructor
//! either builds the solved layout or validates its input, so the invariant
//! holds for every `Board` value in the program.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::fmt;
use std::sync::Arc;

use crate::consts::{EMPTY_TILE_ID, TILE_COUNT};
use crate::grid::{BackgroundOffset, is_adjacent};

// =============================================================================
// TYPES
// =============================================================================

/// Shared reference to the puzzle picture: a data URL or an asset path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(Arc<str>);

impl ImageRef {
    #[must_use]
    pub fn new(url: impl Into<Arc<str>>) -> Self {
        Self(url.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ImageRef {
    fn from(url: &str) -> Self {
        Self::new(url)
    }
}

impl From<String> for ImageRef {
    fn from(url: String) -> Self {
        Self::new(url)
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identity of a tile. Tile `n` belongs at board index `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TileId(u8);

impl TileId {
    /// The tile that plays the empty slot.
    pub const EMPTY: Self = Self(EMPTY_TILE_ID);

    /// Wrap a raw id, rejecting anything outside `1..=TILE_COUNT`.
    #[must_use]
    pub fn new(raw: u8) -> Option<Self> {
        (1..=EMPTY_TILE_ID).contains(&raw).then_some(Self(raw))
    }

    #[must_use]
    pub fn get(self) -> u8 {
        self.0
    }

    /// Board index where this tile sits when the puzzle is solved.
    #[must_use]
    pub fn home_index(self) -> usize {
        usize::from(self.0) - 1
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self == Self::EMPTY
    }
}

impl fmt::Display for TileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One tile: its identity, the picture it shows, and which slice of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tile {
    pub id: TileId,
    /// `None` for the empty tile until the puzzle is solved.
    pub image: Option<ImageRef>,
    /// Offset of this tile's slice, fixed by its home position.
    pub offset: BackgroundOffset,
}

impl Tile {
    fn home(id: TileId, image: &ImageRef) -> Self {
        Self {
            id,
            image: (!id.is_empty()).then(|| image.clone()),
            offset: BackgroundOffset::for_index(id.home_index()),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
    }
}

/// A successful slide: the tile at `from` moved into the empty slot at `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub from: usize,
    pub to: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("expected {expected} tiles, got {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("tile id {0} is outside 1..={TILE_COUNT}")]
    OutOfRange(u8),
    #[error("tile id {0} appears more than once")]
    Duplicate(u8),
}

/// The 3×3 arrangement of tiles, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: Vec<Tile>,
    empty: usize,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

impl Board {
    /// Solved layout for a freshly loaded picture. The empty tile shows nothing.
    #[must_use]
    pub fn initialize(image: &ImageRef) -> Self {
        let tiles = (1..=EMPTY_TILE_ID)
            .filter_map(TileId::new)
            .map(|id| Tile::home(id, image))
            .collect();
        Self { tiles, empty: TILE_COUNT - 1 }
    }

    /// Solved layout with the empty slot filled in, i.e. the finished picture.
    #[must_use]
    pub fn solved(image: &ImageRef) -> Self {
        let mut board = Self::initialize(image);
        board.reveal_empty(image);
        board
    }

    /// Build a board from raw ids in row-major order.
    ///
    /// # Errors
    ///
    /// Returns an error unless `ids` is a permutation of `1..=TILE_COUNT`.
    pub fn from_ids(ids: &[u8], image: &ImageRef) -> Result<Self, BoardError> {
        if ids.len() != TILE_COUNT {
            return Err(BoardError::WrongLength { expected: TILE_COUNT, actual: ids.len() });
        }
        let tiles = ids
            .iter()
            .map(|&raw| TileId::new(raw).map(|id| Tile::home(id, image)).ok_or(BoardError::OutOfRange(raw)))
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_tiles(tiles)
    }

    /// Validate an arbitrary tile arrangement.
    ///
    /// # Errors
    ///
    /// Returns an error when the ids are not a permutation of `1..=TILE_COUNT`.
    pub fn from_tiles(tiles: Vec<Tile>) -> Result<Self, BoardError> {
        if tiles.len() != TILE_COUNT {
            return Err(BoardError::WrongLength { expected: TILE_COUNT, actual: tiles.len() });
        }
        let mut seen = [false; TILE_COUNT];
        for tile in &tiles {
            let slot = &mut seen[tile.id.home_index()];
            if *slot {
                return Err(BoardError::Duplicate(tile.id.get()));
            }
            *slot = true;
        }
        // A full-length vector with no duplicates contains the empty id.
        let empty = tiles
            .iter()
            .position(Tile::is_empty)
            .ok_or(BoardError::OutOfRange(EMPTY_TILE_ID))?;
        Ok(Self { tiles, empty })
    }
}

// =============================================================================
// QUERIES
// =============================================================================

impl Board {
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Raw ids in row-major order.
    #[must_use]
    pub fn ids(&self) -> Vec<u8> {
        self.tiles.iter().map(|t| t.id.get()).collect()
    }

    /// Board index currently holding the empty tile.
    #[must_use]
    pub fn empty_index(&self) -> usize {
        self.empty
    }

    /// Board index currently holding `id`.
    #[must_use]
    pub fn index_of(&self, id: TileId) -> Option<usize> {
        self.tiles.iter().position(|t| t.id == id)
    }

    /// True iff every tile sits at its home index.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, tile)| tile.id.home_index() == index)
    }

    /// Pairs of non-empty tiles whose relative order differs from the solved order.
    #[must_use]
    pub fn inversion_count(&self) -> usize {
        let ids = self
            .tiles
            .iter()
            .filter(|t| !t.is_empty())
            .map(|t| t.id)
            .collect::<Vec<_>>();
        ids.iter()
            .enumerate()
            .map(|(i, a)| ids[i + 1..].iter().filter(|b| a > b).count())
            .sum()
    }

    /// Whether the solved layout is reachable by legal slides.
    ///
    /// On an odd-width grid this depends only on inversion parity.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        self.inversion_count() % 2 == 0
    }
}

// =============================================================================
// MUTATION
// =============================================================================

impl Board {
    /// Slide the tile at `target` into the empty slot if they share an edge.
    ///
    /// Anything else (the empty tile itself, a diagonal, an off-board index)
    /// leaves the board untouched and returns `None`.
    pub fn try_move(&mut self, target: usize) -> Option<Slide> {
        if !is_adjacent(target, self.empty) {
            return None;
        }
        let slide = Slide { from: target, to: self.empty };
        self.tiles.swap(target, self.empty);
        self.empty = target;
        Some(slide)
    }

    /// Give the empty tile the full picture so the final frame is complete.
    pub fn reveal_empty(&mut self, image: &ImageRef) {
        self.tiles[self.empty].image = Some(image.clone());
    }

    pub(crate) fn into_tiles(self) -> Vec<Tile> {
        self.tiles
    }
}
