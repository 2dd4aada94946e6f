//! Solvability-preserving shuffle.
//!
//! The shuffle keeps drawing permutations until one is both solvable and not
//! already solved. Where the permutations come from is behind the
//! [`Scrambler`] trait so tests can script them; the game uses
//! [`RandomScrambler`], a Fisher–Yates shuffle over a seeded `StdRng`.

#[cfg(test)]
#[path = "shuffle_test.rs"]
mod shuffle_test;

use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::board::{Board, BoardError, Tile};
use crate::consts::MAX_SHUFFLE_ATTEMPTS;

/// Source of tile permutations.
pub trait Scrambler {
    /// Rearrange `tiles` in place. Implementations must only reorder.
    fn permute(&mut self, tiles: &mut [Tile]);
}

/// Uniform Fisher–Yates permutations.
#[derive(Debug, Clone)]
pub struct RandomScrambler {
    rng: StdRng,
}

impl RandomScrambler {
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl Scrambler for RandomScrambler {
    fn permute(&mut self, tiles: &mut [Tile]) {
        tiles.shuffle(&mut self.rng);
    }
}

/// A shuffled board and how many permutations it took to find it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shuffled {
    pub board: Board,
    pub attempts: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShuffleError {
    #[error("no solvable unsolved permutation after {attempts} attempts")]
    Exhausted { attempts: u32 },
    #[error("scrambler broke the board: {0}")]
    Board(#[from] BoardError),
}

/// Shuffle `board` into a solvable, unsolved arrangement.
///
/// Permutations are applied cumulatively to a copy of the tiles; each one is
/// checked and rejected when its inversion count is odd or it happens to be
/// the solved layout.
///
/// # Errors
///
/// Returns [`ShuffleError::Exhausted`] if no acceptable permutation turns up
/// within `MAX_SHUFFLE_ATTEMPTS`, and [`ShuffleError::Board`] if the
/// scrambler produced something other than a permutation.
pub fn shuffle<S: Scrambler + ?Sized>(board: &Board, scrambler: &mut S) -> Result<Shuffled, ShuffleError> {
    let mut tiles = board.clone().into_tiles();
    for attempt in 1..=MAX_SHUFFLE_ATTEMPTS {
        scrambler.permute(&mut tiles);
        let candidate = Board::from_tiles(tiles.clone())?;
        if candidate.is_solvable() && !candidate.is_solved() {
            debug!("shuffle accepted after {attempt} attempt(s)");
            return Ok(Shuffled { board: candidate, attempts: attempt });
        }
        debug!(
            "shuffle attempt {attempt} rejected (inversions={}, solved={})",
            candidate.inversion_count(),
            candidate.is_solved()
        );
    }
    Err(ShuffleError::Exhausted { attempts: MAX_SHUFFLE_ATTEMPTS })
}
