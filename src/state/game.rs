//! Game session type and the status projection the controls render from.

#[cfg(test)]
#[path = "game_test.rs"]
mod game_test;

use puzzle::session::{Phase, PuzzleSession};
use puzzle::shuffle::Scrambler;

/// The session the page plays: Fisher–Yates shuffles from a seeded RNG.
pub type GameSession = PuzzleSession;

/// Small, comparable summary of a session for reactive controls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameStatus {
    pub has_image: bool,
    pub phase: Phase,
    pub moves: u32,
    pub hint_available: bool,
}

impl GameStatus {
    #[must_use]
    pub fn of<S: Scrambler>(session: &PuzzleSession<S>) -> Self {
        Self {
            has_image: session.image().is_some(),
            phase: session.phase(),
            moves: session.moves(),
            hint_available: session.hint_available(),
        }
    }

    /// The preview button only works on a board that is being played.
    #[must_use]
    pub fn preview_enabled(&self) -> bool {
        self.phase == Phase::Playable
    }

    #[must_use]
    pub fn is_scrambling(&self) -> bool {
        self.phase == Phase::Scrambling
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    #[must_use]
    pub fn moves_label(&self) -> String {
        match self.moves {
            1 => "1 move".to_owned(),
            n => format!("{n} moves"),
        }
    }
}
