//! The puzzle state machine.
//!
//! DESIGN
//! ======
//! [`PuzzleSession`] owns the board, the counters, and the phase. Each public
//! operation is a synchronous transition that returns the [`Action`]s the host
//! must carry out. Time never passes inside the session: delayed transitions
//! are requested with [`Action::Schedule`] and completed by [`PuzzleSession::on_timer`].
//!
//! ```text
//! Uninitialized ─load─▶ Initialized ─Shuffle─▶ Scrambling ─ScrambleSettled─▶ Playable ─win─▶ Solved
//!                                                                 ▲   │
//!                                                      PreviewEnd │   │ preview
//!                                                                 └ Previewing
//! ```
//!
//! Loading a picture is allowed from any phase and starts a new generation.
//! Timers carry the generation that scheduled them, so a callback left over
//! from an earlier picture is ignored rather than scrambling or unlocking the
//! new one.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use log::{debug, error, info};

use crate::action::{Action, Generation, TimerKind, TimerRequest, TimerToken};
use crate::board::{Board, ImageRef, TileId};
use crate::config::PuzzleConfig;
use crate::consts::TILE_COUNT;
use crate::grid::BackgroundOffset;
use crate::shuffle::{RandomScrambler, Scrambler, Shuffled, shuffle};

/// Where the session is in the game lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No picture loaded yet.
    #[default]
    Uninitialized,
    /// Picture shown in solved order, waiting for the shuffle timer.
    Initialized,
    /// Board scrambled; the scramble animation is playing.
    Scrambling,
    /// Accepting moves.
    Playable,
    /// The assembled picture is shown over the board.
    Previewing,
    /// Complete. Terminal until another picture is loaded.
    Solved,
}

/// Everything the presentation layer needs to paint one board cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellView {
    /// Board index of the cell.
    pub index: usize,
    /// Tile occupying the cell.
    pub id: TileId,
    /// Picture to paint, `None` for a blank cell.
    pub image: Option<ImageRef>,
    /// Slice of the picture to paint.
    pub offset: BackgroundOffset,
    /// Whether the occupying tile is the empty tile.
    pub is_empty: bool,
}

/// One player's puzzle: board, counters, phase, and pending-timer bookkeeping.
#[derive(Debug, Clone)]
pub struct PuzzleSession<S = RandomScrambler> {
    config: PuzzleConfig,
    scrambler: S,
    phase: Phase,
    generation: Generation,
    next_seq: u64,
    preview_seq: Option<u64>,
    image: Option<ImageRef>,
    board: Option<Board>,
    moves: u32,
    attempts: u32,
}

impl PuzzleSession<RandomScrambler> {
    /// Session shuffling with a Fisher–Yates scrambler seeded by `seed`.
    #[must_use]
    pub fn new(config: PuzzleConfig, seed: u64) -> Self {
        Self::with_scrambler(config, RandomScrambler::seeded(seed))
    }
}

impl<S: Scrambler> PuzzleSession<S> {
    #[must_use]
    pub fn with_scrambler(config: PuzzleConfig, scrambler: S) -> Self {
        Self {
            config,
            scrambler,
            phase: Phase::Uninitialized,
            generation: Generation::default(),
            next_seq: 0,
            preview_seq: None,
            image: None,
            board: None,
            moves: 0,
            attempts: 0,
        }
    }

    // --- Inputs ---

    /// Lay out a new picture in solved order and schedule its shuffle.
    ///
    /// Discards any previous board. Timers still pending for the previous
    /// picture become stale.
    pub fn load_image(&mut self, image: ImageRef) -> Vec<Action> {
        self.generation = self.generation.next();
        self.board = Some(Board::initialize(&image));
        self.image = Some(image);
        self.phase = Phase::Initialized;
        self.preview_seq = None;
        self.moves = 0;
        self.attempts = 0;
        info!("puzzle generation {} loaded", self.generation.0);

        let shuffle_timer = self.timer(TimerKind::Shuffle, self.config.shuffle_delay_ms);
        vec![Action::BoardReset { generation: self.generation }, Action::Schedule(shuffle_timer)]
    }

    /// Complete a transition previously requested with [`Action::Schedule`].
    pub fn on_timer(&mut self, token: TimerToken, kind: TimerKind) -> Vec<Action> {
        if token.generation != self.generation {
            debug!(
                "ignoring stale {kind:?} timer from generation {} (current {})",
                token.generation.0, self.generation.0
            );
            return Vec::new();
        }
        match kind {
            TimerKind::Shuffle => self.scramble(),
            TimerKind::ScrambleSettled => {
                if self.phase == Phase::Scrambling {
                    self.phase = Phase::Playable;
                    debug!("scramble settled; board playable");
                }
                Vec::new()
            }
            TimerKind::PreviewEnd => self.end_preview(token.seq),
            TimerKind::Celebrate => {
                if self.phase == Phase::Solved {
                    vec![Action::Celebrate { duration_ms: self.config.celebration_ms }]
                } else {
                    Vec::new()
                }
            }
        }
    }

    /// Handle a click on board index `index`.
    ///
    /// Only a playable board reacts. Every on-board click counts as an
    /// attempt toward the hint threshold; only an actual slide counts as a move.
    pub fn try_move(&mut self, index: usize) -> Vec<Action> {
        if self.phase != Phase::Playable || index >= TILE_COUNT {
            debug!("click on {index} ignored in {:?}", self.phase);
            return Vec::new();
        }
        let Some(board) = self.board.as_mut() else {
            return Vec::new();
        };
        let slide = board.try_move(index);
        let solved = board.is_solved();
        self.attempts = self.attempts.saturating_add(1);

        let mut actions = Vec::new();
        if let Some(slide) = slide {
            self.moves = self.moves.saturating_add(1);
            actions.push(Action::TileMoved { slide, moves: self.moves });
            if solved {
                actions.extend(self.complete(false));
                return actions;
            }
        }
        if self.attempts == self.config.hint_after_attempts {
            info!("hint available after {} attempts", self.attempts);
            actions.push(Action::HintAvailable);
        }
        actions
    }

    /// Briefly show the assembled picture. Only a playable board can preview.
    pub fn request_preview(&mut self) -> Vec<Action> {
        if self.phase != Phase::Playable {
            debug!("preview ignored in {:?}", self.phase);
            return Vec::new();
        }
        let end = self.timer(TimerKind::PreviewEnd, self.config.preview_ms);
        self.preview_seq = Some(end.token.seq);
        self.phase = Phase::Previewing;
        vec![Action::PreviewStarted, Action::Schedule(end)]
    }

    /// Jump straight to the solved picture once the hint has been offered.
    pub fn auto_solve(&mut self) -> Vec<Action> {
        if self.phase != Phase::Playable || !self.hint_available() {
            debug!("auto-solve ignored in {:?} after {} attempts", self.phase, self.attempts);
            return Vec::new();
        }
        let Some(image) = self.image.as_ref() else {
            return Vec::new();
        };
        self.board = Some(Board::solved(image));
        self.complete(true)
    }

    // --- Queries ---

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn board(&self) -> Option<&Board> {
        self.board.as_ref()
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageRef> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// Accepted slides since the picture was loaded.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// On-board clicks while playable, accepted or not.
    #[must_use]
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.phase == Phase::Solved
    }

    /// Whether auto-solve may be offered right now.
    #[must_use]
    pub fn hint_available(&self) -> bool {
        matches!(self.phase, Phase::Playable | Phase::Previewing) && self.attempts >= self.config.hint_after_attempts
    }

    /// Paint data for every cell, in board order. Empty before the first load.
    ///
    /// While previewing, every cell shows the slice that belongs at its own
    /// position, which assembles the full picture regardless of the tiles.
    #[must_use]
    pub fn cells(&self) -> Vec<CellView> {
        let Some(board) = self.board.as_ref() else {
            return Vec::new();
        };
        let previewing = self.phase == Phase::Previewing;
        board
            .tiles()
            .iter()
            .enumerate()
            .map(|(index, tile)| CellView {
                index,
                id: tile.id,
                image: if previewing { self.image.clone() } else { tile.image.clone() },
                offset: if previewing { BackgroundOffset::for_index(index) } else { tile.offset },
                is_empty: tile.is_empty(),
            })
            .collect()
    }

    // --- Internals ---

    fn timer(&mut self, kind: TimerKind, after_ms: u32) -> TimerRequest {
        let seq = self.next_seq;
        self.next_seq = self.next_seq.wrapping_add(1);
        TimerRequest { kind, token: TimerToken { generation: self.generation, seq }, after_ms }
    }

    fn scramble(&mut self) -> Vec<Action> {
        if self.phase != Phase::Initialized {
            return Vec::new();
        }
        let Some(board) = self.board.as_ref() else {
            return Vec::new();
        };
        match shuffle(board, &mut self.scrambler) {
            Ok(Shuffled { board, attempts }) => {
                self.board = Some(board);
                self.phase = Phase::Scrambling;
                let settle = self.timer(TimerKind::ScrambleSettled, self.config.scramble_ms);
                vec![Action::Scrambled { attempts }, Action::Schedule(settle)]
            }
            Err(e) => {
                error!("shuffle failed; board left in solved order: {e}");
                Vec::new()
            }
        }
    }

    fn end_preview(&mut self, seq: u64) -> Vec<Action> {
        if self.phase != Phase::Previewing || self.preview_seq != Some(seq) {
            return Vec::new();
        }
        self.phase = Phase::Playable;
        self.preview_seq = None;
        vec![Action::PreviewEnded]
    }

    fn complete(&mut self, assisted: bool) -> Vec<Action> {
        if let (Some(board), Some(image)) = (self.board.as_mut(), self.image.as_ref()) {
            board.reveal_empty(image);
        }
        self.phase = Phase::Solved;
        self.preview_seq = None;
        info!("puzzle solved in {} moves (assisted: {assisted})", self.moves);

        let celebrate = self.timer(TimerKind::Celebrate, self.config.celebration_delay_ms);
        vec![Action::Solved { moves: self.moves, assisted }, Action::Schedule(celebrate)]
    }
}
