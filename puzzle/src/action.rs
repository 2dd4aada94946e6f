//! Actions returned from session operations for the host to carry out.
//!
//! The session never owns a clock. When it needs time to pass it returns an
//! [`Action::Schedule`]; the host starts a real timer and calls
//! [`crate::session::PuzzleSession::on_timer`] with the same token when it
//! fires. Everything else is a notification the presentation layer may react
//! to (slide animation, celebration, hint button).

use crate::board::Slide;

/// Identifies one loaded puzzle. Bumped every time a picture is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Generation(pub u64);

impl Generation {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

/// Ties a timer callback to the puzzle and request that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerToken {
    pub generation: Generation,
    pub seq: u64,
}

/// What a timer does when it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Scramble the freshly initialized board.
    Shuffle,
    /// The scramble animation window is over; play may start.
    ScrambleSettled,
    /// Hide the preview overlay.
    PreviewEnd,
    /// Start the celebration after a solve.
    Celebrate,
}

/// A one-shot timer the host must start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerRequest {
    pub kind: TimerKind,
    pub token: TimerToken,
    pub after_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Start a one-shot timer.
    Schedule(TimerRequest),
    /// A new picture was loaded and laid out in solved order.
    BoardReset { generation: Generation },
    /// The board was scrambled; `attempts` permutations were drawn.
    Scrambled { attempts: u32 },
    /// A tile slid into the empty slot.
    TileMoved { slide: Slide, moves: u32 },
    /// The auto-solve hint just became available.
    HintAvailable,
    PreviewStarted,
    PreviewEnded,
    /// The puzzle is complete. `assisted` is true when auto-solve finished it.
    Solved { moves: u32, assisted: bool },
    /// Run the celebration effect for `duration_ms`.
    Celebrate { duration_ms: u32 },
}
