//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The puzzle session itself is the single source of truth for the game; the
//! modules here hold what the page needs on top of it (derived status for the
//! controls, load errors, celebration triggers).

pub mod game;
pub mod ui;
