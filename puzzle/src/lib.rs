//! Sliding-tile state machine for the photo puzzle.
//!
//! This crate holds every rule of the game and nothing that touches the
//! browser. The host (the Leptos app in the root crate) feeds it clicks and
//! timer callbacks, and executes the [`action::Action`]s it returns: scheduling
//! timers, starting the celebration, repainting tiles.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`session`] | Phase machine and the testable [`session::PuzzleSession`] |
//! | [`board`] | Tiles, the board permutation, move application, win check |
//! | [`grid`] | Row/column geometry and adjacency |
//! | [`shuffle`] | Solvability-preserving shuffle and the [`shuffle::Scrambler`] seam |
//! | [`action`] | Actions and timer requests returned to the host |
//! | [`config`] | Timing and hint configuration |
//! | [`consts`] | Grid size and default timings |

pub mod action;
pub mod board;
pub mod config;
pub mod consts;
pub mod grid;
pub mod session;
pub mod shuffle;
