//! UI components for the puzzle page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read the shared session and UI signals from context and feed
//! user input back through [`crate::util::dispatch::BrowserHost`].

pub mod board_grid;
pub mod confetti_layer;
pub mod image_picker;
pub mod puzzle_controls;
