//! Utility helpers shared across the page components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (timers, file reading, page
//! config, canvas drawing) from component logic so the pure parts can be
//! tested natively.

pub mod confetti;
pub mod dispatch;
pub mod image_load;
pub mod page_config;
pub mod tile_style;
