//! # photo-puzzle
//!
//! Leptos + WASM front end for the anniversary photo puzzle.
//!
//! The game rules live in the `puzzle` crate; this crate renders its cells,
//! turns clicks and file picks into session calls, runs the timers the
//! session asks for, and plays the confetti when the picture comes together.
//!
//! Browser-only code is gated behind the `csr` feature so the state and
//! utility modules build and test natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// Install the panic hook and console logger, then mount the app on `<body>`.
#[cfg(feature = "csr")]
pub fn mount() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("console logger unavailable: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
