//! Shared constants for the puzzle crate.

// ── Grid ────────────────────────────────────────────────────────

/// Tiles per row and per column.
pub const GRID_SIZE: usize = 3;

/// Total tiles on the board, the empty slot included.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Id of the tile that plays the empty slot. It is always the last home position.
#[allow(clippy::cast_possible_truncation)]
pub const EMPTY_TILE_ID: u8 = TILE_COUNT as u8;

/// Percentage step between neighbouring background offsets.
pub const OFFSET_STEP_PCT: i32 = 100;

// ── Shuffle ─────────────────────────────────────────────────────

/// Upper bound on permutations tried before a shuffle gives up.
pub const MAX_SHUFFLE_ATTEMPTS: u32 = 1000;

// ── Timing defaults (milliseconds) ──────────────────────────────

/// Delay between showing the assembled picture and scrambling it.
pub const DEFAULT_SHUFFLE_DELAY_MS: u32 = 2000;

/// Length of the scramble animation window.
pub const DEFAULT_SCRAMBLE_MS: u32 = 1000;

/// How long a preview shows the assembled picture.
pub const DEFAULT_PREVIEW_MS: u32 = 500;

/// Pause between the winning move and the celebration.
pub const DEFAULT_CELEBRATION_DELAY_MS: u32 = 500;

/// Length of the celebration effect.
pub const DEFAULT_CELEBRATION_MS: u32 = 5000;

// ── Hint ────────────────────────────────────────────────────────

/// Move attempts after which the auto-solve hint is offered.
pub const DEFAULT_HINT_AFTER_ATTEMPTS: u32 = 10;

/// Bundled image used by the "Use Default Image" action.
pub const DEFAULT_IMAGE_PATH: &str = "/assets/default.svg";
