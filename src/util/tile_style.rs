//! Inline style and class helpers for board cells.
//!
//! A cell clips an inner slice element sized to the whole grid (300% x 300%)
//! and shifts it by the tile's [`BackgroundOffset`], so each cell shows its
//! own part of the picture without knowing the picture's pixel size.

#[cfg(test)]
#[path = "tile_style_test.rs"]
mod tile_style_test;

use puzzle::board::ImageRef;
use puzzle::grid::BackgroundOffset;
use puzzle::session::CellView;

use crate::state::game::GameStatus;

/// Quote an image reference for use inside `url("...")`.
#[must_use]
pub fn css_url(image: &ImageRef) -> String {
    let escaped = image.as_str().replace('\\', "%5C").replace('"', "%22");
    format!("url(\"{escaped}\")")
}

/// Inline style for the slice element inside a cell.
#[must_use]
pub fn slice_style(image: &ImageRef, offset: BackgroundOffset) -> String {
    format!("background-image: {}; left: {}%; top: {}%;", css_url(image), offset.x_pct, offset.y_pct)
}

#[must_use]
pub fn cell_class(cell: &CellView, status: &GameStatus) -> String {
    let mut class = String::from("tile");
    if cell.image.is_none() {
        class.push_str(" tile--blank");
    }
    if status.is_scrambling() {
        class.push_str(" tile--scrambling");
    }
    if status.is_solved() && cell.is_empty {
        class.push_str(" tile--revealed");
    }
    class
}
