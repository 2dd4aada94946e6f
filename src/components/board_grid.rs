//! The 3x3 board.
//!
//! Cells are keyed by tile id so a slide moves one element instead of
//! re-rendering the grid. A click resolves the tile's current index at click
//! time, since the index a cell was created at goes stale after the first move.

use leptos::prelude::*;
use puzzle::board::TileId;

use crate::state::game::GameStatus;
use crate::util::dispatch::BrowserHost;
use crate::util::tile_style::{cell_class, slice_style};

#[component]
pub fn BoardGrid() -> impl IntoView {
    let host = BrowserHost::from_context();
    let session = host.session;
    let status = Memo::new(move |_| session.with(GameStatus::of));
    let tile_ids = move || session.with(|s| s.cells().into_iter().map(|c| c.id).collect::<Vec<_>>());

    view! {
        <Show when=move || status.get().has_image>
            <div class="board">
                <For each=tile_ids key=|id| *id children=move |id| view! { <TileCell id=id status=status/> }/>
            </div>
        </Show>
    }
}

#[component]
fn TileCell(id: TileId, status: Memo<GameStatus>) -> impl IntoView {
    let host = BrowserHost::from_context();
    let cell = Memo::new(move |_| host.session.with(|s| s.cells().into_iter().find(|c| c.id == id)));
    let class = move || cell.get().map(|c| cell_class(&c, &status.get())).unwrap_or_default();
    let slice = move || cell.get().and_then(|c| c.image.map(|image| slice_style(&image, c.offset)));

    let on_click = move |_| {
        host.run(|s| match s.board().and_then(|b| b.index_of(id)) {
            Some(index) => s.try_move(index),
            None => Vec::new(),
        });
    };

    view! {
        <div class=class on:click=on_click>
            {move || slice().map(|style| view! { <div class="tile__slice" style=style></div> })}
        </div>
    }
}
