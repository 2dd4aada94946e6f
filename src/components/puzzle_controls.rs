//! Preview button, move counter and the hint button.

use leptos::prelude::*;

use crate::state::game::{GameSession, GameStatus};
use crate::util::dispatch::BrowserHost;

#[component]
pub fn PuzzleControls() -> impl IntoView {
    let host = BrowserHost::from_context();
    let status = Memo::new(move |_| host.session.with(GameStatus::of));

    view! {
        <Show when=move || status.get().has_image>
            <div class="controls">
                <button
                    class="btn btn--preview"
                    disabled=move || !status.get().preview_enabled()
                    on:click=move |_| host.run(GameSession::request_preview)
                >
                    "Preview Puzzle"
                </button>
                <span class="controls__moves">{move || status.get().moves_label()}</span>
                <Show when=move || status.get().hint_available>
                    <button class="btn btn--hint" on:click=move |_| host.run(GameSession::auto_solve)>
                        "Solve it for me"
                    </button>
                </Show>
            </div>
        </Show>
    }
}
