//! Root application component and shared context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::{
    board_grid::BoardGrid, confetti_layer::ConfettiLayer, image_picker::ImagePicker,
    puzzle_controls::PuzzleControls,
};
use crate::state::{game::GameSession, ui::UiState};
use crate::util::page_config::load_page_config;

/// Root application component.
///
/// Builds the session from the page config and provides the session and UI
/// signals to every component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(GameSession::new(load_page_config(), session_seed()));
    let ui = RwSignal::new(UiState::default());

    provide_context(session);
    provide_context(ui);

    let solved = move || session.with(GameSession::is_solved);

    view! {
        <Title text="Happy Anniversary"/>

        <main class="page">
            <header class="banner">
                <h1 class="banner__title">"Happy Anniversary"</h1>
                <p class="banner__subtitle">"Make this day special by solving this Puzzle!"</p>
            </header>
            <ImagePicker/>
            <PuzzleControls/>
            <BoardGrid/>
            <Show when=solved>
                <p class="congrats">"Congratulations! Puzzle Solved!"</p>
            </Show>
        </main>
        <ConfettiLayer/>
    }
}

/// Seed for the shuffle RNG. Browsers mix the clock with `Math.random`.
fn session_seed() -> u64 {
    #[cfg(feature = "csr")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let noise = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let now = js_sys::Date::now() as u64;
        noise ^ now.rotate_left(32)
    }
    #[cfg(not(feature = "csr"))]
    {
        0x5eed_cafe
    }
}
