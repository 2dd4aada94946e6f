//! Photo chooser: a file input plus the bundled default picture.

use leptos::prelude::*;

use crate::util::dispatch::BrowserHost;

#[component]
pub fn ImagePicker() -> impl IntoView {
    let host = BrowserHost::from_context();
    let ui = host.ui;

    let on_file_change = {
        #[cfg(feature = "csr")]
        {
            move |ev: leptos::ev::Event| {
                use wasm_bindgen::JsCast;

                let Some(input) = ev
                    .target()
                    .and_then(|t| t.dyn_into::<web_sys::HtmlInputElement>().ok())
                else {
                    return;
                };
                load_chosen_file(host, &input);
                // Allow picking the same file again.
                input.set_value("");
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            move |_ev: leptos::ev::Event| {}
        }
    };

    let on_use_default = move |_| {
        let image = host.session.with_untracked(|s| s.config().default_image());
        ui.update(|u| u.finish_load(None));
        host.run(|s| s.load_image(image));
    };

    view! {
        <section class="picker">
            <label class="picker__label">
                "Choose Your Special Photo"
                <input class="picker__input" type="file" accept="image/*" on:change=on_file_change/>
            </label>
            <button class="btn btn--default" on:click=on_use_default>"Use Default Image"</button>
            <Show when=move || ui.get().loading>
                <p class="picker__status">"Loading picture..."</p>
            </Show>
            {move || ui.get().load_error.map(|message| view! { <p class="picker__error">{message}</p> })}
        </section>
    }
}

#[cfg(feature = "csr")]
fn load_chosen_file(host: BrowserHost, input: &web_sys::HtmlInputElement) {
    use log::warn;
    use puzzle::board::ImageRef;

    use crate::state::ui::UiState;
    use crate::util::image_load::{first_file, read_data_url};

    let file = match first_file(input) {
        Ok(file) => file,
        Err(e) => {
            // Cancelled picker: keep the current picture.
            host.ui.update(|u| u.finish_load(e.user_message()));
            return;
        }
    };
    host.ui.update(UiState::begin_load);
    let started = read_data_url(&file, move |result| match result {
        Ok(url) => {
            host.ui.update(|u| u.finish_load(None));
            host.run(|s| s.load_image(ImageRef::from(url)));
        }
        Err(e) => {
            warn!("image picker: {e}");
            host.ui.update(|u| u.finish_load(e.user_message()));
        }
    });
    if let Err(e) = started {
        warn!("image picker: {e}");
        host.ui.update(|u| u.finish_load(e.user_message()));
    }
}
