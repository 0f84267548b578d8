//! Fullscreen image gallery overlay.

use leptos::prelude::*;

use crate::state::ui::UiState;

fn step(ui: RwSignal<UiState>, forward: bool) {
    ui.update(|u| {
        if let Some(gallery) = u.gallery.as_mut() {
            if forward { gallery.next() } else { gallery.prev() }
        }
    });
}

#[component]
pub fn Gallery() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_close = move |_| ui.update(UiState::close_gallery);
    let on_prev = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        step(ui, false);
    };
    let on_next = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        step(ui, true);
    };
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => ui.update(UiState::close_gallery),
        "ArrowLeft" => step(ui, false),
        "ArrowRight" => step(ui, true),
        _ => {}
    };

    let current = move || ui.with(|u| u.gallery.as_ref().and_then(|g| g.current().map(str::to_owned)));
    let counter = move || {
        ui.with(|u| {
            u.gallery
                .as_ref()
                .map(|g| format!("{} / {}", g.index + 1, g.images.len()))
                .unwrap_or_default()
        })
    };

    view! {
        <Show when=move || current().is_some()>
            <div class="gallery" tabindex="0" on:click=on_close on:keydown=on_keydown>
                <button class="gallery__nav gallery__nav--prev" on:click=on_prev>"‹"</button>
                <img class="gallery__image" src=move || current().unwrap_or_default() on:click=|ev| ev.stop_propagation()/>
                <button class="gallery__nav gallery__nav--next" on:click=on_next>"›"</button>
                <span class="gallery__counter">{counter}</span>
            </div>
        </Show>
    }
}
