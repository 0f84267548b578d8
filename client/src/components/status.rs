//! Connectivity banner shown while the browser is offline.

use leptos::prelude::*;

#[component]
pub fn Status() -> impl IntoView {
    let online = RwSignal::new(true);

    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            online.set(window.navigator().on_line());
        }
        let on = window_event_listener(leptos::ev::online, move |_| online.set(true));
        let off = window_event_listener(leptos::ev::offline, move |_| online.set(false));
        on_cleanup(move || {
            on.remove();
            off.remove();
        });
    }

    view! {
        <Show when=move || !online.get()>
            <div class="status-banner" role="status">
                "You're offline. We'll reconnect as soon as your network is back."
            </div>
        </Show>
    }
}
