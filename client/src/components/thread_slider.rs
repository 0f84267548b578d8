//! Thread overlay opened from any page via `?thread=<id>`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Lets feeds open a thread without leaving the current route. Only the query
//! string changes, so `ScrollManager` keeps the page's scroll position and
//! closing the slider returns to exactly where the reader was.

#[cfg(test)]
#[path = "thread_slider_test.rs"]
mod thread_slider_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::components::loading::Loading;
use crate::routing::view::Placeholder;

/// Thread id carried by a `?thread=` query, if any.
pub fn slider_thread_id(search: &str) -> Option<String> {
    search
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(key, _)| *key == "thread")
        .map(|(_, value)| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}

#[component]
pub fn ThreadSlider() -> impl IntoView {
    let location = use_location();
    let navigate = use_navigate();

    let thread_id = Memo::new(move |_| slider_thread_id(&location.search.get()));

    let on_close = Callback::new(move |()| {
        navigate(&location.pathname.get_untracked(), NavigateOptions { scroll: false, ..NavigateOptions::default() });
    });

    view! {
        <Show when=move || thread_id.get().is_some()>
            <div class="thread-slider__backdrop" on:click=move |_| on_close.run(())></div>
            <aside class="thread-slider" role="dialog">
                <button class="thread-slider__close" title="Close thread" on:click=move |_| on_close.run(())>"✕"</button>
                {move || thread_id.get().map(|id| view! { <SliderThread id=id/> })}
            </aside>
        </Show>
    }
}

#[component]
fn SliderThread(id: String) -> impl IntoView {
    let href = format!("/thread/{id}");
    let thread = LocalResource::new(move || {
        let id = id.clone();
        async move { crate::net::api::fetch_thread(&id).await }
    });

    view! {
        <Suspense fallback=move || view! { <Loading placeholder=Placeholder::Thread/> }>
            {move || {
                let href = href.clone();
                thread
                    .get()
                    .map(|thread| match thread {
                        Some(t) => view! {
                            <article class="thread-slider__thread">
                                <h2>{t.title}</h2>
                                <p>{t.body.unwrap_or_default()}</p>
                                <a href=href>"Open full thread"</a>
                            </article>
                        }
                        .into_any(),
                        None => view! { <p class="thread-slider__missing">"This thread could not be loaded."</p> }
                            .into_any(),
                    })
            }}
        </Suspense>
    }
}
