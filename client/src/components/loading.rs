//! Loading placeholders shown while a route's view suspends.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::routing::view::Placeholder;

#[component]
pub fn Loading(placeholder: Placeholder) -> impl IntoView {
    match placeholder {
        Placeholder::None => ().into_any(),
        Placeholder::Spinner => view! { <div class="loading loading--spinner" aria-busy="true"></div> }.into_any(),
        Placeholder::Screen => view! {
            <div class="loading loading--screen" aria-busy="true">
                <div class="loading__spinner"></div>
            </div>
        }
        .into_any(),
        Placeholder::Dashboard => view! {
            <div class="loading loading--dashboard" aria-busy="true">
                <aside class="loading__sidebar"></aside>
                <section class="loading__feed">
                    <div class="loading__card"></div>
                    <div class="loading__card"></div>
                    <div class="loading__card"></div>
                </section>
            </div>
        }
        .into_any(),
        Placeholder::DirectMessages => view! {
            <div class="loading loading--messages" aria-busy="true">
                <aside class="loading__threads"></aside>
                <section class="loading__conversation"></section>
            </div>
        }
        .into_any(),
        Placeholder::Thread => view! {
            <div class="loading loading--thread" aria-busy="true">
                <div class="loading__title"></div>
                <div class="loading__body"></div>
            </div>
        }
        .into_any(),
    }
}
