//! Signed-in landing, discovery, search and notifications views.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::head::Head;
use crate::state::auth::AuthState;
use crate::util::meta::MetaInfo;

const FEATURED_COMMUNITIES: &[(&str, &str)] = &[
    ("spectrum", "Spectrum Support"),
    ("react", "React"),
    ("styled-components", "styled-components"),
    ("figma", "Figma"),
    ("codesandbox", "CodeSandbox"),
];

#[component]
pub fn DashboardView() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let name = move || auth.with(|a| a.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <Head meta=MetaInfo::titled("Home")/>
        <main class="view view--dashboard">
            <h1>"Welcome back, " {name}</h1>
            <nav class="dashboard__shortcuts">
                <a href="/new/thread">"New thread"</a>
                <a href="/new/community">"New community"</a>
                <a href="/explore">"Explore communities"</a>
            </nav>
        </main>
    }
}

#[component]
pub fn ExploreView() -> impl IntoView {
    view! {
        <Head meta=MetaInfo::titled("Explore")/>
        <main class="view view--explore">
            <h1>"Explore"</h1>
            <ul class="explore__list">
                {FEATURED_COMMUNITIES
                    .iter()
                    .map(|(slug, name)| {
                        let href = format!("/{slug}");
                        view! { <li><a href=href>{*name}</a></li> }
                    })
                    .collect_view()}
            </ul>
        </main>
    }
}

#[component]
pub fn SearchView() -> impl IntoView {
    let query = use_query_map();
    let term = RwSignal::new(query.get_untracked().get("q").unwrap_or_default());

    view! {
        <Head meta=MetaInfo::titled("Search")/>
        <main class="view view--search">
            <input
                class="search__input"
                type="search"
                placeholder="Search for threads"
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <Show when=move || !term.get().trim().is_empty()>
                <p class="search__status">"Searching for “" {move || term.get().trim().to_owned()} "”"</p>
            </Show>
        </main>
    }
}

#[component]
pub fn NewCommunityView() -> impl IntoView {
    view! {
        <Head meta=MetaInfo::titled("New community")/>
        <main class="view view--new-community">
            <h1>"Create a community"</h1>
            <p>"Pick a name and a URL for your community to get started."</p>
        </main>
    }
}

#[component]
pub fn NotificationsView() -> impl IntoView {
    view! {
        <Head meta=MetaInfo::titled("Notifications")/>
        <main class="view view--notifications">
            <h1>"Notifications"</h1>
        </main>
    }
}
