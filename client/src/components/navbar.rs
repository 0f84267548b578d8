//! Global navigation bar.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above the route switch on every normal-mode page. Signed-out
//! visitors on marketing pages get the pages' own header instead, so the bar
//! hides itself there.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::theme_provider::ThemeMode;
use crate::routing::view::PageKind;
use crate::state::auth::{AuthState, AuthStatus};
use crate::state::ui::{ModalKind, UiState};
use crate::util::dark_mode;

/// Whether the navbar is hidden for this pathname and viewer.
pub fn navbar_hidden(pathname: &str, status: AuthStatus) -> bool {
    status == AuthStatus::SignedOut && PageKind::from_path(pathname).is_some()
}

/// Profile link target for the signed-in user, if they have a username.
pub fn profile_href(auth: &AuthState) -> Option<String> {
    auth.user
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .map(|username| format!("/users/{username}"))
}

/// What the "New thread" link does for a viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NewThreadAction {
    Navigate,
    PromptLogin,
}

pub fn new_thread_action(status: AuthStatus) -> NewThreadAction {
    match status {
        AuthStatus::SignedOut => NewThreadAction::PromptLogin,
        AuthStatus::Loading | AuthStatus::SignedIn => NewThreadAction::Navigate,
    }
}

/// Apply a "New thread" click to the UI state. Returns whether the click
/// was consumed by the login prompt.
pub fn handle_new_thread(ui: &mut UiState, status: AuthStatus) -> bool {
    match new_thread_action(status) {
        NewThreadAction::PromptLogin => {
            ui.open_modal(ModalKind::LoginPrompt);
            true
        }
        NewThreadAction::Navigate => false,
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let theme = expect_context::<RwSignal<ThemeMode>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let location = use_location();

    let hidden = move || navbar_hidden(&location.pathname.get(), auth.with(AuthState::status));
    let signed_in = move || auth.with(AuthState::status) == AuthStatus::SignedIn;
    let profile = move || auth.with(profile_href);

    let on_theme_toggle = move |_| {
        let dark = dark_mode::toggle(theme.get_untracked().dark);
        theme.set(ThemeMode { dark });
    };

    let on_new_thread = move |ev: leptos::ev::MouseEvent| {
        let status = auth.with_untracked(AuthState::status);
        if ui.try_update(|u| handle_new_thread(u, status)).unwrap_or(false) {
            ev.prevent_default();
        }
    };

    let on_logout = move |_| {
        auth.set(AuthState::settled(None));
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            crate::net::api::logout().await;
        });
    };

    view! {
        <Show when=move || !hidden()>
            <nav class="navbar">
                <a href="/" class="navbar__logo">"Spectrum"</a>
                <a href="/explore" class="navbar__link">"Explore"</a>
                <a href="/new/thread" class="navbar__link" on:click=on_new_thread>"New thread"</a>
                <Show
                    when=signed_in
                    fallback=|| view! { <a href="/login" class="navbar__link navbar__link--login">"Log in"</a> }
                >
                    <a href="/messages" class="navbar__link">"Messages"</a>
                    <a href="/notifications" class="navbar__link">"Notifications"</a>
                    {move || {
                        profile().map(|href| view! { <a href=href class="navbar__link">"Profile"</a> })
                    }}
                    <button class="navbar__button" on:click=on_logout>"Log out"</button>
                </Show>
                <button class="navbar__button" title="Toggle theme" on:click=on_theme_toggle>
                    {move || if theme.get().dark { "Light" } else { "Dark" }}
                </button>
            </nav>
        </Show>
    }
}
