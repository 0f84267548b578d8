//! Renders whichever global modal is active in `UiState`.

#[cfg(test)]
#[path = "modal_root_test.rs"]
mod modal_root_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::routing::params::is_slug;
use crate::state::auth::AuthState;
use crate::state::toasts::ToastsState;
use crate::state::ui::{ModalKind, UiState};

const USERNAME_MAX_LEN: usize = 20;

/// Trim and validate a requested username.
///
/// # Errors
///
/// Returns the message shown under the input.
pub fn validate_username(raw: &str) -> Result<String, &'static str> {
    let username = raw.trim().to_ascii_lowercase();
    if username.is_empty() {
        return Err("Choose a username.");
    }
    if username.len() > USERNAME_MAX_LEN {
        return Err("Usernames can be up to 20 characters.");
    }
    if !is_slug(&username) {
        return Err("Usernames can only contain letters, numbers, dashes and underscores.");
    }
    Ok(username)
}

#[component]
pub fn ModalRoot() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let on_close = Callback::new(move |()| ui.update(UiState::close_modal));

    move || match ui.with(|u| u.modal) {
        Some(ModalKind::SetUsername) => view! { <SetUsernameModal on_close=on_close/> }.into_any(),
        Some(ModalKind::LoginPrompt) => view! { <LoginPromptModal on_close=on_close/> }.into_any(),
        None => ().into_any(),
    }
}

#[component]
fn ModalShell(title: &'static str, on_close: Callback<()>, children: Children) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="modal"
                role="dialog"
                aria-label=title
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <div class="modal__header">
                    <h2>{title}</h2>
                    <button class="modal__close" title="Close" on:click=move |_| on_close.run(())>"✕"</button>
                </div>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn SetUsernameModal(on_close: Callback<()>) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let username = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let value = match validate_username(&username.get()) {
            Ok(value) => value,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::set_username(&value).await {
                Ok(user) => {
                    auth.set(AuthState::settled(Some(user)));
                    super::toasts::push_toast(toasts, crate::state::toasts::ToastKind::Success, "Username saved");
                    on_close.run(());
                }
                Err(e) => {
                    info.set(format!("Could not save username: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (value, auth, toasts, on_close);
        }
    };

    view! {
        <ModalShell title="Choose a username" on_close=on_close>
            <form class="modal__form" on:submit=on_submit>
                <input
                    class="modal__input"
                    type="text"
                    maxlength="20"
                    placeholder="username"
                    prop:value=move || username.get()
                    on:input=move |ev| username.set(event_target_value(&ev))
                />
                <button class="modal__button" type="submit" disabled=move || busy.get()>"Save"</button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="modal__message">{move || info.get()}</p>
            </Show>
        </ModalShell>
    }
}

#[component]
fn LoginPromptModal(on_close: Callback<()>) -> impl IntoView {
    view! {
        <ModalShell title="Sign in to continue" on_close=on_close>
            <p class="modal__body">"You need to be signed in to do that."</p>
            <a class="modal__button" href="/login" on:click=move |_| on_close.run(())>"Log in"</a>
        </ModalShell>
    }
}
