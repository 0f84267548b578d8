//! Session bootstrap and auth-driven prompts.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders nothing. After hydration it settles `AuthState` from
//! `/api/auth/me`, which releases gated routes from their placeholders, and
//! opens the set-username modal for signed-in users without a username.

use leptos::prelude::*;

use crate::state::auth::AuthState;
use crate::state::ui::{ModalKind, UiState};

#[component]
pub fn AuthViewHandler() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_user().await;
        log::debug!("session settled, signed in: {}", user.is_some());
        auth.set(AuthState::settled(user));
    });

    Effect::new(move || {
        if auth.with(AuthState::needs_username) && ui.with_untracked(|u| u.modal.is_none()) {
            ui.update(|u| u.open_modal(ModalKind::SetUsername));
        }
    });
}
