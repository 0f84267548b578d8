use super::*;
use crate::net::types::User;
use crate::state::ui::{ModalKind, UiState};

fn signed_in(username: Option<&str>) -> AuthState {
    AuthState::settled(Some(User {
        id: "u1".to_owned(),
        name: "Bryn".to_owned(),
        username: username.map(str::to_owned),
        profile_photo: None,
    }))
}

#[test]
fn hidden_for_signed_out_visitors_on_marketing_pages() {
    assert!(navbar_hidden("/", AuthStatus::SignedOut));
    assert!(navbar_hidden("/pricing", AuthStatus::SignedOut));
}

#[test]
fn shown_for_signed_out_visitors_on_app_pages() {
    assert!(!navbar_hidden("/explore", AuthStatus::SignedOut));
    assert!(!navbar_hidden("/spectrum", AuthStatus::SignedOut));
}

#[test]
fn shown_for_signed_in_and_loading_viewers() {
    assert!(!navbar_hidden("/", AuthStatus::SignedIn));
    assert!(!navbar_hidden("/about", AuthStatus::Loading));
}

#[test]
fn profile_href_uses_username() {
    assert_eq!(profile_href(&signed_in(Some("bryn"))), Some("/users/bryn".to_owned()));
    assert_eq!(profile_href(&signed_in(None)), None);
    assert_eq!(profile_href(&AuthState::settled(None)), None);
}

#[test]
fn new_thread_prompts_signed_out_viewers_to_log_in() {
    assert_eq!(new_thread_action(AuthStatus::SignedOut), NewThreadAction::PromptLogin);
    assert_eq!(new_thread_action(AuthStatus::SignedIn), NewThreadAction::Navigate);
    assert_eq!(new_thread_action(AuthStatus::Loading), NewThreadAction::Navigate);
}

#[test]
fn signed_out_new_thread_click_opens_login_prompt() {
    let mut ui = UiState::default();
    assert!(handle_new_thread(&mut ui, AuthStatus::SignedOut));
    assert_eq!(ui.modal, Some(ModalKind::LoginPrompt));
}

#[test]
fn signed_in_new_thread_click_navigates() {
    let mut ui = UiState::default();
    assert!(!handle_new_thread(&mut ui, AuthStatus::SignedIn));
    assert_eq!(ui.modal, None);
}
