use super::*;

fn user(username: Option<&str>) -> User {
    User {
        id: "u1".to_owned(),
        name: "Bryn".to_owned(),
        username: username.map(str::to_owned),
        profile_photo: None,
    }
}

// =============================================================
// AuthState defaults
// =============================================================

#[test]
fn auth_state_default_no_user() {
    let state = AuthState::default();
    assert!(state.user.is_none());
}

#[test]
fn auth_state_default_is_loading() {
    let state = AuthState::default();
    assert!(state.loading);
    assert_eq!(state.status(), AuthStatus::Loading);
}

// =============================================================
// Status
// =============================================================

#[test]
fn settled_without_user_is_signed_out() {
    assert_eq!(AuthState::settled(None).status(), AuthStatus::SignedOut);
}

#[test]
fn settled_with_user_is_signed_in() {
    assert_eq!(AuthState::settled(Some(user(Some("bryn")))).status(), AuthStatus::SignedIn);
}

#[test]
fn user_present_while_loading_counts_as_signed_in() {
    let state = AuthState { user: Some(user(Some("bryn"))), loading: true };
    assert_eq!(state.status(), AuthStatus::SignedIn);
}

// =============================================================
// Username prompt
// =============================================================

#[test]
fn needs_username_when_missing_or_blank() {
    assert!(AuthState::settled(Some(user(None))).needs_username());
    assert!(AuthState::settled(Some(user(Some("  ")))).needs_username());
}

#[test]
fn no_username_prompt_for_complete_or_absent_user() {
    assert!(!AuthState::settled(Some(user(Some("bryn")))).needs_username());
    assert!(!AuthState::settled(None).needs_username());
}
