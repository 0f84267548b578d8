use super::*;
use crate::net::types::User;

fn signed_in(username: Option<&str>) -> AuthState {
    AuthState::settled(Some(User {
        id: "u1".to_owned(),
        name: "Max".to_owned(),
        username: username.map(str::to_owned),
        profile_photo: None,
    }))
}

#[test]
fn profile_title_includes_handle() {
    let profile = UserProfile {
        id: "u1".to_owned(),
        name: "Max Stoiber".to_owned(),
        username: "mxstbr".to_owned(),
        description: None,
        profile_photo: None,
        total_reputation: 0,
    };
    assert_eq!(profile_title(&profile), "Max Stoiber (@mxstbr)");
}

#[test]
fn owner_matches_case_insensitively() {
    assert!(owns_profile(&signed_in(Some("mxstbr")), "MXSTBR"));
    assert!(!owns_profile(&signed_in(Some("mxstbr")), "brian"));
}

#[test]
fn no_owner_without_username_or_session() {
    assert!(!owns_profile(&signed_in(None), "mxstbr"));
    assert!(!owns_profile(&AuthState::settled(None), "mxstbr"));
    assert!(!owns_profile(&AuthState::default(), "mxstbr"));
}

#[test]
fn avatar_click_opens_gallery_on_the_photo() {
    let mut ui = UiState::default();
    open_avatar(&mut ui, "https://cdn.example/avatar.png");
    let gallery = ui.gallery.as_ref().unwrap();
    assert_eq!(gallery.current(), Some("https://cdn.example/avatar.png"));
    assert_eq!(gallery.images.len(), 1);
}
