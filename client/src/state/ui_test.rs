use super::*;

fn images(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("https://img.test/{i}.png")).collect()
}

// =============================================================
// Modals
// =============================================================

#[test]
fn ui_state_default_has_no_overlays() {
    let state = UiState::default();
    assert_eq!(state.modal, None);
    assert_eq!(state.gallery, None);
}

#[test]
fn open_modal_replaces_active_modal() {
    let mut state = UiState::default();
    state.open_modal(ModalKind::LoginPrompt);
    state.open_modal(ModalKind::SetUsername);
    assert_eq!(state.modal, Some(ModalKind::SetUsername));
    state.close_modal();
    assert_eq!(state.modal, None);
}

// =============================================================
// Gallery
// =============================================================

#[test]
fn open_gallery_ignores_empty_list() {
    let mut state = UiState::default();
    state.open_gallery(Vec::new(), 0);
    assert_eq!(state.gallery, None);
}

#[test]
fn open_gallery_clamps_index() {
    let mut state = UiState::default();
    state.open_gallery(images(3), 10);
    assert_eq!(state.gallery.as_ref().map(|g| g.index), Some(2));
}

#[test]
fn gallery_next_and_prev_wrap() {
    let mut gallery = GalleryState { images: images(3), index: 2 };
    gallery.next();
    assert_eq!(gallery.index, 0);
    gallery.prev();
    assert_eq!(gallery.index, 2);
    assert_eq!(gallery.current(), Some("https://img.test/2.png"));
}

#[test]
fn close_gallery_clears_state() {
    let mut state = UiState::default();
    state.open_gallery(images(1), 0);
    state.close_gallery();
    assert_eq!(state.gallery, None);
}
