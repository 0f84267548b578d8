use super::*;

#[test]
fn first_render_does_not_scroll() {
    assert!(!should_reset_scroll(None, "/explore"));
}

#[test]
fn pathname_change_scrolls() {
    assert!(should_reset_scroll(Some("/explore"), "/spectrum"));
}

#[test]
fn same_pathname_keeps_position() {
    assert!(!should_reset_scroll(Some("/spectrum/general"), "/spectrum/general"));
}
