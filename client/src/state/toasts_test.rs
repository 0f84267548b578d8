use super::*;

#[test]
fn push_assigns_increasing_ids() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Success, "Saved");
    let b = state.push(ToastKind::Error, "Failed");
    assert!(b > a);
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].message, "Saved");
}

#[test]
fn dismiss_removes_only_matching_toast() {
    let mut state = ToastsState::default();
    let a = state.push(ToastKind::Neutral, "one");
    let b = state.push(ToastKind::Neutral, "two");
    state.dismiss(a);
    assert_eq!(state.items.iter().map(|t| t.id).collect::<Vec<_>>(), vec![b]);
    state.dismiss(999);
    assert_eq!(state.items.len(), 1);
}

#[test]
fn push_drops_oldest_beyond_limit() {
    let mut state = ToastsState::default();
    for i in 0..(MAX_TOASTS + 2) {
        state.push(ToastKind::Neutral, format!("toast {i}"));
    }
    assert_eq!(state.items.len(), MAX_TOASTS);
    assert_eq!(state.items[0].message, "toast 2");
}

#[test]
fn css_modifier_per_kind() {
    assert_eq!(ToastKind::Success.css_modifier(), "toast--success");
    assert_eq!(ToastKind::Error.css_modifier(), "toast--error");
    assert_eq!(ToastKind::Neutral.css_modifier(), "toast--neutral");
}
