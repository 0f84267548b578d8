use super::*;

#[test]
fn stored_choice_overrides_system() {
    assert!(resolve_preference(Some("true"), false));
    assert!(!resolve_preference(Some("false"), true));
}

#[test]
fn missing_or_garbled_choice_follows_system() {
    assert!(resolve_preference(None, true));
    assert!(!resolve_preference(None, false));
    assert!(resolve_preference(Some("dark"), true));
}

#[test]
fn stored_value_round_trips_through_resolve() {
    for dark in [true, false] {
        assert_eq!(resolve_preference(Some(stored_value(dark)), !dark), dark);
    }
}

#[test]
fn theme_attr_names() {
    assert_eq!(theme_attr(true), "dark");
    assert_eq!(theme_attr(false), "light");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_render_is_light_and_toggle_flips() {
    assert!(!read_preference());
    assert!(toggle(false));
    assert!(!toggle(true));
}
