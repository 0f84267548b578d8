use super::*;

fn params(pairs: &[(&str, &str)]) -> RouteParams {
    let mut p = RouteParams::default();
    for (k, v) in pairs {
        p.insert(k, v);
    }
    p
}

#[test]
fn get_returns_captured_value() {
    let p = params(&[("communitySlug", "spectrum"), ("channelSlug", "general")]);
    assert_eq!(p.get("communitySlug"), Some("spectrum"));
    assert_eq!(p.get("channelSlug"), Some("general"));
    assert_eq!(p.get("token"), None);
}

#[test]
fn community_accepts_slug() {
    let p = params(&[("communitySlug", "react-native_2")]);
    assert_eq!(p.community(), Ok("react-native_2".to_owned()));
}

#[test]
fn community_rejects_dotted_segment() {
    let p = params(&[("communitySlug", "favicon.ico")]);
    assert_eq!(
        p.community(),
        Err(RouteError::InvalidSlug { kind: "community", value: "favicon.ico".to_owned() })
    );
}

#[test]
fn missing_param_is_reported_by_name() {
    let p = RouteParams::default();
    assert_eq!(p.channel(), Err(RouteError::MissingParam("channelSlug")));
    assert_eq!(p.thread_id(), Err(RouteError::MissingParam("threadId")));
}

#[test]
fn thread_id_is_not_slug_validated() {
    let p = params(&[("threadId", "a1b2.c3~d4")]);
    assert_eq!(p.thread_id(), Ok("a1b2.c3~d4".to_owned()));
}

#[test]
fn token_is_optional() {
    assert_eq!(params(&[("token", "abc")]).token(), Some("abc".to_owned()));
    assert_eq!(RouteParams::default().token(), None);
}

#[test]
fn is_slug_bounds() {
    assert!(is_slug("a"));
    assert!(!is_slug(""));
    assert!(!is_slug("has space"));
    assert!(is_slug(&"x".repeat(64)));
    assert!(!is_slug(&"x".repeat(65)));
}

#[test]
fn route_error_messages() {
    assert_eq!(RouteError::MissingParam("username").to_string(), "missing route parameter `username`");
    assert_eq!(
        RouteError::InvalidSlug { kind: "channel", value: "a b".to_owned() }.to_string(),
        "invalid channel `a b`"
    );
}
