use super::*;
use crate::routing::table::{Resolution, RouteTable};
use crate::state::auth::AuthStatus;

fn params_for(path: &str) -> RouteParams {
    match RouteTable::spectrum().resolve(path, AuthStatus::SignedIn, "") {
        Resolution::Render { params, .. } => params,
        other => panic!("expected a view for {path}, got {other:?}"),
    }
}

#[test]
fn channel_slugs_read_both_segments() {
    assert_eq!(
        channel_slugs(&params_for("/spectrum/general")),
        Ok(("spectrum".to_owned(), "general".to_owned()))
    );
}

#[test]
fn channel_slugs_reject_malformed_community() {
    assert_eq!(
        channel_slugs(&params_for("/bad%20slug/general")),
        Err(RouteError::InvalidSlug { kind: "community", value: "bad%20slug".to_owned() })
    );
}

#[test]
fn channel_slugs_require_channel() {
    assert_eq!(channel_slugs(&params_for("/spectrum")), Err(RouteError::MissingParam("channelSlug")));
}

#[test]
fn join_prompt_depends_on_token() {
    assert_eq!(join_prompt("design", Some("abc")), "You've been invited to join #design");
    assert!(join_prompt("design", None).contains("private"));
}

#[test]
fn channel_href_joins_slugs() {
    assert_eq!(channel_href("spectrum", "general"), "/spectrum/general");
}
