use super::*;
use crate::routing::table::{Resolution, RouteTable};
use crate::state::auth::AuthStatus;

fn params_for(path: &str) -> RouteParams {
    match RouteTable::spectrum().resolve(path, AuthStatus::SignedOut, "https://spectrum.chat") {
        Resolution::Render { params, .. } => params,
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn provider_href_without_redirect() {
    assert_eq!(provider_href("github", None), "/auth/github");
    assert_eq!(provider_href("github", Some("  ")), "/auth/github");
}

#[test]
fn provider_href_forwards_redirect() {
    assert_eq!(
        provider_href("twitter", Some("https://spectrum.chat/new/community")),
        "/auth/twitter?r=https://spectrum.chat/new/community"
    );
}

#[test]
fn community_login_returns_to_community() {
    let community = params_for("/spectrum/login").community().unwrap();
    assert_eq!(community_return_url("https://spectrum.chat", &community), "https://spectrum.chat/spectrum");
}

#[test]
fn community_login_rejects_bad_slug() {
    let params = params_for("/bad.slug/login");
    assert!(matches!(params.community(), Err(crate::routing::params::RouteError::InvalidSlug { kind: "community", .. })));
}
