use super::*;
use crate::routing::table::{Resolution, RouteTable};
use crate::state::auth::AuthStatus;

fn pane(path: &str) -> InboxPane {
    match RouteTable::spectrum().resolve(path, AuthStatus::SignedIn, "") {
        Resolution::Render { params, .. } => InboxPane::from_params(&params, path),
        other => panic!("expected a view for {path}, got {other:?}"),
    }
}

#[test]
fn inbox_panes_follow_path() {
    assert_eq!(pane("/messages"), InboxPane::List);
    assert_eq!(pane("/messages/new"), InboxPane::Compose);
    assert_eq!(pane("/Messages/New/"), InboxPane::Compose);
    assert_eq!(pane("/messages/abc"), InboxPane::Conversation("abc".to_owned()));
}
