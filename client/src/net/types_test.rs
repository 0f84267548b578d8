use super::*;

#[test]
fn user_decodes_without_optional_fields() {
    let user: User = serde_json::from_str(r#"{"id":"u1","name":"Bryn"}"#).unwrap();
    assert_eq!(user.username, None);
    assert_eq!(user.profile_photo, None);
}

#[test]
fn user_decodes_camel_case_photo() {
    let user: User =
        serde_json::from_str(r#"{"id":"u1","name":"Bryn","username":"bryn","profilePhoto":"https://img.test/a.png"}"#)
            .unwrap();
    assert_eq!(user.username.as_deref(), Some("bryn"));
    assert_eq!(user.profile_photo.as_deref(), Some("https://img.test/a.png"));
}

#[test]
fn user_profile_defaults_reputation() {
    let profile: UserProfile = serde_json::from_str(r#"{"id":"u1","name":"Bryn","username":"bryn"}"#).unwrap();
    assert_eq!(profile.total_reputation, 0);
    assert_eq!(profile.description, None);
}

#[test]
fn thread_summary_reads_slugs() {
    let thread: ThreadSummary = serde_json::from_str(
        r#"{"id":"t1","title":"Hello","communitySlug":"spectrum","channelSlug":"general","messageCount":3}"#,
    )
    .unwrap();
    assert_eq!(thread.community_slug, "spectrum");
    assert_eq!(thread.channel_slug, "general");
    assert_eq!(thread.message_count, 3);
    assert_eq!(thread.body, None);
}

#[test]
fn thread_draft_serializes_camel_case_slugs() {
    let draft = ThreadDraft {
        community_slug: "spectrum".to_owned(),
        channel_slug: "general".to_owned(),
        title: "Hi".to_owned(),
        body: String::new(),
    };
    let json = serde_json::to_value(&draft).unwrap();
    assert_eq!(json["communitySlug"], "spectrum");
    assert_eq!(json["channelSlug"], "general");
}
