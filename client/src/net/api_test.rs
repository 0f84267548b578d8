use super::*;

#[test]
fn user_profile_endpoint_formats_expected_path() {
    assert_eq!(user_profile_endpoint("bryn"), "/api/users/bryn");
}

#[test]
fn thread_endpoint_formats_expected_path() {
    assert_eq!(thread_endpoint("t-42"), "/api/threads/t-42");
}

#[test]
fn request_failed_message_formats_status() {
    assert_eq!(request_failed_message("publish thread", 403), "publish thread failed: 403");
}
