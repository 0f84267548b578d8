use super::*;

#[test]
fn validate_username_normalizes_case_and_whitespace() {
    assert_eq!(validate_username("  Bryn_01 "), Ok("bryn_01".to_owned()));
}

#[test]
fn validate_username_requires_value() {
    assert_eq!(validate_username("   "), Err("Choose a username."));
}

#[test]
fn validate_username_limits_length() {
    assert_eq!(validate_username(&"a".repeat(20)), Ok("a".repeat(20)));
    assert_eq!(validate_username(&"a".repeat(21)), Err("Usernames can be up to 20 characters."));
}

#[test]
fn validate_username_rejects_symbols() {
    assert_eq!(
        validate_username("bryn!"),
        Err("Usernames can only contain letters, numbers, dashes and underscores.")
    );
}
