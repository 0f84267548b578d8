use super::*;

#[test]
fn default_settings_are_normal_mode() {
    let settings = ClientSettings::default();
    assert!(!settings.maintenance_mode);
    assert_eq!(settings.client_url, DEFAULT_CLIENT_URL);
    assert_eq!(settings.app_mode(), AppMode::Normal);
}

#[test]
fn maintenance_flag_selects_maintenance_mode() {
    let settings = ClientSettings { maintenance_mode: true, ..ClientSettings::default() };
    assert_eq!(settings.app_mode(), AppMode::Maintenance);
}

#[test]
fn meta_content_round_trips() {
    let settings = ClientSettings { maintenance_mode: true, client_url: "https://spectrum.chat".to_owned() };
    let content = settings.to_meta_content().unwrap();
    assert_eq!(ClientSettings::from_meta_content(&content).unwrap(), settings);
}

#[test]
fn from_meta_content_fills_missing_fields() {
    let settings = ClientSettings::from_meta_content("{}").unwrap();
    assert_eq!(settings, ClientSettings::default());
}

#[test]
fn from_meta_content_trims_trailing_slash() {
    let settings = ClientSettings::from_meta_content(r#"{"client_url":"https://spectrum.chat/"}"#).unwrap();
    assert_eq!(settings.client_url, "https://spectrum.chat");
}

#[test]
fn from_meta_content_rejects_garbage() {
    let err = ClientSettings::from_meta_content("not json").unwrap_err();
    assert!(err.to_string().starts_with("malformed settings payload"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_document_defaults_outside_browser() {
    assert_eq!(ClientSettings::from_document(), ClientSettings::default());
}
