use super::*;

#[test]
fn default_meta_names_the_app() {
    let meta = MetaInfo::default();
    assert_eq!(meta.title, "Spectrum");
    assert_eq!(meta.description, "The community platform for the future.");
}

#[test]
fn maintenance_meta_points_to_status_updates() {
    let meta = MetaInfo::maintenance();
    assert_eq!(meta.title, "Ongoing Maintenance - Spectrum");
    assert!(meta.description.contains("scheduled maintenance"));
}

#[test]
fn titled_appends_app_name() {
    assert_eq!(MetaInfo::titled("Explore").title, "Explore · Spectrum");
    assert_eq!(MetaInfo::titled("").title, "Spectrum");
    assert_eq!(MetaInfo::titled("Spectrum").title, "Spectrum");
}
