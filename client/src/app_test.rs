use super::*;
use leptos::reactive::owner::Owner;

#[test]
fn settings_default_to_normal_mode_without_context() {
    let owner = Owner::new();
    owner.with(|| {
        assert_eq!(current_settings(), ClientSettings::default());
        assert_eq!(current_settings().app_mode(), AppMode::Normal);
    });
}

#[test]
fn provided_settings_select_maintenance() {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(ClientSettings { maintenance_mode: true, ..ClientSettings::default() });
        assert_eq!(current_settings().app_mode(), AppMode::Maintenance);
    });
}

#[cfg(feature = "ssr")]
fn render_app(settings: ClientSettings, url: &str) -> String {
    let owner = Owner::new();
    owner.with(|| {
        provide_context(settings);
        provide_context(leptos_router::location::RequestUrl::new(url));
        view! { <App/> }.to_html()
    })
}

#[cfg(feature = "ssr")]
#[test]
fn maintenance_mode_renders_only_the_notice() {
    let settings = ClientSettings { maintenance_mode: true, ..ClientSettings::default() };
    let html = render_app(settings, "/spectrum");
    assert!(html.contains(r#"class="maintenance""#));
    assert!(!html.contains(r#"class="navbar""#));
    assert!(!html.contains(r#"class="route""#));
}

#[cfg(feature = "ssr")]
#[test]
fn normal_mode_routes_community_slugs() {
    let html = render_app(ClientSettings::default(), "/spectrum");
    assert!(html.contains(r#"class="navbar""#));
    assert!(html.contains(r#"data-view="community""#));
    assert!(!html.contains(r#"class="maintenance""#));
}
