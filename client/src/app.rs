//! Root application component, HTML shell and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `shell` is rendered by the server for SSR and carries the runtime settings
//! into the page. `App` is the hydration root: it provides shared state, picks
//! between the maintenance notice and the full app, and mounts the router.
//!
//! DESIGN
//! ======
//! `leptos_router` only supplies location and the SSR route listing here.
//! Both registered routes render `Switch`, which applies the ordered route
//! table in `routing::table`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_view_handler::AuthViewHandler;
use crate::components::error_fallback::ErrorFallback;
use crate::components::gallery::Gallery;
use crate::components::head::Head;
use crate::components::maintenance::Maintenance;
use crate::components::modal_root::ModalRoot;
use crate::components::navbar::Navbar;
use crate::components::scroll_manager::ScrollManager;
use crate::components::status::Status;
use crate::components::theme_provider::ThemeProvider;
use crate::components::thread_slider::ThreadSlider;
use crate::components::toasts::Toasts;
use crate::routing::switch::Switch;
use crate::settings::{AppMode, ClientSettings, SETTINGS_META_NAME};
use crate::state::{auth::AuthState, toasts::ToastsState, ui::UiState};
use crate::util::meta::MetaInfo;

/// Settings in effect for this render; defaults when none were provided.
pub fn current_settings() -> ClientSettings {
    use_context::<ClientSettings>().unwrap_or_default()
}

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let settings_content = current_settings().to_meta_content().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=SETTINGS_META_NAME content=settings_content/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides shared state contexts, then renders either the maintenance notice
/// or the routed app.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let settings = current_settings();
    provide_context(settings.clone());

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());
    let toasts = RwSignal::new(ToastsState::default());

    provide_context(auth);
    provide_context(ui);
    provide_context(toasts);

    let body = match settings.app_mode() {
        AppMode::Maintenance => view! {
            <Head meta=MetaInfo::maintenance()/>
            <Maintenance/>
        }
        .into_any(),
        AppMode::Normal => view! { <RoutedApp/> }.into_any(),
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/spectrum.css"/>
        <ThemeProvider>{body}</ThemeProvider>
    }
}

#[component]
fn RoutedApp() -> impl IntoView {
    view! {
        <Router>
            <ScrollManager>
                <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors=errors/> }>
                    <div class="app-body">
                        <Head meta=MetaInfo::default()/>
                        <AuthViewHandler/>
                        <Status/>
                        <Navbar/>
                        <ModalRoot/>
                        <Toasts/>
                        <Gallery/>
                        <ThreadSlider/>
                        <Routes fallback=|| "Page not found.".into_view()>
                            <Route path=StaticSegment("") view=Switch/>
                            <Route path=WildcardSegment("path") view=Switch/>
                        </Routes>
                    </div>
                </ErrorBoundary>
            </ScrollManager>
        </Router>
    }
}
