//! Fallback rendered by the app-level error boundary.

use leptos::prelude::*;

#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    #[cfg(feature = "hydrate")]
    for (_, error) in errors.get_untracked() {
        log::error!("render error: {error}");
    }

    view! {
        <main class="error-fallback" role="alert">
            <h1>"Something went wrong"</h1>
            <ul class="error-fallback__list">
                {move || {
                    errors
                        .get()
                        .into_iter()
                        .map(|(_, error)| view! { <li>{error.to_string()}</li> })
                        .collect_view()
                }}
            </ul>
            <a class="error-fallback__home" href="/">"Go home"</a>
        </main>
    }
}
