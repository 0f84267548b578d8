//! Static notice rendered instead of the app during scheduled maintenance.

use leptos::prelude::*;

#[component]
pub fn Maintenance() -> impl IntoView {
    view! {
        <main class="maintenance">
            <h1 class="maintenance__title">"We'll be right back"</h1>
            <p class="maintenance__body">
                "Spectrum is currently undergoing scheduled maintenance. "
                "Follow "
                <a href="https://twitter.com/withspectrum">"@withspectrum"</a>
                " for ongoing updates."
            </p>
        </main>
    }
}
