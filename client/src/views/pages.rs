//! Public marketing pages, including the signed-out splash at `/`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::head::Head;
use crate::routing::view::PageKind;
use crate::util::meta::MetaInfo;

#[component]
pub fn PagesView() -> impl IntoView {
    let location = use_location();
    let page = Memo::new(move |_| PageKind::from_path(&location.pathname.get()).unwrap_or(PageKind::Splash));

    move || {
        let page = page.get();
        view! {
            <Head meta=MetaInfo::titled(page.title())/>
            <main class="view view--pages">
                <header class="pages__header">
                    <a href="/" class="pages__logo">"Spectrum"</a>
                    <a href="/features">"Features"</a>
                    <a href="/pricing">"Pricing"</a>
                    <a href="/support">"Support"</a>
                    <a href="/login" class="pages__login">"Log in"</a>
                </header>
                <h1>{page.title()}</h1>
                {(page == PageKind::Splash)
                    .then(|| view! { <p class="pages__tagline">"The community platform for the future."</p> })}
                <footer class="pages__footer">
                    <a href="/about">"About"</a>
                    <a href="/contact">"Contact"</a>
                    <a href="/terms">"Terms"</a>
                    <a href="/privacy">"Privacy"</a>
                    <a href="/code-of-conduct">"Code of Conduct"</a>
                </footer>
            </main>
        }
    }
}
