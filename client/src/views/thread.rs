//! Full-page thread view at `/thread/:threadId`.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::head::Head;
use crate::components::loading::Loading;
use crate::routing::params::RouteParams;
use crate::routing::view::Placeholder;
use crate::util::meta::MetaInfo;

#[component]
pub fn ThreadView(params: RouteParams) -> impl IntoView {
    params.thread_id().map(|thread_id| {
        let thread = LocalResource::new(move || {
            let thread_id = thread_id.clone();
            async move { crate::net::api::fetch_thread(&thread_id).await }
        });

        view! {
            <main class="view view--thread">
                <Suspense fallback=move || view! { <Loading placeholder=Placeholder::Thread/> }>
                    {move || {
                        thread
                            .get()
                            .map(|thread| match thread {
                                Some(t) => {
                                    let channel_href = format!("/{}/{}", t.community_slug, t.channel_slug);
                                    view! {
                                        <Head meta=MetaInfo::titled(&t.title)/>
                                        <article class="thread">
                                            <a class="thread__channel" href=channel_href>
                                                {format!("{} / {}", t.community_slug, t.channel_slug)}
                                            </a>
                                            <h1 class="thread__title">{t.title.clone()}</h1>
                                            <div class="thread__body">{t.body.clone().unwrap_or_default()}</div>
                                            <footer class="thread__meta">{format!("{} messages", t.message_count)}</footer>
                                        </article>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <Head meta=MetaInfo::titled("Thread not found")/>
                                    <div class="view-empty">
                                        <h1>"This thread doesn't exist"</h1>
                                        <a href="/">"Go home"</a>
                                    </div>
                                }
                                .into_any(),
                            })
                    }}
                </Suspense>
            </main>
        }
    })
}
