//! Thread composer at `/new/thread`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Gated route: only signed-in users reach it. The target community/channel
//! can be preselected with `?community=<slug>&channel=<slug>`.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::head::Head;
use crate::net::types::ThreadDraft;
use crate::routing::params::is_slug;
use crate::state::toasts::ToastsState;
use crate::util::meta::MetaInfo;

const TITLE_MAX_LEN: usize = 280;
const BODY_MAX_LEN: usize = 20_000;

/// Trim and validate composer input into a publishable draft.
///
/// # Errors
///
/// Returns the message shown above the publish button.
pub fn validate_draft(community: &str, channel: &str, title: &str, body: &str) -> Result<ThreadDraft, &'static str> {
    let community = community.trim();
    let channel = channel.trim();
    let title = title.trim();
    let body = body.trim();

    if !is_slug(community) || !is_slug(channel) {
        return Err("Choose where to post this thread.");
    }
    if title.is_empty() {
        return Err("Give your thread a title.");
    }
    if title.chars().count() > TITLE_MAX_LEN {
        return Err("Titles can be up to 280 characters.");
    }
    if body.chars().count() > BODY_MAX_LEN {
        return Err("This thread is too long.");
    }

    Ok(ThreadDraft {
        community_slug: community.to_owned(),
        channel_slug: channel.to_owned(),
        title: title.to_owned(),
        body: body.to_owned(),
    })
}

#[component]
pub fn ComposerView() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();
    let query = use_query_map();
    let initial = query.get_untracked();

    let community = RwSignal::new(initial.get("community").unwrap_or_default());
    let channel = RwSignal::new(initial.get("channel").unwrap_or_else(|| "general".to_owned()));
    let title = RwSignal::new(String::new());
    let body = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let draft = match validate_draft(&community.get(), &channel.get(), &title.get(), &body.get()) {
            Ok(draft) => draft,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Publishing...".to_owned());

        #[cfg(feature = "hydrate")]
        let navigate = navigate.clone();
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::api::publish_thread(&draft).await {
                Ok(thread) => {
                    crate::components::toasts::push_toast(
                        toasts,
                        crate::state::toasts::ToastKind::Success,
                        "Thread published",
                    );
                    navigate(&format!("/thread/{}", thread.id), leptos_router::NavigateOptions::default());
                }
                Err(e) => {
                    info.set(format!("Publishing failed: {e}"));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, toasts);
        }
    };

    view! {
        <Head meta=MetaInfo::titled("New thread")/>
        <main class="view view--composer">
            <form class="composer" on:submit=on_submit>
                <div class="composer__target">
                    <input
                        class="composer__slug"
                        type="text"
                        placeholder="community"
                        prop:value=move || community.get()
                        on:input=move |ev| community.set(event_target_value(&ev))
                    />
                    <span>"/"</span>
                    <input
                        class="composer__slug"
                        type="text"
                        placeholder="channel"
                        prop:value=move || channel.get()
                        on:input=move |ev| channel.set(event_target_value(&ev))
                    />
                </div>
                <input
                    class="composer__title"
                    type="text"
                    placeholder="What's up?"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <textarea
                    class="composer__body"
                    placeholder="Write more thoughts here..."
                    prop:value=move || body.get()
                    on:input=move |ev| body.set(event_target_value(&ev))
                ></textarea>
                <Show when=move || !info.get().is_empty()>
                    <p class="composer__message">{move || info.get()}</p>
                </Show>
                <button class="composer__publish" type="submit" disabled=move || busy.get() || title.get().trim().is_empty()>
                    "Publish"
                </button>
            </form>
        </main>
    }
}
