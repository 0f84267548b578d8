//! Direct messages inbox at `/messages`, `/messages/new` and `/messages/:threadId`.

#[cfg(test)]
#[path = "messages_test.rs"]
mod messages_test;

use leptos::prelude::*;

use crate::components::head::Head;
use crate::routing::params::RouteParams;
use crate::util::meta::MetaInfo;

/// Which pane the inbox opens with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InboxPane {
    List,
    Compose,
    Conversation(String),
}

impl InboxPane {
    #[must_use]
    pub fn from_params(params: &RouteParams, pathname: &str) -> Self {
        if let Some(id) = params.get("threadId") {
            return Self::Conversation(id.to_owned());
        }
        let trimmed = pathname.trim_end_matches('/');
        let lowered = trimmed.to_ascii_lowercase();
        if lowered == "/messages/new" || lowered.starts_with("/messages/new/") {
            Self::Compose
        } else {
            Self::List
        }
    }
}

#[component]
pub fn DirectMessagesView(params: RouteParams) -> impl IntoView {
    let location = leptos_router::hooks::use_location();
    let pane = move || InboxPane::from_params(&params, &location.pathname.get());

    view! {
        <Head meta=MetaInfo::titled("Messages")/>
        <main class="view view--messages">
            <aside class="messages__threads">
                <a href="/messages/new" class="messages__compose">"New message"</a>
            </aside>
            <section class="messages__pane">
                {move || match pane() {
                    InboxPane::List => view! { <p>"Select a conversation"</p> }.into_any(),
                    InboxPane::Compose => view! { <p>"Start a new conversation"</p> }.into_any(),
                    InboxPane::Conversation(id) => view! { <p data-thread=id>"Loading conversation..."</p> }.into_any(),
                }}
            </section>
        </main>
    }
}
