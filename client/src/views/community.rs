//! Community and channel views addressed by slug.
//!
//! These sit behind the `:communitySlug` wildcard routes, so any path no named
//! route claims lands here. Slugs are validated when read; a malformed slug
//! surfaces as a `RouteError` through the error boundary.

#[cfg(test)]
#[path = "community_test.rs"]
mod community_test;

use leptos::prelude::*;

use crate::components::head::Head;
use crate::routing::params::{RouteError, RouteParams};
use crate::util::meta::MetaInfo;

/// In-app path to a channel.
pub fn channel_href(community: &str, channel: &str) -> String {
    format!("/{community}/{channel}")
}

/// Community and channel slugs for channel-scoped views.
///
/// # Errors
///
/// Propagates the first slug failure.
pub fn channel_slugs(params: &RouteParams) -> Result<(String, String), RouteError> {
    Ok((params.community()?, params.channel()?))
}

/// Copy for a private channel join page, which may or may not carry an invite token.
pub fn join_prompt(channel: &str, token: Option<&str>) -> String {
    match token {
        Some(_) => format!("You've been invited to join #{channel}"),
        None => format!("#{channel} is private. Ask a moderator for an invite link."),
    }
}

#[component]
pub fn CommunityView(params: RouteParams) -> impl IntoView {
    params.community().map(|community| {
        let settings_href = format!("/{community}/settings");
        let general_href = channel_href(&community, "general");
        view! {
            <Head meta=MetaInfo::titled(&community)/>
            <main class="view view--community" data-community=community.clone()>
                <header class="community__header">
                    <h1>{community.clone()}</h1>
                    <a class="community__settings" href=settings_href>"Settings"</a>
                </header>
                <nav class="community__channels">
                    <a href=general_href>"# general"</a>
                </nav>
                <section class="community__feed">
                    <p>"No threads yet."</p>
                </section>
            </main>
        }
    })
}

#[component]
pub fn ChannelView(params: RouteParams) -> impl IntoView {
    channel_slugs(&params).map(|(community, channel)| {
        let community_href = format!("/{community}");
        let settings_href = format!("{}/settings", channel_href(&community, &channel));
        view! {
            <Head meta=MetaInfo::titled(&format!("{community} / {channel}"))/>
            <main class="view view--channel">
                <header class="channel__header">
                    <a href=community_href>{community.clone()}</a>
                    <h1>{format!("# {channel}")}</h1>
                    <a class="channel__settings" href=settings_href>"Settings"</a>
                </header>
                <section class="channel__feed">
                    <p>"No threads yet."</p>
                </section>
            </main>
        }
    })
}

#[component]
pub fn CommunitySettingsView(params: RouteParams) -> impl IntoView {
    params.community().map(|community| {
        let back = format!("/{community}");
        view! {
            <Head meta=MetaInfo::titled(&format!("{community} settings"))/>
            <main class="view view--community-settings">
                <a href=back>"Back to community"</a>
                <h1>{format!("{community} settings")}</h1>
                <section class="settings__section"><h2>"Overview"</h2></section>
                <section class="settings__section"><h2>"Members"</h2></section>
                <section class="settings__section"><h2>"Billing"</h2></section>
            </main>
        }
    })
}

#[component]
pub fn ChannelSettingsView(params: RouteParams) -> impl IntoView {
    channel_slugs(&params).map(|(community, channel)| {
        let back = channel_href(&community, &channel);
        view! {
            <Head meta=MetaInfo::titled(&format!("#{channel} settings"))/>
            <main class="view view--channel-settings">
                <a href=back>"Back to channel"</a>
                <h1>{format!("#{channel} settings")}</h1>
                <section class="settings__section"><h2>"Channel details"</h2></section>
                <section class="settings__section"><h2>"Pending requests"</h2></section>
            </main>
        }
    })
}

#[component]
pub fn PrivateChannelJoinView(params: RouteParams) -> impl IntoView {
    let token = params.token();
    channel_slugs(&params).map(|(community, channel)| {
        let prompt = join_prompt(&channel, token.as_deref());
        let href = channel_href(&community, &channel);
        view! {
            <Head meta=MetaInfo::titled(&format!("Join #{channel}"))/>
            <main class="view view--join">
                <h1>{prompt}</h1>
                <a class="button" href=href>"Continue to channel"</a>
            </main>
        }
    })
}
