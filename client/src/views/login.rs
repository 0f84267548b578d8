//! Sign-in views with OAuth provider links.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::components::head::Head;
use crate::routing::params::RouteParams;
use crate::settings::ClientSettings;
use crate::util::meta::MetaInfo;

const PROVIDERS: &[(&str, &str)] = &[
    ("twitter", "Sign in with Twitter"),
    ("facebook", "Sign in with Facebook"),
    ("google", "Sign in with Google"),
    ("github", "Sign in with GitHub"),
];

/// OAuth start URL for a provider, forwarding the post-login return URL.
pub fn provider_href(provider: &str, redirect: Option<&str>) -> String {
    match redirect.map(str::trim).filter(|r| !r.is_empty()) {
        Some(r) => format!("/auth/{provider}?r={r}"),
        None => format!("/auth/{provider}"),
    }
}

/// Return URL for signing in from a community's login page.
pub fn community_return_url(client_url: &str, community: &str) -> String {
    format!("{client_url}/{community}")
}

#[component]
fn SignInCard(heading: String, redirect: Option<String>) -> impl IntoView {
    view! {
        <div class="login-card">
            <h1>{heading}</h1>
            <ul class="login-card__providers">
                {PROVIDERS
                    .iter()
                    .map(|(provider, label)| {
                        let href = provider_href(provider, redirect.as_deref());
                        let class = format!("login-button login-button--{provider}");
                        view! { <li><a href=href class=class>{*label}</a></li> }
                    })
                    .collect_view()}
            </ul>
            <p class="login-card__legal">
                "By signing in you agree to our " <a href="/terms">"Terms"</a> " and "
                <a href="/code-of-conduct">"Code of Conduct"</a> "."
            </p>
        </div>
    }
}

#[component]
pub fn LoginView() -> impl IntoView {
    let query = use_query_map();
    let redirect = query.get_untracked().get("r");

    view! {
        <Head meta=MetaInfo::titled("Log in")/>
        <main class="view view--login">
            <SignInCard heading="Sign in to Spectrum".to_owned() redirect=redirect/>
        </main>
    }
}

#[component]
pub fn CommunityLoginView(params: RouteParams) -> impl IntoView {
    let settings = expect_context::<ClientSettings>();

    params.community().map(|community| {
        let redirect = community_return_url(&settings.client_url, &community);
        view! {
            <Head meta=MetaInfo::titled("Log in")/>
            <main class="view view--community-login">
                <SignInCard heading=format!("Sign in to join {community}") redirect=Some(redirect)/>
            </main>
        }
    })
}
