//! Renders the single leaf view selected for the current location.
//!
//! SYSTEM CONTEXT
//! ==============
//! `leptos_router` supplies the location and the SSR route listing; every path
//! lands on [`Switch`], which asks [`RouteTable::resolve`] what to show. The
//! resolution is memoized so auth changes that do not alter the outcome do not
//! remount the view.
//!
//! TRADE-OFFS
//! ==========
//! Views are wrapped in `Suspense` with their own placeholder rather than a
//! shared spinner, so the loading shell resembles the page it precedes.

use leptos::prelude::*;
use leptos::tachys::view::any_view::{AnyView, IntoAny};
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::params::RouteParams;
use super::table::{Resolution, RouteTable};
use super::view::View;
use crate::components::head::Head;
use crate::components::loading::Loading;
use crate::settings::ClientSettings;
use crate::state::auth::AuthState;
use crate::util::meta::MetaInfo;
use crate::views::community::{
    ChannelSettingsView, ChannelView, CommunitySettingsView, CommunityView, PrivateChannelJoinView,
};
use crate::views::composer::ComposerView;
use crate::views::home::{DashboardView, ExploreView, NewCommunityView, NotificationsView, SearchView};
use crate::views::login::{CommunityLoginView, LoginView};
use crate::views::messages::DirectMessagesView;
use crate::views::pages::PagesView;
use crate::views::thread::ThreadView;
use crate::views::user::{UserProfileView, UserSettingsView};

#[component]
pub fn Switch() -> impl IntoView {
    let location = use_location();
    let auth = expect_context::<RwSignal<AuthState>>();
    let settings = expect_context::<ClientSettings>();

    let resolution = Memo::new(move |_| {
        let path = location.pathname.get();
        let status = auth.with(AuthState::status);
        RouteTable::spectrum().resolve(&path, status, &settings.client_url)
    });

    move || {
        let resolution = resolution.get();
        #[cfg(feature = "hydrate")]
        log::debug!("route resolved: {resolution:?}");

        match resolution {
            Resolution::Render { view: leaf, params } => {
                let placeholder = leaf.placeholder();
                view! {
                    <div class="route" data-view=leaf.name()>
                        <Suspense fallback=move || view! { <Loading placeholder=placeholder/> }>
                            {render_view(leaf, params)}
                        </Suspense>
                    </div>
                }
                .into_any()
            }
            Resolution::Redirect(to) => view! { <Redirect path=to/> }.into_any(),
            Resolution::Pending(placeholder) => view! { <Loading placeholder=placeholder/> }.into_any(),
            Resolution::NotFound => view! { <NotFound/> }.into_any(),
        }
    }
}

fn render_view(leaf: View, params: RouteParams) -> AnyView {
    match leaf {
        View::Dashboard => view! { <DashboardView/> }.into_any(),
        View::Pages => view! { <PagesView/> }.into_any(),
        View::NewCommunity => view! { <NewCommunityView/> }.into_any(),
        View::Composer => view! { <ComposerView/> }.into_any(),
        View::Search => view! { <SearchView/> }.into_any(),
        View::Login => view! { <LoginView/> }.into_any(),
        View::Explore => view! { <ExploreView/> }.into_any(),
        View::Notifications => view! { <NotificationsView/> }.into_any(),
        View::DirectMessages => view! { <DirectMessagesView params=params/> }.into_any(),
        View::Thread => view! { <ThreadView params=params/> }.into_any(),
        View::UserProfile => view! { <UserProfileView params=params/> }.into_any(),
        View::UserSettings => view! { <UserSettingsView params=params/> }.into_any(),
        View::ChannelSettings => view! { <ChannelSettingsView params=params/> }.into_any(),
        View::PrivateChannelJoin => view! { <PrivateChannelJoinView params=params/> }.into_any(),
        View::CommunitySettings => view! { <CommunitySettingsView params=params/> }.into_any(),
        View::CommunityLogin => view! { <CommunityLoginView params=params/> }.into_any(),
        View::Channel => view! { <ChannelView params=params/> }.into_any(),
        View::Community => view! { <CommunityView params=params/> }.into_any(),
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <Head meta=MetaInfo::titled("Page not found")/>
        <main class="view view--not-found">
            <h1>"We couldn't find that page"</h1>
            <a href="/">"Go home"</a>
        </main>
    }
}
