//! Public user profiles and the signed-in user's settings.

#[cfg(test)]
#[path = "user_test.rs"]
mod user_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::components::head::Head;
use crate::components::loading::Loading;
use crate::net::types::UserProfile;
use crate::routing::params::RouteParams;
use crate::routing::view::Placeholder;
use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::meta::MetaInfo;

/// Title for a profile page: `Name (@username)`.
pub fn profile_title(profile: &UserProfile) -> String {
    format!("{} (@{})", profile.name, profile.username)
}

/// Whether the signed-in user may edit `username`'s settings.
pub fn owns_profile(auth: &AuthState, username: &str) -> bool {
    auth.user
        .as_ref()
        .and_then(|u| u.username.as_deref())
        .is_some_and(|own| own.eq_ignore_ascii_case(username))
}

/// Show a profile avatar full size in the gallery.
pub fn open_avatar(ui: &mut UiState, src: &str) {
    ui.open_gallery(vec![src.to_owned()], 0);
}

#[component]
pub fn UserProfileView(params: RouteParams) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    params.username().map(|username| {
        let profile = LocalResource::new(move || {
            let username = username.clone();
            async move { crate::net::api::fetch_user_profile(&username).await }
        });

        view! {
            <main class="view view--user">
                <Suspense fallback=move || view! { <Loading placeholder=Placeholder::Screen/> }>
                    {move || {
                        profile
                            .get()
                            .map(|profile| match profile {
                                Some(p) => {
                                    let title = profile_title(&p);
                                    view! {
                                        <Head meta=MetaInfo::titled(&title)/>
                                        <section class="profile">
                                            {p.profile_photo.clone().map(|src| {
                                                let full = src.clone();
                                                view! {
                                                    <img
                                                        class="profile__avatar"
                                                        src=src
                                                        alt=""
                                                        on:click=move |_| ui.update(|u| open_avatar(u, &full))
                                                    />
                                                }
                                            })}
                                            <h1 class="profile__name">{p.name.clone()}</h1>
                                            <p class="profile__username">{format!("@{}", p.username)}</p>
                                            <p class="profile__description">{p.description.clone().unwrap_or_default()}</p>
                                            <p class="profile__reputation">{format!("{} rep", p.total_reputation)}</p>
                                        </section>
                                    }
                                    .into_any()
                                }
                                None => view! {
                                    <Head meta=MetaInfo::titled("User not found")/>
                                    <div class="view-empty">
                                        <h1>"We couldn't find a user with this username"</h1>
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

#[component]
pub fn UserSettingsView(params: RouteParams) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    params.username().map(|username| {
        let profile_href = format!("/users/{username}");
        let allowed = {
            let username = username.clone();
            move || auth.with(|a| owns_profile(a, &username))
        };

        view! {
            <Head meta=MetaInfo::titled("Settings")/>
            <main class="view view--user-settings">
                <Show
                    when=allowed
                    fallback=move || view! {
                        <div class="view-empty">
                            <h1>"You don't have permission to edit this profile"</h1>
                            <a href=profile_href.clone()>"View profile"</a>
                        </div>
                    }
                >
                    <h1>{format!("Settings for @{username}")}</h1>
                    <section class="settings__section">
                        <h2>"Profile"</h2>
                        <p>"Update your name, bio and avatar."</p>
                    </section>
                    <section class="settings__section">
                        <h2>"Email notifications"</h2>
                        <p>"Choose which activity Spectrum emails you about."</p>
                    </section>
                </Show>
            </main>
        }
    })
}
