//! Resets window scroll when the pathname changes.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::util::scroll::{scroll_to_top, should_reset_scroll};

#[component]
pub fn ScrollManager(children: Children) -> impl IntoView {
    let location = use_location();

    Effect::new(move |prev: Option<String>| {
        let pathname = location.pathname.get();
        if should_reset_scroll(prev.as_deref(), &pathname) {
            scroll_to_top();
        }
        pathname
    });

    children()
}
