//! Document `<head>` title and description.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::util::meta::MetaInfo;

/// Sets title and description; later `Head`s further down the tree win.
#[component]
pub fn Head(meta: MetaInfo) -> impl IntoView {
    view! {
        <Title text=meta.title/>
        <Meta name="description" content=meta.description/>
    }
}
