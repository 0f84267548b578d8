//! Toast stack with timed auto-dismissal.

use leptos::prelude::*;

use crate::state::toasts::{ToastKind, ToastsState};
#[cfg(feature = "hydrate")]
use crate::state::toasts::TOAST_TIMEOUT_MS;

/// Push a toast and schedule its dismissal.
pub fn push_toast(toasts: RwSignal<ToastsState>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let id = toasts.try_update(|t| t.push(kind, message)).unwrap_or_default();

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        toasts.update(|t| t.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn Toasts() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastsState>>();

    view! {
        <div class="toasts" aria-live="polite">
            <For
                each=move || toasts.get().items
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    let class = format!("toast {}", toast.kind.css_modifier());
                    view! {
                        <div class=class on:click=move |_| toasts.update(|t| t.dismiss(id))>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
