//! Theme context provider wrapping the whole app.

use leptos::prelude::*;

use crate::util::dark_mode;
use crate::util::theme::Theme;

/// Active theme mode, provided as `RwSignal<ThemeMode>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ThemeMode {
    pub dark: bool,
}

/// Provides [`ThemeMode`] and exposes the palette as CSS custom properties.
///
/// Starts light on both server and client so hydration matches; the stored
/// preference is applied right after mount.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let mode = RwSignal::new(ThemeMode::default());
    provide_context(mode);

    Effect::new(move || {
        let dark = dark_mode::read_preference();
        if dark {
            mode.set(ThemeMode { dark });
        }
        dark_mode::apply(dark);
    });

    let style = move || Theme::for_mode(mode.get().dark).css_vars();

    view! {
        <div class="theme-root" style=style>
            {children()}
        </div>
    }
}
