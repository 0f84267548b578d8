//! Theme preference persistence.
//!
//! The stored choice lives in `localStorage` under [`STORAGE_KEY`]; with no
//! stored choice the system `prefers-color-scheme` wins. The active theme is
//! mirrored onto `<html data-theme>` so CSS outside the Leptos tree follows.
//!
//! TRADE-OFFS
//! ==========
//! SSR always renders light; the preference is applied after hydration and
//! persisting it is best-effort.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

pub const STORAGE_KEY: &str = "spectrum:dark-theme";

/// Resolve the preference from a stored value and the system setting.
/// Unrecognized stored values are ignored.
pub fn resolve_preference(stored: Option<&str>, system_dark: bool) -> bool {
    match stored {
        Some("true") => true,
        Some("false") => false,
        _ => system_dark,
    }
}

/// Value written to storage for a preference.
pub fn stored_value(dark: bool) -> &'static str {
    if dark { "true" } else { "false" }
}

/// `data-theme` attribute value for a preference.
pub fn theme_attr(dark: bool) -> &'static str {
    if dark { "dark" } else { "light" }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Stored preference, else the system color-scheme preference.
pub fn read_preference() -> bool {
    #[cfg(feature = "hydrate")]
    {
        let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
        let system_dark = web_sys::window()
            .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .is_some_and(|mq| mq.matches());
        resolve_preference(stored.as_deref(), system_dark)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        false
    }
}

/// Mirror the theme onto the `<html>` element.
pub fn apply(dark: bool) {
    #[cfg(feature = "hydrate")]
    {
        let root = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element());
        if let Some(root) = root {
            if root.set_attribute("data-theme", theme_attr(dark)).is_err() {
                log::debug!("could not set data-theme");
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme_attr(dark);
    }
}

/// Flip the theme, apply it, and persist the choice.
pub fn toggle(current: bool) -> bool {
    let next = !current;
    apply(next);
    #[cfg(feature = "hydrate")]
    {
        let persisted = local_storage().is_some_and(|s| s.set_item(STORAGE_KEY, stored_value(next)).is_ok());
        if !persisted {
            log::debug!("theme preference not persisted");
        }
    }
    next
}
