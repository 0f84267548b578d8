//! Scroll restoration on navigation.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// Whether moving from `prev` to `next` pathname should reset scroll.
///
/// Only pathname changes count; query-only navigation (e.g. opening the
/// thread slider with `?thread=`) keeps the current position. The first
/// render never scrolls.
#[must_use]
pub fn should_reset_scroll(prev: Option<&str>, next: &str) -> bool {
    prev.is_some_and(|prev| prev != next)
}

/// Scroll the window back to the top-left corner.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }
}
