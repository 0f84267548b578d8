//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the app chrome that surrounds the routed view (navbar,
//! modals, toasts, gallery, thread slider) and read/write shared state from
//! Leptos context providers.

pub mod auth_view_handler;
pub mod error_fallback;
pub mod gallery;
pub mod head;
pub mod loading;
pub mod maintenance;
pub mod modal_root;
pub mod navbar;
pub mod scroll_manager;
pub mod status;
pub mod theme_provider;
pub mod thread_slider;
pub mod toasts;
