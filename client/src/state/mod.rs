//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `ui`, `toasts`) so chrome components can
//! depend on small focused models provided through Leptos context.

pub mod auth;
pub mod toasts;
pub mod ui;
