//! Route-level view shells.
//!
//! ARCHITECTURE
//! ============
//! Each view owns what its route needs (parameter parsing, page title, data
//! fetch) and nothing more; feature UIs live downstream of these shells.
//! Views that read slugs return `Result` so malformed parameters reach the
//! app error boundary.

pub mod community;
pub mod composer;
pub mod home;
pub mod login;
pub mod messages;
pub mod pages;
pub mod thread;
pub mod user;
