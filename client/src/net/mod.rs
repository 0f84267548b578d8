//! Networking modules for the REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles REST calls made after hydration and `types` defines the
//! JSON schema shared with the API server.

pub mod api;
pub mod types;
