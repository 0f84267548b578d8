//! REST API helpers for communicating with the API server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None` since the session and records are
//! only fetched once the app runs in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Option` outputs instead of panics so fetch failures degrade
//! into "not found" views rather than crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{ThreadDraft, ThreadSummary, User, UserProfile};

#[cfg(any(test, feature = "hydrate"))]
fn user_profile_endpoint(username: &str) -> String {
    format!("/api/users/{username}")
}

#[cfg(any(test, feature = "hydrate"))]
fn thread_endpoint(thread_id: &str) -> String {
    format!("/api/threads/{thread_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    format!("{action} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Option<T> {
    let resp = gloo_net::http::Request::get(url).send().await.ok()?;
    if !resp.ok() {
        log::debug!("GET {url} returned {}", resp.status());
        return None;
    }
    match resp.json::<T>().await {
        Ok(value) => Some(value),
        Err(e) => {
            log::debug!("GET {url} returned an unreadable body: {e}");
            None
        }
    }
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/auth/me").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

/// Fetch a public profile from `/api/users/{username}`.
pub async fn fetch_user_profile(username: &str) -> Option<UserProfile> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<UserProfile>(&user_profile_endpoint(username)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        None
    }
}

/// Fetch a thread header from `/api/threads/{thread_id}`.
pub async fn fetch_thread(thread_id: &str) -> Option<ThreadSummary> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<ThreadSummary>(&thread_endpoint(thread_id)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = thread_id;
        None
    }
}

/// Claim a username via `POST /api/users/me/username`.
///
/// # Errors
///
/// Returns an error string if the request fails or the name is taken.
pub async fn set_username(username: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/users/me/username")
            .json(&serde_json::json!({ "username": username }))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("set username", resp.status()));
        }
        resp.json::<User>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = username;
        Err("not available on server".to_owned())
    }
}

/// Publish a new thread via `POST /api/threads`.
///
/// # Errors
///
/// Returns an error string if the request fails.
pub async fn publish_thread(draft: &ThreadDraft) -> Result<ThreadSummary, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/threads")
            .json(draft)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("publish thread", resp.status()));
        }
        resp.json::<ThreadSummary>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = draft;
        Err("not available on server".to_owned())
    }
}
