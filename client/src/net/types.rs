//! Wire DTOs for the client/API boundary.
//!
//! DESIGN
//! ======
//! Optional fields default when absent so older API responses still decode;
//! views only read what they render.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// An authenticated user as returned by the `/api/auth/me` endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Public handle; `None` until the user picks one.
    #[serde(default)]
    pub username: Option<String>,
    /// Avatar image URL, if available.
    #[serde(default, rename = "profilePhoto")]
    pub profile_photo: Option<String>,
}

/// Public profile data for `/users/:username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub username: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "profilePhoto")]
    pub profile_photo: Option<String>,
    #[serde(default, rename = "totalReputation")]
    pub total_reputation: u64,
}

/// Thread header data for `/thread/:threadId` and the thread slider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "communitySlug")]
    pub community_slug: String,
    #[serde(rename = "channelSlug")]
    pub channel_slug: String,
    #[serde(default, rename = "messageCount")]
    pub message_count: u64,
}

/// Composer payload for `POST /api/threads`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadDraft {
    #[serde(rename = "communitySlug")]
    pub community_slug: String,
    #[serde(rename = "channelSlug")]
    pub channel_slug: String,
    pub title: String,
    #[serde(default)]
    pub body: String,
}
