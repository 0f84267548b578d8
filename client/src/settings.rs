//! Runtime settings shared by the server render and the hydrating client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server owns the values (environment configuration) and provides them
//! as Leptos context during SSR. The HTML shell also serializes them into a
//! `<meta>` tag so `hydrate()` can provide the identical context in the
//! browser; otherwise the maintenance branch could disagree between the two
//! renders and break hydration.

#[cfg(test)]
#[path = "settings_test.rs"]
mod settings_test;

use serde::{Deserialize, Serialize};

/// `name` attribute of the settings `<meta>` tag.
pub const SETTINGS_META_NAME: &str = "spectrum-settings";

pub const DEFAULT_CLIENT_URL: &str = "http://localhost:3000";

/// Error returned when the settings tag cannot be decoded.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("malformed settings payload: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Top-level rendering mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppMode {
    /// Static maintenance notice only.
    Maintenance,
    /// Full chrome and route tree.
    Normal,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSettings {
    /// When set, only the maintenance notice renders.
    #[serde(default)]
    pub maintenance_mode: bool,
    /// Public origin of the web client, used in login return URLs.
    #[serde(default = "default_client_url")]
    pub client_url: String,
}

fn default_client_url() -> String {
    DEFAULT_CLIENT_URL.to_owned()
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self { maintenance_mode: false, client_url: default_client_url() }
    }
}

impl ClientSettings {
    #[must_use]
    pub fn app_mode(&self) -> AppMode {
        if self.maintenance_mode { AppMode::Maintenance } else { AppMode::Normal }
    }

    /// Serialize for the settings `<meta content>` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Malformed`] if serialization fails.
    pub fn to_meta_content(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decode a settings `<meta content>` attribute.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Malformed`] for invalid JSON.
    pub fn from_meta_content(content: &str) -> Result<Self, SettingsError> {
        let mut settings: Self = serde_json::from_str(content)?;
        settings.client_url = settings.client_url.trim_end_matches('/').to_owned();
        Ok(settings)
    }

    /// Read settings from the current document, falling back to defaults.
    #[must_use]
    pub fn from_document() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let selector = format!("meta[name=\"{SETTINGS_META_NAME}\"]");
            let content = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|doc| doc.query_selector(&selector).ok().flatten())
                .and_then(|el| el.get_attribute("content"));
            match content.as_deref().map(Self::from_meta_content) {
                Some(Ok(settings)) => settings,
                Some(Err(e)) => {
                    log::warn!("ignoring settings meta tag: {e}");
                    Self::default()
                }
                None => Self::default(),
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}
