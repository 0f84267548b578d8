//! Captured path parameters and their typed accessors.
//!
//! ERROR HANDLING
//! ==============
//! Patterns accept any non-empty segment, so slug shape is checked here when a
//! view reads its parameters. Failures are `RouteError` values that views
//! render as `Err`, which the app-level error boundary turns into the error
//! fallback.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

/// Error produced when a view reads its route parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("missing route parameter `{0}`")]
    MissingParam(&'static str),
    #[error("invalid {kind} `{value}`")]
    InvalidSlug { kind: &'static str, value: String },
}

/// Name/value captures in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RouteParams {
    entries: Vec<(String, String)>,
}

impl RouteParams {
    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        self.entries.push((name.to_owned(), value.to_owned()));
    }

    /// Raw value of a parameter, if captured.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Read a required parameter and validate it as a slug.
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParam`] when absent, [`RouteError::InvalidSlug`]
    /// when the value is not a slug.
    pub fn slug(&self, name: &'static str, kind: &'static str) -> Result<String, RouteError> {
        let value = self.get(name).ok_or(RouteError::MissingParam(name))?;
        if is_slug(value) {
            Ok(value.to_owned())
        } else {
            Err(RouteError::InvalidSlug { kind, value: value.to_owned() })
        }
    }

    /// Read a required parameter without slug validation (opaque ids, tokens).
    ///
    /// # Errors
    ///
    /// [`RouteError::MissingParam`] when absent.
    pub fn required(&self, name: &'static str) -> Result<String, RouteError> {
        self.get(name).map(str::to_owned).ok_or(RouteError::MissingParam(name))
    }

    pub fn community(&self) -> Result<String, RouteError> {
        self.slug("communitySlug", "community")
    }

    pub fn channel(&self) -> Result<String, RouteError> {
        self.slug("channelSlug", "channel")
    }

    pub fn username(&self) -> Result<String, RouteError> {
        self.slug("username", "username")
    }

    pub fn thread_id(&self) -> Result<String, RouteError> {
        self.required("threadId")
    }

    /// Optional invite token on private channel join links.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.get("token").map(str::to_owned)
    }
}

/// ASCII letters, digits, `-` and `_`, at most 64 characters.
#[must_use]
pub fn is_slug(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 64
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-' || b == b'_')
}
