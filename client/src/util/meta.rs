//! Document title and description defaults.

#[cfg(test)]
#[path = "meta_test.rs"]
mod meta_test;

pub const APP_NAME: &str = "Spectrum";

const DEFAULT_DESCRIPTION: &str = "The community platform for the future.";
const MAINTENANCE_TITLE: &str = "Ongoing Maintenance - Spectrum";
const MAINTENANCE_DESCRIPTION: &str = "Spectrum is currently undergoing scheduled maintenance downtime. Please check https://twitter.com/withspectrum for ongoing updates.";

/// Title and description rendered into `<head>`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MetaInfo {
    pub title: String,
    pub description: String,
}

impl Default for MetaInfo {
    fn default() -> Self {
        Self { title: APP_NAME.to_owned(), description: DEFAULT_DESCRIPTION.to_owned() }
    }
}

impl MetaInfo {
    #[must_use]
    pub fn maintenance() -> Self {
        Self { title: MAINTENANCE_TITLE.to_owned(), description: MAINTENANCE_DESCRIPTION.to_owned() }
    }

    /// Page-specific title, suffixed with the app name.
    #[must_use]
    pub fn titled(title: &str) -> Self {
        if title.is_empty() || title == APP_NAME {
            return Self::default();
        }
        Self { title: format!("{title} · {APP_NAME}"), ..Self::default() }
    }
}
