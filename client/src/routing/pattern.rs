//! Path patterns and the segment matcher behind the route table.
//!
//! DESIGN
//! ======
//! Patterns are `/`-separated segments; a segment starting with `:` captures
//! exactly one non-empty path segment under that name. Matching follows the
//! browser router conventions the URLs were designed around: trailing slash
//! ignored, literals compared ASCII case-insensitively, and non-exact patterns
//! matching on a segment-boundary prefix.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use super::params::RouteParams;

/// Error returned by [`PathPattern::parse`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("pattern must start with '/': {0}")]
    MissingLeadingSlash(String),
    #[error("empty parameter name in pattern: {0}")]
    EmptyParamName(String),
    #[error("duplicate parameter `{name}` in pattern: {pattern}")]
    DuplicateParam { pattern: String, name: String },
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Param(String),
}

/// A parsed route pattern such as `/:communitySlug/:channelSlug/settings`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string.
    ///
    /// # Errors
    ///
    /// Returns a [`PatternError`] when the pattern does not start with `/`,
    /// declares a parameter without a name, or repeats a parameter name.
    pub fn parse(source: &str) -> Result<Self, PatternError> {
        let Some(rest) = source.strip_prefix('/') else {
            return Err(PatternError::MissingLeadingSlash(source.to_owned()));
        };

        let mut segments = Vec::new();
        for raw in split_segments(rest) {
            if let Some(name) = raw.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyParamName(source.to_owned()));
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Param(existing) if existing == name));
                if duplicate {
                    return Err(PatternError::DuplicateParam { pattern: source.to_owned(), name: name.to_owned() });
                }
                segments.push(Segment::Param(name.to_owned()));
            } else {
                segments.push(Segment::Literal(raw.to_owned()));
            }
        }

        Ok(Self { source: source.to_owned(), segments })
    }

    /// The pattern as written.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match `path` against this pattern, returning captured parameters.
    ///
    /// With `exact` the whole path must be consumed; otherwise the pattern
    /// only has to match a prefix that ends on a segment boundary.
    #[must_use]
    pub fn matches(&self, path: &str, exact: bool) -> Option<RouteParams> {
        let path_segments = path_segments(path)?;

        if path_segments.len() < self.segments.len() {
            return None;
        }
        if exact && path_segments.len() != self.segments.len() {
            return None;
        }

        let mut params = RouteParams::default();
        for (segment, value) in self.segments.iter().zip(&path_segments) {
            match segment {
                Segment::Literal(lit) => {
                    if !lit.eq_ignore_ascii_case(value) {
                        return None;
                    }
                }
                Segment::Param(name) => {
                    if value.is_empty() {
                        return None;
                    }
                    params.insert(name, value);
                }
            }
        }
        Some(params)
    }
}

/// Strip query string and fragment from a location.
#[must_use]
pub fn strip_query(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}

/// Split a path into its segments. Returns `None` for relative paths.
///
/// The root path has no segments and a single trailing slash is ignored.
/// Interior empty segments (`/a//b`) are kept so they fail to match.
fn path_segments(path: &str) -> Option<Vec<&str>> {
    let rest = strip_query(path).strip_prefix('/')?;
    Some(split_segments(rest).collect())
}

fn split_segments(rest: &str) -> impl Iterator<Item = &str> {
    let trimmed = rest.strip_suffix('/').unwrap_or(rest);
    let empty = trimmed.is_empty();
    trimmed.split('/').filter(move |_| !empty)
}
