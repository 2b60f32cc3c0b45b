//! Search query and identifier token models

use crate::catalog::ArtistId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A normalized free-text query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Normalize a raw query by lowercasing it. Whitespace is kept, so
    /// the query still has to appear verbatim in a field.
    pub fn new(raw: &str) -> Self {
        Self(raw.to_lowercase())
    }

    /// Build from an optional request parameter
    pub fn from_param(raw: Option<&str>) -> Self {
        raw.map(Self::new).unwrap_or_default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Case-insensitive substring test against a field
    pub fn matches(&self, haystack: &str) -> bool {
        haystack.to_lowercase().contains(&self.0)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Parse an identifier token from a request.
///
/// Returns `None` for absent, blank or non-numeric tokens.
pub fn parse_artist_id(token: Option<&str>) -> Option<ArtistId> {
    token.and_then(|t| t.trim().parse().ok())
}
