//! Fetch error types

/// Errors raised while fetching one collection
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("invalid endpoint for {collection}: {source}")]
    Endpoint {
        collection: &'static str,
        source: url::ParseError,
    },

    #[error("request for {collection} failed: {source}")]
    Transport {
        collection: &'static str,
        source: reqwest::Error,
    },

    #[error("{collection} endpoint returned HTTP {status}")]
    Status { collection: &'static str, status: u16 },

    #[error("failed to decode {collection}: {source}")]
    Decode {
        collection: &'static str,
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Name of the collection that failed
    pub fn collection(&self) -> &'static str {
        match self {
            Self::Endpoint { collection, .. }
            | Self::Transport { collection, .. }
            | Self::Status { collection, .. }
            | Self::Decode { collection, .. } => collection,
        }
    }
}
