//! Collection and source traits

use super::error::FetchError;
use crate::catalog::{Artist, DateRecord, LocationRecord, RelationRecord, Snapshot};
use crate::config::ApiSettings;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::sync::Arc;

/// What a failed fetch means for the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPolicy {
    /// Failure aborts the whole request
    Required,
    /// Failure is logged and the collection becomes empty
    Optional,
}

/// `{"index": [...]}` wrapper used by every collection except artists
#[derive(Debug, Deserialize)]
struct Indexed<T> {
    index: Vec<T>,
}

/// A record type served by one API endpoint
pub trait Collection: DeserializeOwned + Send + 'static {
    /// Collection name used in logs and errors
    const NAME: &'static str;

    /// Failure policy for this collection
    const POLICY: FetchPolicy;

    /// Endpoint path relative to the API base URL
    fn path(api: &ApiSettings) -> &str;

    /// Decode a response body, by default from an `index` envelope
    fn decode(body: &str) -> serde_json::Result<Vec<Self>> {
        let indexed: Indexed<Self> = serde_json::from_str(body)?;
        Ok(indexed.index)
    }
}

impl Collection for Artist {
    const NAME: &'static str = "artists";
    const POLICY: FetchPolicy = FetchPolicy::Required;

    fn path(api: &ApiSettings) -> &str {
        &api.artists_path
    }

    /// Artists come back as a bare array
    fn decode(body: &str) -> serde_json::Result<Vec<Self>> {
        serde_json::from_str(body)
    }
}

impl Collection for LocationRecord {
    const NAME: &'static str = "locations";
    const POLICY: FetchPolicy = FetchPolicy::Optional;

    fn path(api: &ApiSettings) -> &str {
        &api.locations_path
    }
}

impl Collection for DateRecord {
    const NAME: &'static str = "dates";
    const POLICY: FetchPolicy = FetchPolicy::Optional;

    fn path(api: &ApiSettings) -> &str {
        &api.dates_path
    }
}

impl Collection for RelationRecord {
    const NAME: &'static str = "relations";
    const POLICY: FetchPolicy = FetchPolicy::Optional;

    fn path(api: &ApiSettings) -> &str {
        &api.relations_path
    }
}

/// Anything able to produce a complete snapshot
#[async_trait]
pub trait SnapshotSource: Send + Sync {
    /// Source name for logging
    fn name(&self) -> &str;

    /// Produce a snapshot of all four collections
    async fn load(&self) -> Result<Arc<Snapshot>, FetchError>;
}
