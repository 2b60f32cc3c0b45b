//! Snapshot sources

use super::error::FetchError;
use super::fetcher::Fetcher;
use super::traits::SnapshotSource;
use crate::catalog::{Artist, DateRecord, LocationRecord, RelationRecord, Snapshot};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Builds a fresh snapshot from the remote API on every load
pub struct ApiSource {
    fetcher: Fetcher,
}

impl ApiSource {
    pub fn new(fetcher: Fetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl SnapshotSource for ApiSource {
    fn name(&self) -> &str {
        "api"
    }

    async fn load(&self) -> Result<Arc<Snapshot>, FetchError> {
        let start = Instant::now();

        let (artists, locations, dates, relations) = futures::join!(
            self.fetcher.fetch::<Artist>(),
            self.fetcher.fetch::<LocationRecord>(),
            self.fetcher.fetch::<DateRecord>(),
            self.fetcher.fetch::<RelationRecord>(),
        );

        let snapshot = Snapshot::new(artists?, locations?, dates?, relations?);

        info!(
            "Loaded snapshot with {} artists in {:?}",
            snapshot.artists().len(),
            start.elapsed()
        );

        Ok(Arc::new(snapshot))
    }
}

/// Local fixture layout: the four collections side by side
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Fixture {
    artists: Vec<Artist>,
    locations: Vec<LocationRecord>,
    dates: Vec<DateRecord>,
    relations: Vec<RelationRecord>,
}

/// Serves one fixed snapshot, for offline use and tests
pub struct StaticSource {
    snapshot: Arc<Snapshot>,
}

impl StaticSource {
    pub fn new(snapshot: Snapshot) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
        }
    }

    /// Read a JSON fixture with `artists`, `locations`, `dates` and
    /// `relations` arrays; missing arrays are empty
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        Self::from_json(&content).with_context(|| format!("parsing fixture {}", path.display()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let fixture: Fixture = serde_json::from_str(json)?;
        Ok(Self::new(Snapshot::new(
            fixture.artists,
            fixture.locations,
            fixture.dates,
            fixture.relations,
        )))
    }
}

#[async_trait]
impl SnapshotSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn load(&self) -> Result<Arc<Snapshot>, FetchError> {
        Ok(self.snapshot.clone())
    }
}
