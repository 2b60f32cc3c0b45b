//! Application state shared across handlers

use crate::api::{ApiSource, FetchError, Fetcher, SnapshotSource, StaticSource};
use crate::catalog::{Snapshot, SnapshotStore};
use crate::config::Settings;
use crate::network::HttpClient;
use std::sync::Arc;
use tracing::{debug, info};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Global settings
    pub settings: Arc<Settings>,
    /// Where snapshots come from
    pub source: Arc<dyn SnapshotSource>,
    /// Latest snapshot, reused by detail pages
    pub snapshots: Arc<SnapshotStore>,
    /// Template renderer
    pub templates: Arc<super::Templates>,
}

impl AppState {
    /// Create application state, reading from the fixture file when one is
    /// configured and from the remote API otherwise
    pub fn new(settings: Settings, client: HttpClient) -> anyhow::Result<Self> {
        let source: Arc<dyn SnapshotSource> = match settings.api.fixture_path {
            Some(ref path) => {
                info!("Serving fixture data from {}", path.display());
                Arc::new(StaticSource::from_file(path)?)
            }
            None => Arc::new(ApiSource::new(Fetcher::new(client, settings.api.clone()))),
        };

        Self::with_source(settings, source)
    }

    /// Create application state around an existing source
    pub fn with_source(
        settings: Settings,
        source: Arc<dyn SnapshotSource>,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            settings: Arc::new(settings),
            source,
            snapshots: Arc::new(SnapshotStore::new()),
            templates: Arc::new(super::Templates::new()?),
        })
    }

    /// Load a fresh snapshot and make it the latest
    pub async fn refresh(&self) -> Result<Arc<Snapshot>, FetchError> {
        let snapshot = self.source.load().await?;
        self.snapshots.replace(snapshot.clone());
        debug!("Snapshot refreshed from {} source", self.source.name());
        Ok(snapshot)
    }

    /// Latest snapshot, loading one if none has been fetched yet
    pub async fn latest(&self) -> Result<Arc<Snapshot>, FetchError> {
        match self.snapshots.current() {
            Some(snapshot) => Ok(snapshot),
            None => self.refresh().await,
        }
    }

    /// Get instance name
    pub fn instance_name(&self) -> &str {
        &self.settings.general.instance_name
    }
}
