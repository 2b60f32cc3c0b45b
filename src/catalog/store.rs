//! Holder for the most recently fetched snapshot

use super::snapshot::Snapshot;
use std::sync::{Arc, PoisonError, RwLock};

/// Latest snapshot, replaced wholesale on every index-page fetch.
///
/// Readers get their own `Arc` to a complete snapshot, so a concurrent
/// replacement can never hand them a mix of two fetches.
#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<Snapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Swap in a new snapshot
    pub fn replace(&self, snapshot: Arc<Snapshot>) {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        *current = Some(snapshot);
    }

    /// Get the latest snapshot, if any has been stored
    pub fn current(&self) -> Option<Arc<Snapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
