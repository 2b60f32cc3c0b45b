//! Immutable snapshot of the four collections

use super::models::*;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashMap;

/// The four collections as fetched together at one point in time.
///
/// A snapshot never changes after construction. Each collection is indexed by
/// identifier once, pointing at the first record with that identifier, so
/// lookups always agree with a first-match scan in collection order.
#[derive(Debug, Clone)]
pub struct Snapshot {
    artists: Vec<Artist>,
    locations: Vec<LocationRecord>,
    dates: Vec<DateRecord>,
    relations: Vec<RelationRecord>,
    index: SnapshotIndex,
    fetched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
struct SnapshotIndex {
    artists: HashMap<ArtistId, usize>,
    locations: HashMap<ArtistId, usize>,
    dates: HashMap<ArtistId, usize>,
    relations: HashMap<ArtistId, usize>,
}

impl SnapshotIndex {
    fn first_positions(ids: impl Iterator<Item = ArtistId>) -> HashMap<ArtistId, usize> {
        let mut positions = HashMap::new();
        for (position, id) in ids.enumerate() {
            positions.entry(id).or_insert(position);
        }
        positions
    }
}

/// Summary shown by the health endpoint
#[derive(Debug, Clone, Serialize)]
pub struct SnapshotSummary {
    pub artists: usize,
    pub locations: usize,
    pub dates: usize,
    pub relations: usize,
    pub fetched_at: DateTime<Utc>,
}

impl Snapshot {
    /// Build a snapshot, indexing every collection by identifier
    pub fn new(
        artists: Vec<Artist>,
        locations: Vec<LocationRecord>,
        dates: Vec<DateRecord>,
        relations: Vec<RelationRecord>,
    ) -> Self {
        let index = SnapshotIndex {
            artists: SnapshotIndex::first_positions(artists.iter().map(|a| a.id)),
            locations: SnapshotIndex::first_positions(locations.iter().map(|l| l.id)),
            dates: SnapshotIndex::first_positions(dates.iter().map(|d| d.id)),
            relations: SnapshotIndex::first_positions(relations.iter().map(|r| r.id)),
        };

        Self {
            artists,
            locations,
            dates,
            relations,
            index,
            fetched_at: Utc::now(),
        }
    }

    /// A snapshot with no records at all
    pub fn empty() -> Self {
        Self::new(vec![], vec![], vec![], vec![])
    }

    pub fn artists(&self) -> &[Artist] {
        &self.artists
    }

    pub fn locations(&self) -> &[LocationRecord] {
        &self.locations
    }

    pub fn dates(&self) -> &[DateRecord] {
        &self.dates
    }

    pub fn relations(&self) -> &[RelationRecord] {
        &self.relations
    }

    /// When the snapshot was built
    pub fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// First artist with the given id
    pub fn artist(&self, id: ArtistId) -> Option<&Artist> {
        self.index.artists.get(&id).map(|&i| &self.artists[i])
    }

    /// First location record with the given id
    pub fn location(&self, id: ArtistId) -> Option<&LocationRecord> {
        self.index.locations.get(&id).map(|&i| &self.locations[i])
    }

    /// First date record with the given id
    pub fn date(&self, id: ArtistId) -> Option<&DateRecord> {
        self.index.dates.get(&id).map(|&i| &self.dates[i])
    }

    /// First relation record with the given id
    pub fn relation(&self, id: ArtistId) -> Option<&RelationRecord> {
        self.index.relations.get(&id).map(|&i| &self.relations[i])
    }

    pub fn summary(&self) -> SnapshotSummary {
        SnapshotSummary {
            artists: self.artists.len(),
            locations: self.locations.len(),
            dates: self.dates.len(),
            relations: self.relations.len(),
            fetched_at: self.fetched_at,
        }
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::empty()
    }
}
