//! Free-text search across every facet of a snapshot

use super::models::SearchQuery;
use crate::catalog::{Artist, ArtistId, Snapshot};
use std::collections::HashSet;

/// Find every artist whose name, or any joined location, date or relation
/// location, contains the query.
///
/// Facets are scanned in a fixed order (names, locations, dates, relation
/// locations) and each artist is kept only at its first hit, so the result
/// follows first-occurrence order across the concatenated passes. An empty
/// query returns every artist untouched.
pub fn search<'a>(snapshot: &'a Snapshot, query: &SearchQuery) -> Vec<&'a Artist> {
    if query.is_empty() {
        return snapshot.artists().iter().collect();
    }

    let mut hits = Hits::new(snapshot);

    for artist in snapshot.artists() {
        if query.matches(&artist.name) {
            hits.push(artist);
        }
    }

    for record in snapshot.locations() {
        for location in &record.locations {
            if query.matches(location) {
                hits.push_id(record.id);
            }
        }
    }

    for record in snapshot.dates() {
        for date in &record.dates {
            if query.matches(date) {
                hits.push_id(record.id);
            }
        }
    }

    for record in snapshot.relations() {
        if record.all_locations().any(|location| query.matches(location)) {
            hits.push_id(record.id);
        }
    }

    hits.artists
}

/// Ordered hit list, deduplicated by artist id
struct Hits<'a> {
    snapshot: &'a Snapshot,
    seen: HashSet<ArtistId>,
    artists: Vec<&'a Artist>,
}

impl<'a> Hits<'a> {
    fn new(snapshot: &'a Snapshot) -> Self {
        Self {
            snapshot,
            seen: HashSet::new(),
            artists: Vec::new(),
        }
    }

    fn push(&mut self, artist: &'a Artist) {
        if self.seen.insert(artist.id) {
            self.artists.push(artist);
        }
    }

    /// Records without a matching artist contribute nothing
    fn push_id(&mut self, id: ArtistId) {
        if let Some(artist) = self.snapshot.artist(id) {
            self.push(artist);
        }
    }
}
