//! Per-artist join across the four collections

use super::models::parse_artist_id;
use crate::catalog::{Artist, ArtistId, DateRecord, LocationRecord, RelationRecord, Snapshot};
use serde::Serialize;

/// Everything known about one artist id
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtistDetail<'a> {
    pub artist: Option<&'a Artist>,
    pub location: Option<&'a LocationRecord>,
    pub date: Option<&'a DateRecord>,
    pub relation: Option<&'a RelationRecord>,
}

impl ArtistDetail<'_> {
    /// True when no collection had a record for the id
    pub fn is_empty(&self) -> bool {
        self.artist.is_none()
            && self.location.is_none()
            && self.date.is_none()
            && self.relation.is_none()
    }
}

/// Join the records for a request token; unparsable tokens join nothing
pub fn join<'a>(snapshot: &'a Snapshot, token: Option<&str>) -> ArtistDetail<'a> {
    match parse_artist_id(token) {
        Some(id) => join_id(snapshot, id),
        None => ArtistDetail::default(),
    }
}

/// Join the first record of each collection carrying `id`
pub fn join_id(snapshot: &Snapshot, id: ArtistId) -> ArtistDetail<'_> {
    ArtistDetail {
        artist: snapshot.artist(id),
        location: snapshot.location(id),
        date: snapshot.date(id),
        relation: snapshot.relation(id),
    }
}
