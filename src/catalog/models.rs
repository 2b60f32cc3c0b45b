//! Record type definitions

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Identifier shared by all four collections
pub type ArtistId = i64;

/// An artist (band or solo performer)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artist {
    /// Identifier assigned by the remote API
    pub id: ArtistId,
    /// Display name
    pub name: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Band members
    #[serde(default)]
    pub members: Vec<String>,
    /// Year the artist was formed
    #[serde(default, rename = "creationDate")]
    pub creation_date: i32,
    /// Release date of the first album
    #[serde(default, rename = "firstAlbum")]
    pub first_album: String,
    /// Relation category label
    #[serde(default)]
    pub relations: String,
    /// Concert date -> locations
    #[serde(default, rename = "datesLocations")]
    pub concerts: BTreeMap<String, Vec<String>>,
    /// Location category -> location
    #[serde(default)]
    pub location: BTreeMap<String, String>,
}

impl Artist {
    /// Create an artist with only an id and a name
    pub fn new(id: ArtistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: String::new(),
            members: vec![],
            creation_date: 0,
            first_album: String::new(),
            relations: String::new(),
            concerts: BTreeMap::new(),
            location: BTreeMap::new(),
        }
    }

    pub fn with_members(mut self, members: &[&str]) -> Self {
        self.members = members.iter().map(|m| m.to_string()).collect();
        self
    }
}

/// Concert locations for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub locations: Vec<String>,
    /// Link to the matching date record
    #[serde(default)]
    pub dates: String,
}

impl LocationRecord {
    pub fn new(id: ArtistId, locations: &[&str]) -> Self {
        Self {
            id,
            locations: locations.iter().map(|l| l.to_string()).collect(),
            dates: String::new(),
        }
    }
}

/// Concert dates for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRecord {
    pub id: ArtistId,
    #[serde(default)]
    pub dates: Vec<String>,
}

impl DateRecord {
    pub fn new(id: ArtistId, dates: &[&str]) -> Self {
        Self {
            id,
            dates: dates.iter().map(|d| d.to_string()).collect(),
        }
    }
}

/// Concert dates grouped with their locations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelationRecord {
    pub id: ArtistId,
    #[serde(default, rename = "datesLocations")]
    pub dates_locations: BTreeMap<String, Vec<String>>,
}

impl RelationRecord {
    pub fn new(id: ArtistId) -> Self {
        Self {
            id,
            dates_locations: BTreeMap::new(),
        }
    }

    /// Add the locations played on a date
    pub fn with_entry(mut self, date: &str, locations: &[&str]) -> Self {
        self.dates_locations.insert(
            date.to_string(),
            locations.iter().map(|l| l.to_string()).collect(),
        );
        self
    }

    /// Iterate every location string across all dates
    pub fn all_locations(&self) -> impl Iterator<Item = &str> {
        self.dates_locations
            .values()
            .flat_map(|locations| locations.iter().map(String::as_str))
    }
}
