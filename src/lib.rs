//! Groupie Tracker: artists, concert locations and dates in one place
//!
//! Fetches four related collections from the Groupie Trackers API, joins
//! them by artist id and searches across every joined field.

pub mod api;
pub mod catalog;
pub mod config;
pub mod network;
pub mod search;
pub mod web;

pub use catalog::{Artist, ArtistId, Snapshot};
pub use config::Settings;
pub use search::{join, search, ArtistDetail, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default timeout for API requests in seconds
pub const DEFAULT_TIMEOUT: u64 = 10;
