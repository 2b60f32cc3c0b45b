//! Search and join over a snapshot
//!
//! Both operations are pure: they read a [`Snapshot`](crate::catalog::Snapshot)
//! and never fail. Missing records are reported as absence.

mod join;
mod models;
mod searcher;

pub use join::{join, join_id, ArtistDetail};
pub use models::*;
pub use searcher::search;
