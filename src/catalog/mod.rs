//! Record types and snapshots
//!
//! Defines the four record collections served by the remote API and the
//! immutable snapshot that bundles them for a single index-page fetch.

mod models;
mod snapshot;
mod store;

pub use models::*;
pub use snapshot::{Snapshot, SnapshotSummary};
pub use store::SnapshotStore;
