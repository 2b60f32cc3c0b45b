//! Remote API access
//!
//! One generic fetch operation serves all four collections. Each collection
//! declares its endpoint, payload shape and [`FetchPolicy`]: the artist list
//! is required, while locations, dates and relations degrade to empty when
//! they cannot be fetched.

mod error;
mod fetcher;
mod sources;
mod traits;

pub use error::FetchError;
pub use fetcher::Fetcher;
pub use sources::{ApiSource, StaticSource};
pub use traits::*;
