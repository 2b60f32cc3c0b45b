//! Web server module
//!
//! Provides the HTML pages and JSON views for Groupie Tracker.

mod handlers;
mod routes;
mod state;
mod templates;

pub use routes::create_router;
pub use state::AppState;
pub use templates::Templates;
