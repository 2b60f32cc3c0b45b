//! HTTP request handlers

use super::state::AppState;
use crate::catalog::Artist;
use crate::search::{join, search, SearchQuery};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tera::Context;

/// Query parameters for the index page
#[derive(Debug, Default, Deserialize)]
pub struct IndexParams {
    /// Search query
    pub search: Option<String>,
    /// Search query under the original form field name
    #[serde(rename = "Search")]
    pub search_field: Option<String>,
    /// Output format
    pub format: Option<String>,
}

impl IndexParams {
    /// Raw query, preferring `search` over `Search` when both are given
    pub fn query(&self) -> Option<&str> {
        self.search.as_deref().or(self.search_field.as_deref())
    }
}

/// Query parameters for the artist page
#[derive(Debug, Default, Deserialize)]
pub struct ArtistParams {
    /// Artist identifier
    pub id: Option<String>,
    /// Output format
    pub format: Option<String>,
}

/// Search results response for JSON format
#[derive(Debug, Serialize)]
pub struct SearchResponse<'a> {
    pub query: String,
    pub number_of_results: usize,
    pub artists: Vec<&'a Artist>,
}

fn render(state: &AppState, template: &str, ctx: &Context, status: StatusCode) -> Response {
    match state.templates.render_with_context(template, ctx) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!("Template error: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Template error").into_response()
        }
    }
}

fn unavailable(e: impl std::fmt::Display) -> Response {
    tracing::error!("Artist data unavailable: {}", e);
    (StatusCode::BAD_GATEWAY, "Artist data is unavailable").into_response()
}

/// Index page: fetch a fresh snapshot, then list or search artists
pub async fn index(State(state): State<AppState>, Query(params): Query<IndexParams>) -> Response {
    let snapshot = match state.refresh().await {
        Ok(snapshot) => snapshot,
        Err(e) => return unavailable(e),
    };

    let query = SearchQuery::from_param(params.query());
    let artists = search(&snapshot, &query);

    if !query.is_empty() {
        tracing::debug!("Search '{}' matched {} artists", query, artists.len());
    }

    match params.format.as_deref() {
        Some("json") => Json(SearchResponse {
            query: query.to_string(),
            number_of_results: artists.len(),
            artists,
        })
        .into_response(),
        _ => {
            let mut ctx = Context::new();
            ctx.insert("instance_name", state.instance_name());
            ctx.insert("query", query.as_str());
            ctx.insert("artists", &artists);
            ctx.insert("fetched_at", &snapshot.fetched_at().to_rfc3339());

            render(&state, "index.html", &ctx, StatusCode::OK)
        }
    }
}

/// Artist page: join every record for one id from the latest snapshot
pub async fn artist(State(state): State<AppState>, Query(params): Query<ArtistParams>) -> Response {
    let snapshot = match state.latest().await {
        Ok(snapshot) => snapshot,
        Err(e) => return unavailable(e),
    };

    let detail = join(&snapshot, params.id.as_deref());
    let status = if detail.artist.is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };

    match params.format.as_deref() {
        Some("json") => (status, Json(detail)).into_response(),
        _ => {
            let mut ctx = Context::new();
            ctx.insert("instance_name", state.instance_name());
            ctx.insert("artist", &detail.artist);
            ctx.insert("location", &detail.location);
            ctx.insert("date", &detail.date);
            ctx.insert("relation", &detail.relation);

            render(&state, "artist.html", &ctx, status)
        }
    }
}

/// Health check handler
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "version": crate::VERSION,
        "snapshot": state.snapshots.current().map(|s| s.summary()),
    }))
}
