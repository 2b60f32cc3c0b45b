//! Route definitions

use super::handlers;
use super::state::AppState;
use axum::{routing::get, Router};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Create the application router with all routes
pub fn create_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.settings.server.static_dir);

    Router::new()
        // Pages
        .route("/", get(handlers::index))
        .route("/artist", get(handlers::artist))
        .route("/about", get(handlers::artist))
        // API routes
        .route("/health", get(handlers::health))
        // Static files
        .nest_service("/static", static_files)
        // Add middleware
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        // Add state
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FetchError, SnapshotSource, StaticSource};
    use crate::catalog::{Artist, DateRecord, LocationRecord, RelationRecord, Snapshot};
    use crate::config::Settings;
    use async_trait::async_trait;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn sample() -> Snapshot {
        Snapshot::new(
            vec![
                Artist::new(1, "Queen").with_members(&["Freddie Mercury", "Brian May"]),
                Artist::new(2, "SOJA"),
                Artist::new(42, "Lonely"),
            ],
            vec![
                LocationRecord::new(1, &["london-uk", "tokyo-japan"]),
                LocationRecord::new(2, &["playa_del_carmen-mexico"]),
            ],
            vec![DateRecord::new(1, &["*23-08-2019"])],
            vec![RelationRecord::new(2).with_entry("02-03-2020", &["osaka-japan"])],
        )
    }

    fn app_with(source: Arc<dyn SnapshotSource>) -> (Router, AppState) {
        let state = AppState::with_source(Settings::default(), source).unwrap();
        (create_router(state.clone()), state)
    }

    fn app() -> Router {
        app_with(Arc::new(StaticSource::new(sample()))).0
    }

    async fn get(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    /// Fails every load, counting attempts
    struct FailingSource {
        loads: AtomicUsize,
    }

    #[async_trait]
    impl SnapshotSource for FailingSource {
        fn name(&self) -> &str {
            "failing"
        }

        async fn load(&self) -> Result<Arc<Snapshot>, FetchError> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            Err(FetchError::Status {
                collection: "artists",
                status: 500,
            })
        }
    }

    #[tokio::test]
    async fn test_index_lists_all_artists() {
        let (status, body) = get(app(), "/").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Queen"));
        assert!(body.contains("SOJA"));
        assert!(body.contains("Lonely"));
    }

    #[tokio::test]
    async fn test_index_search_html() {
        let (status, body) = get(app(), "/?search=Tokyo").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Queen"));
        assert!(!body.contains("SOJA"));
    }

    #[tokio::test]
    async fn test_index_search_json() {
        let (status, body) = get(app(), "/?Search=JAPAN&format=json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["query"], "japan");
        assert_eq!(json["number_of_results"], 2);
        assert_eq!(json["artists"][0]["name"], "Queen");
        assert_eq!(json["artists"][1]["name"], "SOJA");
    }

    #[tokio::test]
    async fn test_index_accepts_both_query_spellings() {
        let (status, body) = get(app(), "/?search=soja&Search=queen&format=json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["query"], "soja");
        assert_eq!(json["number_of_results"], 1);
        assert_eq!(json["artists"][0]["name"], "SOJA");
    }

    #[tokio::test]
    async fn test_index_search_no_match() {
        let (_, body) = get(app(), "/?search=nowhere&format=json").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["number_of_results"], 0);
    }

    #[tokio::test]
    async fn test_artist_page() {
        let (status, body) = get(app(), "/artist?id=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Queen"));
        assert!(body.contains("Freddie Mercury"));
        assert!(body.contains("tokyo"));
    }

    #[tokio::test]
    async fn test_about_route_is_artist_page() {
        let (status, body) = get(app(), "/about?id=2&format=json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["artist"]["name"], "SOJA");
        assert!(json["date"].is_null());
        assert!(!json["relation"].is_null());
    }

    #[tokio::test]
    async fn test_artist_json_absence() {
        let (status, body) = get(app(), "/artist?id=42&format=json").await;
        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["artist"]["name"], "Lonely");
        assert!(json["location"].is_null());
        assert!(json["date"].is_null());
        assert!(json["relation"].is_null());
    }

    #[tokio::test]
    async fn test_unknown_artist() {
        let (status, body) = get(app(), "/artist?id=abc").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("not found"));

        let (status, _) = get(app(), "/artist").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_artist_reuses_index_snapshot() {
        let (app, state) = app_with(Arc::new(StaticSource::new(sample())));
        assert!(state.snapshots.current().is_none());

        get(app.clone(), "/").await;
        let stored = state.snapshots.current().unwrap();

        get(app, "/artist?id=1").await;
        assert!(Arc::ptr_eq(&stored, &state.snapshots.current().unwrap()));
    }

    #[tokio::test]
    async fn test_required_fetch_failure_is_bad_gateway() {
        let source = Arc::new(FailingSource {
            loads: AtomicUsize::new(0),
        });
        let (app, state) = app_with(source.clone());

        let (status, _) = get(app.clone(), "/").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let (status, _) = get(app, "/artist?id=1").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);

        assert_eq!(source.loads.load(Ordering::SeqCst), 2);
        assert!(state.snapshots.current().is_none());
    }

    #[tokio::test]
    async fn test_health() {
        let (app, _) = app_with(Arc::new(StaticSource::new(sample())));

        let (status, body) = get(app.clone(), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["status"], "ok");
        assert!(json["snapshot"].is_null());

        get(app.clone(), "/").await;
        let (_, body) = get(app, "/health").await;
        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json["snapshot"]["artists"], 3);
    }

    #[tokio::test]
    async fn test_static_files() {
        let (status, body) = get(app(), "/static/style.css").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("body"));
    }
}
