//! Generic collection fetcher

use super::error::FetchError;
use super::traits::{Collection, FetchPolicy};
use crate::config::ApiSettings;
use crate::network::HttpClient;
use std::time::Instant;
use tracing::{debug, warn};

/// Fetches any [`Collection`] from the configured API
#[derive(Clone)]
pub struct Fetcher {
    client: HttpClient,
    api: ApiSettings,
}

impl Fetcher {
    pub fn new(client: HttpClient, api: ApiSettings) -> Self {
        Self { client, api }
    }

    /// Fetch one collection, applying its failure policy.
    ///
    /// Optional collections never return an error: any failure is logged
    /// and an empty collection is returned instead.
    pub async fn fetch<T: Collection>(&self) -> Result<Vec<T>, FetchError> {
        match self.try_fetch::<T>().await {
            Ok(records) => Ok(records),
            Err(e) => match T::POLICY {
                FetchPolicy::Required => Err(e),
                FetchPolicy::Optional => {
                    warn!("Using empty {} collection: {}", T::NAME, e);
                    Ok(Vec::new())
                }
            },
        }
    }

    /// Fetch one collection, surfacing every failure
    pub async fn try_fetch<T: Collection>(&self) -> Result<Vec<T>, FetchError> {
        let url = self
            .api
            .endpoint(T::path(&self.api))
            .map_err(|source| FetchError::Endpoint {
                collection: T::NAME,
                source,
            })?;

        let start = Instant::now();
        let response = self
            .client
            .get(url.as_str())
            .await
            .map_err(|source| FetchError::Transport {
                collection: T::NAME,
                source,
            })?;

        if !response.is_success() {
            return Err(FetchError::Status {
                collection: T::NAME,
                status: response.status,
            });
        }

        let records = T::decode(&response.text).map_err(|source| FetchError::Decode {
            collection: T::NAME,
            source,
        })?;

        debug!(
            "Fetched {} {} from {} in {:?}",
            records.len(),
            T::NAME,
            response.url,
            start.elapsed()
        );

        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Artist, DateRecord, LocationRecord, RelationRecord};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn fetcher_for(server: &MockServer) -> Fetcher {
        let api = ApiSettings {
            base_url: format!("{}/api", server.uri()),
            ..Default::default()
        };
        Fetcher::new(HttpClient::new().unwrap(), api)
    }

    #[tokio::test]
    async fn test_fetch_artists() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artists"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"[{"id": 1, "name": "Queen", "members": ["Freddie Mercury"]}]"#,
            ))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let artists = fetcher.fetch::<Artist>().await.unwrap();
        assert_eq!(artists.len(), 1);
        assert_eq!(artists[0].members, vec!["Freddie Mercury".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_indexed_collection() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/relation"))
            .respond_with(ResponseTemplate::new(200).set_body_string(
                r#"{"index": [{"id": 1, "datesLocations": {"28-01-2020": ["london-uk"]}}]}"#,
            ))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let relations = fetcher.fetch::<RelationRecord>().await.unwrap();
        assert_eq!(relations.len(), 1);
        assert_eq!(relations[0].all_locations().collect::<Vec<_>>(), vec!["london-uk"]);
    }

    #[tokio::test]
    async fn test_required_collection_fails_hard() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artists"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let err = fetcher.fetch::<Artist>().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::Status {
                collection: "artists",
                status: 500
            }
        ));
    }

    #[tokio::test]
    async fn test_required_collection_decode_failure() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/artists"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);
        let err = fetcher.fetch::<Artist>().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode { .. }));
    }

    #[tokio::test]
    async fn test_optional_collections_degrade_to_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/locations"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/api/dates"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let fetcher = fetcher_for(&server);

        assert!(fetcher.fetch::<LocationRecord>().await.unwrap().is_empty());
        assert!(fetcher.fetch::<DateRecord>().await.unwrap().is_empty());
        assert!(fetcher.try_fetch::<LocationRecord>().await.is_err());
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let api = ApiSettings {
            // Nothing listens on port 9 (discard) in the test environment
            base_url: "http://127.0.0.1:9/api/".to_string(),
            ..Default::default()
        };
        let fetcher = Fetcher::new(HttpClient::new().unwrap(), api);

        let err = fetcher.try_fetch::<Artist>().await.unwrap_err();
        assert!(matches!(err, FetchError::Transport { .. }));
        assert!(fetcher.fetch::<DateRecord>().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_bad_base_url() {
        let api = ApiSettings {
            base_url: "nowhere".to_string(),
            ..Default::default()
        };
        let fetcher = Fetcher::new(HttpClient::new().unwrap(), api);

        let err = fetcher.fetch::<Artist>().await.unwrap_err();
        assert!(matches!(err, FetchError::Endpoint { .. }));
    }
}
