//! One-shot fetch of the property collection.
//!
//! The loader issues a single GET, parses a JSON array of
//! [`PropertyRecord`]s, and only then replaces the store's contents. A failed
//! fetch leaves the store untouched. There is no retry.

use std::sync::Arc;

use dreamprops_core::PropertyRecord;
use serde::Serialize;
use tracing::{debug, error, info};

use crate::errors::LoadError;
use crate::http::HttpClient;
use crate::store::PropertyStore;

/// Progress of the startup fetch.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadState {
    /// Nothing requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Store populated with `count` records.
    Ready {
        /// Number of records loaded.
        count: usize,
    },
    /// Fetch failed; `message` is shown in the banner.
    Failed {
        /// Human-readable message.
        message: String,
    },
}

/// Fetches the property collection from the configured endpoint.
pub struct DataLoader {
    client: Arc<dyn HttpClient>,
    endpoint: String,
    state: LoadState,
}

impl DataLoader {
    /// Create a loader for `endpoint`.
    pub fn new(client: Arc<dyn HttpClient>, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            state: LoadState::Idle,
        }
    }

    /// Configured endpoint URL.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Latest reported state.
    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Fetch all records into `store`, reporting each state transition to
    /// `on_state`.
    ///
    /// Returns the number of records loaded.
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn fetch_all(
        &mut self,
        store: &mut PropertyStore,
        mut on_state: impl FnMut(&LoadState),
    ) -> Result<usize, LoadError> {
        self.transition(LoadState::Loading, &mut on_state);

        match self.fetch_records().await {
            Ok(records) => {
                let count = records.len();
                store.load(records);
                info!(count, "properties loaded");
                self.transition(LoadState::Ready { count }, &mut on_state);
                Ok(count)
            }
            Err(err) => {
                error!(error = %err, "error loading properties");
                let message = err.user_message().to_string();
                self.transition(LoadState::Failed { message }, &mut on_state);
                Err(err)
            }
        }
    }

    async fn fetch_records(&self) -> Result<Vec<PropertyRecord>, LoadError> {
        let response = self.client.get(self.endpoint()).await?;
        if !response.is_success() {
            return Err(LoadError::Status {
                status: response.status,
            });
        }
        if let Some(ct) = response.content_type.as_deref() {
            if !ct.contains("json") {
                debug!(content_type = ct, "endpoint did not declare JSON, parsing anyway");
            }
        }
        Ok(serde_json::from_str(&response.body)?)
    }

    fn transition(&mut self, next: LoadState, on_state: &mut impl FnMut(&LoadState)) {
        debug!(from = ?self.state, to = ?next, "load state transition");
        self.state = next;
        on_state(&self.state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{HttpResponse, ReqwestHttpClient};
    use assert_matches::assert_matches;
    use async_trait::async_trait;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn records_json() -> serde_json::Value {
        serde_json::json!([
            {"id": "1", "name": "Harbor Loft", "buildingNumber": "4", "city": "Boston",
             "state": "MA", "country": "USA", "ownerName": "Ann", "contactNumber": "555-1"},
            {"id": "2", "name": "Pine Cabin", "buildingNumber": "9", "city": "Denver",
             "state": "CO", "country": "USA", "ownerName": "Bo", "contactNumber": "555-2",
             "image": "https://img.example/2.jpg"}
        ])
    }

    fn loader_for(server: &MockServer) -> DataLoader {
        DataLoader::new(
            Arc::new(ReqwestHttpClient::default()),
            format!("{}/api/properties", server.uri()),
        )
    }

    #[tokio::test]
    async fn populates_store_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/properties"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json()))
            .expect(1)
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        let mut states = Vec::new();
        let count = loader
            .fetch_all(&mut store, |s| states.push(s.clone()))
            .await
            .unwrap();

        assert_eq!(count, 2);
        assert_eq!(store.all()[1].name, "Pine Cabin");
        assert_eq!(
            states,
            vec![LoadState::Loading, LoadState::Ready { count: 2 }]
        );
        assert_eq!(loader.state(), &LoadState::Ready { count: 2 });
    }

    #[tokio::test]
    async fn empty_array_is_ready_not_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        let count = loader.fetch_all(&mut store, |_| {}).await.unwrap();
        assert_eq!(count, 0);
        assert_eq!(store.page_count(), 0);
    }

    #[tokio::test]
    async fn non_2xx_fails_without_touching_store() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .expect(1)
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        let mut states = Vec::new();
        let err = loader
            .fetch_all(&mut store, |s| states.push(s.clone()))
            .await
            .unwrap_err();

        assert_matches!(err, LoadError::Status { status: 500 });
        assert!(store.is_empty());
        assert_matches!(states.last(), Some(LoadState::Failed { message }) if message.contains("Failed to load"));
    }

    #[tokio::test]
    async fn malformed_body_fails() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})),
            )
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        let err = loader.fetch_all(&mut store, |_| {}).await.unwrap_err();
        assert_matches!(err, LoadError::Malformed(_));
    }

    #[tokio::test]
    async fn partially_valid_array_loads_nothing() {
        let server = MockServer::start().await;
        let mut body = records_json();
        body.as_array_mut()
            .unwrap()
            .push(serde_json::json!({"id": "3", "name": "broken"}));
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        assert!(loader.fetch_all(&mut store, |_| {}).await.is_err());
        assert!(store.is_empty());
    }

    struct Unreachable;

    #[async_trait]
    impl HttpClient for Unreachable {
        async fn get(&self, _url: &str) -> Result<HttpResponse, LoadError> {
            Err(LoadError::Transport("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn transport_failure_reports_failed_state() {
        let mut loader = DataLoader::new(Arc::new(Unreachable), "http://nowhere.test");
        let mut store = PropertyStore::new(12);
        let err = loader.fetch_all(&mut store, |_| {}).await.unwrap_err();
        assert_matches!(err, LoadError::Transport(_));
        assert_matches!(loader.state(), LoadState::Failed { .. });
    }

    #[tokio::test]
    async fn refetch_overwrites_previous_contents() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(records_json()))
            .mount(&server)
            .await;

        let mut loader = loader_for(&server);
        let mut store = PropertyStore::new(12);
        store.apply_filter("boston", dreamprops_core::TypeHint::Unspecified);
        let _ = loader.fetch_all(&mut store, |_| {}).await.unwrap();
        assert_eq!(store.filtered_len(), 2);
    }
}
