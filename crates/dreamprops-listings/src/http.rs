//! HTTP transport for the data loader.
//!
//! [`HttpClient`] is the seam between the loader and the network. The
//! production implementation wraps `reqwest`; tests either point it at a
//! `wiremock` server or substitute their own implementation.

use std::time::Duration;

use async_trait::async_trait;

use crate::errors::LoadError;

/// HTTP response from a fetch operation.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body as text.
    pub body: String,
    /// Content-Type header value.
    pub content_type: Option<String>,
}

impl HttpResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal HTTP client used by the loader.
#[async_trait]
pub trait HttpClient: Send + Sync {
    /// Perform a GET request and return the response.
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError>;
}

/// HTTP client backed by `reqwest`.
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with an optional request timeout.
    pub fn new(user_agent: &str, timeout: Option<Duration>) -> Self {
        let mut builder = reqwest::Client::builder().user_agent(user_agent.to_string());
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Self {
            client: builder.build().unwrap_or_default(),
        }
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new("dreamprops/0.1", None)
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> Result<HttpResponse, LoadError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        let status = response.status().as_u16();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(format!("failed to read response body: {e}")))?;

        Ok(HttpResponse {
            status,
            body,
            content_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn success_range() {
        let mut resp = HttpResponse {
            status: 204,
            body: String::new(),
            content_type: None,
        };
        assert!(resp.is_success());
        resp.status = 301;
        assert!(!resp.is_success());
    }

    #[tokio::test]
    async fn reqwest_client_reads_status_and_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/props"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string("[]"),
            )
            .mount(&server)
            .await;

        let client = ReqwestHttpClient::default();
        let resp = client.get(&format!("{}/props", server.uri())).await.unwrap();
        assert_eq!(resp.status, 200);
        assert_eq!(resp.body, "[]");
        assert_eq!(resp.content_type.as_deref(), Some("application/json"));
    }

    #[tokio::test]
    async fn unreachable_host_is_transport_error() {
        let client = ReqwestHttpClient::new("test", Some(Duration::from_millis(500)));
        let err = client.get("http://127.0.0.1:1/props").await.unwrap_err();
        assert!(matches!(err, LoadError::Transport(_)));
    }
}
