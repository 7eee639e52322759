//! HTTP transport gateway
//!
//! Issues authenticated requests against the tracker and classifies every
//! outcome into success-with-bytes or a single typed failure. The
//! transport does not retry, log, or cache: resilience decisions belong
//! to callers, and a timed-out request surfaces as a network failure
//! exactly once.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::Deserialize;
use serde_json::Value;
use shoptrack_domain::{ApiConfig, Result, ShopTrackError};

use crate::errors::InfraError;

/// Header carrying the shared secret.
const API_KEY_HEADER: &str = "X-API-Key";

/// Structured error body the tracker sends on most non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Authenticated HTTP gateway to one tracker deployment.
#[derive(Clone)]
pub struct Transport {
    client: ReqwestClient,
    config: ApiConfig,
}

impl Transport {
    /// Start building a transport for the given configuration.
    pub fn builder(config: ApiConfig) -> TransportBuilder {
        TransportBuilder { config, user_agent: None }
    }

    /// Convenience constructor with default configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        Self::builder(config).build()
    }

    /// Issue one request. On any 2xx status the body bytes pass through
    /// untouched; a non-2xx response becomes an `Http` failure with the
    /// parsed `{"detail": ...}` body when present, and connection-level
    /// problems become a `Network` failure.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> Result<Vec<u8>> {
        let url = self.config.endpoint(path);

        let mut request = self.client.request(method, &url);
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response =
            request.send().await.map_err(|err| ShopTrackError::from(InfraError::from(err)))?;
        let status = response.status();
        let bytes = response
            .bytes()
            .await
            .map_err(|err| ShopTrackError::from(InfraError::from(err)))?;

        if status.is_success() {
            return Ok(bytes.to_vec());
        }
        Err(http_failure(status, &bytes))
    }
}

fn http_failure(status: StatusCode, body: &[u8]) -> ShopTrackError {
    let detail = serde_json::from_slice::<ErrorBody>(body).map(|parsed| parsed.detail).unwrap_or_else(
        |_| status.canonical_reason().unwrap_or("request failed").to_string(),
    );
    ShopTrackError::Http { status: status.as_u16(), detail }
}

/// Builder for [`Transport`].
#[derive(Debug)]
pub struct TransportBuilder {
    config: ApiConfig,
    user_agent: Option<String>,
}

impl TransportBuilder {
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    pub fn build(self) -> Result<Transport> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        if !self.config.api_key.is_empty() {
            let key = HeaderValue::from_str(&self.config.api_key).map_err(|_| {
                ShopTrackError::Config("API key contains non-header characters".to_string())
            })?;
            headers.insert(API_KEY_HEADER, key);
        }

        let agent = self
            .user_agent
            .unwrap_or_else(|| format!("shoptrack/{}", env!("CARGO_PKG_VERSION")));

        let client = ReqwestClient::builder()
            .timeout(self.config.timeout)
            .default_headers(headers)
            .user_agent(agent)
            .no_proxy()
            .build()
            .map_err(|err| ShopTrackError::from(InfraError::from(err)))?;

        Ok(Transport { client, config: self.config })
    }
}

#[cfg(test)]
mod tests {
    use std::net::TcpListener;

    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn transport_for(server: &MockServer) -> Transport {
        Transport::new(ApiConfig::new(server.uri(), "test-secret")).expect("transport")
    }

    #[tokio::test]
    async fn passes_bytes_through_on_success() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/tickets"))
            .and(header("X-API-Key", "test-secret"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[1,2,3]"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let bytes = transport.send(Method::GET, "/api/v1/tickets", &[], None).await.expect("bytes");
        assert_eq!(bytes, b"[1,2,3]");
    }

    #[tokio::test]
    async fn sends_json_bodies_with_content_type() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/v1/tickets"))
            .and(header("Content-Type", "application/json"))
            .respond_with(ResponseTemplate::new(201).set_body_string("{}"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let body = json!({"client_key": "acme"});
        transport.send(Method::POST, "/api/v1/tickets", &[], Some(&body)).await.expect("created");
    }

    #[tokio::test]
    async fn appends_query_parameters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/hardware"))
            .and(query_param("limit", "50"))
            .and(query_param("offset", "100"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .expect(1)
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let query = [("limit", "50".to_string()), ("offset", "100".to_string())];
        transport.send(Method::GET, "/api/v1/hardware", &query, None).await.expect("listing");
    }

    #[tokio::test]
    async fn parses_structured_error_bodies() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(404).set_body_json(json!({"detail": "no such ticket"})),
            )
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let err = transport.send(Method::GET, "/api/v1/tickets/9", &[], None).await.unwrap_err();
        assert_eq!(err, ShopTrackError::Http { status: 404, detail: "no such ticket".into() });
    }

    #[tokio::test]
    async fn synthesizes_a_generic_failure_without_a_parseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500).set_body_string("<html>oops</html>"))
            .mount(&server)
            .await;

        let transport = transport_for(&server);
        let err = transport.send(Method::GET, "/api/v1/tickets", &[], None).await.unwrap_err();
        match err {
            ShopTrackError::Http { status: 500, detail } => {
                assert!(!detail.is_empty());
                assert!(!detail.contains("html"));
            }
            other => panic!("expected http failure, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn surfaces_connection_failures_as_network_errors() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener); // release the port so requests fail with ECONNREFUSED
        let config = ApiConfig::new(format!("http://{addr}"), "test-secret");

        let transport = Transport::new(config).expect("transport");
        let err = transport.send(Method::GET, "/api/v1/tickets", &[], None).await.unwrap_err();
        assert!(matches!(err, ShopTrackError::Network(_)));
    }
}
