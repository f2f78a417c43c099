//! # hcc-api
//!
//! Authenticated REST client for the HCC analysis service (ORDS).
//!
//! One [`ApiClient`] is constructed at startup and cached for the process
//! lifetime. Every named operation is a thin specialization of the single
//! [`ApiClient::request`] primitive: basic auth, the configured timeout, and
//! the TLS-verification flag apply to every call with no bypass.
//!
//! Operations are grouped by domain, each module extending [`ApiClient`]
//! with its endpoints:
//! - [`analysis`] (start, status, latest)
//! - [`recommendations`] (list/filter, detail)
//! - [`execution`] (single, batch, status, history)
//! - [`statistics`] (aggregates, savings by strategy, per-table)
//! - [`strategies`] (list, detail, compare)
//! - [`export`] (recommendation CSV)

pub mod analysis;
pub mod execution;
pub mod export;
pub mod recommendations;
pub mod statistics;
pub mod strategies;

mod error;
mod models;

pub use error::ApiError;
pub use models::{
    AnalysisSummary, CompressionStatistics, ExecutionOptions, ExecutionRecord, ExecutionStarted,
    HistoryQuery, Recommendation, RecommendationFilter, StrategyComparison, StrategyDetails,
    StrategyOverview, StrategySavings,
};

use hcc_config::ApiConfig;
use serde::de::DeserializeOwned;

// ── Client ─────────────────────────────────────────────────────────

/// HTTP client for the analysis service.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl ApiClient {
    /// Create a client from the API configuration section.
    ///
    /// The timeout and TLS-verification flag are baked into the underlying
    /// client, so every subsequent call uses exactly this configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying `reqwest::Client` fails to build.
    #[must_use]
    pub fn new(config: &ApiConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .danger_accept_invalid_certs(!config.verify_tls)
            .build()
            .expect("reqwest client should build");

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        }
    }

    /// The generic request primitive every named operation is built on.
    ///
    /// Joins the base URL and `endpoint`, attaches basic auth, query
    /// parameters, and an optional JSON body, and normalizes the outcome:
    /// `204 No Content` becomes `{"success": true}`, any 2xx body is parsed
    /// as JSON, and every failure is logged here at the boundary before it
    /// is returned as a typed [`ApiError`].
    ///
    /// # Errors
    ///
    /// [`ApiError::Http`] on transport failure (timeout, refused connection,
    /// TLS), [`ApiError::Status`] on a non-2xx response, [`ApiError::Parse`]
    /// when the body is not valid JSON.
    pub async fn request(
        &self,
        method: reqwest::Method,
        endpoint: &str,
        query: &[(&str, String)],
        body: Option<&serde_json::Value>,
    ) -> Result<serde_json::Value, ApiError> {
        let url = format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'));

        let mut request = self
            .http
            .request(method, &url)
            .basic_auth(&self.username, Some(&self.password));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = match request.send().await {
            Ok(response) => response,
            Err(error) => {
                tracing::error!(%error, endpoint, "API request failed");
                return Err(ApiError::Http(error));
            }
        };

        let status = response.status();
        if status == reqwest::StatusCode::NO_CONTENT {
            return Ok(serde_json::json!({"success": true}));
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = status.as_u16(), endpoint, "API returned error status");
            return Err(ApiError::Status {
                status: status.as_u16(),
                message,
            });
        }

        response.json().await.map_err(|error| {
            tracing::error!(%error, endpoint, "API response was not valid JSON");
            ApiError::Parse(error.to_string())
        })
    }

    /// GET shorthand over [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn get(
        &self,
        endpoint: &str,
        query: &[(&str, String)],
    ) -> Result<serde_json::Value, ApiError> {
        self.request(reqwest::Method::GET, endpoint, query, None).await
    }

    /// POST shorthand over [`ApiClient::request`].
    ///
    /// # Errors
    ///
    /// See [`ApiClient::request`].
    pub async fn post(
        &self,
        endpoint: &str,
        body: &serde_json::Value,
    ) -> Result<serde_json::Value, ApiError> {
        self.request(reqwest::Method::POST, endpoint, &[], Some(body)).await
    }

    /// Probe the service health endpoint.
    ///
    /// True iff the service answered with `{"status": "healthy"}`. Any
    /// failure, including a malformed response, yields `false`; this never
    /// returns an error.
    pub async fn health_check(&self) -> bool {
        match self.get("health", &[]).await {
            Ok(value) => value.get("status").and_then(serde_json::Value::as_str) == Some("healthy"),
            Err(error) => {
                tracing::warn!(%error, "health check failed");
                false
            }
        }
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    pub(crate) fn credentials(&self) -> (&str, &str) {
        (&self.username, &self.password)
    }
}

// ── Payload extraction ─────────────────────────────────────────────

/// Deserialize the `items` array every collection response carries.
pub(crate) fn items<T: DeserializeOwned>(value: serde_json::Value) -> Result<Vec<T>, ApiError> {
    let Some(items) = value.get("items") else {
        return Err(ApiError::Parse("response missing 'items' array".to_string()));
    };
    serde_json::from_value(items.clone()).map_err(|error| ApiError::Parse(error.to_string()))
}

/// Deserialize the first element of the `items` array.
///
/// Single-record endpoints (latest analysis, execution status, aggregate
/// statistics) answer with a one-element collection.
pub(crate) fn first_item<T: DeserializeOwned>(value: serde_json::Value) -> Result<T, ApiError> {
    items::<T>(value)?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::Parse("response 'items' array is empty".to_string()))
}

#[cfg(test)]
pub(crate) mod test_support;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{self, serve, serve_capture};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn request_parses_success_body() {
        let base = serve(200, r#"{"items": [{"ok": 1}]}"#);
        let client = ApiClient::new(&test_support::config(&base));

        let value = client.get("recommendations", &[]).await.expect("success");
        assert_eq!(value["items"][0]["ok"], 1);
    }

    #[tokio::test]
    async fn no_content_normalizes_to_success() {
        let base = serve(204, "");
        let client = ApiClient::new(&test_support::config(&base));

        let value = client
            .request(reqwest::Method::POST, "compression/execute", &[], None)
            .await
            .expect("204 is a success");
        assert_eq!(value, serde_json::json!({"success": true}));
    }

    #[tokio::test]
    async fn error_status_becomes_typed_error() {
        let base = serve(500, "ORA-00600 internal error");
        let client = ApiClient::new(&test_support::config(&base));

        let err = client.get("analysis/latest", &[]).await.unwrap_err();
        match err {
            ApiError::Status { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("ORA-00600"));
            }
            other => panic!("expected status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn refused_connection_is_reported_not_raised() {
        // Port 1 is never listening; the connection is refused immediately.
        let client = ApiClient::new(&test_support::config("http://127.0.0.1:1"));

        let err = client.get("health", &[]).await.unwrap_err();
        assert!(matches!(err, ApiError::Http(_)));
        assert!(!err.to_string().is_empty());
    }

    #[tokio::test]
    async fn health_check_true_only_for_healthy_status() {
        let base = serve(200, r#"{"status": "healthy"}"#);
        let client = ApiClient::new(&test_support::config(&base));
        assert!(client.health_check().await);

        let base = serve(200, r#"{"status": "degraded"}"#);
        let client = ApiClient::new(&test_support::config(&base));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn health_check_swallows_transport_and_parse_failures() {
        let client = ApiClient::new(&test_support::config("http://127.0.0.1:1"));
        assert!(!client.health_check().await);

        let base = serve(200, "not json at all");
        let client = ApiClient::new(&test_support::config(&base));
        assert!(!client.health_check().await);
    }

    #[tokio::test]
    async fn every_call_carries_basic_auth() {
        let (base, captured) = serve_capture(200, r#"{"items": []}"#);
        let client = ApiClient::new(&test_support::config(&base));

        client.get("strategies", &[]).await.expect("success");
        let request = captured.recv().expect("request captured");
        let authorization = request.authorization.expect("Authorization header");
        assert!(authorization.starts_with("Basic "));
    }

    #[tokio::test]
    async fn base_url_and_endpoint_slashes_are_normalized() {
        let (base, captured) = serve_capture(200, "{}");
        let mut config = test_support::config(&base);
        config.base_url = format!("{base}/");
        let client = ApiClient::new(&config);

        client.get("/health", &[]).await.expect("success");
        let request = captured.recv().expect("request captured");
        assert_eq!(request.url, "/health");
    }

    #[test]
    fn items_rejects_payload_without_items() {
        let err = items::<serde_json::Value>(serde_json::json!({"rows": []})).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[test]
    fn first_item_rejects_empty_items() {
        let err = first_item::<serde_json::Value>(serde_json::json!({"items": []})).unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }
}
