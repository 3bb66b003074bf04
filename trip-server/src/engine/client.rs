//! Routing engine HTTP client.

use std::sync::Arc;

use reqwest::header::{HeaderMap, HeaderValue};
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::ItineraryLeg;

use super::convert::convert_response;
use super::error::EngineError;
use super::types::{EngineQuery, EngineResponse};

/// Default base URL for a locally running engine.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the engine client.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Base URL; queries go to `{base_url}/plan`
    pub base_url: String,
    /// Sent as `x-api-key` when set
    pub api_key: Option<String>,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl EngineConfig {
    /// Set the base URL. A trailing slash is dropped.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set maximum concurrent requests.
    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// HTTP client for the routing engine.
///
/// Uses a semaphore to limit concurrent requests.
#[derive(Debug, Clone)]
pub struct EngineClient {
    http: reqwest::Client,
    plan_url: String,
    semaphore: Arc<Semaphore>,
}

impl EngineClient {
    /// Create a new client with the given configuration.
    pub fn new(config: EngineConfig) -> Result<Self, EngineError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| {
                EngineError::NotConfigured("API key is not a valid header value".to_string())
            })?;
            headers.insert("x-api-key", value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            plan_url: format!("{}/plan", config.base_url),
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// URL queries are posted to.
    pub fn plan_url(&self) -> &str {
        &self.plan_url
    }

    /// Ask the engine for the leg table of one query.
    pub async fn compute_legs(&self, query: &EngineQuery) -> Result<Vec<ItineraryLeg>, EngineError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| EngineError::NotConfigured("client is shut down".to_string()))?;

        debug!(url = %self.plan_url, modes = ?query.transport_modes, departure = %query.departure, "querying routing engine");

        let response = self.http.post(&self.plan_url).json(query).send().await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EngineError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(EngineError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EngineError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: EngineResponse = serde_json::from_str(&body).map_err(|e| EngineError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        let legs = convert_response(&parsed)?;
        debug!(legs = legs.len(), rows = parsed.legs.len(), "engine returned legs");
        Ok(legs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = EngineConfig::default()
            .with_base_url("http://engine.local:9000/")
            .with_api_key("test-key")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.base_url, "http://engine.local:9000");
        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = EngineConfig::default();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert!(config.api_key.is_none());
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        let client = EngineClient::new(EngineConfig::default().with_api_key("k")).unwrap();
        assert_eq!(client.plan_url(), "http://127.0.0.1:8080/plan");
    }

    #[test]
    fn rejects_unprintable_api_key() {
        let result = EngineClient::new(EngineConfig::default().with_api_key("bad\nkey"));
        assert!(matches!(result, Err(EngineError::NotConfigured(_))));
    }

    #[tokio::test]
    async fn unreachable_engine_is_http_error() {
        // Port 9 (discard) is not expected to serve HTTP
        let client = EngineClient::new(
            EngineConfig::default()
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();

        let query = EngineQuery::new(
            crate::domain::Coordinate::new(35.99, -78.9).unwrap(),
            crate::domain::Coordinate::new(36.0, -78.93).unwrap(),
            chrono::NaiveDate::from_ymd_opt(2024, 5, 1)
                .unwrap()
                .and_hms_opt(8, 30, 0)
                .unwrap(),
            crate::domain::TransportMode::Car,
        );

        let result = client.compute_legs(&query).await;
        assert!(matches!(result, Err(EngineError::Http(_))));
    }
}
