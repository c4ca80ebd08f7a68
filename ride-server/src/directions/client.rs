//! MapTiler directions HTTP client.

use std::sync::Arc;

use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::Coordinates;

use super::error::DirectionsError;
use super::types::{DirectionsResponse, RouteSummary};

/// Default base URL for the MapTiler API.
const DEFAULT_BASE_URL: &str = "https://api.maptiler.com";

/// Default routing profile.
const DEFAULT_PROFILE: &str = "driving";

/// Default maximum concurrent requests.
const DEFAULT_MAX_CONCURRENT: usize = 5;

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key, sent as the `key` query parameter
    pub api_key: String,
    /// Base URL for the API (defaults to production MapTiler)
    pub base_url: String,
    /// Routing profile, e.g. `driving` or `walking`
    pub profile: String,
    /// Maximum concurrent requests
    pub max_concurrent: usize,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a new config with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: DEFAULT_PROFILE.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: 10,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
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

/// Directions API client.
///
/// Looks up driving distance and duration between two points. A semaphore
/// bounds the number of requests in flight.
#[derive(Debug, Clone)]
pub struct DirectionsClient {
    http: reqwest::Client,
    base_url: String,
    profile: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl DirectionsClient {
    /// Create a new directions client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, DirectionsError> {
        if config.api_key.trim().is_empty() {
            return Err(DirectionsError::NotConfigured(
                "missing API key".to_string(),
            ));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            profile: config.profile,
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent)),
        })
    }

    /// Route URL without query parameters. Coordinates go in lng,lat order.
    fn route_url(&self, from: Coordinates, to: Coordinates) -> String {
        format!(
            "{}/directions/v2/route/{}/{},{};{},{}",
            self.base_url, self.profile, from.lng, from.lat, to.lng, to.lat
        )
    }

    /// Fetch the best route between two points.
    pub async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<RouteSummary, DirectionsError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| DirectionsError::Api {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = self.route_url(from, to);
        debug!(%url, "requesting route");

        let response = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("geometries", "geojson")])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN
        {
            return Err(DirectionsError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(DirectionsError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DirectionsError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        let parsed: DirectionsResponse =
            serde_json::from_str(&body).map_err(|e| DirectionsError::Json {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            })?;

        RouteSummary::from_response(parsed).ok_or(DirectionsError::NoRoute)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = DirectionsConfig::new("test-key")
            .with_base_url("http://localhost:8080")
            .with_profile("walking")
            .with_max_concurrent(10)
            .with_timeout(60);

        assert_eq!(config.api_key, "test-key");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.profile, "walking");
        assert_eq!(config.max_concurrent, 10);
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = DirectionsConfig::new("test-key");

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.profile, DEFAULT_PROFILE);
        assert_eq!(config.max_concurrent, DEFAULT_MAX_CONCURRENT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        assert!(DirectionsClient::new(DirectionsConfig::new("test-key")).is_ok());
    }

    #[test]
    fn blank_key_is_not_configured() {
        let err = DirectionsClient::new(DirectionsConfig::new("  ")).unwrap_err();
        assert!(matches!(err, DirectionsError::NotConfigured(_)));
    }

    #[test]
    fn route_url_uses_lng_lat_order() {
        let client = DirectionsClient::new(
            DirectionsConfig::new("k").with_base_url("http://localhost:9000/"),
        )
        .unwrap();

        let url = client.route_url(Coordinates::new(40.5, -74.0), Coordinates::new(41.0, -73.5));
        assert_eq!(
            url,
            "http://localhost:9000/directions/v2/route/driving/-74,40.5;-73.5,41"
        );
    }

    #[tokio::test]
    async fn unreachable_server_is_http_error() {
        let client = DirectionsClient::new(
            DirectionsConfig::new("k")
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();

        let err = client
            .route(Coordinates::new(40.7, -74.0), Coordinates::new(40.8, -73.9))
            .await
            .unwrap_err();
        assert!(matches!(err, DirectionsError::Http(_)));
    }
}
