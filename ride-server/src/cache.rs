//! Caching layer for directions lookups.
//!
//! Route information for a pair of place names never changes within a
//! session, so results are cached by the coordinates the names resolve to.
//! Errors are not cached; the next request retries.

use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache as MokaCache;
use tracing::debug;

use crate::directions::{DirectionsClient, DirectionsError, RouteSummary};
use crate::domain::Coordinates;

/// Cache key: (from lat, from lng, to lat, to lng) as raw `f64` bits.
type RouteKey = (u64, u64, u64, u64);

/// Configuration for the cache.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL for cached entries.
    pub ttl: Duration,

    /// Maximum number of cached entries.
    pub max_capacity: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl: Duration::from_secs(600),
            max_capacity: 1000,
        }
    }
}

fn route_key(from: Coordinates, to: Coordinates) -> RouteKey {
    (
        from.lat.to_bits(),
        from.lng.to_bits(),
        to.lat.to_bits(),
        to.lng.to_bits(),
    )
}

/// Directions client with caching.
///
/// Wraps a `DirectionsClient` and caches route summaries.
pub struct CachedDirectionsClient {
    client: DirectionsClient,
    routes: MokaCache<RouteKey, Arc<RouteSummary>>,
}

impl CachedDirectionsClient {
    /// Create a new cached client.
    pub fn new(client: DirectionsClient, cache_config: &CacheConfig) -> Self {
        let routes = MokaCache::builder()
            .time_to_live(cache_config.ttl)
            .max_capacity(cache_config.max_capacity)
            .build();

        Self { client, routes }
    }

    /// Route between two free-text places, using cache if available.
    pub async fn route_between(
        &self,
        from: &str,
        to: &str,
    ) -> Result<Arc<RouteSummary>, DirectionsError> {
        self.route(Coordinates::mock_for(from), Coordinates::mock_for(to))
            .await
    }

    /// Route between two points, using cache if available.
    pub async fn route(
        &self,
        from: Coordinates,
        to: Coordinates,
    ) -> Result<Arc<RouteSummary>, DirectionsError> {
        let key = route_key(from, to);

        if let Some(cached) = self.routes.get(&key).await {
            debug!("route cache hit");
            return Ok(cached);
        }

        let summary = Arc::new(self.client.route(from, to).await?);
        self.routes.insert(key, summary.clone()).await;

        Ok(summary)
    }

    /// Get cache statistics.
    pub fn cache_entry_count(&self) -> u64 {
        self.routes.entry_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directions::DirectionsConfig;

    #[test]
    fn default_config() {
        let config = CacheConfig::default();
        assert_eq!(config.ttl, Duration::from_secs(600));
        assert_eq!(config.max_capacity, 1000);
    }

    #[test]
    fn key_follows_resolved_coordinates() {
        // Same characters, same offset, same key.
        let ab = route_key(Coordinates::mock_for("AB"), Coordinates::mock_for("x"));
        let ba = route_key(Coordinates::mock_for("BA"), Coordinates::mock_for("x"));
        assert_eq!(ab, ba);

        let forward = route_key(Coordinates::mock_for("A"), Coordinates::mock_for("B"));
        let backward = route_key(Coordinates::mock_for("B"), Coordinates::mock_for("A"));
        assert_ne!(forward, backward);
    }

    #[test]
    fn cache_creation() {
        let client = DirectionsClient::new(DirectionsConfig::new("test-key")).unwrap();
        let cached = CachedDirectionsClient::new(client, &CacheConfig::default());
        assert_eq!(cached.cache_entry_count(), 0);
    }

    #[tokio::test]
    async fn errors_are_not_cached() {
        let client = DirectionsClient::new(
            DirectionsConfig::new("k")
                .with_base_url("http://127.0.0.1:9")
                .with_timeout(2),
        )
        .unwrap();
        let cached = CachedDirectionsClient::new(client, &CacheConfig::default());

        assert!(cached.route_between("Home", "Office").await.is_err());
        cached.routes.run_pending_tasks().await;
        assert_eq!(cached.cache_entry_count(), 0);
    }
}
