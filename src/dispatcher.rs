//! Query Dispatcher
//!
//! Serves search and details lookups from the cache, falling through to the
//! Places client on a miss and caching only successful answers.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{AppError, Result};
use crate::models::{details_cache_key, Restaurant, SearchRequest, SearchResult};
use crate::places::PlacesClient;

/// Payloads held in the shared cache. Keys are namespaced per kind.
#[derive(Debug, Clone, PartialEq)]
pub enum CachedValue {
    Search(Vec<SearchResult>),
    Details(Restaurant),
}

/// Shared handle to the cache.
pub type SharedCache = Arc<RwLock<CacheStore<CachedValue>>>;

// == Query Dispatcher ==
/// Cache-aside front for a [`PlacesClient`].
pub struct QueryDispatcher {
    cache: SharedCache,
    client: Arc<dyn PlacesClient>,
    /// TTL in seconds applied to every stored answer
    default_ttl: u64,
}

impl QueryDispatcher {
    pub fn new(cache: SharedCache, client: Arc<dyn PlacesClient>, default_ttl: u64) -> Self {
        Self {
            cache,
            client,
            default_ttl,
        }
    }

    /// Returns the shared cache handle (used by the background sweeper).
    pub fn cache(&self) -> SharedCache {
        self.cache.clone()
    }

    pub fn client_name(&self) -> &'static str {
        self.client.name()
    }

    // == Search ==
    /// Returns restaurants for `request`, from cache when fresh.
    pub async fn search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        if let Some(msg) = request.validate() {
            return Err(AppError::InvalidRequest(msg));
        }

        let key = request.cache_key();
        if let Some(CachedValue::Search(results)) = self.lookup(&key).await {
            debug!("Cache hit: {}", key);
            return Ok(results);
        }
        debug!("Cache miss: {}", key);

        let results = self.client.text_search(request).await.inspect_err(|e| {
            warn!("Search for '{}' failed: {}", request.query_text(), e);
        })?;

        self.store(key, CachedValue::Search(results.clone())).await;
        Ok(results)
    }

    // == Details ==
    /// Returns the detail record for `place_id`, from cache when fresh.
    pub async fn details(&self, place_id: &str) -> Result<Restaurant> {
        let place_id = place_id.trim();
        if place_id.is_empty() {
            return Err(AppError::InvalidRequest("place_id is required".to_string()));
        }

        let key = details_cache_key(place_id);
        if let Some(CachedValue::Details(restaurant)) = self.lookup(&key).await {
            debug!("Cache hit: {}", key);
            return Ok(restaurant);
        }
        debug!("Cache miss: {}", key);

        let restaurant = self.client.place_details(place_id).await.inspect_err(|e| {
            warn!("Details for '{}' failed: {}", place_id, e);
        })?;

        self.store(key, CachedValue::Details(restaurant.clone())).await;
        Ok(restaurant)
    }

    // == Clear ==
    /// Drops every cached answer. Returns how many entries were removed.
    pub async fn clear_cache(&self) -> usize {
        let cleared = self.cache.write().await.clear();
        info!("Cache cleared: {} entries removed", cleared);
        cleared
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    // The lock is released before the remote call; two concurrent misses may
    // both fetch, and the later write wins.
    async fn lookup(&self, key: &str) -> Option<CachedValue> {
        self.cache.write().await.get(key)
    }

    async fn store(&self, key: String, value: CachedValue) {
        self.cache.write().await.set(key, value, self.default_ttl);
    }
}
