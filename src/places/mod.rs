//! Places Module
//!
//! Remote restaurant lookups behind a single [`PlacesClient`] capability.
//! Two implementations exist: [`LiveClient`] calls the Places API and
//! [`MockClient`] serves fixed records when no credential is configured.
//! The variant is picked once at startup by [`client_from_config`].

mod live;
mod mock;
pub mod normalize;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::config::Config;
use crate::error::Result;
use crate::models::{Restaurant, SearchRequest, SearchResult};

pub use live::LiveClient;
pub use mock::MockClient;

/// Source of restaurant search results and detail records.
#[async_trait]
pub trait PlacesClient: Send + Sync {
    /// Runs a free-text restaurant search.
    async fn text_search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>>;

    /// Fetches the full record for one place.
    async fn place_details(&self, place_id: &str) -> Result<Restaurant>;

    /// Short label for logs and health output.
    fn name(&self) -> &'static str;
}

/// Selects the live client when an API key is configured, the mock otherwise.
pub fn client_from_config(config: &Config) -> Result<Arc<dyn PlacesClient>> {
    match &config.api_key {
        Some(key) => {
            let client = LiveClient::new(
                key.clone(),
                config.places_base_url.clone(),
                config.request_timeout,
            )?;
            Ok(Arc::new(client))
        }
        None => {
            warn!("GOOGLE_MAPS_API_KEY not configured, serving mock restaurant data");
            Ok(Arc::new(MockClient::new()))
        }
    }
}
