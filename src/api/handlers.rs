//! API Handlers
//!
//! HTTP request handlers for each endpoint. All caching decisions live in
//! the [`QueryDispatcher`]; handlers only translate HTTP to calls on it.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Query, State},
    response::Html,
    Json,
};
use tokio::sync::RwLock;

use crate::cache::CacheStore;
use crate::config::Config;
use crate::dispatcher::QueryDispatcher;
use crate::error::{AppError, Result};
use crate::models::{
    ClearCacheResponse, DetailsQuery, HealthResponse, Restaurant, SearchRequest, SearchResponse,
    StatsResponse,
};
use crate::places::{client_from_config, PlacesClient};

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<QueryDispatcher>,
}

impl AppState {
    pub fn new(dispatcher: QueryDispatcher) -> Self {
        Self {
            dispatcher: Arc::new(dispatcher),
        }
    }

    /// Builds state around `client` with a fresh wall-clock cache.
    pub fn with_client(client: Arc<dyn PlacesClient>, cache_ttl: u64) -> Self {
        let cache = Arc::new(RwLock::new(CacheStore::new()));
        Self::new(QueryDispatcher::new(cache, client, cache_ttl))
    }

    /// Creates a new AppState from configuration.
    ///
    /// Picks the Places client variant once, here.
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = client_from_config(config)?;
        Ok(Self::with_client(client, config.cache_ttl))
    }
}

/// Handler for GET /
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Handler for POST /search/
///
/// Returns cached or freshly fetched restaurant summaries for the query.
pub async fn search_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>> {
    let Json(req) =
        payload.map_err(|_| AppError::InvalidRequest("Invalid JSON data".to_string()))?;

    let results = state.dispatcher.search(&req).await?;

    Ok(Json(SearchResponse::new(results)))
}

/// Handler for GET /details/?place_id={id}
pub async fn details_handler(
    State(state): State<AppState>,
    Query(query): Query<DetailsQuery>,
) -> Result<Json<Restaurant>> {
    let place_id = query.place_id().map_err(AppError::InvalidRequest)?;

    let restaurant = state.dispatcher.details(place_id).await?;

    Ok(Json(restaurant))
}

/// Handler for GET /clear-cache/
pub async fn clear_cache_handler(State(state): State<AppState>) -> Json<ClearCacheResponse> {
    let cleared = state.dispatcher.clear_cache().await;
    Json(ClearCacheResponse::new(cleared))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    Json(state.dispatcher.stats().await.into())
}

/// Handler for GET /health
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::healthy(state.dispatcher.client_name()))
}
