//! Live Places client
//!
//! Calls the Places Text Search and Place Details endpoints and normalizes
//! their payloads. Every failure surfaces as an [`AppError`]; nothing falls
//! back to mock data.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::{debug, warn};

use super::normalize::{
    build_summaries, classify_vibes, extract_amenities, format_hours, photo_urls,
    RawOpeningHours,
};
use super::PlacesClient;
use crate::error::{AppError, Result};
use crate::models::{HowFound, Restaurant, SearchRequest, SearchResult, Socials};

const DETAILS_FIELDS: &str = "name,formatted_address,formatted_phone_number,website,opening_hours,photos,rating,price_level,types,url";

// == Wire Types ==

#[derive(Debug, Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    results: Vec<SearchPlace>,
}

#[derive(Debug, Deserialize)]
struct SearchPlace {
    place_id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    rating: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DetailsResponse {
    status: String,
    #[serde(default)]
    error_message: Option<String>,
    #[serde(default)]
    result: Option<DetailsPlace>,
}

#[derive(Debug, Default, Deserialize)]
struct DetailsPlace {
    #[serde(default)]
    name: String,
    #[serde(default)]
    formatted_address: String,
    #[serde(default)]
    rating: Option<f64>,
    #[serde(default)]
    formatted_phone_number: Option<String>,
    #[serde(default)]
    website: Option<String>,
    #[serde(default)]
    opening_hours: Option<RawOpeningHours>,
    #[serde(default)]
    photos: Vec<Photo>,
    #[serde(default)]
    price_level: Option<u8>,
    #[serde(default)]
    types: Vec<String>,
}

impl DetailsPlace {
    fn is_empty(&self) -> bool {
        self.name.is_empty() && self.formatted_address.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct Photo {
    #[serde(default)]
    photo_reference: String,
}

// == Live Client ==
/// Places API client.
#[derive(Debug, Clone)]
pub struct LiveClient {
    http: Client,
    api_key: String,
    base_url: String,
}

impl LiveClient {
    /// Creates a client for `base_url` (no trailing slash) with a per-call timeout.
    pub fn new(api_key: String, base_url: String, timeout_secs: u64) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {}", url);

        let response = self.http.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            warn!("Places API {} returned HTTP {}", endpoint, status);
            return Err(AppError::RemoteUnavailable(format!(
                "Places API returned HTTP {}",
                status.as_u16()
            )));
        }

        Ok(response.json::<T>().await?)
    }

    fn api_failure(status: &str, error_message: Option<String>) -> AppError {
        let detail = error_message.unwrap_or_else(|| "Unknown error".to_string());
        warn!("Places API error: {} - {}", status, detail);
        AppError::RemoteUnavailable(format!("{} - {}", status, detail))
    }

    fn normalize_details(&self, place_id: &str, place: DetailsPlace) -> Restaurant {
        let amenities = extract_amenities(&place.types);
        let vibes = classify_vibes(&amenities, place.price_level, &place.types);
        let images = photo_urls(
            &self.base_url,
            &self.api_key,
            place.photos.iter().map(|p| p.photo_reference.as_str()),
        );
        let operating_hours = place
            .opening_hours
            .map(|raw| format_hours(raw, Local::now().naive_local()));
        let socials = place.website.as_ref().map(|_| Socials::default());

        Restaurant {
            place_id: place_id.to_string(),
            name: place.name,
            address: place.formatted_address,
            rating: place.rating,
            contact: place.formatted_phone_number,
            website: place.website,
            reservation_url: None,
            reservation_partner: Some("None".to_string()),
            operating_hours,
            socials,
            menu_url: None,
            amenities,
            summaries: build_summaries(place.rating),
            vibes,
            images,
            how_found: HowFound::from_source("google direct"),
        }
    }
}

#[async_trait]
impl PlacesClient for LiveClient {
    async fn text_search(&self, request: &SearchRequest) -> Result<Vec<SearchResult>> {
        let query = match request.location_text() {
            Some(location) => format!("{} in {}", request.query_text(), location),
            None => request.query_text(),
        };

        let body: TextSearchResponse = self
            .get_json(
                "textsearch/json",
                &[
                    ("query", query.as_str()),
                    ("type", "restaurant"),
                    ("key", self.api_key.as_str()),
                    ("language", "en"),
                ],
            )
            .await?;

        match body.status.as_str() {
            "OK" => {}
            "ZERO_RESULTS" => return Ok(Vec::new()),
            other => return Err(Self::api_failure(other, body.error_message)),
        }

        Ok(body
            .results
            .into_iter()
            .map(|place| SearchResult {
                place_id: place.place_id,
                name: place.name,
                address: place.formatted_address,
                rating: place.rating,
            })
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<Restaurant> {
        let body: DetailsResponse = self
            .get_json(
                "details/json",
                &[
                    ("place_id", place_id),
                    ("fields", DETAILS_FIELDS),
                    ("key", self.api_key.as_str()),
                    ("language", "en"),
                ],
            )
            .await?;

        match body.status.as_str() {
            "OK" => {}
            "NOT_FOUND" | "ZERO_RESULTS" | "INVALID_REQUEST" => {
                return Err(AppError::NotFound(place_id.to_string()))
            }
            other => return Err(Self::api_failure(other, body.error_message)),
        }

        match body.result {
            Some(place) if !place.is_empty() => Ok(self.normalize_details(place_id, place)),
            _ => Err(AppError::NotFound(place_id.to_string())),
        }
    }

    fn name(&self) -> &'static str {
        "live"
    }
}
