//! Configuration Module
//!
//! Handles loading service configuration from environment variables.

use std::env;

/// Placeholder value shipped in sample `.env` files; treated as no key.
const PLACEHOLDER_API_KEY: &str = "your_google_maps_api_key_here";

/// Default Places API root.
pub const DEFAULT_PLACES_BASE_URL: &str = "https://maps.googleapis.com/maps/api/place";

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Places API credential; `None` selects the mock client
    pub api_key: Option<String>,
    /// Verbose logging
    pub debug: bool,
    /// HTTP server port
    pub server_port: u16,
    /// TTL in seconds for cached search results and details
    pub cache_ttl: u64,
    /// Background cleanup task interval in seconds
    pub cleanup_interval: u64,
    /// Timeout in seconds for a single Places API call
    pub request_timeout: u64,
    /// Places API root URL
    pub places_base_url: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `GOOGLE_MAPS_API_KEY` - Places API key (default: unset, mock data)
    /// - `DEBUG` - Verbose logging (default: false)
    /// - `SERVER_PORT` - HTTP server port (default: 8000)
    /// - `CACHE_TTL` - Cache TTL in seconds (default: 3600)
    /// - `CLEANUP_INTERVAL` - Cleanup frequency in seconds (default: 60)
    /// - `REQUEST_TIMEOUT` - Places API timeout in seconds (default: 10)
    /// - `PLACES_BASE_URL` - Places API root (default: Google)
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            api_key: env::var("GOOGLE_MAPS_API_KEY")
                .ok()
                .and_then(|v| normalize_api_key(&v)),
            debug: env::var("DEBUG")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.debug),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            cache_ttl: env::var("CACHE_TTL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_ttl),
            cleanup_interval: env::var("CLEANUP_INTERVAL")
                .ok()
                .and_then(|v| parse_positive(&v))
                .unwrap_or(defaults.cleanup_interval),
            request_timeout: env::var("REQUEST_TIMEOUT")
                .ok()
                .and_then(|v| parse_positive(&v))
                .unwrap_or(defaults.request_timeout),
            places_base_url: env::var("PLACES_BASE_URL")
                .ok()
                .map(|v| v.trim().trim_end_matches('/').to_string())
                .filter(|v| !v.is_empty())
                .unwrap_or(defaults.places_base_url),
        }
    }

    /// Returns true when a usable API key is configured.
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Default tracing filter for this configuration.
    pub fn log_filter(&self) -> &'static str {
        if self.debug {
            "restaurant_search=debug,tower_http=debug"
        } else {
            "restaurant_search=info,tower_http=info"
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            debug: false,
            server_port: 8000,
            cache_ttl: 3600,
            cleanup_interval: 60,
            request_timeout: 10,
            places_base_url: DEFAULT_PLACES_BASE_URL.to_string(),
        }
    }
}

fn normalize_api_key(raw: &str) -> Option<String> {
    let key = raw.trim();
    if key.is_empty() || key == PLACEHOLDER_API_KEY {
        None
    } else {
        Some(key.to_string())
    }
}

/// Parses a whole number of seconds; zero is rejected.
fn parse_positive(raw: &str) -> Option<u64> {
    raw.trim().parse().ok().filter(|v: &u64| *v > 0)
}

fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
