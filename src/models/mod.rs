//! Data models for the restaurant search service
//!
//! Restaurant records plus the DTOs used for serializing/deserializing
//! HTTP request and response bodies.

pub mod requests;
pub mod responses;
pub mod restaurant;

// Re-export commonly used types
pub use requests::{details_cache_key, DetailsQuery, SearchRequest};
pub use responses::{
    ClearCacheResponse, ErrorResponse, HealthResponse, SearchResponse, StatsResponse,
};
pub use restaurant::{
    Amenities, CurrentPeriod, HowFound, OperatingHours, Period, PeriodTime, Restaurant,
    SearchResult, Socials, Summaries,
};
