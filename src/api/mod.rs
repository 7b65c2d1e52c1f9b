//! API Module
//!
//! HTTP handlers and routing for the restaurant search service.
//!
//! # Endpoints
//! - `GET /` - Search page
//! - `POST /search/` - Search restaurants
//! - `GET /details/?place_id=` - Restaurant details
//! - `GET /clear-cache/` - Clear the cache
//! - `GET /stats` - Cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
