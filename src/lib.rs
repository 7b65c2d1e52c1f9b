//! Restaurant Search - restaurant lookups with a TTL cache in front of the
//! Places API
//!
//! Searches and detail lookups go through a [`QueryDispatcher`], which serves
//! fresh answers from an in-memory [`cache::CacheStore`] and otherwise asks
//! the configured [`places::PlacesClient`] (live API or mock fixtures).

pub mod api;
pub mod cache;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod models;
pub mod places;
pub mod tasks;

pub use api::AppState;
pub use config::Config;
pub use dispatcher::{CachedValue, QueryDispatcher, SharedCache};
pub use error::{AppError, Result};
pub use tasks::spawn_cleanup_task;
