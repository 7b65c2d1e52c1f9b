//! Cache Module
//!
//! Provides an in-memory cache with lazy TTL expiration.

mod clock;
mod entry;
mod stats;
mod store;


// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
