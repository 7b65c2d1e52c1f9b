//! Cache Entry Module
//!
//! Defines a single cached value together with its expiry timestamp.

// == Cache Entry ==
/// A cached value and the instant after which it is no longer served.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped at `now_ms` that lives for `ttl_seconds`.
    pub fn new(value: V, now_ms: u64, ttl_seconds: u64) -> Self {
        Self {
            value,
            expires_at: now_ms.saturating_add(ttl_seconds.saturating_mul(1000)),
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired at `now_ms`.
    ///
    /// An entry is fresh only while `now_ms < expires_at`; at the boundary it
    /// is already expired.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms >= self.expires_at
    }
}
