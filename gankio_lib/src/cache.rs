//! In-memory TTL cache for API responses, backed by `DashMap`.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A single cached response body with its expiration time.
struct CachedResponse {
    payload: String,
    expires_at: Instant,
}

/// Thread-safe response cache with time-to-live expiration.
///
/// Responses are stored as serialized JSON keyed by endpoint and request
/// parameters. Expired entries are lazily evicted on the next `get` for
/// that key.
pub struct ResponseCache {
    store: DashMap<String, CachedResponse>,
    ttl: Duration,
}

impl ResponseCache {
    /// Creates a new cache whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached payload for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.payload.clone())
    }

    /// Inserts or overwrites a cached payload under `key`.
    pub fn set(&self, key: String, payload: String) {
        self.store.insert(
            key,
            CachedResponse {
                payload,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Drops every entry whose TTL has elapsed.
    pub fn purge_expired(&self) {
        let now = Instant::now();
        self.store.retain(|_, entry| entry.expires_at >= now);
    }

    /// Removes all entries.
    pub fn clear(&self) {
        self.store.clear();
    }
}
