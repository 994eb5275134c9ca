use chrono::Duration;
use parking_lot::Mutex;
use serde::{Serialize, de::DeserializeOwned};
use std::collections::HashMap;
use tokio::time::Instant;
use tracing::{debug, error, warn};

struct CacheEntry {
    payload: String,
    expires_at: Instant,
}

/// In-memory query cache keyed by string. Values are stored as JSON so a
/// stale or foreign-typed entry degrades to a cache miss instead of a panic.
#[derive(Default)]
pub struct CacheStore {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

impl CacheStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_from_cache<T>(&self, key: &str) -> Option<T>
    where
        T: DeserializeOwned,
    {
        let mut entries = self.entries.lock();

        let entry = match entries.get(key) {
            Some(entry) => entry,
            None => {
                warn!("Cache miss for key: {key}");
                return None;
            }
        };

        if Instant::now() >= entry.expires_at {
            entries.remove(key);
            warn!("Cache expired for key: {key}");
            return None;
        }

        match serde_json::from_str::<T>(&entry.payload) {
            Ok(parsed) => Some(parsed),
            Err(e) => {
                error!(
                    "Failed to deserialize cached value for key '{}': {:?}",
                    key, e
                );
                entries.remove(key);
                None
            }
        }
    }

    pub fn set_to_cache<T>(&self, key: &str, data: &T, expiration: Duration)
    where
        T: Serialize,
    {
        let payload = match serde_json::to_string(data) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize data for key '{}': {:?}", key, e);
                return;
            }
        };

        let ttl = expiration.to_std().unwrap_or_default();
        let entry = CacheEntry {
            payload,
            expires_at: Instant::now() + ttl,
        };

        self.entries.lock().insert(key.to_string(), entry);
        debug!("Cached key '{}' with TTL {:?}", key, expiration);
    }

    pub fn delete_from_cache(&self, key: &str) {
        if self.entries.lock().remove(key).is_some() {
            debug!("Invalidated cache key '{key}'");
        }
    }
}
