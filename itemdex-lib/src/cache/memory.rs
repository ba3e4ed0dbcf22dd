//! In-memory provider backed by DashMap

use async_trait::async_trait;
use dashmap::DashMap;

use super::CacheProvider;
use super::CachedValue;

/// A session cache held in a concurrent hash map.
///
/// This is the provider the client builder falls back to. Lookups are
/// cheap and thread-safe, and everything vanishes when the process
/// exits.
///
/// # Example
///
/// ```
/// use itemdex_lib::cache::InMemoryCache;
///
/// let cache = InMemoryCache::new();
/// ```
#[derive(Debug, Default)]
pub struct InMemoryCache {
    entries: DashMap<String, CachedValue>,
}

impl InMemoryCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Creates an empty cache sized for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: DashMap::with_capacity(capacity),
        }
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl CacheProvider for InMemoryCache {
    async fn get(&self, key: &str) -> Option<CachedValue> {
        self.entries.get(key).map(|entry| entry.value().clone())
    }

    async fn set(&self, key: &str, value: CachedValue) {
        self.entries.insert(key.to_string(), value);
    }

    async fn remove(&self, key: &str) {
        self.entries.remove(key);
    }

    async fn clear(&self) {
        self.entries.clear();
    }
}

// ============================================================================
// Tests
// ============================================================================
