//! Session caching layer
//!
//! Provides a `CacheProvider` trait and an in-memory implementation.
//! The client uses it to keep already-fetched sprites around for the
//! rest of the session; nothing is persisted across runs.

mod memory;

pub use memory::*;

use async_trait::async_trait;
use chrono::DateTime;
use chrono::Utc;

/// A cached value with the time it was fetched.
#[derive(Debug, Clone)]
pub struct CachedValue {
    /// The cached payload bytes.
    pub data: Vec<u8>,
    /// When the payload was fetched.
    pub fetched_at: DateTime<Utc>,
}

impl CachedValue {
    /// Creates a cached value fetched at the given time.
    pub fn new(data: Vec<u8>, fetched_at: DateTime<Utc>) -> Self {
        Self { data, fetched_at }
    }

    /// Creates a cached value fetched now.
    pub fn new_now(data: Vec<u8>) -> Self {
        Self {
            data,
            fetched_at: Utc::now(),
        }
    }
}

/// Storage backend for the session cache.
///
/// Keys are the resolved URLs the payloads came from. Entries have no
/// expiry; they stay until removed or the whole cache is cleared.
///
/// # Example
///
/// ```ignore
/// use itemdex_lib::cache::{CacheProvider, CachedValue, InMemoryCache};
///
/// let cache = InMemoryCache::new();
/// let url = "https://example.org/sprite.png";
/// cache.set(url, CachedValue::new_now(b"payload".to_vec())).await;
///
/// if let Some(cached) = cache.get(url).await {
///     println!("{} bytes", cached.data.len());
/// }
/// ```
#[async_trait]
pub trait CacheProvider: Send + Sync {
    /// Looks up the entry stored under `key`.
    async fn get(&self, key: &str) -> Option<CachedValue>;

    /// Stores `value` under `key`, replacing any previous entry.
    async fn set(&self, key: &str, value: CachedValue);

    /// Drops the entry stored under `key`, if any.
    async fn remove(&self, key: &str);

    /// Drops every entry.
    async fn clear(&self);
}
