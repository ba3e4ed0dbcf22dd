//! Fetch results tagged with session-cache provenance

use chrono::DateTime;
use chrono::Utc;

/// A fetched payload together with how the session cache was involved.
///
/// Sprite fetches go through the session cache and return this wrapper
/// so callers can tell a cached image apart from a fresh download.
///
/// # Example
///
/// ```ignore
/// let sprite = client.fetch_sprite("armor", "chain_armor").await?;
///
/// if sprite.is_cached() {
///     println!("from session cache, fetched at {:?}", sprite.fetched_at());
/// }
///
/// let bytes = sprite.into_inner();
/// ```
#[derive(Debug, Clone)]
pub struct Response<T> {
    data: T,
    /// How the session cache was involved in producing this payload.
    pub cache: CacheStatus,
}

impl<T> Response<T> {
    /// Wraps a payload that never touched the cache.
    pub fn new(data: T) -> Self {
        Self {
            data,
            cache: CacheStatus::None,
        }
    }

    /// Wraps a freshly downloaded payload that has just been cached.
    pub fn cache_miss(data: T, fetched_at: DateTime<Utc>) -> Self {
        Self {
            data,
            cache: CacheStatus::Miss { fetched_at },
        }
    }

    /// Wraps a payload served from the session cache.
    pub fn cache_hit(data: T, fetched_at: DateTime<Utc>) -> Self {
        Self {
            data,
            cache: CacheStatus::Hit { fetched_at },
        }
    }

    /// Returns `true` if the payload came out of the session cache.
    pub fn is_cached(&self) -> bool {
        self.cache.is_hit()
    }

    /// Returns `true` if the payload was downloaded for this call.
    pub fn is_fresh(&self) -> bool {
        !self.is_cached()
    }

    /// When the payload was downloaded, if the cache was involved.
    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.cache {
            CacheStatus::None => None,
            CacheStatus::Miss { fetched_at } | CacheStatus::Hit { fetched_at } => {
                Some(*fetched_at)
            }
        }
    }

    /// Borrows the payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Unwraps the payload, discarding the cache tag.
    pub fn into_inner(self) -> T {
        self.data
    }

    /// Transforms the payload while keeping the cache tag.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Response<U> {
        Response {
            data: f(self.data),
            cache: self.cache,
        }
    }
}

/// How the session cache was involved in a fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheStatus {
    /// The fetch bypassed the cache entirely.
    None,
    /// The key was absent; the payload was downloaded and stored.
    Miss {
        /// When the payload was downloaded.
        fetched_at: DateTime<Utc>,
    },
    /// The key was present; no download happened.
    Hit {
        /// When the payload was originally downloaded.
        fetched_at: DateTime<Utc>,
    },
}

impl CacheStatus {
    /// Returns `true` for a cache hit.
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// Returns `true` for a cache miss.
    pub fn is_miss(&self) -> bool {
        matches!(self, Self::Miss { .. })
    }

    /// Returns `true` if the cache was bypassed.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

// ============================================================================
// Tests
// ============================================================================
