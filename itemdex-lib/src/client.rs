//! Main CatalogClient

use std::sync::Arc;
use std::time::Duration;

use log::debug;
use reqwest::Client;
use tokio::sync::RwLock;
use url::Url;

use crate::cache::CacheProvider;
use crate::cache::CachedValue;
use crate::cache::InMemoryCache;
use crate::error::ApiError;
use crate::error::Error;
use crate::feed;
use crate::feed::urls;
use crate::model::GameVersion;
use crate::model::ItemRecord;
use crate::response::Response;
use crate::table::ItemTable;

/// The main client for browsing the published item catalogue.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. The release version discovered by
/// [`fetch_version`](CatalogClient::fetch_version) is shared between clones.
///
/// # Example
///
/// ```ignore
/// use itemdex_lib::CatalogClient;
///
/// let client = CatalogClient::builder().build()?;
///
/// let table = client.build_table("swords").await?;
/// ```
#[derive(Clone)]
pub struct CatalogClient {
    inner: Arc<CatalogClientInner>,
}

struct CatalogClientInner {
    base_url: String,
    site_url: String,
    http_client: Client,
    timeout: Option<Duration>,
    sprite_cache: Arc<dyn CacheProvider>,
    version: RwLock<Option<GameVersion>>,
}

impl CatalogClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> CatalogClientBuilder {
        CatalogClientBuilder::new()
    }

    /// Discovers the published release version from the build properties
    /// file on the default branch.
    ///
    /// The version is stored on the client and reused for every feed and
    /// sprite URL until this is called again.
    pub async fn fetch_version(&self) -> Result<GameVersion, Error> {
        let url = urls::version_properties_url(&self.inner.base_url);
        let properties = self.fetch_text(&url).await?;
        let version = GameVersion::parse(&properties)?;
        debug!("published release {version}");
        *self.inner.version.write().await = Some(version.clone());
        Ok(version)
    }

    /// Returns the release version discovered so far, if any.
    pub async fn version(&self) -> Option<GameVersion> {
        self.inner.version.read().await.clone()
    }

    /// Returns the stored release version, discovering it first if this
    /// client has not seen one yet.
    async fn ensure_version(&self) -> Result<GameVersion, Error> {
        if let Some(version) = self.inner.version.read().await.clone() {
            return Ok(version);
        }
        self.fetch_version().await
    }

    /// Fetches one category's feed and decodes its item records.
    pub async fn fetch_items(&self, category: &str) -> Result<Vec<ItemRecord>, Error> {
        let version = self.ensure_version().await?;
        let url = urls::feed_url(&self.inner.base_url, &version.release_tag(), category);
        let xml = self.fetch_text(&url).await?;
        let items = feed::parse_items(&xml)?;
        debug!("{category}: {} item records", items.len());
        Ok(items)
    }

    /// Fetches one category's feed and builds its attribute table.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let table = client.build_table("shields").await?;
    /// for row in table.rows() {
    ///     println!("{}", row.name);
    /// }
    /// ```
    pub async fn build_table(&self, category: &str) -> Result<ItemTable, Error> {
        let items = self.fetch_items(category).await?;
        Ok(ItemTable::build(category, &items))
    }

    /// Resolves the sprite URL for an item class and sprite name.
    ///
    /// Needs the release version, so it may fetch it first.
    pub async fn sprite_url(&self, class: &str, sprite: &str) -> Result<String, Error> {
        let version = self.ensure_version().await?;
        Ok(urls::sprite_url(
            &self.inner.base_url,
            &version.release_tag(),
            class,
            sprite,
        ))
    }

    /// Resolves an item's page on the game website.
    pub fn home_url(&self, class: &str, item_name: &str) -> String {
        urls::home_url(&self.inner.site_url, class, item_name)
    }

    /// Fetches an item sprite, serving repeats from the session cache.
    ///
    /// The cache is keyed by the resolved sprite URL and entries live for
    /// the lifetime of the client.
    pub async fn fetch_sprite(&self, class: &str, sprite: &str) -> Result<Response<Vec<u8>>, Error> {
        let url = self.sprite_url(class, sprite).await?;

        if let Some(cached) = self.inner.sprite_cache.get(&url).await {
            debug!("sprite cache hit: {url}");
            return Ok(Response::cache_hit(cached.data, cached.fetched_at));
        }

        let bytes = self.fetch_bytes(&url).await?;
        let cached = CachedValue::new_now(bytes.clone());
        let fetched_at = cached.fetched_at;
        self.inner.sprite_cache.set(&url, cached).await;
        Ok(Response::cache_miss(bytes, fetched_at))
    }

    /// Returns the raw-content base URL feeds are fetched from.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the game website URL item pages live under.
    pub fn site_url(&self) -> &str {
        &self.inner.site_url
    }

    async fn fetch_text(&self, url: &str) -> Result<String, Error> {
        let response = self.request(url).await?;
        Ok(response.text().await.map_err(ApiError::from)?)
    }

    async fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, Error> {
        let response = self.request(url).await?;
        Ok(response.bytes().await.map_err(ApiError::from)?.to_vec())
    }

    async fn request(&self, url: &str) -> Result<reqwest::Response, Error> {
        debug!("GET {url}");
        let mut request = self.inner.http_client.get(url);

        if let Some(timeout) = self.inner.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(ApiError::from)?;

        if response.status().is_success() {
            Ok(response)
        } else {
            Err(Error::Api(ApiError::http(response.status().as_u16(), url)))
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Builder for constructing a [`CatalogClient`].
///
/// Every setting has a default, so `CatalogClient::builder().build()`
/// yields a client pointed at the published catalogue.
///
/// # Example
///
/// ```ignore
/// let client = CatalogClient::builder()
///     .timeout(Duration::from_secs(30))
///     .build()?;
/// ```
pub struct CatalogClientBuilder {
    base_url: String,
    site_url: String,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
    sprite_cache: Option<Arc<dyn CacheProvider>>,
}

impl CatalogClientBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: urls::DEFAULT_BASE_URL.to_string(),
            site_url: urls::DEFAULT_SITE_URL.to_string(),
            timeout: None,
            connect_timeout: None,
            http_client: None,
            sprite_cache: None,
        }
    }

    /// Sets the raw-content base URL feeds and sprites are fetched from.
    ///
    /// # Example
    ///
    /// ```ignore
    /// .base_url("https://raw.githubusercontent.com/arianne/stendhal/")
    /// ```
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the game website URL item pages live under.
    pub fn site_url(mut self, url: impl Into<String>) -> Self {
        self.site_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Sets the sprite cache implementation.
    ///
    /// Defaults to an unbounded [`InMemoryCache`].
    pub fn sprite_cache<C: CacheProvider + 'static>(mut self, cache: C) -> Self {
        self.sprite_cache = Some(Arc::new(cache));
        self
    }

    /// Builds the [`CatalogClient`].
    ///
    /// # Errors
    ///
    /// Returns an error if either URL does not parse or the HTTP client
    /// cannot be constructed.
    pub fn build(self) -> Result<CatalogClient, Error> {
        Url::parse(&self.base_url)
            .map_err(|e| ApiError::invalid_url(&self.base_url, e.to_string()))?;
        Url::parse(&self.site_url)
            .map_err(|e| ApiError::invalid_url(&self.site_url, e.to_string()))?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => {
                let mut builder = Client::builder();
                if let Some(timeout) = self.connect_timeout {
                    builder = builder.connect_timeout(timeout);
                }
                builder.build().map_err(ApiError::from)?
            }
        };

        let sprite_cache = self
            .sprite_cache
            .unwrap_or_else(|| Arc::new(InMemoryCache::new()));

        Ok(CatalogClient {
            inner: Arc::new(CatalogClientInner {
                base_url: self.base_url,
                site_url: self.site_url,
                http_client,
                timeout: self.timeout,
                sprite_cache,
                version: RwLock::new(None),
            }),
        })
    }
}

impl Default for CatalogClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================
