//! Caching layer for provider profiles to reduce API calls

use async_trait::async_trait;
use cached::{Cached, TimedCache};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::profile::ProviderProfile;
use crate::provider::DataProvider;
use crate::ticker::Ticker;

/// Thread-safe timed cache of profiles keyed by ticker
pub struct ProfileCache {
    cache: Arc<RwLock<TimedCache<Ticker, ProviderProfile>>>,
}

impl ProfileCache {
    /// Create a new cache with specified TTL
    pub fn new(ttl: Duration) -> Self {
        Self {
            cache: Arc::new(RwLock::new(TimedCache::with_lifespan(ttl))),
        }
    }

    /// Get a value from the cache
    pub async fn get(&self, ticker: &Ticker) -> Option<ProviderProfile> {
        let mut cache = self.cache.write().await;
        cache.cache_get(ticker).cloned()
    }

    /// Insert a value into the cache
    pub async fn insert(&self, ticker: Ticker, profile: ProviderProfile) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_set(ticker, profile);
    }

    /// Invalidate a specific cache entry
    pub async fn invalidate(&self, ticker: &Ticker) {
        let mut cache = self.cache.write().await;
        let _ = cache.cache_remove(ticker);
    }

    /// Clear all cached entries
    pub async fn clear(&self) {
        let mut cache = self.cache.write().await;
        cache.cache_clear();
    }

    /// Number of live entries; expired ones are dropped first
    pub async fn len(&self) -> usize {
        let mut cache = self.cache.write().await;
        cache.flush();
        cache.cache_size()
    }

    /// Check if the cache is empty
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Clone for ProfileCache {
    fn clone(&self) -> Self {
        Self {
            cache: Arc::clone(&self.cache),
        }
    }
}

/// Provider wrapper that serves repeated lookups from a `ProfileCache`
///
/// Only successful fetches are cached, so a transient failure is retried on
/// the next call.
pub struct CachedProvider<P> {
    inner: P,
    cache: ProfileCache,
}

impl<P: DataProvider> CachedProvider<P> {
    pub fn new(inner: P, ttl: Duration) -> Self {
        Self {
            inner,
            cache: ProfileCache::new(ttl),
        }
    }

    /// The underlying cache, shared with clones of this handle
    pub fn cache(&self) -> &ProfileCache {
        &self.cache
    }
}

#[async_trait]
impl<P: DataProvider> DataProvider for CachedProvider<P> {
    async fn profile(&self, ticker: &Ticker) -> Result<ProviderProfile> {
        if let Some(profile) = self.cache.get(ticker).await {
            tracing::debug!(%ticker, "Cache hit");
            return Ok(profile);
        }

        tracing::debug!(%ticker, provider = self.inner.name(), "Cache miss");
        let profile = self.inner.profile(ticker).await?;
        self.cache.insert(ticker.clone(), profile.clone()).await;
        Ok(profile)
    }

    fn name(&self) -> &'static str {
        self.inner.name()
    }
}
