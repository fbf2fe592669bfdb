//! Caching wrapper around the API client.

use chrono::NaiveDate;

use gankio_api::types::{DayEnvelope, Digest, Entry, Envelope, SearchHit};
use gankio_api::{Client, DigestQuery, FeedQuery, SearchQuery};

use crate::cache::ResponseCache;
use crate::error::GankError;

/// API client wrapper that adds an in-memory response cache.
///
/// Cache hits bypass the network entirely. The feed data is read-only and
/// server-paginated, so a short TTL keeps tab switches and repeated page
/// loads from re-fetching identical pages. There is no retry and no
/// rate limiting; a failed request surfaces immediately.
pub struct CachedClient {
    inner: Client,
    cache: ResponseCache,
}

impl CachedClient {
    /// Creates a new cached client using the production API URL.
    pub fn new(cache: ResponseCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Creates a new cached client with a custom base URL. Used for testing
    /// and for the `GANK_API_BASE` override.
    pub fn with_base_url(base_url: &str, cache: ResponseCache) -> Self {
        Self {
            inner: Client::with_base_url(base_url),
            cache,
        }
    }

    /// Fetches one page of a category feed, returning cached results when
    /// available.
    pub async fn get_feed(&self, query: &FeedQuery) -> Result<Envelope<Entry>, GankError> {
        let cache_key = format!(
            "data:{}:{}:{}",
            query.category, query.common.count, query.common.page
        );

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Envelope<Entry> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_feed(query).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches the list of dates with published content, newest first.
    pub async fn get_day_history(&self) -> Result<Envelope<String>, GankError> {
        let cache_key = "day_history".to_string();

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Envelope<String> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_day_history().await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches the day aggregate for a specific date.
    pub async fn get_day(&self, date: NaiveDate) -> Result<DayEnvelope, GankError> {
        let cache_key = format!("day:{}", date);

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: DayEnvelope = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_day(date).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches a paginated list of curated history digests.
    pub async fn get_digests(&self, query: &DigestQuery) -> Result<Envelope<Digest>, GankError> {
        let cache_key = format!("digest:{}:{}", query.common.count, query.common.page);

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Envelope<Digest> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_digests(query).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Fetches the history digest for a specific date.
    pub async fn get_day_digest(&self, date: NaiveDate) -> Result<Envelope<Digest>, GankError> {
        let cache_key = format!("digest_day:{}", date);

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Envelope<Digest> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.get_day_digest(date).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Searches entries by keyword, returning cached results when available.
    pub async fn search(&self, query: &SearchQuery) -> Result<Envelope<SearchHit>, GankError> {
        let cache_key = format!(
            "search:{}:{}:{}:{}",
            query.keywords, query.category, query.common.count, query.common.page
        );

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Envelope<SearchHit> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let resp = self.inner.search(query).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Drops every cached response.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
