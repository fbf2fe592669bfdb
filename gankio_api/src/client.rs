//! HTTP client for the Gank.io REST API.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use serde::de::DeserializeOwned;
use url::Url;

use crate::{
    query::{DigestQuery, FeedQuery, Query, SearchQuery},
    types::{DayEnvelope, Digest, Entry, Envelope, SearchHit},
    user_agent::get_user_agent,
    Error,
};

/// HTTP client for the Gank.io REST API.
///
/// Sends requests with browser-like headers and a randomized user agent.
/// Each request builds a fresh `reqwest::Client` with a 30-second timeout.
pub struct Client {
    /// Base URL for the API. Defaults to `https://gank.io`.
    base_api_url: String,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Gank.io API.
    pub fn new() -> Self {
        Self {
            base_api_url: "https://gank.io".to_string(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
        }
    }

    fn get_url(&self, path: &str, query: Option<&impl Query>) -> Result<Url, Error> {
        let url = Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    async fn get<T, Q>(&self, path: &str, query: Option<&Q>) -> Result<T, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = self.get_url(path, query)?;
        let client = reqwest::Client::builder()
            .user_agent(get_user_agent())
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::RequestFailed
            })?;
        let resp = client
            .get(url)
            .header("accept", "application/json, text/plain, */*")
            .header("accept-language", "en-US,en;q=0.9,zh-CN;q=0.8")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        let parsed = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(parsed)
    }

    /// Fetches one page of a category feed.
    pub async fn get_feed(&self, query: &FeedQuery) -> Result<Envelope<Entry>, Error> {
        self.get::<Envelope<Entry>, FeedQuery>("/api/data", Some(query))
            .await
    }

    /// Fetches the list of dates with published content, newest first,
    /// as `YYYY-MM-DD` strings.
    pub async fn get_day_history(&self) -> Result<Envelope<String>, Error> {
        self.get::<Envelope<String>, FeedQuery>("/api/day/history", None)
            .await
    }

    /// Fetches the day aggregate for a specific date, grouped by category.
    pub async fn get_day(&self, date: NaiveDate) -> Result<DayEnvelope, Error> {
        self.get::<DayEnvelope, FeedQuery>(
            format!(
                "/api/day/{}/{:02}/{:02}",
                date.year(),
                date.month(),
                date.day()
            )
            .as_str(),
            None,
        )
        .await
    }

    /// Fetches a paginated list of curated history digests.
    pub async fn get_digests(&self, query: &DigestQuery) -> Result<Envelope<Digest>, Error> {
        self.get::<Envelope<Digest>, DigestQuery>("/api/history/content", Some(query))
            .await
    }

    /// Fetches the history digest for a specific date.
    pub async fn get_day_digest(&self, date: NaiveDate) -> Result<Envelope<Digest>, Error> {
        self.get::<Envelope<Digest>, DigestQuery>(
            format!(
                "/api/history/content/day/{}/{:02}/{:02}",
                date.year(),
                date.month(),
                date.day()
            )
            .as_str(),
            None,
        )
        .await
    }

    /// Searches entries by keyword, optionally scoped to a category.
    pub async fn search(&self, query: &SearchQuery) -> Result<Envelope<SearchHit>, Error> {
        self.get::<Envelope<SearchHit>, SearchQuery>("/api/search/query", Some(query))
            .await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        // Bodies are largely Chinese text; back up to a char boundary.
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}
