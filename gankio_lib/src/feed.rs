//! Per-screen feed pagination: refresh and load-more with an end-of-list
//! latch.
//!
//! Each screen owns one feed value. Both operations take `&mut self`, so a
//! screen can never have more than one request in flight. The server marks
//! the end of a feed by raising the envelope's error flag (or returning an
//! empty page); once seen, the feed latches and `load_more` stops issuing
//! requests until the next `refresh`.

use std::sync::Arc;

use gankio_api::types::{Category, Digest, Entry, SearchHit};
use gankio_api::{DigestQuery, FeedQuery, Query, SearchQuery};

use crate::client::CachedClient;
use crate::error::GankError;

/// Default page size for feed screens.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Pagination state shared by every feed screen: the next page to request
/// and the end-of-list latch.
#[derive(Clone, Copy)]
struct PageState {
    next_page: i64,
    page_size: i64,
    ended: bool,
}

impl PageState {
    fn new(page_size: i64) -> Self {
        Self {
            next_page: 1,
            page_size,
            ended: false,
        }
    }

    fn reset(&mut self) {
        self.next_page = 1;
        self.ended = false;
    }

    /// Folds one fetched page into the accumulated items. An error flag or
    /// an empty page latches the end of the feed and contributes nothing;
    /// otherwise the page is appended and the counter advances.
    fn absorb<T>(&mut self, error: bool, mut page: Vec<T>, items: &mut Vec<T>) -> usize {
        if error || page.is_empty() {
            self.ended = true;
            return 0;
        }
        let added = page.len();
        items.append(&mut page);
        self.next_page += 1;
        added
    }
}

/// A paginated, category-scoped feed of entries: one tab of the app.
pub struct CategoryFeed {
    client: Arc<CachedClient>,
    category: Category,
    state: PageState,
    items: Vec<Entry>,
}

impl CategoryFeed {
    pub fn new(client: Arc<CachedClient>, category: Category) -> Self {
        Self {
            client,
            category,
            state: PageState::new(DEFAULT_PAGE_SIZE),
            items: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.state.page_size = page_size;
        self
    }

    /// All entries accumulated since the last refresh.
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// True once the server has signalled the end of this feed.
    pub fn ended(&self) -> bool {
        self.state.ended
    }

    /// The last page fetched, or 0 before the initial load.
    pub fn current_page(&self) -> i64 {
        self.state.next_page - 1
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// Resets the page counter to 1, clears accumulated items, and fetches
    /// the first page. Returns the number of entries loaded.
    pub async fn refresh(&mut self) -> Result<usize, GankError> {
        self.state.reset();
        self.items.clear();
        self.load_more().await
    }

    /// Fetches the next page and appends it, returning the number of new
    /// entries. Once the feed has ended this returns 0 without issuing a
    /// request.
    pub async fn load_more(&mut self) -> Result<usize, GankError> {
        if self.state.ended {
            return Ok(0);
        }
        let query = FeedQuery::default()
            .with_category(self.category)
            .with_count(self.state.page_size)
            .with_page(self.state.next_page);
        let resp = self.client.get_feed(&query).await?;
        tracing::debug!(
            "feed {} page {}: {} entries (error={})",
            self.category,
            self.state.next_page,
            resp.results.len(),
            resp.error
        );
        Ok(self.state.absorb(resp.error, resp.results, &mut self.items))
    }
}

/// A paginated keyword search feed.
pub struct SearchFeed {
    client: Arc<CachedClient>,
    keywords: String,
    category: Category,
    state: PageState,
    items: Vec<SearchHit>,
}

impl SearchFeed {
    pub fn new(client: Arc<CachedClient>, keywords: &str, category: Category) -> Self {
        Self {
            client,
            keywords: keywords.to_string(),
            category,
            state: PageState::new(DEFAULT_PAGE_SIZE),
            items: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.state.page_size = page_size;
        self
    }

    pub fn items(&self) -> &[SearchHit] {
        &self.items
    }

    pub fn ended(&self) -> bool {
        self.state.ended
    }

    pub fn current_page(&self) -> i64 {
        self.state.next_page - 1
    }

    /// Resets the page counter to 1, clears accumulated hits, and fetches
    /// the first page of results.
    pub async fn refresh(&mut self) -> Result<usize, GankError> {
        self.state.reset();
        self.items.clear();
        self.load_more().await
    }

    /// Fetches the next page of hits. A no-op once the results have ended.
    pub async fn load_more(&mut self) -> Result<usize, GankError> {
        if self.state.ended {
            return Ok(0);
        }
        let query = SearchQuery::new(&self.keywords)
            .with_category(self.category)
            .with_count(self.state.page_size)
            .with_page(self.state.next_page);
        let resp = self.client.search(&query).await?;
        Ok(self.state.absorb(resp.error, resp.results, &mut self.items))
    }
}

/// A paginated feed of curated history digests.
pub struct DigestFeed {
    client: Arc<CachedClient>,
    state: PageState,
    items: Vec<Digest>,
}

impl DigestFeed {
    pub fn new(client: Arc<CachedClient>) -> Self {
        Self {
            client,
            state: PageState::new(DEFAULT_PAGE_SIZE),
            items: Vec::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: i64) -> Self {
        self.state.page_size = page_size;
        self
    }

    pub fn items(&self) -> &[Digest] {
        &self.items
    }

    pub fn ended(&self) -> bool {
        self.state.ended
    }

    pub fn current_page(&self) -> i64 {
        self.state.next_page - 1
    }

    pub async fn refresh(&mut self) -> Result<usize, GankError> {
        self.state.reset();
        self.items.clear();
        self.load_more().await
    }

    pub async fn load_more(&mut self) -> Result<usize, GankError> {
        if self.state.ended {
            return Ok(0);
        }
        let query = DigestQuery::default()
            .with_count(self.state.page_size)
            .with_page(self.state.next_page);
        let resp = self.client.get_digests(&query).await?;
        Ok(self.state.absorb(resp.error, resp.results, &mut self.items))
    }
}
