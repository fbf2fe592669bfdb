//! Shared query infrastructure: the [`Query`] trait and [`QueryCommon`] fields.
//!
//! The API takes its parameters as URL path segments rather than a query
//! string (`api/data/{category}/{count}/{page}`), so builders serialize by
//! appending segments to the endpoint URL.

use url::Url;

/// Trait implemented by all query builders. Provides URL serialization and
/// shared builder methods for pagination.
pub trait Query {
    /// Appends this query's path segments to the given URL, returning the
    /// modified URL.
    fn add_to_url(&self, url: &Url) -> Url;

    /// Returns a mutable reference to the common query fields.
    fn get_common(&mut self) -> &mut QueryCommon;

    /// Sets the page number (1-indexed).
    fn with_page(mut self, page: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().page = page;
        self
    }

    /// Sets the number of results per page. The server caps this at 50.
    fn with_count(mut self, count: i64) -> Self
    where
        Self: Sized,
    {
        self.get_common().count = count;
        self
    }
}

/// Fields shared by all query types: result count and page number.
#[derive(Clone, Copy)]
pub struct QueryCommon {
    /// Results per page. Defaults to 10, the page size the feed screens use.
    pub count: i64,
    /// Page number (1-indexed). Defaults to 1.
    pub page: i64,
}

impl Default for QueryCommon {
    fn default() -> QueryCommon {
        QueryCommon { count: 10, page: 1 }
    }
}

impl QueryCommon {
    /// Appends the `{count}/{page}` segments to the URL.
    pub fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .push(&self.count.to_string())
                .push(&self.page.to_string());
        }
        url
    }
}
