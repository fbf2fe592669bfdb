use url::Url;

use crate::types::Category;

use super::common::{Query, QueryCommon};

/// Query for the search endpoint:
/// `api/search/query/{keywords}/category/{category}/count/{count}/page/{page}`.
///
/// Unlike the other endpoints, the literal `category`/`count`/`page` labels
/// are themselves path segments interleaved with the values.
#[derive(Clone)]
pub struct SearchQuery {
    pub common: QueryCommon,
    pub keywords: String,
    pub category: Category,
}

impl SearchQuery {
    pub fn new(keywords: &str) -> Self {
        Self {
            common: QueryCommon::default(),
            keywords: keywords.to_string(),
            category: Category::All,
        }
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

impl Query for SearchQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .push(&self.keywords)
                .push("category")
                .push(&self.category.to_string())
                .push("count")
                .push(&self.common.count.to_string())
                .push("page")
                .push(&self.common.page.to_string());
        }
        url
    }
}
