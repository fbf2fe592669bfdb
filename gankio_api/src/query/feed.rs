use url::Url;

use crate::types::Category;

use super::common::{Query, QueryCommon};

/// Query for the category feed endpoint: `api/data/{category}/{count}/{page}`.
#[derive(Default, Clone, Copy)]
pub struct FeedQuery {
    pub common: QueryCommon,
    pub category: Category,
}

impl Query for FeedQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(&self.category.to_string());
        }
        self.common.add_to_url(&url)
    }
}

impl FeedQuery {
    pub fn with_category(mut self, category: Category) -> Self {
        self.category = category;
        self
    }
}

#[cfg(test)]
mod tests {
    use url::Url;

    use crate::{
        query::{FeedQuery, Query},
        types::Category,
    };

    #[test]
    fn feed_query_renders_path_segments() {
        let url = Url::parse("https://example.com/api/data").unwrap();

        let rendered = FeedQuery::default().add_to_url(&url);
        assert_eq!(rendered.path(), "/api/data/all/10/1");

        let rendered = FeedQuery::default()
            .with_category(Category::Android)
            .with_count(20)
            .with_page(3)
            .add_to_url(&url);
        assert_eq!(rendered.path(), "/api/data/Android/20/3");
    }

    #[test]
    fn feed_query_percent_encodes_wire_spellings() {
        let url = Url::parse("https://example.com/api/data").unwrap();
        let rendered = FeedQuery::default()
            .with_category(Category::Images)
            .add_to_url(&url);
        // 福利 as UTF-8 percent-encoded
        assert_eq!(rendered.path(), "/api/data/%E7%A6%8F%E5%88%A9/10/1");
    }
}
