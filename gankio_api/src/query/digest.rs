use url::Url;

use super::common::{Query, QueryCommon};

/// Query for the history digest endpoint: `api/history/content/{count}/{page}`.
#[derive(Default, Clone, Copy)]
pub struct DigestQuery {
    pub common: QueryCommon,
}

impl Query for DigestQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn add_to_url(&self, url: &Url) -> Url {
        self.common.add_to_url(url)
    }
}
