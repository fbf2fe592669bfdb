mod common;
pub use self::common::Query;

mod feed;
pub use self::feed::FeedQuery;

mod search;
pub use self::search::SearchQuery;

mod digest;
pub use self::digest::DigestQuery;
