//! Library layer for the Gank.io client: cached API client, per-screen feed
//! pagination, and the recommend merge.
//!
//! Wraps the `gankio_api` crate with an in-memory TTL response cache and the
//! screen-level fetch logic the app builds on: paginated feeds with an
//! end-of-list latch, and the two-step recommend fetch that flattens a day
//! aggregate into a single list.

pub mod cache;
pub mod client;
pub mod error;
pub mod feed;
pub mod recommend;
pub mod validation;

pub use gankio_api;
pub use gankio_api::types;
pub use gankio_api::{DigestQuery, FeedQuery, Query, SearchQuery};

pub use client::CachedClient;
pub use error::GankError;
pub use feed::{CategoryFeed, DigestFeed, SearchFeed};
pub use recommend::RecommendFeed;
