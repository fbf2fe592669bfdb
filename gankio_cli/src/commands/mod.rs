pub mod dates;
pub mod day;
pub mod digests;
pub mod feed;
pub mod images;
pub mod recommend;
pub mod search;
