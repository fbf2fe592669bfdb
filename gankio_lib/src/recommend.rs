//! The recommend screen: a two-step fetch that turns a day aggregate into a
//! single flat list.
//!
//! First the day-history endpoint supplies the dates with published content
//! (newest first); a fixed offset into that list picks the day to show.
//! The day aggregate for that date is then flattened into one list covering
//! the Android, iOS, image, resource, and recommended categories, in that
//! order. Video and app entries are not part of the merge.

use std::sync::Arc;

use chrono::NaiveDate;

use gankio_api::types::{DayDigest, Entry};

use crate::client::CachedClient;
use crate::error::GankError;

/// Offset into the day-history list the screen shows by default.
pub const DEFAULT_HISTORY_OFFSET: usize = 10;

/// The curated "recommend" feed: not paginated, rebuilt on every fetch.
pub struct RecommendFeed {
    client: Arc<CachedClient>,
    offset: usize,
    items: Vec<Entry>,
    date: Option<NaiveDate>,
}

impl RecommendFeed {
    pub fn new(client: Arc<CachedClient>) -> Self {
        Self {
            client,
            offset: DEFAULT_HISTORY_OFFSET,
            items: Vec::new(),
            date: None,
        }
    }

    /// Overrides the offset into the day-history list.
    pub fn with_offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// The entries from the last successful fetch.
    pub fn items(&self) -> &[Entry] {
        &self.items
    }

    /// The date the last successful fetch resolved to.
    pub fn date(&self) -> Option<NaiveDate> {
        self.date
    }

    /// Fetches the day-history list, resolves the configured offset to a
    /// date, fetches that day's aggregate, and flattens it. Returns the
    /// number of entries loaded.
    pub async fn fetch(&mut self) -> Result<usize, GankError> {
        let history = self.client.get_day_history().await?;
        let dates = &history.results;
        let date_str = dates
            .get(self.offset)
            .ok_or(GankError::HistoryOffsetOutOfRange {
                offset: self.offset,
                len: dates.len(),
            })?;
        let date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d").map_err(|e| {
            GankError::InvalidInput(format!("malformed history date {:?}: {}", date_str, e))
        })?;

        let day = self.client.get_day(date).await?;
        tracing::debug!(
            "recommend: offset {} resolved to {}, {} categories",
            self.offset,
            date,
            day.category.len()
        );
        self.items = flatten_day(day.results);
        self.date = Some(date);
        Ok(self.items.len())
    }
}

/// Flattens a day aggregate into one list: Android, iOS, images, resources,
/// recommended, in source order. Every entry of those five lists appears
/// exactly once; the video and app lists are excluded.
fn flatten_day(day: DayDigest) -> Vec<Entry> {
    let DayDigest {
        android,
        ios,
        images,
        resources,
        recommended,
        ..
    } = day;

    let mut entries =
        Vec::with_capacity(android.len() + ios.len() + images.len() + resources.len() + recommended.len());
    entries.extend(android);
    entries.extend(ios);
    entries.extend(images);
    entries.extend(resources);
    entries.extend(recommended);
    entries
}
