use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::entry::EntryID;

/// A curated daily digest from the history endpoint: a titled HTML page
/// bundling that day's picks.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Digest {
    #[serde(rename = "_id", default)]
    pub id: EntryID,

    pub title: String,

    /// Rendered HTML body of the digest page.
    #[serde(default)]
    pub content: String,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}
