use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a feed entry (a Mongo-style object id).
pub type EntryID = String;

/// A single published item in a category feed or day aggregate.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(rename = "_id", default)]
    pub id: EntryID,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// Human-readable description, doubling as the display title.
    pub desc: String,

    /// Submitting author. Absent on some older entries.
    #[serde(default)]
    pub who: Option<String>,

    /// Category tag as the server spells it (e.g. `Android`, `福利`).
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,

    #[serde(default)]
    pub used: bool,

    #[serde(default)]
    pub source: Option<String>,

    /// Inline image URLs, populated on image-bearing entries.
    #[serde(default)]
    pub images: Option<Vec<String>>,
}
