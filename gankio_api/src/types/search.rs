use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single search result. Structurally a flattened [`super::Entry`]; the
/// search endpoint reports dates without a time component.
#[derive(Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    pub desc: String,

    #[serde(default)]
    pub who: Option<String>,

    #[serde(default)]
    pub published_at: Option<NaiveDate>,

    /// Category tag as the server spells it.
    #[serde(rename = "type")]
    pub kind: String,

    pub url: String,

    /// URL of the readability-proxied version of the page, when available.
    #[serde(default)]
    pub readability: Option<String>,
}
