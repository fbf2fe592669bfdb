use serde::{Deserialize, Serialize};

use super::day::DayDigest;

/// Standard response wrapper: an error flag plus a list of results.
///
/// The API signals "no more data" by setting `error` to true rather than
/// using an HTTP status, so both fields tolerate being absent.
#[derive(Serialize, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub error: bool,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

impl<T> Envelope<T> {
    /// True when this response marks the end of a paginated feed: either the
    /// server raised the error flag or the page came back empty.
    pub fn is_end(&self) -> bool {
        self.error || self.results.is_empty()
    }
}

/// Response wrapper for the day-aggregate endpoint, whose `results` is a
/// keyed object rather than a list.
#[derive(Serialize, Deserialize)]
pub struct DayEnvelope {
    #[serde(default)]
    pub error: bool,
    /// Names of the categories that have entries on this day.
    #[serde(default)]
    pub category: Vec<String>,
    #[serde(default)]
    pub results: DayDigest,
}
