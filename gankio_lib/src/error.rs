//! Error types for the library layer.

use std::fmt;

/// Errors produced by the library layer, wrapping upstream API errors and
/// adding serialization and input validation failures.
#[derive(Debug)]
pub enum GankError {
    /// An error from the underlying API client.
    Api(gankio_api::Error),
    /// JSON serialization or deserialization failed (e.g. a cached
    /// response that no longer parses).
    Serialization(serde_json::Error),
    /// User-provided input failed validation.
    InvalidInput(String),
    /// The recommend offset points past the end of the day-history list.
    HistoryOffsetOutOfRange { offset: usize, len: usize },
}

impl fmt::Display for GankError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Api(e) => write!(f, "API error: {}", e),
            Self::Serialization(e) => write!(f, "Serialization error: {}", e),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::HistoryOffsetOutOfRange { offset, len } => write!(
                f,
                "Day history offset {} is out of range (history has {} dates)",
                offset, len
            ),
        }
    }
}

impl std::error::Error for GankError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Api(e) => Some(e),
            Self::Serialization(e) => Some(e),
            _ => None,
        }
    }
}

impl From<gankio_api::Error> for GankError {
    fn from(e: gankio_api::Error) -> Self {
        Self::Api(e)
    }
}

impl From<serde_json::Error> for GankError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e)
    }
}
