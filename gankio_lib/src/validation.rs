//! Input validation for user-supplied query parameters.

use std::str::FromStr;

use gankio_api::types::Category;

use crate::error::GankError;

/// The server rejects counts above 50.
pub const MAX_COUNT: i64 = 50;
/// Byte-length cap for search keywords.
pub const MAX_KEYWORDS_LENGTH: usize = 100;

/// CLI-friendly aliases for every category, in the order the tabs appear.
pub const CATEGORY_ALIASES: &[&str] = &[
    "all",
    "android",
    "ios",
    "app",
    "video",
    "images",
    "resources",
    "frontend",
    "recommended",
];

/// Validates a per-page result count against the server's bounds.
pub fn validate_count(count: i64) -> Result<i64, GankError> {
    if !(1..=MAX_COUNT).contains(&count) {
        return Err(GankError::InvalidInput(format!(
            "count must be between 1 and {}, got {}",
            MAX_COUNT, count
        )));
    }
    Ok(count)
}

/// Validates a 1-indexed page number.
pub fn validate_page(page: i64) -> Result<i64, GankError> {
    if page < 1 {
        return Err(GankError::InvalidInput(format!(
            "page must be 1 or greater, got {}",
            page
        )));
    }
    Ok(page)
}

/// Strips ASCII control characters, trims whitespace, and enforces the
/// length cap. Keywords end up in a URL path segment, so an empty or
/// control-laden string would produce a nonsense request.
pub fn validate_keywords(input: &str) -> Result<String, GankError> {
    if input.len() > MAX_KEYWORDS_LENGTH {
        return Err(GankError::InvalidInput(format!(
            "keywords exceed maximum length of {} bytes",
            MAX_KEYWORDS_LENGTH
        )));
    }
    let cleaned: String = input.chars().filter(|c| !c.is_ascii_control()).collect();
    let cleaned = cleaned.trim().to_string();
    if cleaned.is_empty() {
        return Err(GankError::InvalidInput(
            "keywords must not be empty".to_string(),
        ));
    }
    Ok(cleaned)
}

/// Parses a category from a CLI alias or wire spelling.
pub fn validate_category(input: &str) -> Result<Category, GankError> {
    Category::from_str(input).map_err(|_| {
        GankError::InvalidInput(format!(
            "unknown category {:?}; expected one of: {}",
            input,
            CATEGORY_ALIASES.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use gankio_api::types::Category;

    use super::*;

    #[test]
    fn count_bounds() {
        assert!(validate_count(1).is_ok());
        assert!(validate_count(50).is_ok());
        assert!(validate_count(0).is_err());
        assert!(validate_count(51).is_err());
        assert!(validate_count(-3).is_err());
    }

    #[test]
    fn page_bounds() {
        assert!(validate_page(1).is_ok());
        assert!(validate_page(100).is_ok());
        assert!(validate_page(0).is_err());
        assert!(validate_page(-1).is_err());
    }

    #[test]
    fn keywords_are_sanitized() {
        assert_eq!(validate_keywords("  RxJava  ").unwrap(), "RxJava");
        assert_eq!(validate_keywords("list\x00view\x1f").unwrap(), "listview");
    }

    #[test]
    fn keywords_reject_empty_and_oversized() {
        assert!(validate_keywords("").is_err());
        assert!(validate_keywords("   ").is_err());
        assert!(validate_keywords("\x00\x01").is_err());
        assert!(validate_keywords(&"x".repeat(MAX_KEYWORDS_LENGTH + 1)).is_err());
    }

    #[test]
    fn keywords_allow_chinese() {
        assert_eq!(validate_keywords("干货").unwrap(), "干货");
    }

    #[test]
    fn category_aliases_parse() {
        assert_eq!(validate_category("android").unwrap(), Category::Android);
        assert_eq!(validate_category("images").unwrap(), Category::Images);
        assert_eq!(validate_category("福利").unwrap(), Category::Images);
        assert!(validate_category("news").is_err());
    }

    #[test]
    fn every_alias_is_valid() {
        for alias in CATEGORY_ALIASES {
            assert!(validate_category(alias).is_ok(), "alias {:?}", alias);
        }
    }
}
