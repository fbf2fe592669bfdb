use anyhow::Result;
use gankio_lib::types::{Digest, Entry, SearchHit};
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    desc: String,
    #[tabled(rename = "Author")]
    who: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct SearchRow {
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    desc: String,
    #[tabled(rename = "URL")]
    url: String,
}

#[derive(Tabled)]
struct DigestRow {
    #[tabled(rename = "Published")]
    published: String,
    #[tabled(rename = "Title")]
    title: String,
}

// -- Row builders --

fn build_entry_rows(entries: &[Entry]) -> Vec<EntryRow> {
    entries
        .iter()
        .map(|e| EntryRow {
            published: e
                .published_at
                .map(|d| d.date_naive().to_string())
                .unwrap_or_default(),
            category: e.kind.clone(),
            desc: clip(&e.desc, 48),
            who: e.who.clone().unwrap_or_default(),
            url: e.url.clone(),
        })
        .collect()
}

fn build_search_rows(hits: &[SearchHit]) -> Vec<SearchRow> {
    hits.iter()
        .map(|h| SearchRow {
            published: h.published_at.map(|d| d.to_string()).unwrap_or_default(),
            category: h.kind.clone(),
            desc: clip(&h.desc, 48),
            url: h.url.clone(),
        })
        .collect()
}

fn build_digest_rows(digests: &[Digest]) -> Vec<DigestRow> {
    digests
        .iter()
        .map(|d| DigestRow {
            published: d
                .published_at
                .map(|t| t.date_naive().to_string())
                .unwrap_or_default(),
            title: clip(&d.title, 60),
        })
        .collect()
}

// -- Table output --

pub fn print_entries_table(entries: &[Entry]) {
    println!("{}", Table::new(build_entry_rows(entries)));
}

pub fn print_search_table(hits: &[SearchHit]) {
    println!("{}", Table::new(build_search_rows(hits)));
}

pub fn print_digests_table(digests: &[Digest]) {
    println!("{}", Table::new(build_digest_rows(digests)));
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Shortens a cell to at most `max` characters, appending an ellipsis.
fn clip(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max).collect();
        format!("{}…", clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load_entries_fixture() -> Vec<Entry> {
        let json_str = include_str!("../../gankio_api/tests/fixtures/feed.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["results"].clone()).unwrap()
    }

    fn load_search_fixture() -> Vec<SearchHit> {
        let json_str = include_str!("../../gankio_api/tests/fixtures/search.json");
        let resp: serde_json::Value = serde_json::from_str(json_str).unwrap();
        serde_json::from_value(resp["results"].clone()).unwrap()
    }

    #[test]
    fn entry_rows_carry_dates_and_authors() {
        let rows = build_entry_rows(&load_entries_fixture());
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].published, "2016-09-14");
        assert_eq!(rows[0].who, "lazy");
        // missing author renders as an empty cell
        assert_eq!(rows[1].who, "");
        assert_eq!(rows[2].published, "");
    }

    #[test]
    fn search_rows_use_date_only_timestamps() {
        let rows = build_search_rows(&load_search_fixture());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].published, "2016-09-09");
        assert_eq!(rows[0].category, "Android");
    }

    #[test]
    fn clip_keeps_short_text_and_shortens_long() {
        assert_eq!(clip("short", 10), "short");
        let long = "x".repeat(60);
        let clipped = clip(&long, 48);
        assert_eq!(clipped.chars().count(), 49);
        assert!(clipped.ends_with('…'));
    }

    #[test]
    fn clip_counts_chars_not_bytes() {
        // multibyte text below the cap is untouched
        let text = "一个高仿 Instagram 的应用";
        assert_eq!(clip(text, 48), text);
    }
}
