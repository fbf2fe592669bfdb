//! The `search` subcommand: keyword search across the feed.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use gankio_lib::validation;
use gankio_lib::{CachedClient, SearchFeed};

use crate::output::{print_json, print_search_table, OutputFormat};

#[derive(Args)]
pub struct SearchArgs {
    /// Keywords to search for
    pub keywords: String,

    /// Restrict results to a category
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Results per page (1-50)
    #[arg(long, default_value = "10")]
    pub count: i64,

    /// Number of pages to fetch
    #[arg(long, default_value = "1")]
    pub pages: i64,
}

pub async fn run(
    args: &SearchArgs,
    client: Arc<CachedClient>,
    format: &OutputFormat,
) -> Result<()> {
    let keywords = validation::validate_keywords(&args.keywords)?;
    let category = validation::validate_category(&args.category)?;
    let count = validation::validate_count(args.count)?;
    let pages = validation::validate_page(args.pages)?;

    let mut feed = SearchFeed::new(client, &keywords, category).with_page_size(count);
    feed.refresh().await?;
    while feed.current_page() < pages && !feed.ended() {
        feed.load_more().await?;
    }

    match format {
        OutputFormat::Json => print_json(&feed.items())?,
        OutputFormat::Table => print_search_table(feed.items()),
    }
    Ok(())
}
