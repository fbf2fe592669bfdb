//! The `images` subcommand: the image-only feed.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use gankio_lib::types::Category;
use gankio_lib::validation;
use gankio_lib::{CachedClient, CategoryFeed};

use crate::output::{print_entries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct ImagesArgs {
    /// Results per page (1-50)
    #[arg(long, default_value = "10")]
    pub count: i64,

    /// Number of pages to fetch
    #[arg(long, default_value = "1")]
    pub pages: i64,

    /// Print bare image URLs only, one per line
    #[arg(long)]
    pub urls_only: bool,
}

pub async fn run(
    args: &ImagesArgs,
    client: Arc<CachedClient>,
    format: &OutputFormat,
) -> Result<()> {
    let count = validation::validate_count(args.count)?;
    let pages = validation::validate_page(args.pages)?;

    let mut feed = CategoryFeed::new(client, Category::Images).with_page_size(count);
    feed.refresh().await?;
    while feed.current_page() < pages && !feed.ended() {
        feed.load_more().await?;
    }

    if args.urls_only {
        for entry in feed.items() {
            println!("{}", entry.url);
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => print_json(&feed.items())?,
        OutputFormat::Table => print_entries_table(feed.items()),
    }
    Ok(())
}
