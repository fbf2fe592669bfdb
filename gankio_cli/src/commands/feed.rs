//! The `feed` subcommand: one paginated category tab.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use gankio_lib::validation;
use gankio_lib::{CachedClient, CategoryFeed};
use indicatif::{ProgressBar, ProgressStyle};

use crate::output::{print_entries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct FeedArgs {
    /// Category: all, android, ios, app, video, images, resources,
    /// frontend, recommended
    #[arg(long, default_value = "all")]
    pub category: String,

    /// Results per page (1-50)
    #[arg(long, default_value = "10")]
    pub count: i64,

    /// Number of pages to fetch, following the feed's load-more
    #[arg(long, default_value = "1")]
    pub pages: i64,
}

pub async fn run(args: &FeedArgs, client: Arc<CachedClient>, format: &OutputFormat) -> Result<()> {
    let category = validation::validate_category(&args.category)?;
    let count = validation::validate_count(args.count)?;
    let pages = validation::validate_page(args.pages)?;

    let mut feed = CategoryFeed::new(client, category).with_page_size(count);
    feed.refresh().await?;

    if pages > 1 {
        let pb = ProgressBar::new(pages as u64);
        pb.set_style(
            ProgressStyle::with_template(
                "[{elapsed_precise}] {bar:40.cyan/blue} {pos:>2}/{len:2} {msg}",
            )
            .unwrap(),
        );
        pb.set_message("fetching pages...");
        pb.inc(1);
        while feed.current_page() < pages && !feed.ended() {
            feed.load_more().await?;
            pb.inc(1);
        }
        pb.finish_and_clear();
    }

    match format {
        OutputFormat::Json => print_json(&feed.items())?,
        OutputFormat::Table => print_entries_table(feed.items()),
    }
    if feed.ended() {
        eprintln!("(end of feed)");
    }
    Ok(())
}
