//! The `digests` subcommand: the curated history digest list.

use std::sync::Arc;

use anyhow::{anyhow, Result};
use chrono::NaiveDate;
use clap::Args;
use gankio_lib::validation;
use gankio_lib::{CachedClient, DigestFeed};

use crate::output::{print_digests_table, print_json, OutputFormat};

#[derive(Args)]
pub struct DigestsArgs {
    /// Show the digest for a single date (YYYY-MM-DD) instead of the list
    #[arg(long)]
    pub date: Option<String>,

    /// Results per page (1-50)
    #[arg(long, default_value = "10")]
    pub count: i64,

    /// Number of pages to fetch
    #[arg(long, default_value = "1")]
    pub pages: i64,

    /// Print the digest body HTML instead of the summary table
    #[arg(long)]
    pub content: bool,
}

pub async fn run(
    args: &DigestsArgs,
    client: Arc<CachedClient>,
    format: &OutputFormat,
) -> Result<()> {
    if let Some(ref date) = args.date {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|e| anyhow!("invalid date {:?} (expected YYYY-MM-DD): {}", date, e))?;
        let resp = client.get_day_digest(date).await?;
        if resp.is_end() {
            return Err(anyhow!("no digest published on {}", date));
        }
        return render(&resp.results, args.content, format);
    }

    let count = validation::validate_count(args.count)?;
    let pages = validation::validate_page(args.pages)?;

    let mut feed = DigestFeed::new(client).with_page_size(count);
    feed.refresh().await?;
    while feed.current_page() < pages && !feed.ended() {
        feed.load_more().await?;
    }
    render(feed.items(), args.content, format)
}

fn render(
    digests: &[gankio_lib::types::Digest],
    content: bool,
    format: &OutputFormat,
) -> Result<()> {
    if content {
        for digest in digests {
            println!("{}", digest.content);
        }
        return Ok(());
    }
    match format {
        OutputFormat::Json => print_json(&digests)?,
        OutputFormat::Table => print_digests_table(digests),
    }
    Ok(())
}
