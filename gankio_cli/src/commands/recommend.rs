//! The `recommend` subcommand: the flattened history pick of the day.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use gankio_lib::{CachedClient, RecommendFeed};

use crate::output::{print_entries_table, print_json, OutputFormat};

#[derive(Args)]
pub struct RecommendArgs {
    /// Offset into the day-history list (0 = most recent day)
    #[arg(long, default_value = "10")]
    pub offset: usize,
}

pub async fn run(
    args: &RecommendArgs,
    client: Arc<CachedClient>,
    format: &OutputFormat,
) -> Result<()> {
    let mut feed = RecommendFeed::new(client).with_offset(args.offset);
    feed.fetch().await?;

    if let Some(date) = feed.date() {
        eprintln!("picks from {}", date);
    }
    match format {
        OutputFormat::Json => print_json(&feed.items())?,
        OutputFormat::Table => print_entries_table(feed.items()),
    }
    Ok(())
}
