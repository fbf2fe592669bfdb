mod commands;
mod output;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gankio_lib::cache::ResponseCache;
use gankio_lib::CachedClient;

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "gankio")]
#[command(about = "Browse the Gank.io content feed from the terminal")]
struct Cli {
    /// Output format: table or json
    #[arg(long, default_value = "table", global = true)]
    output: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a category feed
    Feed(commands::feed::FeedArgs),
    /// Browse the image-only feed
    Images(commands::images::ImagesArgs),
    /// Show the curated recommend feed
    Recommend(commands::recommend::RecommendArgs),
    /// Search entries by keyword
    Search(commands::search::SearchArgs),
    /// Show one day's entries grouped by category
    Day(commands::day::DayArgs),
    /// Browse the curated history digests
    Digests(commands::digests::DigestsArgs),
    /// List the dates with published content
    Dates(commands::dates::DatesArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("gankio_api=info".parse().unwrap())
                .add_directive("gankio_lib=info".parse().unwrap()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        _ => OutputFormat::Table,
    };

    let cache = ResponseCache::new(Duration::from_secs(300));
    let client = Arc::new(match std::env::var("GANK_API_BASE") {
        Ok(base) => CachedClient::with_base_url(&base, cache),
        Err(_) => CachedClient::new(cache),
    });

    match &cli.command {
        Commands::Feed(args) => commands::feed::run(args, client, &format).await?,
        Commands::Images(args) => commands::images::run(args, client, &format).await?,
        Commands::Recommend(args) => commands::recommend::run(args, client, &format).await?,
        Commands::Search(args) => commands::search::run(args, client, &format).await?,
        Commands::Day(args) => commands::day::run(args, client, &format).await?,
        Commands::Digests(args) => commands::digests::run(args, client, &format).await?,
        Commands::Dates(args) => commands::dates::run(args, client, &format).await?,
    }

    Ok(())
}
